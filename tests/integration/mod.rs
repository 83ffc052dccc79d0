//! Integration tests module
//!
//! This module organizes all integration tests for the lost-sounds crate.

pub mod config_test;
pub mod news_feed_test;
pub mod widget_flow_test;
