//! Media source identification and the derived background image

pub mod background;
pub mod reference;

pub use background::{background_for, background_url, thumbnail_url};
pub use reference::{MediaId, MediaReference};
