//! Integration tests for configuration management
//!
//! These tests verify that the configuration system works correctly
//! across module boundaries.

use lost_sounds::config::Settings;
use lost_sounds::media::{MediaId, MediaReference};
use lost_sounds::news::NewsClient;
use std::error::Error;
use tempfile::tempdir;

#[cfg(test)]
mod config_integration_tests {
    use super::*;

    /// Test complete configuration workflow
    #[test]
    fn test_config_lifecycle() -> Result<(), Box<dyn Error>> {
        let dir = tempdir()?;
        let config_path = dir.path().join("config.json");

        let mut settings = Settings::default();
        settings.source_url = "https://www.youtube.com/watch?v=nqiC_D5U-LE".to_string();
        settings.news_tag = "rust".to_string();
        settings.news_page_size = 3;
        settings.progress_interval_ms = 250;

        settings.validate()?;
        settings.save(&config_path)?;

        let loaded = Settings::load(&config_path)?;
        assert_eq!(loaded, settings);

        // Loaded settings drive the components they configure.
        let media = MediaReference::new(loaded.source_url.clone());
        assert_eq!(media.media_id(), &MediaId::Known("nqiC_D5U-LE".to_string()));
        let client = NewsClient::new(&loaded.news_endpoint)?;
        assert_eq!(
            client.articles_url(&loaded.news_tag, loaded.news_page_size).as_str(),
            "https://dev.to/api/articles?tag=rust&per_page=3"
        );

        let mut updated = loaded;
        updated.news_enabled = false;
        updated.save(&config_path)?;
        assert!(!Settings::load(&config_path)?.news_enabled);

        Ok(())
    }

    /// Test invalid configuration handling
    #[test]
    fn test_invalid_config_validation() {
        let invalid = Settings {
            source_url: "".to_string(),
            ..Settings::default()
        };
        let result = invalid.validate();
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(e.to_string().contains("Source URL cannot be empty"));
        }

        let bad_endpoint = Settings {
            news_endpoint: "not a url".to_string(),
            ..Settings::default()
        };
        assert!(bad_endpoint.validate().is_err());
    }
}
