//! lost-sounds library core functionality

pub mod clock;
pub mod config;
pub mod media;
pub mod news;
pub mod playback;
pub mod ui;
pub mod widget;

/// Initialize the application directories
pub fn init_app_dirs() -> std::io::Result<()> {
    let default_path = config::Settings::default_path();
    if let Some(config_dir) = default_path.parent() {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir)?;
        }
    }
    Ok(())
}

/// Picks the config file path. The default directory is created only when no
/// explicit path is given.
pub fn resolve_config_path(explicit: Option<&str>) -> std::io::Result<std::path::PathBuf> {
    match explicit {
        Some(path) => Ok(std::path::PathBuf::from(path)),
        None => {
            init_app_dirs()?;
            Ok(config::Settings::default_path())
        }
    }
}
