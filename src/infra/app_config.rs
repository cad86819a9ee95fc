use crate::domain::ListProfile;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub profile: ListProfile,
    pub db_path: Option<PathBuf>,
    /// Skip inserting the profile's default rows into an empty list.
    pub skip_seed: bool,
}

impl AppConfig {
    /// Database location: explicit config first, then the default path.
    pub fn resolve_db_path(&self) -> PathBuf {
        self.db_path
            .clone()
            .unwrap_or_else(crate::infra::db::Database::default_path)
    }
}

pub fn load_config() -> AppConfig {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> AppConfig {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return AppConfig::default();
    };
    match toml::from_str(&contents) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Ignoring invalid config at {}: {}", path.display(), err);
            AppConfig::default()
        }
    }
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("ROLLCALL_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

/// Directory holding `config.toml` and the default `db.sqlite`.
pub fn app_data_dir() -> PathBuf {
    data_dir_from(
        std::env::var_os("ROLLCALL_DATA_HOME"),
        std::env::var_os("XDG_DATA_HOME"),
        home::home_dir(),
    )
}

// Override, then XDG, then `~/.local/share`, then the working directory.
fn data_dir_from(
    data_home: Option<OsString>,
    xdg_data_home: Option<OsString>,
    home: Option<PathBuf>,
) -> PathBuf {
    if let Some(dir) = data_home.filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    if let Some(xdg) = xdg_data_home.filter(|d| !d.is_empty()) {
        return PathBuf::from(xdg).join("rollcall");
    }
    match home {
        Some(home) => home.join(".local").join("share").join("rollcall"),
        None => PathBuf::from(".rollcall"),
    }
}
