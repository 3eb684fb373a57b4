//! Process configuration for the file browser, resolved once at startup and injected.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "lib/trellis";
const SETTINGS_FILE: &str = "files/settings.json";
const FAVORITES_FILE: &str = "files/favorites";
const LOG_DIR: &str = "logs";

#[derive(Debug)]
pub enum ConfigError {
    MissingHome,
    Io(io::Error),
    Settings {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingHome => write!(f, "HOME is not set"),
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Settings { path, source } => {
                write!(f, "invalid settings {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::MissingHome => None,
            ConfigError::Io(e) => Some(e),
            ConfigError::Settings { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

/// The optional on-disk overrides. Every field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub favorites_path: Option<PathBuf>,
    pub open_command: Option<String>,
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub home: PathBuf,
    pub favorites_path: PathBuf,
    pub open_command: String,
    pub log_dir: PathBuf,
}

impl Config {
    /// Defaults for `home`, with no settings applied.
    pub fn for_home(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        let app = home.join(APP_DIR);
        Self {
            favorites_path: app.join(FAVORITES_FILE),
            open_command: default_open_command().to_string(),
            log_dir: app.join(LOG_DIR),
            home,
        }
    }

    /// Resolve from `$HOME` and the settings file under it.
    pub fn from_env() -> Result<Self, ConfigError> {
        let home = std::env::var_os("HOME")
            .filter(|h| !h.is_empty())
            .ok_or(ConfigError::MissingHome)?;
        Self::load(PathBuf::from(home))
    }

    pub fn load(home: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let config = Self::for_home(home);
        let settings = load_settings(&config.settings_path())?;
        Ok(config.with_settings(settings))
    }

    pub fn settings_path(&self) -> PathBuf {
        settings_path(&self.home)
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        if let Some(path) = settings.favorites_path {
            self.favorites_path = self.resolve(path);
        }
        if let Some(cmd) = settings.open_command.filter(|c| !c.trim().is_empty()) {
            self.open_command = cmd;
        }
        if let Some(dir) = settings.log_dir {
            self.log_dir = self.resolve(dir);
        }
        self
    }

    /// The home directory as a favorites base: always ends in `/`.
    pub fn home_dir(&self) -> String {
        let home = self.home.to_string_lossy();
        if home.ends_with('/') {
            home.into_owned()
        } else {
            format!("{}/", home)
        }
    }

    /// Create the log directory, falling back to the temp dir when that fails.
    pub fn ensure_log_dir(&self) -> io::Result<PathBuf> {
        match std::fs::create_dir_all(&self.log_dir) {
            Ok(()) => Ok(self.log_dir.clone()),
            Err(err) => {
                let dir = std::env::temp_dir().join("trellis").join(LOG_DIR);
                std::fs::create_dir_all(&dir).map_err(|_| err)?;
                Ok(dir)
            }
        }
    }

    /// Relative settings paths are taken relative to home.
    fn resolve(&self, path: PathBuf) -> PathBuf {
        if path.is_absolute() {
            path
        } else {
            self.home.join(path)
        }
    }
}

pub fn settings_path(home: &Path) -> PathBuf {
    home.join(APP_DIR).join(SETTINGS_FILE)
}

/// A missing file yields the defaults; a malformed one is an error.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(e.into()),
    };
    serde_json::from_str(&data).map_err(|source| ConfigError::Settings {
        path: path.to_path_buf(),
        source,
    })
}

fn default_open_command() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
