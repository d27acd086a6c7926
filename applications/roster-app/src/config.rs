/// Application configuration
use crate::error::{AppError, Result};
use roster_client::{DirectoryConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file read when `--config` is not given, if present
pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_directory")]
    pub directory: DirectorySettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirectorySettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

impl AppConfig {
    /// Load configuration from `path`, or from `roster.toml` if it exists.
    ///
    /// An explicit path must exist; the default one is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        Ok(settings.build()?.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.directory.base_url.trim().is_empty() {
            return Err(AppError::Config(
                "directory.base_url must not be empty".to_string(),
            ));
        }

        if self.directory.timeout_secs == 0 || self.directory.connect_timeout_secs == 0 {
            return Err(AppError::Config(
                "directory timeouts must be at least one second".to_string(),
            ));
        }

        if self.storage.path.as_os_str().is_empty() {
            return Err(AppError::Config("storage.path must not be empty".to_string()));
        }

        Ok(())
    }

    /// Client settings derived from the `[directory]` section
    pub fn directory_config(&self) -> DirectoryConfig {
        DirectoryConfig::new(self.directory.base_url.clone()).with_timeouts(
            Duration::from_secs(self.directory.timeout_secs),
            Duration::from_secs(self.directory.connect_timeout_secs),
        )
    }
}

// Default values
fn default_directory() -> DirectorySettings {
    DirectorySettings {
        base_url: default_base_url(),
        timeout_secs: default_timeout_secs(),
        connect_timeout_secs: default_connect_timeout_secs(),
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        path: default_storage_path(),
    }
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("./data/roster-storage.redb")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            storage: default_storage(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.directory.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.directory.timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let file = write_config(
            r#"
            [directory]
            base_url = "http://localhost:3000"
            "#,
        );

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.directory.base_url, "http://localhost:3000");
        assert_eq!(config.directory.connect_timeout_secs, 10);
        assert_eq!(
            config.storage.path,
            PathBuf::from("./data/roster-storage.redb")
        );
    }

    #[test]
    fn test_load_full_file() {
        let file = write_config(
            r#"
            [directory]
            base_url = "https://users.internal"
            timeout_secs = 5
            connect_timeout_secs = 2

            [storage]
            path = "/tmp/roster.redb"
            "#,
        );

        let config = AppConfig::load(Some(file.path())).unwrap();
        let client = config.directory_config();
        assert_eq!(client.url, "https://users.internal");
        assert_eq!(client.timeout, Duration::from_secs(5));
        assert_eq!(client.connect_timeout, Duration::from_secs(2));
        assert_eq!(config.storage.path, PathBuf::from("/tmp/roster.redb"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = AppConfig::load(Some(Path::new("/definitely/not/here.toml")));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = AppConfig::default();
        config.directory.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_url() {
        let mut config = AppConfig::default();
        config.directory.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
