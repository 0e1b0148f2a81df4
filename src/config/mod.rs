use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_home_image")]
    pub home_image: String,
    #[serde(default = "default_checkpost_limit")]
    pub checkpost_limit: u32,
    #[serde(default = "default_narrative_width")]
    pub narrative_width: usize,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_home_image() -> String {
    Config::config_dir()
        .join("traffic-fines.jpg")
        .to_string_lossy()
        .to_string()
}
fn default_checkpost_limit() -> u32 {
    10
}
fn default_narrative_width() -> usize {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            home_image: default_home_image(),
            checkpost_limit: default_checkpost_limit(),
            narrative_width: default_narrative_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("securecheck")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".securecheck")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("securecheck.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("securecheck.sqlite")
    }

    /// Load configuration from the standard file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        cfg.home_image = expand_tilde(&cfg.home_image).to_string_lossy().to_string();
        Ok(cfg)
    }

    /// Resolve the database path used by `init`.
    /// Relative names are placed inside the config directory.
    pub fn resolve_db_path(custom_name: Option<&str>) -> PathBuf {
        let dir = Self::config_dir();
        match custom_name {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        }
    }

    /// Initialize configuration and database files.
    /// Returns the configuration that was written (or would have been, in test mode).
    pub fn init_all(custom_name: Option<&str>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        let db_path = Self::resolve_db_path(custom_name);

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/x.sqlite\n").unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.checkpost_limit, 10);
        assert_eq!(cfg.narrative_width, 100);
    }

    #[test]
    fn missing_file_is_default() {
        let path = env::temp_dir().join("securecheck_no_such_config.conf");
        fs::remove_file(&path).ok();
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.checkpost_limit, default_checkpost_limit());
    }

    #[test]
    fn broken_yaml_is_config_error() {
        let path = env::temp_dir().join("securecheck_broken_config.conf");
        fs::write(&path, "checkpost_limit: [not a number").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        fs::remove_file(&path).ok();
    }
}
