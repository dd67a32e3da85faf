use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

use gg360_core::export::document::MIN_PAGE_ROWS;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "gg360.toml";

const ENV_NAME_API_URL: &str = "GG360_API_URL";

#[derive(Debug, Clone)]
pub struct Config {
    pub api: Api,
    pub export: Export,
    pub notifications: Notifications,
}

impl Config {
    /// An explicitly given file must exist, the default file is optional.
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let explicit = file_path.is_some();
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config: raw::Config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) if err.kind() == ErrorKind::NotFound && !explicit => {
                log::debug!("{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration.");
                raw::Config::default()
            }
            Err(err) => {
                return Err(anyhow!(
                    "Unable to read configuration file {}: {err}",
                    file_path.display()
                ))
            }
        };
        let mut cfg = Self::try_from(raw_config.or(raw::Config::try_default()?))?;
        if let Ok(api_url) = env::var(ENV_NAME_API_URL) {
            cfg.api.base_url = validate_base_url(api_url)?;
        }
        Ok(cfg)
    }
}

#[derive(Debug, Clone)]
pub struct Api {
    /// Without trailing slash
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Export {
    pub app_name: String,
    /// Directory for exported files
    pub output_dir: PathBuf,
    pub page_rows: usize,
}

#[derive(Debug, Clone)]
pub struct Notifications {
    pub capacity: usize,
    /// Directory of the JSON notification store
    pub store_dir: PathBuf,
}

fn validate_base_url(url: String) -> Result<String> {
    let url = url.trim().trim_end_matches('/').to_owned();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(anyhow!("Invalid API base URL '{url}'"));
    }
    Ok(url)
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            api,
            export,
            notifications,
        } = from;

        let raw::Api { base_url, timeout } = api.unwrap_or_default();
        let base_url = base_url.ok_or_else(|| anyhow!("Missing API base URL"))?;
        let api = Api {
            base_url: validate_base_url(base_url)?,
            timeout: timeout.ok_or_else(|| anyhow!("Missing API timeout"))?,
        };

        let raw::Export {
            app_name,
            output_dir,
            page_rows,
        } = export.unwrap_or_default();
        let page_rows = page_rows.ok_or_else(|| anyhow!("Missing page rows"))?;
        if page_rows < MIN_PAGE_ROWS {
            return Err(anyhow!("At least {MIN_PAGE_ROWS} rows per page are required"));
        }
        let export = Export {
            app_name: app_name.ok_or_else(|| anyhow!("Missing app name"))?,
            output_dir: output_dir.unwrap_or_else(|| PathBuf::from(".")),
            page_rows,
        };

        let raw::Notifications {
            capacity,
            store_dir,
        } = notifications.unwrap_or_default();
        let capacity = capacity.ok_or_else(|| anyhow!("Missing notification capacity"))?;
        if capacity == 0 {
            return Err(anyhow!("The notification capacity must not be zero"));
        }
        let notifications = Notifications {
            capacity,
            store_dir: store_dir.ok_or_else(|| anyhow!("Missing notification store directory"))?,
        };

        Ok(Self {
            api,
            export,
            notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let cfg = Config::try_load_from_file_or_default(file).unwrap();
        assert_eq!(cfg.notifications.capacity, 50);
        assert_eq!(cfg.export.app_name, "GoGreen360");
    }

    #[test]
    fn load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nbase-url = \"https://api.example.org/\"\n\n[export]\npage-rows = 25"
        )
        .unwrap();
        let cfg = Config::try_load_from_file_or_default(Some(file.path())).unwrap();
        assert_eq!(cfg.export.page_rows, 25);
        assert_eq!(cfg.api.timeout, Duration::from_secs(30));
        if env::var(ENV_NAME_API_URL).is_err() {
            assert_eq!(cfg.api.base_url, "https://api.example.org");
        }
    }

    #[test]
    fn missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(Config::try_load_from_file_or_default(Some(&path)).is_err());
    }

    #[test]
    fn reject_invalid_values() {
        let raw: raw::Config = toml::from_str("[export]\npage-rows = 2").unwrap();
        let raw = raw.or(raw::Config::try_default().unwrap());
        assert!(Config::try_from(raw).is_err());
        assert!(validate_base_url("localhost:5000".into()).is_err());
        assert_eq!(
            validate_base_url(" http://localhost:5000/ ".into()).unwrap(),
            "http://localhost:5000"
        );
    }
}
