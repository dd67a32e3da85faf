use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("gg360.default.toml");

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub api: Option<Api>,
    pub export: Option<Export>,
    pub notifications: Option<Notifications>,
}

impl Config {
    pub fn try_default() -> Result<Self, toml::de::Error> {
        toml::from_str(DEFAULT_CONFIG_FILE)
    }

    /// Takes missing sections and keys from `defaults`.
    pub fn or(self, defaults: Self) -> Self {
        Self {
            api: merge(self.api, defaults.api, Api::or),
            export: merge(self.export, defaults.export, Export::or),
            notifications: merge(self.notifications, defaults.notifications, Notifications::or),
        }
    }
}

fn merge<T>(value: Option<T>, default: Option<T>, f: fn(T, T) -> T) -> Option<T> {
    match (value, default) {
        (Some(value), Some(default)) => Some(f(value, default)),
        (value, default) => value.or(default),
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Api {
    pub base_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
}

impl Api {
    fn or(self, defaults: Self) -> Self {
        Self {
            base_url: self.base_url.or(defaults.base_url),
            timeout: self.timeout.or(defaults.timeout),
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Export {
    pub app_name: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub page_rows: Option<usize>,
}

impl Export {
    fn or(self, defaults: Self) -> Self {
        Self {
            app_name: self.app_name.or(defaults.app_name),
            output_dir: self.output_dir.or(defaults.output_dir),
            page_rows: self.page_rows.or(defaults.page_rows),
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Notifications {
    pub capacity: Option<usize>,
    pub store_dir: Option<PathBuf>,
}

impl Notifications {
    fn or(self, defaults: Self) -> Self {
        Self {
            capacity: self.capacity.or(defaults.capacity),
            store_dir: self.store_dir.or(defaults.store_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg = Config::try_default().unwrap();
        let api = cfg.api.unwrap();
        assert_eq!(api.base_url.as_deref(), Some("http://localhost:5000"));
        assert_eq!(api.timeout, Some(Duration::from_secs(30)));
        assert_eq!(cfg.export.unwrap().page_rows, Some(40));
        assert_eq!(cfg.notifications.unwrap().capacity, Some(50));
    }

    #[test]
    fn missing_keys_are_taken_from_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [api]
            timeout = "5s"

            [export]
            app-name = "Green City"
            "#,
        )
        .unwrap();
        let cfg = cfg.or(Config::try_default().unwrap());
        let api = cfg.api.unwrap();
        assert_eq!(api.base_url.as_deref(), Some("http://localhost:5000"));
        assert_eq!(api.timeout, Some(Duration::from_secs(5)));
        let export = cfg.export.unwrap();
        assert_eq!(export.app_name.as_deref(), Some("Green City"));
        assert_eq!(export.page_rows, Some(40));
        assert!(cfg.notifications.is_some());
    }
}
