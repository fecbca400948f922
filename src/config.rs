use crate::{APP_NAME, error::Error, git::parse::ParseOptions};
use etcetera::BaseStrategy;
use figment::{
    Figment,
    providers::{Format, Toml},
};
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Deserialize)]
pub struct Config {
    pub parse: ParseOptions,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize)]
pub struct LogConfig {
    pub level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("Failed to parse default_config.toml")
    }
}

/// `<config dir>/gitstatus/config.toml`, if a home directory can be found.
pub fn config_path() -> Option<PathBuf> {
    etcetera::choose_base_strategy()
        .ok()
        .map(|strategy| strategy.config_dir().join(APP_NAME).join("config.toml"))
}

/// Loads the built-in defaults, overlaid with the user's config file.
///
/// A missing file at the default location is fine, an explicitly given path
/// has to exist.
pub fn init_config(path: Option<&Path>) -> Result<Config, Error> {
    let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

    match path {
        Some(path) if !path.is_file() => return Err(Error::MissingConfig(path.to_path_buf())),
        Some(path) => {
            log::debug!("Loading config file at {:?}", path);
            figment = figment.merge(Toml::file(path));
        }
        None => match config_path() {
            Some(path) => {
                log::debug!("Loading config file at {:?}", path);
                figment = figment.merge(Toml::file(path));
            }
            None => log::debug!("No config directory, using defaults"),
        },
    }

    figment.extract().map_err(Error::Config)
}

#[cfg(test)]
mod tests {
    use super::{Config, init_config};
    use crate::{error::Error, git::parse::ParseOptions};
    use log::LevelFilter;
    use pretty_assertions::assert_eq;
    use std::fs;
    use temp_dir::TempDir;

    #[test]
    fn default_config_matches_parse_defaults() {
        let config = Config::default();
        assert_eq!(config.parse, ParseOptions::default());
        assert_eq!(config.log.level, LevelFilter::Debug);
    }

    #[test]
    fn user_config_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("config.toml");
        fs::write(&path, "[parse]\nstrict_entries = true\n\n[log]\nlevel = \"trace\"\n").unwrap();

        let config = init_config(Some(path.as_path())).unwrap();
        assert_eq!(
            config.parse,
            ParseOptions {
                strict_entries: true,
                ..Default::default()
            }
        );
        assert_eq!(config.log.level, LevelFilter::Trace);
    }

    #[test]
    fn explicit_config_must_exist() {
        let dir = TempDir::new().unwrap();
        let err = init_config(Some(dir.child("nope.toml").as_path())).unwrap_err();
        assert!(matches!(err, Error::MissingConfig(_)));
    }

    #[test]
    fn invalid_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("config.toml");
        fs::write(&path, "[parse]\nmax_record_len = \"big\"\n").unwrap();

        let err = init_config(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
