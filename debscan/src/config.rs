// SPDX-FileCopyrightText: 2026 debscan contributors
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::error::{IoContext, ScanError};

/// Environment variable naming a configuration file.
pub const CONFIG_ENV: &str = "DEBSCAN_CONFIG";

fn default_extension() -> String {
    "deb".into()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// File extension identifying package archives
    pub extension: String,

    /// Number of archives processed at once; defaults to the number of CPUs
    pub jobs: Option<usize>,

    /// Reject packages whose control file has continuation lines before any field
    pub strict: bool,

    /// Pretty-print the JSON output
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            jobs: None,
            strict: false,
            pretty: false,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ScanError> {
        let contents = std::fs::read_to_string(path)
            .io_context(|| format!("Failed to read config file at {}", path.display()))?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Loads `path`, or the file named by [`CONFIG_ENV`], or the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ScanError> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        match path {
            Some(path) => Config::from_file(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ScanError> {
        if self.jobs == Some(0) {
            return Err(ScanError::config("jobs must be greater than 0"));
        }
        let extension = self.extension.trim_start_matches('.');
        if extension.is_empty() || extension.contains('/') {
            return Err(ScanError::config(format!(
                "invalid archive extension '{}'",
                self.extension
            )));
        }
        Ok(())
    }

    /// Extension without a leading dot.
    pub fn extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }

    pub fn jobs(&self) -> usize {
        self.jobs.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.extension(), "deb");
        assert!(config.jobs() >= 1);
    }

    #[test]
    fn parses_all_fields() {
        let config: Config = toml::from_str(
            r#"
            extension = ".udeb"
            jobs = 3
            strict = true
            pretty = true
            "#,
        )
        .unwrap();
        assert_eq!(config.extension(), "udeb");
        assert_eq!(config.jobs(), 3);
        assert!(config.strict);
        assert!(config.pretty);
        config.validate().unwrap();
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(toml::from_str::<Config>("workers = 4").is_err());
    }

    #[test]
    fn rejects_zero_jobs() {
        let config = Config {
            jobs: Some(0),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: jobs must be greater than 0"
        );
    }

    #[test]
    fn rejects_empty_extension() {
        let config = Config {
            extension: ".".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debscan.toml");
        std::fs::write(&path, "jobs = 2\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.jobs, Some(2));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::from_file(Path::new("/nonexistent/debscan.toml")).unwrap_err();
        assert!(matches!(err, ScanError::Io { .. }), "{err:?}");
    }
}
