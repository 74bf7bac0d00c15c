//! # Configuration File
//!
//! Optional YAML file passed with `--config`. Command-line flags always win
//! over values from the file.
//!
//! ```yaml
//! schema: schemas/ttt.yaml
//! all: true
//! limit: 20
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Defaults for `compare` and `check`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Record description used when `--schema` is not given.
    #[serde(default)]
    pub schema: Option<PathBuf>,
    /// Report every difference instead of the first.
    #[serde(default)]
    pub all: bool,
    /// Upper bound on reported differences. Setting it implies `all`.
    #[serde(default)]
    pub limit: Option<usize>,
}

impl CliConfig {
    /// Load the file, or return defaults when no path is given.
    ///
    /// A relative `schema` path is resolved against the config file's
    /// directory.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config: Self = serde_yaml::from_str(&source)
            .with_context(|| format!("failed to parse config {}", path.display()))?;

        if let (Some(schema), Some(base)) = (config.schema.as_mut(), path.parent()) {
            if schema.is_relative() {
                *schema = base.join(&*schema);
            }
        }

        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// The description to use: the flag if given, else the file's.
    pub fn schema_or(&self, flag: Option<&Path>) -> Result<PathBuf> {
        flag.map(Path::to_path_buf)
            .or_else(|| self.schema.clone())
            .context("no record description: pass --schema or set `schema` in the config file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_gives_defaults() {
        assert_eq!(CliConfig::load(None).unwrap(), CliConfig::default());
    }

    #[test]
    fn relative_schema_resolves_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bmx.yaml");
        std::fs::write(&path, "schema: ttt.yaml\nall: true\nlimit: 5\n").unwrap();
        let config = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(config.schema, Some(dir.path().join("ttt.yaml")));
        assert!(config.all);
        assert_eq!(config.limit, Some(5));
    }

    #[test]
    fn unknown_keys_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bmx.yaml");
        std::fs::write(&path, "schemas: x.yaml\n").unwrap();
        assert!(CliConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn flag_overrides_file() {
        let config = CliConfig {
            schema: Some(PathBuf::from("from_file.yaml")),
            ..CliConfig::default()
        };
        assert_eq!(
            config.schema_or(Some(Path::new("flag.yaml"))).unwrap(),
            PathBuf::from("flag.yaml")
        );
        assert_eq!(config.schema_or(None).unwrap(), PathBuf::from("from_file.yaml"));
        assert!(CliConfig::default().schema_or(None).is_err());
    }
}
