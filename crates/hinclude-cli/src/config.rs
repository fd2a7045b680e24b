// crates/hinclude-cli/src/config.rs
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct HincludeConfig {
    /// Search directories, in priority order
    #[serde(default)]
    pub include_dirs: Option<Vec<PathBuf>>,

    #[serde(default)]
    pub staged: Option<bool>,
    #[serde(default)]
    pub max_depth: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct CargoToml {
    #[serde(default)]
    package: CargoPackage,
}

#[derive(Debug, Deserialize, Default)]
struct CargoPackage {
    #[serde(default)]
    metadata: CargoMetadata,
}

#[derive(Debug, Deserialize, Default)]
struct CargoMetadata {
    #[serde(default)]
    hinclude: HincludeConfig,
}

impl HincludeConfig {
    pub fn from_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        match read_if_exists(path)? {
            Some(content) => Ok(Some(toml::from_str(&content)?)),
            None => Ok(None),
        }
    }

    /// Like `from_file`, but a missing file is an error.
    pub fn from_explicit_file(path: &Path) -> Result<Self, ConfigError> {
        Self::from_file(path)?.ok_or_else(|| ConfigError::NotFound(path.to_path_buf()))
    }

    pub fn from_nearest() -> Result<Self, ConfigError> {
        Self::from_dir(Path::new("."))
    }

    pub fn from_dir(dir: &Path) -> Result<Self, ConfigError> {
        // Start with an empty config
        let mut config = HincludeConfig::default();

        // Cargo.toml first (least specific)
        if let Some(cargo_config) = Self::from_cargo_toml(&dir.join("Cargo.toml"))? {
            config.merge(cargo_config);
        }

        // Then hinclude.toml (most specific)
        if let Some(file_config) = Self::from_file(&dir.join("hinclude.toml"))? {
            config.merge(file_config);
        }

        Ok(config)
    }

    fn from_cargo_toml(path: &Path) -> Result<Option<Self>, ConfigError> {
        if let Some(content) = read_if_exists(path)? {
            let cargo: CargoToml = toml::from_str(&content)?;
            Ok(Some(cargo.package.metadata.hinclude))
        } else {
            Ok(None)
        }
    }

    /// Merge another config into this one, taking values from other if they are Some
    fn merge(&mut self, other: Self) {
        macro_rules! merge_field {
            ($field:ident) => {
                if let Some(value) = other.$field {
                    self.$field = Some(value);
                }
            };
        }

        merge_field!(include_dirs);
        merge_field!(staged);
        merge_field!(max_depth);
    }
}

fn read_if_exists(path: &Path) -> Result<Option<String>, std::io::Error> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}
