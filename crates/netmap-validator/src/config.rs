//! Validator configuration.
//!
//! Loaded from an optional TOML file. Every field has a default, so an empty
//! file is a valid configuration:
//!
//! ```toml
//! default_namespace = "vm-imports"
//! memoize_lookups = true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{NetmapError, NetmapResult};

/// Namespace used for multus targets that do not name one.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Validator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Namespace of the import, used for targets without a namespace.
    #[serde(default = "default_namespace")]
    pub default_namespace: String,

    /// Memoize attachment definition lookups within one validation call.
    #[serde(default = "default_memoize_lookups")]
    pub memoize_lookups: bool,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_memoize_lookups() -> bool {
    true
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            default_namespace: default_namespace(),
            memoize_lookups: default_memoize_lookups(),
        }
    }
}

impl ValidatorConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> NetmapResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| NetmapError::Toml { source: e })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> NetmapResult<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| NetmapError::io(path, e))?;
        Self::from_toml_str(&source)
    }

    /// Checks field constraints.
    pub fn validate(&self) -> NetmapResult<()> {
        if self.default_namespace.trim().is_empty() {
            return Err(NetmapError::invalid_config(
                "default_namespace",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ValidatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, ValidatorConfig::default());
        assert_eq!(config.default_namespace, "default");
        assert!(config.memoize_lookups);
    }

    #[test]
    fn test_from_toml() {
        let config = ValidatorConfig::from_toml_str(
            "default_namespace = \"vm-imports\"\nmemoize_lookups = false\n",
        )
        .unwrap();
        assert_eq!(config.default_namespace, "vm-imports");
        assert!(!config.memoize_lookups);
    }

    #[test]
    fn test_rejects_empty_namespace() {
        let err = ValidatorConfig::from_toml_str("default_namespace = \"  \"").unwrap_err();
        assert!(matches!(err, NetmapError::InvalidConfig { .. }));
    }

    #[test]
    fn test_rejects_bad_toml() {
        let err = ValidatorConfig::from_toml_str("memoize_lookups = \"yes\"").unwrap_err();
        assert!(matches!(err, NetmapError::Toml { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_namespace = \"from-file\"").unwrap();
        let config = ValidatorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.default_namespace, "from-file");

        let err = ValidatorConfig::from_file("/nonexistent/netmap.toml").unwrap_err();
        assert!(matches!(err, NetmapError::Io { .. }));
    }
}
