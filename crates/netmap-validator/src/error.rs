//! Error types for network mapping validation.
//!
//! The validator itself never returns an error: every problem it detects is a
//! [`crate::ValidationFailure`] value. The types here cover the collaborators
//! around it (the attachment-definition provider, plugin configuration
//! parsing, configuration and request loading). All errors implement
//! `std::error::Error` via `thiserror`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for loading and configuration operations.
pub type NetmapResult<T> = Result<T, NetmapError>;

/// Errors raised while loading configuration, requests or catalogs.
#[derive(Debug, Error)]
pub enum NetmapError {
    /// Failed to read a file.
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// YAML document could not be decoded.
    #[error("Invalid YAML in '{}': {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// JSON document could not be decoded.
    #[error("Invalid JSON in '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// TOML configuration could not be decoded.
    #[error("Invalid TOML configuration: {source}")]
    Toml {
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation error.
    #[error("Invalid configuration for {field}: {message}")]
    InvalidConfig { field: String, message: String },
}

impl NetmapError {
    /// Creates an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors returned by a [`crate::NetAttachDefProvider`].
///
/// The validator treats every variant the same way, as an unresolved
/// target. The distinction exists for callers and logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The attachment definition does not exist.
    #[error("network attachment definition {namespace}/{name} not found")]
    NotFound { name: String, namespace: String },

    /// The backing store failed to answer.
    #[error("network attachment definition lookup failed: {message}")]
    Backend { message: String },
}

impl ProviderError {
    /// Creates a not-found error.
    pub fn not_found(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self::NotFound {
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    /// Creates a backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Returns true if the caller's reconcile loop may expect a later
    /// retry to succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ProviderError::Backend { .. })
    }
}

/// Reasons an embedded CNI plugin configuration is unusable.
#[derive(Debug, Error)]
pub enum PluginConfigError {
    #[error("not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("top-level value is not a JSON object")]
    NotAnObject,

    #[error("no top-level string field \"type\"")]
    MissingType,
}
