//! Network attachment definition as consumed by the import validators.

use serde::{Deserialize, Serialize};

/// A multus network attachment definition.
///
/// Only the identity and the embedded CNI plugin configuration are kept.
/// Serializes to and from the Kubernetes manifest shape
/// (`metadata.name`, `metadata.namespace`, `spec.config`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Manifest", into = "Manifest")]
pub struct NetworkAttachmentDefinition {
    pub name: String,
    pub namespace: String,
    /// JSON-encoded CNI plugin configuration.
    pub plugin_config: String,
}

impl NetworkAttachmentDefinition {
    pub fn new(
        name: impl Into<String>,
        namespace: impl Into<String>,
        plugin_config: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            plugin_config: plugin_config.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Manifest {
    #[serde(default)]
    metadata: Metadata,
    #[serde(default)]
    spec: Spec,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Metadata {
    #[serde(default)]
    name: String,
    #[serde(default)]
    namespace: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Spec {
    #[serde(default)]
    config: String,
}

impl From<Manifest> for NetworkAttachmentDefinition {
    fn from(m: Manifest) -> Self {
        Self {
            name: m.metadata.name,
            namespace: m.metadata.namespace,
            plugin_config: m.spec.config,
        }
    }
}

impl From<NetworkAttachmentDefinition> for Manifest {
    fn from(nad: NetworkAttachmentDefinition) -> Self {
        Self {
            metadata: Metadata {
                name: nad.name,
                namespace: nad.namespace,
            },
            spec: Spec {
                config: nad.plugin_config,
            },
        }
    }
}
