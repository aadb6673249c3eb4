//! Network resource mapping items supplied with an import request.

use crate::{ParseError, SOURCE_NAME_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of target network a mapping item points at.
///
/// The external schema carries a free-form string; anything that is not
/// one of the known kinds is kept verbatim in [`MappingType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MappingType {
    /// The cluster's default pod network.
    Pod,
    /// A secondary network backed by a network attachment definition.
    Multus,
    /// Any other, unsupported value.
    Other(String),
}

impl MappingType {
    /// Returns the schema string for this type.
    pub fn as_str(&self) -> &str {
        match self {
            MappingType::Pod => "pod",
            MappingType::Multus => "multus",
            MappingType::Other(s) => s,
        }
    }
}

impl From<String> for MappingType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pod" => MappingType::Pod,
            "multus" => MappingType::Multus,
            _ => MappingType::Other(s),
        }
    }
}

impl From<&str> for MappingType {
    fn from(s: &str) -> Self {
        MappingType::from(s.to_string())
    }
}

impl From<MappingType> for String {
    fn from(t: MappingType) -> Self {
        match t {
            MappingType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MappingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source side of a mapping item: a composite name and/or a profile ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingSource {
    /// `"network/profile"` composite name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Profile ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Name and optional namespace of a cluster object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectIdentifier {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl ObjectIdentifier {
    /// Returns the explicit namespace or `default_namespace`.
    pub fn namespace_or<'a>(&'a self, default_namespace: &'a str) -> &'a str {
        self.namespace.as_deref().unwrap_or(default_namespace)
    }
}

impl fmt::Display for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{}/{}", ns, self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// One network mapping item of an import request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub mapping_type: Option<MappingType>,
    #[serde(default)]
    pub source: MappingSource,
    pub target: ObjectIdentifier,
}

impl MappingEntry {
    /// Creates an entry targeting `target_name` with no source or type.
    pub fn to_target(target_name: impl Into<String>) -> Self {
        Self {
            mapping_type: None,
            source: MappingSource::default(),
            target: ObjectIdentifier {
                name: target_name.into(),
                namespace: None,
            },
        }
    }

    /// Sets the mapping type.
    pub fn with_type(mut self, mapping_type: impl Into<MappingType>) -> Self {
        self.mapping_type = Some(mapping_type.into());
        self
    }

    /// Sets the composite source name.
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source.name = Some(name.into());
        self
    }

    /// Sets the source profile ID.
    pub fn with_source_id(mut self, id: impl Into<String>) -> Self {
        self.source.id = Some(id.into());
        self
    }

    /// Sets the target namespace.
    pub fn with_target_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.target.namespace = Some(namespace.into());
        self
    }

    /// Short description naming the entry's source, for messages.
    pub fn describe_source(&self) -> String {
        match (&self.source.id, &self.source.name) {
            (Some(id), _) => format!("id '{id}'"),
            (None, Some(name)) => format!("name '{name}'"),
            (None, None) => "<no source>".to_string(),
        }
    }
}

/// A composite `"network/profile"` source name split into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceName {
    pub network: String,
    pub profile: String,
}

impl SourceName {
    /// Joins the parts back into the composite form.
    pub fn composite(&self) -> String {
        format!("{}{}{}", self.network, SOURCE_NAME_SEPARATOR, self.profile)
    }
}

impl FromStr for SourceName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(SOURCE_NAME_SEPARATOR) {
            Some((network, profile)) if !profile.contains(SOURCE_NAME_SEPARATOR) => {
                Ok(SourceName {
                    network: network.to_string(),
                    profile: profile.to_string(),
                })
            }
            _ => Err(ParseError::InvalidSourceName(s.to_string())),
        }
    }
}

impl fmt::Display for SourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.composite())
    }
}
