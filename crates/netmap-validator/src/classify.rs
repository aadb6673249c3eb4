//! Target type classification of a matched mapping entry.

use std::fmt;
use vmimport_types::{MappingEntry, MappingType};

/// What a matched mapping entry points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetKind {
    /// The pod network, either explicitly or by implicit default.
    Pod,
    /// A multus network backed by an attachment definition.
    Multus,
    /// A type that cannot be imported.
    Invalid(InvalidType),
}

/// Why a mapping entry's type was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidType {
    /// No type was given but a target namespace was. A namespace only makes
    /// sense for a multus target, so the implicit pod default contradicts it.
    NamespaceWithoutType(String),
    /// The type is neither pod nor multus.
    Unsupported(String),
}

impl fmt::Display for InvalidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidType::NamespaceWithoutType(ns) => write!(
                f,
                "no type is set but target namespace '{ns}' is, type must be 'multus'"
            ),
            InvalidType::Unsupported(t) => {
                write!(f, "type '{t}' is not supported, expected 'pod' or 'multus'")
            }
        }
    }
}

/// Classifies a matched entry.
pub fn classify(entry: &MappingEntry) -> TargetKind {
    match (&entry.mapping_type, &entry.target.namespace) {
        (None, None) => TargetKind::Pod,
        (None, Some(ns)) => TargetKind::Invalid(InvalidType::NamespaceWithoutType(ns.clone())),
        (Some(MappingType::Pod), _) => TargetKind::Pod,
        (Some(MappingType::Multus), _) => TargetKind::Multus,
        (Some(MappingType::Other(t)), _) => TargetKind::Invalid(InvalidType::Unsupported(t.clone())),
    }
}
