//! Common types for importing virtual machines into a Kubernetes-native
//! virtualization platform.
//!
//! This crate provides the data model shared by the import validators:
//!
//! - [`NicDescriptor`]: read-only view of one source VM network interface
//! - [`MappingEntry`]: one user-supplied network mapping item
//! - [`MappingType`]: closed variant of the open `type` discriminant
//! - [`SourceName`]: a parsed `"network/profile"` composite name
//! - [`NetworkAttachmentDefinition`]: the multus target resource

mod attachment;
mod mapping;
mod nic;

pub use attachment::NetworkAttachmentDefinition;
pub use mapping::{MappingEntry, MappingSource, MappingType, ObjectIdentifier, SourceName};
pub use nic::NicDescriptor;

/// Separator between the logical network and the profile in a composite name.
pub const SOURCE_NAME_SEPARATOR: char = '/';

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid source network name '{0}': expected exactly one '/' separator")]
    InvalidSourceName(String),
}
