//! Network resource mapping validation for VM imports.
//!
//! Before an imported VM is created, every source NIC must map onto exactly
//! one target cluster network. This crate decides whether a user-supplied
//! mapping is complete, unambiguous, type-consistent and compatible with the
//! target networks, and reports every problem as a [`ValidationFailure`]:
//!
//! - [`index`]: profile-ID and composite-name lookups, NIC matching
//! - [`classify`]: pod / multus / invalid classification of matched entries
//! - [`provider`]: the injected attachment definition lookup capability
//! - [`resolver`]: multus target resolution and SR-IOV compatibility
//! - [`validator`]: the per-NIC pass, pod exclusivity and aggregation
//! - [`config`], [`request`], [`error`]: configuration, input files, errors
//!
//! # Example
//!
//! ```
//! use vmimport_netmap::{validate_network_mapping, FailureCategory, StaticProvider};
//! use vmimport_types::{MappingEntry, NicDescriptor};
//!
//! let nics = vec![NicDescriptor::new("ovirtmgmt", "ovirtmgmt", "profile-1")];
//! let mapping = vec![MappingEntry::to_target("pod").with_type("pod").with_source_id("profile-1")];
//!
//! let failures = validate_network_mapping(&nics, Some(&mapping), "default", &StaticProvider::new());
//! assert!(failures.is_empty());
//!
//! let failures = validate_network_mapping(&nics, None, "default", &StaticProvider::new());
//! assert_eq!(failures.categories(), vec![FailureCategory::MappingNotFound]);
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod failure;
pub mod index;
pub mod provider;
pub mod request;
pub mod resolver;
pub mod validator;

// Re-export commonly used items at crate root
pub use classify::{classify, InvalidType, TargetKind};
pub use config::{ValidatorConfig, DEFAULT_NAMESPACE};
pub use error::{NetmapError, NetmapResult, PluginConfigError, ProviderError};
pub use failure::{FailureCategory, ValidationFailure, ValidationFailures};
pub use index::MappingIndex;
pub use provider::{CachingProvider, LookupResult, NetAttachDefProvider, StaticProvider};
pub use request::ImportRequest;
pub use resolver::{plugin_type, resolve_multus_target, SRIOV_PLUGIN_TYPE};
pub use validator::{check_pod_exclusivity, validate_network_mapping, NetworkMappingValidator};
