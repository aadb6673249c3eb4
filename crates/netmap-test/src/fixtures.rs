//! Test fixtures for common network mapping patterns
//!
//! Names and IDs mirror a small source VM with one logical network and one
//! profile, plus deliberately wrong variants for negative cases.

use vmimport_types::{MappingEntry, NetworkAttachmentDefinition, NicDescriptor};

/// Logical network of the fixture NIC
pub const NETWORK_NAME: &str = "some-net";
/// Profile name of the fixture NIC
pub const VNIC_PROFILE_NAME: &str = "some-vnic-profile-name";
/// Profile ID of the fixture NIC
pub const VNIC_PROFILE_ID: &str = "some-vnic-profile-id";
/// Composite source name of the fixture NIC
pub const SRC_NET_MAPPING_NAME: &str = "some-net/some-vnic-profile-name";

/// Profile ID that matches nothing
pub const WRONG_NETWORK_ID: &str = "some-net-bad-id";
/// Well-formed composite name that matches nothing
pub const WRONG_SRC_NET_MAPPING_NAME: &str = "some-net-bad/some-vnic-bad";
/// Composite name without a separator
pub const INVALID_SRC_NET_MAPPING_NAME: &str = "bad-name-without-slash";

/// Target network name
pub const TARGET_NETWORK_NAME: &str = "targetNetwork";
/// Target network namespace
pub const TARGET_NETWORK_NAMESPACE: &str = "targetNamespace";
/// Default namespace of the import
pub const NAMESPACE: &str = "default";

/// SR-IOV CNI configuration
pub const SRIOV_CONFIG: &str =
    r#"{"cniVersion":"0.3.1","name":"test","type":"sriov","vlan":0,"vlanQoS":0,"ipam":{} }"#;
/// Non SR-IOV CNI configuration
pub const DIFFERENT_CONFIG: &str =
    r#"{"cniVersion":"0.3.1","name":"test","type":"different","vlan":0,"vlanQoS":0,"ipam":{} }"#;

/// Common NIC fixtures
pub mod nic_fixtures {
    use super::*;

    /// Builds a NIC from optional parts, like the source inventory does
    pub fn nic(
        network: Option<&str>,
        profile_name: Option<&str>,
        profile_id: Option<&str>,
        sriov: bool,
    ) -> NicDescriptor {
        NicDescriptor {
            name: None,
            logical_network_name: network.map(str::to_string),
            profile_name: profile_name.map(str::to_string),
            profile_id: profile_id.map(str::to_string),
            requires_passthrough: sriov,
        }
    }

    /// The standard fixture NIC
    pub fn default_nic() -> NicDescriptor {
        nic(
            Some(NETWORK_NAME),
            Some(VNIC_PROFILE_NAME),
            Some(VNIC_PROFILE_ID),
            false,
        )
    }

    /// The standard fixture NIC with SR-IOV passthrough
    pub fn sriov_nic() -> NicDescriptor {
        default_nic().with_passthrough(true)
    }

    /// A NIC with no profile at all
    pub fn unplugged_nic() -> NicDescriptor {
        NicDescriptor::default()
    }

    /// A distinct NIC on its own network and profile
    pub fn other_nic(suffix: &str) -> NicDescriptor {
        NicDescriptor::new(
            format!("net-{suffix}"),
            format!("vnic-{suffix}"),
            format!("vnic-{suffix}-id"),
        )
        .with_name(format!("nic-{suffix}"))
    }
}

/// Common mapping fixtures
pub mod mapping_fixtures {
    use super::*;

    /// Entry from optional source parts to the standard target
    pub fn entry(
        mapping_type: Option<&str>,
        source_name: Option<&str>,
        source_id: Option<&str>,
    ) -> MappingEntry {
        let mut entry = MappingEntry::to_target(TARGET_NETWORK_NAME);
        if let Some(t) = mapping_type {
            entry = entry.with_type(t);
        }
        if let Some(name) = source_name {
            entry = entry.with_source_name(name);
        }
        if let Some(id) = source_id {
            entry = entry.with_source_id(id);
        }
        entry
    }

    /// Pod entry matching `source_name` and/or `source_id`
    pub fn pod(source_name: Option<&str>, source_id: Option<&str>) -> MappingEntry {
        entry(Some("pod"), source_name, source_id)
    }

    /// Implicit pod entry (no type, no namespace) for a profile ID
    pub fn implicit_pod(source_id: &str) -> MappingEntry {
        entry(None, None, Some(source_id))
    }

    /// Multus entry for the fixture profile ID, targeting the namespaced network
    pub fn multus_by_id(source_id: &str) -> MappingEntry {
        entry(Some("multus"), None, Some(source_id)).with_target_namespace(TARGET_NETWORK_NAMESPACE)
    }
}

/// Common network attachment definition fixtures
pub mod nad_fixtures {
    use super::*;

    /// Target network with the given plugin configuration
    pub fn target_network(config: &str) -> NetworkAttachmentDefinition {
        NetworkAttachmentDefinition::new(TARGET_NETWORK_NAME, TARGET_NETWORK_NAMESPACE, config)
    }

    /// Target network with an empty spec
    pub fn target_network_without_config() -> NetworkAttachmentDefinition {
        target_network("")
    }
}
