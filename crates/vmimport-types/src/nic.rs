//! Source VM network interface descriptor.

use serde::{Deserialize, Serialize};

use crate::SOURCE_NAME_SEPARATOR;

/// Read-only view of one network interface of the VM being imported.
///
/// Every field that the source platform may leave unset is a true optional:
/// an empty string is a present value, not an absent one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NicDescriptor {
    /// Interface name on the source VM (e.g. "nic1"), used in messages only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Logical network the profile is attached to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_network_name: Option<String>,
    /// Name of the attached profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,
    /// ID of the attached profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    /// True when the profile enables SR-IOV passthrough.
    #[serde(default)]
    pub requires_passthrough: bool,
}

impl NicDescriptor {
    /// Creates a descriptor for a NIC with a fully populated profile.
    pub fn new(
        network: impl Into<String>,
        profile_name: impl Into<String>,
        profile_id: impl Into<String>,
    ) -> Self {
        Self {
            name: None,
            logical_network_name: Some(network.into()),
            profile_name: Some(profile_name.into()),
            profile_id: Some(profile_id.into()),
            requires_passthrough: false,
        }
    }

    /// Sets the interface name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Marks the NIC as requiring SR-IOV passthrough.
    pub fn with_passthrough(mut self, passthrough: bool) -> Self {
        self.requires_passthrough = passthrough;
        self
    }

    /// Returns true if any profile information is attached to this NIC.
    ///
    /// A NIC without a profile is not connected to any network and takes no
    /// part in mapping validation.
    pub fn has_profile(&self) -> bool {
        self.profile_id.is_some()
            || self.profile_name.is_some()
            || self.logical_network_name.is_some()
    }

    /// Returns `"network/profile"` when both parts are present.
    pub fn composite_name(&self) -> Option<String> {
        match (&self.logical_network_name, &self.profile_name) {
            (Some(network), Some(profile)) => {
                Some(format!("{network}{SOURCE_NAME_SEPARATOR}{profile}"))
            }
            _ => None,
        }
    }

    /// Human readable label for messages.
    ///
    /// Prefers the interface name, then the profile ID, then the composite
    /// name, and finally the NIC's position in the VM.
    pub fn label(&self, ordinal: usize) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        if let Some(id) = &self.profile_id {
            return format!("profile {id}");
        }
        match self.composite_name() {
            Some(composite) => format!("profile {composite}"),
            None => format!("#{ordinal}"),
        }
    }
}
