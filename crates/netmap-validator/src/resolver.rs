//! Multus target resolution and SR-IOV compatibility.

use serde_json::Value;
use tracing::debug;
use vmimport_types::{MappingEntry, NicDescriptor};

use crate::error::PluginConfigError;
use crate::failure::{FailureCategory, ValidationFailure};
use crate::provider::NetAttachDefProvider;

/// CNI plugin type required for SR-IOV passthrough NICs.
pub const SRIOV_PLUGIN_TYPE: &str = "sriov";

/// Extracts the top-level `"type"` of a CNI plugin configuration.
///
/// All other fields are ignored, including a `plugins` list.
pub fn plugin_type(config: &str) -> Result<String, PluginConfigError> {
    let document: Value = serde_json::from_str(config)?;
    let object = document.as_object().ok_or(PluginConfigError::NotAnObject)?;
    object
        .get("type")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(PluginConfigError::MissingType)
}

/// Resolves the multus target of `entry` for `nic` and checks it.
///
/// Returns `None` when the target exists, carries a readable plugin
/// configuration, and is compatible with the NIC's passthrough mode.
///
/// The configuration is read for every multus NIC, passthrough or not, so a
/// regular NIC on a target with an empty config or a plugin list is rejected
/// as `ConfigInvalid`. Only a passthrough NIC is held to the SR-IOV plugin
/// type; a regular NIC may use an SR-IOV target.
pub fn resolve_multus_target<P: NetAttachDefProvider + ?Sized>(
    entry: &MappingEntry,
    nic: &NicDescriptor,
    nic_label: &str,
    default_namespace: &str,
    provider: &P,
) -> Option<ValidationFailure> {
    let name = entry.target.name.as_str();
    let namespace = entry.target.namespace_or(default_namespace);

    let nad = match provider.find(name, namespace) {
        Ok(Some(nad)) => nad,
        Ok(None) => {
            return Some(ValidationFailure::new(
                FailureCategory::TargetUnresolved,
                format!(
                    "Network attachment definition {namespace}/{name} for NIC {nic_label} not found"
                ),
            ));
        }
        Err(e) => {
            debug!(
                error = %e,
                retryable = e.is_retryable(),
                name,
                namespace,
                "Network attachment definition lookup failed"
            );
            return Some(ValidationFailure::new(
                FailureCategory::TargetUnresolved,
                format!(
                    "Network attachment definition {namespace}/{name} for NIC {nic_label} could not be retrieved: {e}"
                ),
            ));
        }
    };

    let plugin = match plugin_type(&nad.plugin_config) {
        Ok(plugin) => plugin,
        Err(e) => {
            return Some(ValidationFailure::new(
                FailureCategory::ConfigInvalid,
                format!(
                    "Network attachment definition {namespace}/{name} for NIC {nic_label} has an invalid plugin configuration: {e}"
                ),
            ));
        }
    };

    if nic.requires_passthrough && plugin != SRIOV_PLUGIN_TYPE {
        return Some(ValidationFailure::new(
            FailureCategory::TypeInvalid,
            format!(
                "NIC {nic_label} requires SR-IOV passthrough but network attachment definition {namespace}/{name} uses plugin type '{plugin}'"
            ),
        ));
    }

    debug!(nic = nic_label, name, namespace, plugin = %plugin, "Multus target resolved");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::provider::{LookupResult, StaticProvider};
    use pretty_assertions::assert_eq;
    use vmimport_types::NetworkAttachmentDefinition;

    const SRIOV_CONFIG: &str =
        r#"{"cniVersion":"0.3.1","name":"test","type":"sriov","vlan":0,"vlanQoS":0,"ipam":{} }"#;
    const OTHER_CONFIG: &str =
        r#"{"cniVersion":"0.3.1","name":"test","type":"different","vlan":0,"vlanQoS":0,"ipam":{} }"#;

    struct FailingProvider;

    impl NetAttachDefProvider for FailingProvider {
        fn find(&self, _name: &str, _namespace: &str) -> LookupResult {
            Err(ProviderError::backend("boom"))
        }
    }

    fn entry() -> MappingEntry {
        MappingEntry::to_target("targetNetwork")
            .with_type("multus")
            .with_target_namespace("targetNamespace")
    }

    fn provider_with(config: &str) -> StaticProvider {
        StaticProvider::new().with(NetworkAttachmentDefinition::new(
            "targetNetwork",
            "targetNamespace",
            config,
        ))
    }

    fn category(failure: Option<ValidationFailure>) -> Option<FailureCategory> {
        failure.map(|f| f.category)
    }

    #[test]
    fn test_plugin_type() {
        assert_eq!(plugin_type(SRIOV_CONFIG).unwrap(), "sriov");
        assert!(matches!(plugin_type(""), Err(PluginConfigError::Malformed(_))));
        assert!(matches!(plugin_type("[1]"), Err(PluginConfigError::NotAnObject)));
        assert!(matches!(plugin_type("{}"), Err(PluginConfigError::MissingType)));
        assert!(matches!(
            plugin_type(r#"{"type":7}"#),
            Err(PluginConfigError::MissingType)
        ));
        assert!(matches!(
            plugin_type(r#"{"cniVersion":"0.4.0","plugins":[{"type":"sriov"}]}"#),
            Err(PluginConfigError::MissingType)
        ));
    }

    #[test]
    fn test_sriov_nic_on_sriov_target() {
        let nic = NicDescriptor::new("n", "p", "i").with_passthrough(true);
        let provider = provider_with(SRIOV_CONFIG);
        assert_eq!(resolve_multus_target(&entry(), &nic, "nic1", "default", &provider), None);
    }

    #[test]
    fn test_sriov_nic_on_other_target() {
        let nic = NicDescriptor::new("n", "p", "i").with_passthrough(true);
        let provider = provider_with(OTHER_CONFIG);
        assert_eq!(
            category(resolve_multus_target(&entry(), &nic, "nic1", "default", &provider)),
            Some(FailureCategory::TypeInvalid)
        );
    }

    #[test]
    fn test_regular_nic_on_sriov_target_is_accepted() {
        let nic = NicDescriptor::new("n", "p", "i");
        let provider = provider_with(SRIOV_CONFIG);
        assert_eq!(resolve_multus_target(&entry(), &nic, "nic1", "default", &provider), None);
    }

    #[test]
    fn test_regular_nic_on_plugin_list_target() {
        let nic = NicDescriptor::new("n", "p", "i");
        let provider = provider_with(r#"{"cniVersion":"0.4.0","plugins":[{"type":"bridge"}]}"#);
        assert_eq!(
            category(resolve_multus_target(&entry(), &nic, "nic1", "default", &provider)),
            Some(FailureCategory::ConfigInvalid)
        );
    }

    #[test]
    fn test_config_checked_before_passthrough() {
        let nic = NicDescriptor::new("n", "p", "i");
        let provider = provider_with("");
        assert_eq!(
            category(resolve_multus_target(&entry(), &nic, "nic1", "default", &provider)),
            Some(FailureCategory::ConfigInvalid)
        );
    }

    #[test]
    fn test_lookup_error_and_not_found() {
        let nic = NicDescriptor::new("n", "p", "i");
        let failure = resolve_multus_target(&entry(), &nic, "nic1", "default", &FailingProvider);
        let failure = failure.unwrap();
        assert_eq!(failure.category, FailureCategory::TargetUnresolved);
        assert!(failure.message.contains("boom"));

        let empty = StaticProvider::new();
        assert_eq!(
            category(resolve_multus_target(&entry(), &nic, "nic1", "default", &empty)),
            Some(FailureCategory::TargetUnresolved)
        );
    }

    #[test]
    fn test_default_namespace_used() {
        let nic = NicDescriptor::new("n", "p", "i");
        let entry = MappingEntry::to_target("targetNetwork").with_type("multus");
        let provider = StaticProvider::new().with(NetworkAttachmentDefinition::new(
            "targetNetwork",
            "vm-ns",
            r#"{"type":"bridge"}"#,
        ));
        assert_eq!(resolve_multus_target(&entry, &nic, "nic1", "vm-ns", &provider), None);
        assert_eq!(
            category(resolve_multus_target(&entry, &nic, "nic1", "default", &provider)),
            Some(FailureCategory::TargetUnresolved)
        );
    }
}
