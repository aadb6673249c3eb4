//! End-to-end validation of request and catalog files, as netmapcheck runs it.

use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use vmimport_netmap::{
    FailureCategory, ImportRequest, NetworkMappingValidator, StaticProvider, ValidatorConfig,
};

fn write_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn validate(request: &Path, attachments: &Path, config: &ValidatorConfig) -> Vec<FailureCategory> {
    let request = ImportRequest::from_file(request).unwrap();
    let provider = StaticProvider::from_file(attachments).unwrap();
    let namespace = request.target_namespace(None, config);
    NetworkMappingValidator::with_config(provider, config)
        .validate_network_mapping(&request.nics, request.mapping(), &namespace)
        .categories()
}

const ATTACHMENTS: &str = r#"
apiVersion: v1
kind: List
items:
  - apiVersion: k8s.cni.cncf.io/v1
    kind: NetworkAttachmentDefinition
    metadata:
      name: sriov-net
      namespace: vm-imports
    spec:
      config: '{"cniVersion":"0.3.1","name":"sriov-net","type":"sriov","vlan":100}'
  - apiVersion: k8s.cni.cncf.io/v1
    kind: NetworkAttachmentDefinition
    metadata:
      name: bridge-net
      namespace: vm-imports
    spec:
      config: '{"cniVersion":"0.3.1","name":"bridge-net","type":"bridge","bridge":"br1"}'
"#;

#[test]
fn test_valid_request() {
    let request = write_file(
        ".yaml",
        r#"
namespace: vm-imports
nics:
  - name: nic1
    logicalNetworkName: ovirtmgmt
    profileName: ovirtmgmt
    profileId: p-mgmt
  - name: nic2
    logicalNetworkName: storage
    profileName: storage-sriov
    profileId: p-sriov
    requiresPassthrough: true
  - name: nic3
    logicalNetworkName: data
    profileName: data
    profileId: p-data
  - name: nic4
networkMappings:
  - source: {name: ovirtmgmt/ovirtmgmt}
    target: {name: pod}
  - type: multus
    source: {id: p-sriov}
    target: {name: sriov-net}
  - type: multus
    source: {id: p-data}
    target: {name: bridge-net, namespace: vm-imports}
  - type: multus
    source: {id: p-unused}
    target: {name: does-not-exist}
"#,
    );
    let attachments = write_file(".yaml", ATTACHMENTS);

    let categories = validate(request.path(), attachments.path(), &ValidatorConfig::default());
    assert!(categories.is_empty());
}

#[test]
fn test_invalid_json_request() {
    let request = write_file(
        ".json",
        r#"{
  "nics": [
    {"name": "nic1", "logicalNetworkName": "data", "profileName": "data", "profileId": "p-data", "requiresPassthrough": true},
    {"name": "nic2", "logicalNetworkName": "mgmt", "profileName": "mgmt", "profileId": "p-mgmt"},
    {"name": "nic3", "logicalNetworkName": "other", "profileName": "other", "profileId": "p-other"}
  ],
  "networkMappings": [
    {"type": "multus", "source": {"id": "p-data"}, "target": {"name": "bridge-net"}},
    {"type": "pod", "source": {"id": "p-mgmt"}, "target": {"name": "pod"}},
    {"source": {"name": "other/other"}, "target": {"name": "pod"}}
  ]
}"#,
    );
    let attachments = write_file(".yaml", ATTACHMENTS);
    let config = ValidatorConfig::from_toml_str("default_namespace = \"vm-imports\"").unwrap();

    let categories = validate(request.path(), attachments.path(), &config);
    assert_eq!(
        categories,
        vec![
            FailureCategory::TypeInvalid,
            FailureCategory::MultiplePodTargets
        ]
    );
}

#[test]
fn test_missing_namespace_resolves_against_default() {
    let request = write_file(
        ".yaml",
        r#"
nics:
  - {logicalNetworkName: data, profileName: data, profileId: p-data}
networkMappings:
  - {type: multus, source: {id: p-data}, target: {name: bridge-net}}
"#,
    );
    let attachments = write_file(".yaml", ATTACHMENTS);

    let categories = validate(request.path(), attachments.path(), &ValidatorConfig::default());
    assert_eq!(categories, vec![FailureCategory::TargetUnresolved]);
}
