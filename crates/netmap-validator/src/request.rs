//! Import request files consumed by `netmapcheck`.
//!
//! A request carries the source VM's NICs and the user's network mappings:
//!
//! ```yaml
//! namespace: vm-imports
//! nics:
//!   - name: nic1
//!     logicalNetworkName: ovirtmgmt
//!     profileName: ovirtmgmt
//!     profileId: 0000000a-000a-000a-000a-000000000398
//! networkMappings:
//!   - type: pod
//!     source: {name: ovirtmgmt/ovirtmgmt}
//!     target: {name: pod}
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use vmimport_types::{MappingEntry, NicDescriptor};

use crate::config::ValidatorConfig;
use crate::error::{NetmapError, NetmapResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    /// Namespace the VM is imported into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default)]
    pub nics: Vec<NicDescriptor>,
    /// Absent and empty are both accepted; neither maps anything.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_mappings: Option<Vec<MappingEntry>>,
}

impl ImportRequest {
    /// Mapping list as passed to the validator.
    pub fn mapping(&self) -> Option<&[MappingEntry]> {
        self.network_mappings.as_deref()
    }

    /// Namespace for targets without one: `explicit`, else the request's
    /// own namespace, else the configured default.
    pub fn target_namespace(&self, explicit: Option<&str>, config: &ValidatorConfig) -> String {
        explicit
            .or(self.namespace.as_deref())
            .unwrap_or(&config.default_namespace)
            .to_string()
    }

    /// Loads a request, as JSON for `.json` files and YAML otherwise.
    pub fn from_file(path: impl AsRef<Path>) -> NetmapResult<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| NetmapError::io(path, e))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            serde_json::from_str(&source).map_err(|e| NetmapError::Json {
                path: path.to_path_buf(),
                source: e,
            })
        } else {
            serde_yaml::from_str(&source).map_err(|e| NetmapError::Yaml {
                path: path.to_path_buf(),
                source: e,
            })
        }
    }
}
