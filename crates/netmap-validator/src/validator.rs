//! NetworkMappingValidator - network resource mapping validation for VM imports.
//!
//! Validation flow for every NIC of the VM:
//! 1. NICs without a profile are skipped
//! 2. Match the NIC to a mapping entry (profile ID first, then composite name)
//! 3. Classify the entry as pod, multus or invalid
//! 4. Resolve multus targets through the provider and check SR-IOV
//!
//! After all NICs, at most one NIC may have been mapped to the pod network.

use tracing::{debug, info, instrument, warn};
use vmimport_types::{MappingEntry, NicDescriptor};

use crate::classify::{classify, TargetKind};
use crate::config::ValidatorConfig;
use crate::failure::{FailureCategory, ValidationFailure, ValidationFailures};
use crate::index::MappingIndex;
use crate::provider::{CachingProvider, NetAttachDefProvider};
use crate::resolver::resolve_multus_target;

/// Validates network mappings against an injected attachment definition
/// provider.
///
/// Holds no state between calls; a validator can be shared across threads
/// whenever its provider can.
#[derive(Debug, Clone)]
pub struct NetworkMappingValidator<P> {
    provider: P,
    memoize_lookups: bool,
}

impl<P: NetAttachDefProvider> NetworkMappingValidator<P> {
    /// Creates a validator with lookup memoization enabled.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            memoize_lookups: true,
        }
    }

    /// Creates a validator using the settings of `config`.
    pub fn with_config(provider: P, config: &ValidatorConfig) -> Self {
        Self {
            provider,
            memoize_lookups: config.memoize_lookups,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Validates the mapping of `nics`.
    ///
    /// `mapping` may be absent, in which case every NIC with a profile is
    /// unmapped. `default_namespace` applies to multus targets without a
    /// namespace. Never fails: every problem is reported in the returned
    /// collection, which is empty when the mapping is acceptable.
    #[instrument(skip_all, fields(nics = nics.len(), namespace = default_namespace))]
    pub fn validate_network_mapping(
        &self,
        nics: &[NicDescriptor],
        mapping: Option<&[MappingEntry]>,
        default_namespace: &str,
    ) -> ValidationFailures {
        let index = MappingIndex::build(mapping);
        debug!(
            by_id = index.id_count(),
            by_name = index.name_count(),
            "Mapping index built"
        );
        let provider = CachingProvider::with_enabled(&self.provider, self.memoize_lookups);

        let mut failures = ValidationFailures::new();
        let mut pod_nics: Vec<String> = Vec::new();

        for (ordinal, nic) in nics.iter().enumerate() {
            if !nic.has_profile() {
                debug!(ordinal, "NIC has no profile, skipping");
                continue;
            }
            let label = nic.label(ordinal);

            let Some(entry) = index.find(nic) else {
                failures.push(mapping_not_found(nic, &label));
                continue;
            };

            match classify(entry) {
                TargetKind::Pod => {
                    debug!(nic = %label, target = %entry.target, "NIC mapped to pod network");
                    pod_nics.push(label);
                }
                TargetKind::Multus => {
                    if let Some(failure) =
                        resolve_multus_target(entry, nic, &label, default_namespace, &provider)
                    {
                        failures.push(failure);
                    }
                }
                TargetKind::Invalid(reason) => {
                    failures.push(ValidationFailure::new(
                        FailureCategory::TypeInvalid,
                        format!(
                            "Network mapping for NIC {label} with source {} is invalid: {reason}",
                            entry.describe_source()
                        ),
                    ));
                }
            }
        }

        if let Some(failure) = check_pod_exclusivity(&pod_nics) {
            failures.push(failure);
        }

        debug!(
            cache_hits = provider.hits(),
            cache_misses = provider.misses(),
            "Network attachment definition lookups"
        );
        if failures.is_empty() {
            info!("Network mapping is valid");
        } else {
            warn!(
                count = failures.len(),
                "Network mapping rejected: {}",
                failures.condition_message()
            );
        }
        failures
    }
}

/// One-shot validation with a borrowed provider.
pub fn validate_network_mapping<P: NetAttachDefProvider + ?Sized>(
    nics: &[NicDescriptor],
    mapping: Option<&[MappingEntry]>,
    default_namespace: &str,
    provider: &P,
) -> ValidationFailures {
    NetworkMappingValidator::new(provider).validate_network_mapping(nics, mapping, default_namespace)
}

/// Reports a single failure when more than one NIC targets the pod network.
pub fn check_pod_exclusivity(pod_nics: &[String]) -> Option<ValidationFailure> {
    if pod_nics.len() <= 1 {
        return None;
    }
    Some(ValidationFailure::new(
        FailureCategory::MultiplePodTargets,
        format!(
            "Only one NIC may be mapped to the pod network, found {}: {}",
            pod_nics.len(),
            pod_nics.join(", ")
        ),
    ))
}

fn mapping_not_found(nic: &NicDescriptor, label: &str) -> ValidationFailure {
    let name = nic.composite_name().unwrap_or_else(|| "<none>".to_string());
    let id = nic.profile_id.as_deref().unwrap_or("<none>");
    ValidationFailure::new(
        FailureCategory::MappingNotFound,
        format!("Network mapping for NIC {label} (source network '{name}', profile ID '{id}') not found"),
    )
}
