//! Validation failure model and aggregation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Stable category of a validation failure.
///
/// The identifiers returned by [`FailureCategory::as_str`] are consumed by
/// upstream status reporting and must not change. Message text is free-form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureCategory {
    /// No mapping entry matches a NIC.
    #[serde(rename = "network.mapping")]
    MappingNotFound,
    /// Unsupported type, ambiguous implicit default, or SR-IOV mismatch.
    #[serde(rename = "network.type")]
    TypeInvalid,
    /// The target attachment definition could not be retrieved.
    #[serde(rename = "network.target")]
    TargetUnresolved,
    /// The target was retrieved but its plugin configuration is unreadable.
    #[serde(rename = "network.target.config")]
    ConfigInvalid,
    /// More than one NIC maps to the pod network.
    #[serde(rename = "network.target.pod.multiple")]
    MultiplePodTargets,
}

impl FailureCategory {
    /// Returns the stable check identifier.
    pub const fn as_str(&self) -> &'static str {
        match self {
            FailureCategory::MappingNotFound => "network.mapping",
            FailureCategory::TypeInvalid => "network.type",
            FailureCategory::TargetUnresolved => "network.target",
            FailureCategory::ConfigInvalid => "network.target.config",
            FailureCategory::MultiplePodTargets => "network.target.pod.multiple",
        }
    }
}

impl fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected problem with the network mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub category: FailureCategory,
    pub message: String,
}

impl ValidationFailure {
    pub fn new(category: FailureCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)
    }
}

/// Ordered collection of validation failures.
///
/// Order is significant: per-NIC failures come first in NIC order, global
/// failures after them. An empty collection means the mapping is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationFailures(Vec<ValidationFailure>);

impl ValidationFailures {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends one failure.
    pub fn push(&mut self, failure: ValidationFailure) {
        self.0.push(failure);
    }

    /// Appends failures produced by a sibling validator, keeping order.
    pub fn extend<I: IntoIterator<Item = ValidationFailure>>(&mut self, failures: I) {
        self.0.extend(failures);
    }

    /// Returns true if the import must not proceed.
    pub fn blocks_import(&self) -> bool {
        !self.0.is_empty()
    }

    /// Categories in failure order.
    pub fn categories(&self) -> Vec<FailureCategory> {
        self.0.iter().map(|f| f.category).collect()
    }

    /// Returns true if any failure has `category`.
    pub fn contains(&self, category: FailureCategory) -> bool {
        self.0.iter().any(|f| f.category == category)
    }

    /// Joined message suitable for an import status condition.
    pub fn condition_message(&self) -> String {
        self.0
            .iter()
            .map(|f| f.message.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Deref for ValidationFailures {
    type Target = [ValidationFailure];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<ValidationFailure>> for ValidationFailures {
    fn from(failures: Vec<ValidationFailure>) -> Self {
        Self(failures)
    }
}

impl IntoIterator for ValidationFailures {
    type Item = ValidationFailure;
    type IntoIter = std::vec::IntoIter<ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationFailures {
    type Item = &'a ValidationFailure;
    type IntoIter = std::slice::Iter<'a, ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
