//! Mapping index and NIC matcher.
//!
//! The index is built once per validation call from the mapping list and
//! answers two lookups: by profile ID and by `"network/profile"` composite
//! name. Profile ID matches take precedence over name matches.

use std::collections::HashMap;
use tracing::{debug, warn};
use vmimport_types::{MappingEntry, NicDescriptor, SourceName};

/// Transient lookup structure over a borrowed mapping list.
#[derive(Debug, Default)]
pub struct MappingIndex<'a> {
    by_id: HashMap<&'a str, &'a MappingEntry>,
    by_name: HashMap<&'a str, &'a MappingEntry>,
}

impl<'a> MappingIndex<'a> {
    /// Builds the index. An absent mapping list yields an empty index.
    ///
    /// When two entries share a key the first one in list order is kept.
    /// Entries whose `source.name` does not split into exactly one network
    /// and one profile are left out of the name lookup.
    pub fn build(mapping: Option<&'a [MappingEntry]>) -> Self {
        let mut index = Self::default();
        for entry in mapping.unwrap_or_default() {
            if let Some(id) = entry.source.id.as_deref() {
                insert_first(&mut index.by_id, id, entry, "id");
            }
            if let Some(name) = entry.source.name.as_deref() {
                if name.parse::<SourceName>().is_ok() {
                    insert_first(&mut index.by_name, name, entry, "name");
                } else {
                    debug!(source_name = name, "Mapping source name is not 'network/profile', skipping name lookup");
                }
            }
        }
        index
    }

    /// Resolves a NIC to at most one mapping entry.
    pub fn find(&self, nic: &NicDescriptor) -> Option<&'a MappingEntry> {
        if let Some(entry) = nic
            .profile_id
            .as_deref()
            .and_then(|id| self.by_id.get(id))
        {
            return Some(*entry);
        }
        nic.composite_name()
            .and_then(|name| self.by_name.get(name.as_str()).copied())
    }

    /// Number of entries reachable by profile ID.
    pub fn id_count(&self) -> usize {
        self.by_id.len()
    }

    /// Number of entries reachable by composite name.
    pub fn name_count(&self) -> usize {
        self.by_name.len()
    }
}

fn insert_first<'a>(
    map: &mut HashMap<&'a str, &'a MappingEntry>,
    key: &'a str,
    entry: &'a MappingEntry,
    kind: &str,
) {
    if map.contains_key(key) {
        warn!(key, kind, "Duplicate network mapping source, keeping the first entry");
        return;
    }
    map.insert(key, entry);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nic() -> NicDescriptor {
        NicDescriptor::new("some-net", "some-vnic-profile-name", "some-vnic-profile-id")
    }

    #[test]
    fn test_match_by_id() {
        let mapping = vec![MappingEntry::to_target("t").with_source_id("some-vnic-profile-id")];
        let index = MappingIndex::build(Some(&mapping));
        assert_eq!(index.find(&nic()), Some(&mapping[0]));
    }

    #[test]
    fn test_match_by_name() {
        let mapping =
            vec![MappingEntry::to_target("t").with_source_name("some-net/some-vnic-profile-name")];
        let index = MappingIndex::build(Some(&mapping));
        assert_eq!(index.find(&nic()), Some(&mapping[0]));
    }

    #[test]
    fn test_id_takes_precedence_over_name() {
        let mapping = vec![
            MappingEntry::to_target("by-name").with_source_name("some-net/some-vnic-profile-name"),
            MappingEntry::to_target("by-id").with_source_id("some-vnic-profile-id"),
        ];
        let index = MappingIndex::build(Some(&mapping));
        assert_eq!(index.find(&nic()).map(|e| e.target.name.as_str()), Some("by-id"));
    }

    #[test]
    fn test_wrong_id_falls_back_to_name() {
        let mapping = vec![MappingEntry::to_target("t")
            .with_source_id("some-net-bad-id")
            .with_source_name("some-net/some-vnic-profile-name")];
        let index = MappingIndex::build(Some(&mapping));
        assert_eq!(index.find(&nic()), Some(&mapping[0]));
    }

    #[test]
    fn test_malformed_names_never_match() {
        let mapping = vec![
            MappingEntry::to_target("t").with_source_name("bad-name-without-slash"),
            MappingEntry::to_target("t").with_source_name("some-net/some-vnic-profile-name/x"),
        ];
        let index = MappingIndex::build(Some(&mapping));
        assert_eq!(index.name_count(), 0);

        let odd = NicDescriptor::new("some-net", "some-vnic-profile-name/x", "other");
        assert_eq!(index.find(&odd), None);
        assert_eq!(index.find(&nic()), None);
    }

    #[test]
    fn test_name_requires_both_nic_parts() {
        let mapping = vec![MappingEntry::to_target("t").with_source_name("some-net/p")];
        let index = MappingIndex::build(Some(&mapping));
        let partial = NicDescriptor {
            logical_network_name: Some("some-net".to_string()),
            ..Default::default()
        };
        assert_eq!(index.find(&partial), None);
    }

    #[test]
    fn test_absent_mapping_is_empty() {
        let index = MappingIndex::build(None);
        assert_eq!(index.id_count(), 0);
        assert_eq!(index.find(&nic()), None);
    }

    #[test]
    fn test_duplicate_keys_keep_first() {
        let mapping = vec![
            MappingEntry::to_target("first").with_source_id("some-vnic-profile-id"),
            MappingEntry::to_target("second").with_source_id("some-vnic-profile-id"),
        ];
        let index = MappingIndex::build(Some(&mapping));
        assert_eq!(index.id_count(), 1);
        assert_eq!(index.find(&nic()).map(|e| e.target.name.as_str()), Some("first"));
    }
}
