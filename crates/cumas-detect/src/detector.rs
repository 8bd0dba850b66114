//! Capability Detector
//!
//! Pure mapping from a parsed manifest to an ordered capability list.
//! Never fails: a manifest with nothing recognizable yields the fallback.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::compat;
use crate::rules::{CapabilityRule, RULES};
use crate::types::{CapabilityRecord, DetectOptions, FALLBACK_CAPABILITY, FALLBACK_DESCRIPTION};

/// Detect every capability the manifest declares.
///
/// The result is sorted case-insensitively by `id` (when normalization is
/// on) or `capability`, and is never empty.
pub fn detect_capabilities(manifest: &Value, options: &DetectOptions) -> Vec<CapabilityRecord> {
    let mut table = CapabilityTable::default();

    for rule in RULES.iter().filter(|rule| rule.matches(manifest)) {
        debug!("Capability matched: {}", rule.capability);
        table.insert(build_record(rule, options));
    }

    if table.is_empty() {
        return fallback_capabilities(options);
    }

    table.into_sorted()
}

/// The single-record list returned when nothing was detected or the
/// manifest could not be loaded. Never carries compatibility data.
pub fn fallback_capabilities(options: &DetectOptions) -> Vec<CapabilityRecord> {
    let mut record = CapabilityRecord::new(FALLBACK_CAPABILITY, FALLBACK_DESCRIPTION);
    if options.normalize_names {
        record = record.with_id(FALLBACK_CAPABILITY);
    }
    if options.include_fields {
        record = record.with_fields(Vec::<String>::new());
    }
    vec![record]
}

/// Shape a record for a matched rule according to the requested options
pub fn build_record(rule: &CapabilityRule, options: &DetectOptions) -> CapabilityRecord {
    let mut record = CapabilityRecord::new(rule.capability, rule.description);

    if options.include_fields {
        record = record.with_fields(rule.field_paths());
    }
    if options.normalize_names {
        record = record.with_id(rule.id);
    }
    if options.include_compatibility {
        if let Some(compatibility) = compat::lookup(record.key()) {
            record = record.with_compatibility(compatibility.clone());
        }
    }

    record
}

/// Unique-by-key collection; a later insert for the same key replaces the
/// earlier record in place.
#[derive(Debug, Default)]
struct CapabilityTable {
    records: Vec<CapabilityRecord>,
    index: HashMap<String, usize>,
}

impl CapabilityTable {
    fn insert(&mut self, record: CapabilityRecord) {
        let key = record.key().to_string();
        match self.index.get(&key) {
            Some(&slot) => self.records[slot] = record,
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn into_sorted(self) -> Vec<CapabilityRecord> {
        let mut records = self.records;
        records.sort_by_cached_key(|record| record.key().to_lowercase());
        records
    }
}
