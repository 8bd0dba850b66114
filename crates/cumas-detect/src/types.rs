//! Capability Types
//!
//! Output records and per-call options.

use serde::{Deserialize, Serialize};

/// Capability key used when a manifest declares nothing recognizable
pub const FALLBACK_CAPABILITY: &str = "manifest";

/// Description attached to the fallback record
pub const FALLBACK_DESCRIPTION: &str = "Basic extension manifest configuration";

/// Safari support for a capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compatibility {
    pub safari: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

/// One detected capability.
///
/// Only `capability` and `description` are always present. The optional
/// members are attached by the detector when the matching option is set,
/// and are omitted from the serialized form otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityRecord {
    pub capability: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<Compatibility>,
}

impl CapabilityRecord {
    pub fn new(capability: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            capability: capability.into(),
            description: description.into(),
            id: None,
            fields: None,
            compatibility: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_compatibility(mut self, compatibility: Compatibility) -> Self {
        self.compatibility = Some(compatibility);
        self
    }

    /// Key used for compatibility lookup and ordering: `id` when set, else `capability`
    pub fn key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.capability)
    }
}

/// Options recognized by every entry point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetectOptions {
    /// Fail instead of falling back when the file is missing or invalid
    pub strict: bool,
    /// Attach the inspected manifest field paths
    pub include_fields: bool,
    /// Attach the normalized id and use it for dedup/ordering
    pub normalize_names: bool,
    /// Attach Safari compatibility metadata
    pub include_compatibility: bool,
}

impl DetectOptions {
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Every enrichment switched on (strictness unchanged)
    pub fn enriched(self) -> Self {
        Self {
            include_fields: true,
            normalize_names: true,
            include_compatibility: true,
            ..self
        }
    }
}
