//! Browser-extension capability detection.
//!
//! Inspects a WebExtension manifest and reports what the extension can do
//! (background execution, content scripts, popup, sidebar, overrides, ...)
//! across manifest versions and vendor dialects.

pub mod compat;
pub mod detector;
pub mod discover;
pub mod error;
pub mod loader;
pub mod predicates;
pub mod rules;
pub mod types;

pub use detector::{build_record, detect_capabilities, fallback_capabilities};
pub use discover::{discover_manifests, MANIFEST_FILE_NAME};
pub use error::{DetectError, DetectResult, ErrorKind};
pub use loader::{
    detect_from_path, detect_from_path_async, parse_manifest, LocalFs, Loader, ManifestStore,
};
pub use rules::{CapabilityRule, FieldCheck, Presence, RULES};
pub use types::{
    CapabilityRecord, Compatibility, DetectOptions, FALLBACK_CAPABILITY, FALLBACK_DESCRIPTION,
};
