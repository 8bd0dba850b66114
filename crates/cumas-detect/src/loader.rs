//! Manifest Loader
//!
//! Resolves a manifest file, parses JSON, and hands it to the detector.
//! Missing or unreadable manifests fall back to the bare "manifest"
//! capability unless strict mode is requested.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, error, warn};

use crate::detector::{detect_capabilities, fallback_capabilities};
use crate::error::{DetectError, DetectResult};
use crate::types::{CapabilityRecord, DetectOptions};

/// Storage backend the loader reads manifests from.
///
/// The async methods are awaited exactly once per load; there is no retry
/// or timeout at this layer.
#[allow(async_fn_in_trait)]
pub trait ManifestStore {
    fn exists(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    async fn exists_async(&self, path: &Path) -> bool;

    async fn read_to_string_async(&self, path: &Path) -> io::Result<String>;
}

/// The local filesystem (`std::fs` / `tokio::fs`)
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl ManifestStore for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    async fn exists_async(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn read_to_string_async(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }
}

/// Loads manifests from a [`ManifestStore`] and detects their capabilities
#[derive(Debug, Clone, Default)]
pub struct Loader<S = LocalFs> {
    store: S,
}

impl Loader<LocalFs> {
    pub fn new() -> Self {
        Self { store: LocalFs }
    }
}

impl<S: ManifestStore> Loader<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the manifest at `path` and detect its capabilities
    pub fn detect(
        &self,
        path: impl AsRef<Path>,
        options: &DetectOptions,
    ) -> DetectResult<Vec<CapabilityRecord>> {
        let path = path.as_ref();

        if !self.store.exists(path) {
            return missing(path, options);
        }

        let manifest = self
            .store
            .read_to_string(path)
            .map_err(|source| read_error(path, source))
            .and_then(|content| parse_manifest(&content));

        finish(path, manifest, options)
    }

    /// Async counterpart of [`Loader::detect`]
    pub async fn detect_async(
        &self,
        path: impl AsRef<Path>,
        options: &DetectOptions,
    ) -> DetectResult<Vec<CapabilityRecord>> {
        let path = path.as_ref();

        if !self.store.exists_async(path).await {
            return missing(path, options);
        }

        let manifest = match self.store.read_to_string_async(path).await {
            Ok(content) => parse_manifest(&content),
            Err(source) => Err(read_error(path, source)),
        };

        finish(path, manifest, options)
    }
}

/// Detect capabilities of the manifest file at `path` on the local filesystem
pub fn detect_from_path(
    path: impl AsRef<Path>,
    options: &DetectOptions,
) -> DetectResult<Vec<CapabilityRecord>> {
    Loader::new().detect(path, options)
}

/// Async counterpart of [`detect_from_path`]
pub async fn detect_from_path_async(
    path: impl AsRef<Path>,
    options: &DetectOptions,
) -> DetectResult<Vec<CapabilityRecord>> {
    Loader::new().detect_async(path, options).await
}

/// Parse manifest text. The root must be a JSON object.
pub fn parse_manifest(content: &str) -> DetectResult<Value> {
    let manifest: Value = serde_json::from_str(content)?;
    if !manifest.is_object() {
        return Err(DetectError::NotAnObject(json_type_name(&manifest)));
    }
    Ok(manifest)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn read_error(path: &Path, source: io::Error) -> DetectError {
    DetectError::Read {
        path: path.to_path_buf(),
        source,
    }
}

fn missing(path: &Path, options: &DetectOptions) -> DetectResult<Vec<CapabilityRecord>> {
    if options.strict {
        return Err(DetectError::NotFound(path.to_path_buf()));
    }

    warn!("Manifest not found at {:?}, using fallback capabilities", path);
    Ok(fallback_capabilities(options))
}

fn finish(
    path: &Path,
    manifest: DetectResult<Value>,
    options: &DetectOptions,
) -> DetectResult<Vec<CapabilityRecord>> {
    match manifest {
        Ok(manifest) => {
            debug!("Loaded manifest {:?}", path);
            Ok(detect_capabilities(&manifest, options))
        }
        Err(e) if options.strict => Err(e),
        Err(e) => {
            error!("Failed to load manifest {:?}: {}", path, e);
            Ok(fallback_capabilities(options))
        }
    }
}
