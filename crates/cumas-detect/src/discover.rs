//! Manifest Discovery
//!
//! Walks a directory tree of unpacked extensions and collects their
//! `manifest.json` files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{DetectError, DetectResult};
use crate::types::DetectOptions;

/// File name every extension manifest uses
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Find every manifest under `base_dir`, sorted by path.
///
/// A missing directory yields an empty list rather than an error. Symlinked
/// directories are not followed. Unreadable directories are skipped with a
/// warning unless `options.strict` is set.
pub fn discover_manifests(base_dir: &Path, options: &DetectOptions) -> DetectResult<Vec<PathBuf>> {
    let mut manifests = Vec::new();

    if !base_dir.exists() {
        info!("Extension directory does not exist: {:?}", base_dir);
        return Ok(manifests);
    }

    if base_dir.is_file() {
        manifests.push(base_dir.to_path_buf());
        return Ok(manifests);
    }

    discover_recursive(base_dir, &mut manifests, options.strict)?;
    manifests.sort();

    info!("Found {} manifests under {:?}", manifests.len(), base_dir);
    Ok(manifests)
}

fn discover_recursive(dir: &Path, manifests: &mut Vec<PathBuf>, strict: bool) -> DetectResult<()> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(source) => return skip_unreadable(dir, source, strict),
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                skip_unreadable(dir, source, strict)?;
                continue;
            }
        };
        let path = entry.path();

        if is_skipped(&path) {
            continue;
        }

        // file_type() does not follow symlinks, so a link back up the tree is never entered
        let is_dir = match entry.file_type() {
            Ok(file_type) => file_type.is_dir(),
            Err(source) => {
                skip_unreadable(&path, source, strict)?;
                continue;
            }
        };

        if is_dir {
            discover_recursive(&path, manifests, strict)?;
        } else if path.file_name().and_then(|n| n.to_str()) == Some(MANIFEST_FILE_NAME) {
            debug!("Discovered manifest {:?}", path);
            manifests.push(path);
        }
    }

    Ok(())
}

fn skip_unreadable(path: &Path, source: std::io::Error, strict: bool) -> DetectResult<()> {
    if strict {
        return Err(DetectError::Read {
            path: path.to_path_buf(),
            source,
        });
    }

    warn!("Skipping unreadable path {:?}: {}", path, source);
    Ok(())
}

// Dotfiles, dependency trees, and editor temp files
fn is_skipped(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return true;
    };
    name.starts_with('.')
        || name == "node_modules"
        || name.ends_with(".tmp")
        || name.ends_with(".swp")
}
