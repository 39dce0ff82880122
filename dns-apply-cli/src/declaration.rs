//! Declaration files
//!
//! One file per owning user, produced by upstream tooling. Each file carries
//! the owner identity and a record-type → value mapping; this side only ever
//! reads them.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ApplyError, ApplyResult};

/// Extension a file must carry to count as a declaration.
const DECLARATION_EXT: &str = "json";

/// Owning user of a declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    /// Username; doubles as the subdomain label.
    pub username: String,
}

/// One per-user record declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct Declaration {
    pub owner: Owner,
    /// Record-type string → single value. The map is ordered so records
    /// within a declaration apply in a deterministic sequence.
    pub records: BTreeMap<String, String>,
}

impl Declaration {
    /// Load and decode one declaration file.
    ///
    /// # Errors
    ///
    /// Malformed structure fails the whole run with
    /// [`ApplyError::MalformedDeclaration`] naming the file.
    pub fn load(path: &Path) -> ApplyResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ApplyError::Io {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|e| ApplyError::MalformedDeclaration {
            file: path.display().to_string(),
            detail: e.to_string(),
        })
    }
}

/// List declaration files in `dir`, sorted for a stable processing order.
///
/// An empty result is valid (the run ends successfully with no network
/// activity); a missing or unreadable directory is an error.
pub fn discover(dir: &Path) -> ApplyResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| ApplyError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ApplyError::Io {
            path: dir.display().to_string(),
            source,
        })?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some(DECLARATION_EXT) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
