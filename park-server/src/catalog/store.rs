//! Disk-backed storage for the ride catalog.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::domain::Ride;

use super::error::CatalogError;

/// On-disk catalog format.
#[derive(Debug, Serialize, Deserialize)]
struct StoredCatalog {
    /// Unix timestamp of the last save.
    saved_at_secs: u64,
    rides: Vec<Ride>,
}

/// JSON file holding the ride catalog.
///
/// Saves go through a temporary file and a rename, so a reader never sees a
/// half-written catalog.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load rides from disk.
    ///
    /// Returns `Ok(None)` if the file does not exist yet. Rides are not
    /// validated here; the catalog validates them when building a snapshot.
    pub fn load(&self) -> Result<Option<Vec<Ride>>, CatalogError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(CatalogError::Storage {
                    message: format!("failed to read {}: {}", self.path.display(), e),
                });
            }
        };

        let stored: StoredCatalog =
            serde_json::from_str(&contents).map_err(|e| CatalogError::Storage {
                message: format!("failed to parse {}: {}", self.path.display(), e),
            })?;

        Ok(Some(stored.rides))
    }

    /// Save rides to disk, replacing the previous contents atomically.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save<'a>(&self, rides: impl IntoIterator<Item = &'a Ride>) -> Result<(), CatalogError> {
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map_err(|_| CatalogError::Storage {
                message: "system time before unix epoch".to_string(),
            })?
            .as_secs();

        let stored = StoredCatalog {
            saved_at_secs: now,
            rides: rides.into_iter().cloned().collect(),
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| CatalogError::Storage {
                message: format!("failed to create catalog directory: {}", e),
            })?;
        }

        let json = serde_json::to_string_pretty(&stored).map_err(|e| CatalogError::Storage {
            message: format!("failed to serialize catalog: {}", e),
        })?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| CatalogError::Storage {
            message: format!("failed to write {}: {}", tmp.display(), e),
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|e| CatalogError::Storage {
            message: format!("failed to replace {}: {}", self.path.display(), e),
        })?;

        Ok(())
    }

    /// Whether the backing file can currently be read.
    pub fn probe(&self) -> bool {
        std::fs::File::open(&self.path).is_ok()
    }

    /// Get the catalog file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
