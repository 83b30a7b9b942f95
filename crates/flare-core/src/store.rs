use crate::incident::Incident;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, warn};

/// Authoritative, ordered collection of incidents. Newest first, guarded by
/// a reader-writer lock, optionally mirrored to a JSON file on every add.
///
/// Persistence is best-effort: the in-memory collection is authoritative for
/// the running process, and load/save failures are absorbed after logging.
pub struct IncidentStore {
    items: RwLock<Vec<Incident>>,
    path: PathBuf,
    persist: bool,
}

impl IncidentStore {
    pub fn open(path: impl Into<PathBuf>, persist: bool) -> Self {
        let path = path.into();
        let mut items = Vec::new();

        if persist {
            if let Some(parent) = path.parent() {
                if let Err(e) = fs::create_dir_all(parent) {
                    warn!("Could not create store directory {:?}: {}", parent, e);
                }
            }
            items = load(&path);
        }

        Self {
            items: RwLock::new(items),
            path,
            persist,
        }
    }

    /// Prepend an already-validated incident. The store trusts its input;
    /// invariant checks happen in `Incident::build` before this point.
    pub fn add(&self, incident: Incident) {
        let mut items = self.items.write().expect("incident store lock poisoned");
        items.insert(0, incident);
        if self.persist {
            // Full rewrite under the write lock, so the file always matches
            // the in-memory order.
            if let Err(e) = save(&self.path, &items) {
                warn!("Failed to persist incidents to {:?}: {}", self.path, e);
            }
        }
    }

    /// Snapshot copy, newest first. Safe for the caller to retain or mutate.
    pub fn list(&self) -> Vec<Incident> {
        self.items
            .read()
            .expect("incident store lock poisoned")
            .clone()
    }

    pub fn len(&self) -> usize {
        self.items
            .read()
            .expect("incident store lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn load(path: &Path) -> Vec<Incident> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            // Usually just a first run with no file yet.
            debug!("No incident file at {:?}: {}", path, e);
            return Vec::new();
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(items) => items,
        Err(e) => {
            warn!("Ignoring malformed incident file {:?}: {}", path, e);
            Vec::new()
        }
    }
}

fn save(path: &Path, items: &[Incident]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json)?;
    Ok(())
}
