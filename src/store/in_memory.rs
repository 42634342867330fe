//! InMemoryViewStore - HashMap-backed view store for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::HistoryError;
use crate::version::{VersionId, ViewVersion};
use crate::view::{NewView, View, ViewId};

use super::store::ViewStore;
use super::Versioned;

/// Internal stored representation of a view row.
struct StoredRow {
    bytes: Vec<u8>,
    version: u64,
}

#[derive(Default)]
struct Inner {
    /// View rows, JSON-encoded the way a backing table would hold them.
    views: HashMap<ViewId, StoredRow>,
    /// Versions per owning view, newest first.
    versions: HashMap<ViewId, Vec<ViewVersion>>,
    /// Owner index for version lookups by id.
    owners: HashMap<VersionId, ViewId>,
    /// One counter for both record kinds; ids start at 1.
    next_id: u64,
}

/// In-memory view store backed by `Arc<RwLock<..>>`.
///
/// Clone-friendly (cloning shares the same underlying storage).
#[derive(Clone)]
pub struct InMemoryViewStore {
    inner: Arc<RwLock<Inner>>,
}

impl Default for InMemoryViewStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryViewStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
        }
    }

    fn encode(view: &View) -> Result<Vec<u8>, HistoryError> {
        serde_json::to_vec(view).map_err(|e| HistoryError::Serde(e.to_string()))
    }

    fn decode(bytes: &[u8]) -> Result<View, HistoryError> {
        serde_json::from_slice(bytes).map_err(|e| HistoryError::Serde(e.to_string()))
    }
}

impl ViewStore for InMemoryViewStore {
    fn insert_view(&self, new: NewView) -> Result<Versioned<View>, HistoryError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| HistoryError::LockPoisoned("view insert"))?;

        inner.next_id += 1;
        let view = View {
            id: inner.next_id,
            name: new.name,
            content: new.content,
            history_enabled: new.history_enabled,
            current_version: None,
            parent: new.parent,
        };
        let bytes = Self::encode(&view)?;
        inner.views.insert(view.id, StoredRow { bytes, version: 1 });
        Ok(Versioned {
            data: view,
            version: 1,
        })
    }

    fn get_view(&self, id: ViewId) -> Result<Option<Versioned<View>>, HistoryError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| HistoryError::LockPoisoned("view read"))?;

        match inner.views.get(&id) {
            Some(row) => Ok(Some(Versioned {
                data: Self::decode(&row.bytes)?,
                version: row.version,
            })),
            None => Ok(None),
        }
    }

    fn save_view(
        &self,
        view: &View,
        expected_version: u64,
    ) -> Result<Versioned<View>, HistoryError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| HistoryError::LockPoisoned("view write"))?;

        let actual = match inner.views.get(&view.id) {
            Some(row) => row.version,
            None => return Err(HistoryError::ViewNotFound(view.id)),
        };
        if actual != expected_version {
            return Err(HistoryError::ConcurrentWrite {
                id: view.id,
                expected: expected_version,
                actual,
            });
        }

        let bytes = Self::encode(view)?;
        let new_version = actual + 1;
        inner.views.insert(
            view.id,
            StoredRow {
                bytes,
                version: new_version,
            },
        );
        Ok(Versioned {
            data: view.clone(),
            version: new_version,
        })
    }

    fn delete_view(&self, id: ViewId) -> Result<bool, HistoryError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| HistoryError::LockPoisoned("view delete"))?;

        if inner.views.remove(&id).is_none() {
            return Ok(false);
        }
        // Versions are owned by the view and go with it.
        if let Some(versions) = inner.versions.remove(&id) {
            for version in &versions {
                inner.owners.remove(&version.id);
            }
        }
        Ok(true)
    }

    fn find_views(&self, predicate: &dyn Fn(&View) -> bool) -> Result<Vec<View>, HistoryError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| HistoryError::LockPoisoned("view find"))?;

        let mut results = Vec::new();
        for row in inner.views.values() {
            let view = Self::decode(&row.bytes)?;
            if predicate(&view) {
                results.push(view);
            }
        }
        Ok(results)
    }

    fn create_version(
        &self,
        view: ViewId,
        content: String,
        name: Option<String>,
    ) -> Result<ViewVersion, HistoryError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| HistoryError::LockPoisoned("version create"))?;

        let owner = match inner.views.get(&view) {
            Some(row) => Self::decode(&row.bytes)?,
            None => return Err(HistoryError::ViewNotFound(view)),
        };

        // Sequence assignment and insert happen under the same write lock.
        let sequence = inner
            .versions
            .get(&view)
            .and_then(|versions| versions.first())
            .map(|newest| newest.sequence + 1)
            .unwrap_or(0);

        inner.next_id += 1;
        let version = ViewVersion {
            id: inner.next_id,
            view,
            sequence,
            name: name.unwrap_or_else(|| ViewVersion::default_name(&owner.name, sequence)),
            content,
        };
        inner.owners.insert(version.id, view);
        inner
            .versions
            .entry(view)
            .or_default()
            .insert(0, version.clone());
        Ok(version)
    }

    fn get_version(&self, id: VersionId) -> Result<Option<ViewVersion>, HistoryError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| HistoryError::LockPoisoned("version read"))?;

        let Some(owner) = inner.owners.get(&id) else {
            return Ok(None);
        };
        Ok(inner
            .versions
            .get(owner)
            .and_then(|versions| versions.iter().find(|v| v.id == id))
            .cloned())
    }

    fn versions_of(&self, view: ViewId) -> Result<Vec<ViewVersion>, HistoryError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| HistoryError::LockPoisoned("version read"))?;

        Ok(inner.versions.get(&view).cloned().unwrap_or_default())
    }
}
