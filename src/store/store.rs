//! ViewStore - abstract persistence for views and their versions.

use crate::error::HistoryError;
use crate::version::{VersionId, ViewVersion};
use crate::view::{NewView, View, ViewId};

use super::Versioned;

/// The transactional collaborator behind [`crate::ViewHistory`].
///
/// The store assigns record ids and computes version sequence numbers inside
/// the same critical section as the insert, so concurrent writers to one view
/// can never produce duplicate sequences. View rows carry a row version for
/// optimistic concurrency on saves.
pub trait ViewStore: Send + Sync {
    /// Persist a new view, assigning its id. The returned row version is 1.
    fn insert_view(&self, new: NewView) -> Result<Versioned<View>, HistoryError>;

    /// Get a view by id. Returns None if not found.
    fn get_view(&self, id: ViewId) -> Result<Option<Versioned<View>>, HistoryError>;

    /// Write back an existing view record. Fails with
    /// [`HistoryError::ConcurrentWrite`] when the row was saved by someone
    /// else since it was read at `expected_version`.
    fn save_view(
        &self,
        view: &View,
        expected_version: u64,
    ) -> Result<Versioned<View>, HistoryError>;

    /// Delete a view and every version it owns. Returns true if it existed.
    fn delete_view(&self, id: ViewId) -> Result<bool, HistoryError>;

    /// Find views matching a predicate.
    fn find_views(&self, predicate: &dyn Fn(&View) -> bool) -> Result<Vec<View>, HistoryError>;

    /// Append a version for `view`. Sequence is `previous max + 1`, starting
    /// at 0 for the first version. A missing `name` gets the
    /// `"<view name> v<sequence>"` label. Never mutates other versions.
    fn create_version(
        &self,
        view: ViewId,
        content: String,
        name: Option<String>,
    ) -> Result<ViewVersion, HistoryError>;

    /// Get a version by id. Returns None if not found.
    fn get_version(&self, id: VersionId) -> Result<Option<ViewVersion>, HistoryError>;

    /// All versions of `view`, newest first.
    fn versions_of(&self, view: ViewId) -> Result<Vec<ViewVersion>, HistoryError>;
}
