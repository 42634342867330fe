use serde::{Deserialize, Serialize};

use crate::view::{View, ViewId};

pub type VersionId = u64;

/// One immutable recorded version of a view's content.
///
/// Versions are append-only: created by the store, never updated, and only
/// deleted together with the owning view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewVersion {
    pub id: VersionId,
    /// Owning view. Immutable after creation.
    pub view: ViewId,
    /// Strictly increasing per owning view, starting at 0.
    pub sequence: u32,
    pub name: String,
    pub content: String,
}

impl ViewVersion {
    /// Whether this version is the one the owning view renders by default.
    ///
    /// Derived from the view's pointer on every call; never stored.
    pub fn is_current(&self, view: &View) -> bool {
        view.current_version == Some(self.id)
    }

    /// Label used when a version is created without an explicit name.
    pub(crate) fn default_name(view_name: &str, sequence: u32) -> String {
        format!("{} v{}", view_name, sequence)
    }
}
