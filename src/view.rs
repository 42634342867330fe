use serde::{Deserialize, Serialize};

use crate::version::VersionId;

pub type ViewId = u64;

/// A content-bearing view record whose markup can be version-tracked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub id: ViewId,
    pub name: String,
    /// The tracked markup payload. Denormalized copy of the current
    /// version's content once history is enabled; promotion keeps it in sync.
    pub content: String,
    pub history_enabled: bool,
    /// The version rendered by default. Not necessarily the newest one.
    pub current_version: Option<VersionId>,
    /// Structural inheritance reference. A view with children may not
    /// enable history.
    pub parent: Option<ViewId>,
}

/// Initial values for [`crate::ViewHistory::create`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NewView {
    pub name: String,
    pub content: String,
    pub history_enabled: bool,
    pub parent: Option<ViewId>,
}

/// Partial write-set for [`crate::ViewHistory::update`].
///
/// `None` fields are left untouched by the write. The current-version
/// pointer is deliberately absent: it only moves through version capture and
/// [`crate::ViewHistory::promote`], never through a caller write-set.
#[derive(Clone, Debug, Default)]
pub struct ViewChanges {
    pub name: Option<String>,
    pub content: Option<String>,
    pub history_enabled: Option<bool>,
}

impl ViewChanges {
    /// Write-set touching only the content field.
    pub fn content(content: impl Into<String>) -> Self {
        ViewChanges {
            content: Some(content.into()),
            ..ViewChanges::default()
        }
    }

    /// Whether this write-set can trigger version capture.
    pub(crate) fn touches_history(&self) -> bool {
        self.history_enabled.is_some() || self.content.is_some()
    }

    pub(crate) fn apply(self, view: &mut View) {
        if let Some(name) = self.name {
            view.name = name;
        }
        if let Some(content) = self.content {
            view.content = content;
        }
        if let Some(enabled) = self.history_enabled {
            view.history_enabled = enabled;
        }
    }
}
