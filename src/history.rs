//! ViewHistory - the version-tracking service over a [`ViewStore`].

use tracing::debug;

use crate::error::HistoryError;
use crate::selector::VersionSelector;
use crate::store::{Versioned, ViewStore};
use crate::version::VersionId;
use crate::view::{NewView, View, ViewChanges, ViewId};

/// Version-tracking front door for view records.
///
/// All writes go through here so that content changes on history-enabled
/// views are captured as versions; reads resolve the per-call
/// [`VersionSelector`]. The current-version pointer only moves through
/// version capture and [`Self::promote`].
pub struct ViewHistory<S> {
    store: S,
}

impl<S: ViewStore> ViewHistory<S> {
    pub fn new(store: S) -> Self {
        ViewHistory { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persist a new view. When history is enabled from the start, the
    /// persisted content becomes version 0 and is promoted to current.
    pub fn create(&self, new: NewView) -> Result<View, HistoryError> {
        let Versioned {
            data: mut view,
            version: row_version,
        } = self.store.insert_view(new)?;

        if view.history_enabled {
            let version = self
                .store
                .create_version(view.id, view.content.clone(), None)?;
            debug!(
                view = view.id,
                version = version.id,
                "captured initial version on create"
            );
            view.current_version = Some(version.id);
            self.store.save_view(&view, row_version)?;
        }
        Ok(view)
    }

    /// Apply a write-set to a view.
    ///
    /// The public write path: validation first, then the store write, then
    /// version capture when the write-set touched `content` or
    /// `history_enabled` and the view now has history enabled. The captured
    /// version is always both newest and current.
    pub fn update(&self, id: ViewId, changes: ViewChanges) -> Result<View, HistoryError> {
        self.write(id, changes, None)
    }

    /// Toggle history tracking.
    ///
    /// Enabling is validated against structural children and captures a
    /// version of the stored content. Disabling an enabled view is rejected;
    /// there is no path back to an untracked view.
    pub fn set_history_enabled(&self, id: ViewId, enabled: bool) -> Result<View, HistoryError> {
        self.write(
            id,
            ViewChanges {
                history_enabled: Some(enabled),
                ..ViewChanges::default()
            },
            None,
        )
    }

    /// Make `version_id` the owning view's current version.
    ///
    /// Promoting the newest version only moves the pointer. Promoting an
    /// older one appends a fresh version carrying the promoted content and
    /// points at that, so history stays append-only.
    pub fn promote(&self, version_id: VersionId) -> Result<View, HistoryError> {
        let version = self
            .store
            .get_version(version_id)?
            .ok_or(HistoryError::VersionNotFound(version_id))?;
        let view = self
            .store
            .get_view(version.view)?
            .ok_or(HistoryError::OrphanVersion {
                version: version.id,
                view: version.view,
            })?
            .data;

        let newest = self.store.versions_of(view.id)?.into_iter().next();
        if newest.is_some_and(|n| n.id == version.id) {
            debug!(view = view.id, version = version.id, "promoted newest version");
            self.write(view.id, ViewChanges::default(), Some(version.id))
        } else {
            let copy = self
                .store
                .create_version(view.id, version.content.clone(), None)?;
            debug!(
                view = view.id,
                promoted = version.id,
                copy = copy.id,
                "promoted older version as a fresh copy"
            );
            self.write(
                view.id,
                ViewChanges {
                    content: Some(version.content),
                    ..ViewChanges::default()
                },
                Some(copy.id),
            )
        }
    }

    /// Resolve the content a read surfaces.
    ///
    /// An absent selector returns the live stored content, exactly like a
    /// read that never heard of versioning. When history is disabled or the
    /// view has no versions, the live content wins regardless of selector.
    pub fn read_content(
        &self,
        id: ViewId,
        selector: Option<VersionSelector>,
    ) -> Result<String, HistoryError> {
        let view = self
            .store
            .get_view(id)?
            .ok_or(HistoryError::ViewNotFound(id))?
            .data;

        if !view.history_enabled {
            return Ok(view.content);
        }
        match selector.unwrap_or(VersionSelector::Latest) {
            VersionSelector::Latest => Ok(view.content),
            VersionSelector::Current => {
                let current = match view.current_version {
                    Some(version_id) => self
                        .store
                        .get_version(version_id)?
                        .filter(|v| v.view == view.id),
                    None => None,
                };
                Ok(current.map_or(view.content, |v| v.content))
            }
            VersionSelector::Version(version_id) => {
                // Foreign or missing ids are not an error; the live content
                // stands in.
                let found = self
                    .store
                    .get_version(version_id)?
                    .filter(|v| v.view == view.id);
                Ok(found.map_or(view.content, |v| v.content))
            }
        }
    }

    /// Rendering entry point.
    ///
    /// Same as [`Self::read_content`], except an absent selector defaults to
    /// the current version: rendering prefers the current version over the
    /// latest live content. An explicitly supplied selector is honored
    /// unchanged.
    pub fn render_content(
        &self,
        id: ViewId,
        selector: Option<VersionSelector>,
    ) -> Result<String, HistoryError> {
        self.read_content(id, Some(selector.unwrap_or(VersionSelector::Current)))
    }

    /// Shared write path. `promote_to` marks the internal history-producing
    /// write: it moves the current pointer and must not capture another
    /// version. The signal is scoped to this one call, never ambient state,
    /// and only [`Self::promote`] supplies it.
    fn write(
        &self,
        id: ViewId,
        changes: ViewChanges,
        promote_to: Option<VersionId>,
    ) -> Result<View, HistoryError> {
        let Versioned {
            data: mut view,
            version: row_version,
        } = self
            .store
            .get_view(id)?
            .ok_or(HistoryError::ViewNotFound(id))?;

        match changes.history_enabled {
            Some(true) => self.check_enable(&view)?,
            Some(false) if view.history_enabled => {
                debug!(view = id, "rejected history disable");
                return Err(HistoryError::Validation(
                    "history cannot be disabled once enabled".to_string(),
                ));
            }
            _ => {}
        }

        let capture = promote_to.is_none() && changes.touches_history();
        changes.apply(&mut view);
        if let Some(version_id) = promote_to {
            view.current_version = Some(version_id);
        }
        let saved = self.store.save_view(&view, row_version)?;

        if capture && view.history_enabled {
            let version = self
                .store
                .create_version(view.id, view.content.clone(), None)?;
            debug!(
                view = view.id,
                version = version.id,
                sequence = version.sequence,
                "captured version"
            );
            view.current_version = Some(version.id);
            self.store.save_view(&view, saved.version)?;
        }
        Ok(view)
    }

    /// A view with structural children may never enable history.
    fn check_enable(&self, view: &View) -> Result<(), HistoryError> {
        let children = self
            .store
            .find_views(&|candidate| candidate.parent == Some(view.id))?;
        if !children.is_empty() {
            debug!(
                view = view.id,
                children = children.len(),
                "rejected history enable"
            );
            return Err(HistoryError::Validation(format!(
                "cannot enable history for view {}: {} structurally derived view(s) exist",
                view.id,
                children.len()
            )));
        }
        Ok(())
    }
}
