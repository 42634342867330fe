use crate::version::VersionId;

/// Per-call directive choosing which content a read or render surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VersionSelector {
    /// The live stored content, i.e. the latest write. No version lookup.
    Latest,
    /// The owning view's current version, when history is enabled and at
    /// least one version exists.
    Current,
    /// A specific version by id. Ids that do not name one of the view's own
    /// versions fall back to the live content.
    Version(VersionId),
}

// Callers holding the untyped render directive of a request context can
// convert it directly: a boolean picks current-vs-latest, an integer names
// a version.

impl From<bool> for VersionSelector {
    fn from(render_current: bool) -> Self {
        if render_current {
            VersionSelector::Current
        } else {
            VersionSelector::Latest
        }
    }
}

impl From<VersionId> for VersionSelector {
    fn from(id: VersionId) -> Self {
        VersionSelector::Version(id)
    }
}
