//! view_history - change-history tracking for content views.
//!
//! Views carry a markup payload. Once history is enabled for a view, every
//! content write is captured as an immutable [`ViewVersion`]; any stored
//! version can be promoted to "current" (the one rendering surfaces by
//! default), and each read can select the latest, the current, or a specific
//! version. Full snapshots only: no deltas, no branching.
//!
//! ## Example
//!
//! ```
//! use view_history::{InMemoryViewStore, NewView, ViewChanges, ViewHistory};
//!
//! # fn main() -> Result<(), view_history::HistoryError> {
//! let history = ViewHistory::new(InMemoryViewStore::new());
//!
//! let view = history.create(NewView {
//!     name: "landing page".to_string(),
//!     content: "<p>draft</p>".to_string(),
//!     history_enabled: true,
//!     parent: None,
//! })?;
//!
//! history.update(view.id, ViewChanges::content("<p>published</p>"))?;
//! assert_eq!(history.render_content(view.id, None)?, "<p>published</p>");
//! # Ok(())
//! # }
//! ```

mod error;
mod history;
mod selector;
mod store;
mod version;
mod view;

pub use error::HistoryError;
pub use history::ViewHistory;
pub use selector::VersionSelector;
pub use store::{InMemoryViewStore, Versioned, ViewStore};
pub use version::{VersionId, ViewVersion};
pub use view::{NewView, View, ViewChanges, ViewId};
