//! Persistence seam for views and their version rows.

mod in_memory;
mod store;

pub use in_memory::InMemoryViewStore;
pub use store::ViewStore;

/// A versioned wrapper around a stored view row for optimistic concurrency
/// control. The row version counts saves and is unrelated to the view's
/// content versions.
#[derive(Debug, Clone)]
pub struct Versioned<T> {
    pub data: T,
    pub version: u64,
}
