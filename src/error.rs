use thiserror::Error;

/// Errors returned by operations that require an occupied tree or an
/// existing sort key.
///
/// Both failures are raised during descent, before any structural change,
/// so a tree that returns an error is exactly as it was before the call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The tree holds no values, so there is no extreme value to return
    /// or remove.
    #[error("empty binary search tree")]
    EmptyCollection,

    /// No node in the tree has the requested sort key.
    #[error("sort key not found in binary search tree")]
    KeyNotFound,
}
