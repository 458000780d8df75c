use thiserror::Error;

/// Errors reported by [`Tree`][crate::Tree] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The tree has no root so there is nothing to search.
    #[error("tree is empty, cannot be searched")]
    EmptyTree,
}
