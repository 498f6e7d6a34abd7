use thiserror::Error;

/// Reasons the in-memory tree refuses a constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// The views taking part in the constraint live in different trees.
    #[error("views `{first}` and `{second}` share no common ancestor")]
    NoCommonAncestor {
        /// Name of the first view.
        first: String,
        /// Name of the second view.
        second: String,
    },
    /// A view referenced by the constraint no longer exists.
    #[error("a view referenced by the constraint was dropped")]
    ViewDropped,
}
