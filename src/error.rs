//! Errors reported by lookups on a [`Tree`][crate::Tree].

/// The ways a lookup can fail. Inserting and removing never fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No node in the tree holds the requested key.
    #[error("key not found")]
    KeyNotFound,
}

/// Shorthand for results whose error is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
