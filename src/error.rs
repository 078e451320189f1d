use thiserror::Error;

/// The ways a keyed access into an [`AssociativeArray`](crate::AssociativeArray) can fail.
///
/// The two kinds are kept apart on purpose: callers routinely branch on whether the key
/// they handed in was null or merely absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// A null key was handed to an operation that requires one (`set`, `get`, `get_mut`).
    #[error("key cannot be null")]
    NullKey,
    /// A non-null key does not match any stored entry.
    #[error("key not found")]
    KeyNotFound,
}

pub type Result<T> = core::result::Result<T, Error>;
