//! Error types for style resolution and dispatch.

use std::io;
use thiserror::Error;

/// Errors raised while routing arguments to styles.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// An object was plotted before any style was selected for its type.
    #[error("no style selected for object type `{object}`")]
    UnresolvedStyle { object: &'static str },

    /// A store slot held a value of the wrong variant type. The store only
    /// writes slots through their own object type, so this indicates a bug.
    #[error("style slot for `{object}` does not hold a `{expected}`")]
    StyleMismatch {
        object: &'static str,
        expected: &'static str,
    },

    /// The selected style cannot draw the object, and the dispatch options
    /// asked for that to be an error.
    #[error("style `{style}` cannot draw `{object}`")]
    Unsupported {
        object: &'static str,
        style: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for dispatch operations.
pub type Result<T> = std::result::Result<T, DispatchError>;
