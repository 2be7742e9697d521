use qplot_dispatch::DispatchError;
use qplot_pipe::TransportError;
use std::io;
use thiserror::Error;

/// Errors returned by [`Qplot`](crate::Qplot) operations.
#[derive(Debug, Error)]
pub enum PlotError {
    /// An argument could not be dispatched.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// The backend could not be started or did not shut down cleanly.
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Failed to write to backend session: {0}")]
    Io(#[from] io::Error),
}

impl PlotError {
    /// True when the failure came from argument processing rather than the
    /// backend.
    pub fn is_dispatch(&self) -> bool {
        matches!(self, PlotError::Dispatch(_))
    }
}
