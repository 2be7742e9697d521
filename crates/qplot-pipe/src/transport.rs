use crate::session::Session;
use std::io::{self, Read, Write};
use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

#[cfg(unix)]
use std::os::unix::io::RawFd;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to start backend `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("Backend `{0}` did not exit within {1:?}")]
    Timeout(String, Duration),
    #[error("Backend `{0}` failed with status {1}")]
    CommandFailed(String, ExitStatus),
}

/// A writable connection to a single backend instance.
///
/// A channel is owned by exactly one [`Session`]. Closing it signals end of
/// input to the backend and reaps it; after that the channel is gone.
pub trait Channel: Write {
    /// Flush pending bytes, end the backend's input, and wait for it.
    fn close(self: Box<Self>) -> Result<(), TransportError>;

    /// The backend's output stream, if it was captured.
    fn reader(&mut self) -> Option<&mut dyn Read> {
        None
    }

    /// Descriptor the backend's output can be read from.
    #[cfg(unix)]
    fn fd_r(&self) -> Option<RawFd> {
        None
    }

    /// Descriptor the backend's input is written to.
    #[cfg(unix)]
    fn fd_w(&self) -> Option<RawFd> {
        None
    }
}

/// Produces fresh sessions on demand.
///
/// Opening must be cheap and independent: the engine opens a new session
/// after every invocation.
pub trait Transport {
    fn open(&self) -> Result<Session, TransportError>;
}

impl<F> Transport for F
where
    F: Fn() -> Result<Session, TransportError>,
{
    fn open(&self) -> Result<Session, TransportError> {
        self()
    }
}
