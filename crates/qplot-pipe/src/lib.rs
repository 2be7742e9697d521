//! Backend sessions for qplot.
//!
//! A [`Session`] is the live connection to one backend instance (a gnuplot or
//! python process, or an in-memory [`Recorder`]). Sessions are produced by a
//! [`Transport`] and are meant to be short-lived: the engine opens one, writes
//! a single plot's worth of protocol text into it, and closes it.
//!
//! The textual protocol is opaque here. Everything is written as bytes.

pub mod memory;
pub mod platform;
pub mod process;
pub mod session;
pub mod transport;

pub use memory::{MemoryChannel, Recorder};
pub use platform::{gnuplot, python, GNUPLOT_ENV, PYTHON_ENV};
pub use process::{ProcessChannel, ProcessTransport};
pub use session::Session;
pub use transport::{Channel, Transport, TransportError};
