//! The live connection used by one plot invocation.
//!
//! A [`Session`] forwards writes to its [`Channel`] unless a capture is in
//! progress, in which case the bytes land in a buffer instead. Captures are
//! how plot headers are recorded once and replayed before every invocation.

use crate::transport::{Channel, TransportError};
use std::fmt;
use std::io::{self, Read, Write};

#[cfg(unix)]
use std::os::unix::io::RawFd;

pub struct Session {
    channel: Box<dyn Channel>,
    capture: Option<Vec<u8>>,
    forwarded: u64,
}

impl Session {
    pub fn new<C: Channel + 'static>(channel: C) -> Self {
        Self {
            channel: Box::new(channel),
            capture: None,
            forwarded: 0,
        }
    }

    /// Runs `f` with all session output redirected into a fresh buffer.
    ///
    /// The previous sink is restored afterwards, whatever `f` returned. Nested
    /// captures restore the outer buffer, so the inner bytes are not seen by
    /// the outer capture.
    ///
    /// ```
    /// use std::io::Write;
    /// use qplot_pipe::{Recorder, Transport};
    ///
    /// let recorder = Recorder::new();
    /// let mut session = recorder.open().unwrap();
    ///
    /// let (_, header) = session.capture(|s| s.write_all(b"set terminal png\n"));
    /// session.write_all(b"plot x\n").unwrap();
    /// session.close().unwrap();
    ///
    /// assert_eq!(header, b"set terminal png\n");
    /// assert_eq!(recorder.last().as_deref(), Some("plot x\n"));
    /// ```
    pub fn capture<R>(&mut self, f: impl FnOnce(&mut Session) -> R) -> (R, Vec<u8>) {
        let outer = self.capture.replace(Vec::new());
        let result = f(self);
        let captured = std::mem::replace(&mut self.capture, outer).unwrap_or_default();
        (result, captured)
    }

    pub fn is_capturing(&self) -> bool {
        self.capture.is_some()
    }

    /// Bytes that reached the channel (captured bytes are not counted).
    pub fn forwarded(&self) -> u64 {
        self.forwarded
    }

    /// The backend's output stream, when the transport captured it.
    pub fn reader(&mut self) -> Option<&mut dyn Read> {
        self.channel.reader()
    }

    #[cfg(unix)]
    pub fn fd_r(&self) -> Option<RawFd> {
        self.channel.fd_r()
    }

    #[cfg(unix)]
    pub fn fd_w(&self) -> Option<RawFd> {
        self.channel.fd_w()
    }

    /// Ends the session: flushes and closes the channel.
    pub fn close(self) -> Result<(), TransportError> {
        log::debug!("closing session after {} bytes", self.forwarded);
        self.channel.close()
    }
}

impl Write for Session {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.capture.as_mut() {
            Some(buffer) => {
                buffer.extend_from_slice(buf);
                Ok(buf.len())
            }
            None => {
                let written = self.channel.write(buf)?;
                self.forwarded += written as u64;
                Ok(written)
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.capture.is_some() {
            return Ok(());
        }
        self.channel.flush()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("capturing", &self.capture.is_some())
            .field("forwarded", &self.forwarded)
            .finish()
    }
}
