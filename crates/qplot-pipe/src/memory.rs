//! In-memory transport.
//!
//! [`Recorder`] stands in for a backend process in tests and dry runs. Each
//! opened session gets its own buffer; closing the session appends that buffer
//! to the recorder's transcript list, so every closed session is one entry.

use crate::session::Session;
use crate::transport::{Channel, Transport, TransportError};
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

#[derive(Debug, Default)]
struct Tape {
    opened: usize,
    closed: usize,
    transcripts: Vec<Vec<u8>>,
}

/// Records every session it opens.
///
/// Clones share the same tape, so a test can hand one clone to the engine and
/// inspect another.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    tape: Rc<RefCell<Tape>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions opened so far.
    pub fn opened(&self) -> usize {
        self.tape.borrow().opened
    }

    /// Number of sessions closed so far.
    pub fn closed(&self) -> usize {
        self.tape.borrow().closed
    }

    /// Output of every closed session, oldest first.
    pub fn transcripts(&self) -> Vec<String> {
        self.tape
            .borrow()
            .transcripts
            .iter()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .collect()
    }

    pub fn raw_transcripts(&self) -> Vec<Vec<u8>> {
        self.tape.borrow().transcripts.clone()
    }

    /// Output of the most recently closed session.
    pub fn last(&self) -> Option<String> {
        self.tape
            .borrow()
            .transcripts
            .last()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl Transport for Recorder {
    fn open(&self) -> Result<Session, TransportError> {
        self.tape.borrow_mut().opened += 1;
        Ok(Session::new(MemoryChannel {
            buffer: Vec::new(),
            tape: Rc::clone(&self.tape),
        }))
    }
}

pub struct MemoryChannel {
    buffer: Vec<u8>,
    tape: Rc<RefCell<Tape>>,
}

impl Write for MemoryChannel {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        log::trace!("recorded {} bytes", buf.len());
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Channel for MemoryChannel {
    fn close(self: Box<Self>) -> Result<(), TransportError> {
        let mut tape = self.tape.borrow_mut();
        tape.closed += 1;
        tape.transcripts.push(self.buffer);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_open_and_close() {
        let recorder = Recorder::new();
        let first = recorder.open().unwrap();
        let second = recorder.open().unwrap();
        assert_eq!(recorder.opened(), 2);
        assert_eq!(recorder.closed(), 0);

        first.close().unwrap();
        second.close().unwrap();
        assert_eq!(recorder.closed(), 2);
        assert_eq!(recorder.transcripts(), vec![String::new(), String::new()]);
    }

    #[test]
    fn test_each_session_is_separate_transcript() {
        let recorder = Recorder::new();

        let mut session = recorder.open().unwrap();
        session.write_all(b"one").unwrap();
        session.close().unwrap();

        let mut session = recorder.open().unwrap();
        session.write_all(b"two").unwrap();
        session.close().unwrap();

        assert_eq!(recorder.transcripts(), vec!["one", "two"]);
        assert_eq!(recorder.raw_transcripts()[1], b"two");
        assert_eq!(recorder.last().as_deref(), Some("two"));
    }

    #[test]
    fn test_dropped_session_is_not_recorded() {
        let recorder = Recorder::new();
        let mut session = recorder.open().unwrap();
        session.write_all(b"lost").unwrap();
        drop(session);

        assert_eq!(recorder.opened(), 1);
        assert_eq!(recorder.closed(), 0);
        assert!(recorder.last().is_none());
    }
}
