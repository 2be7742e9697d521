//! The plotting engine and its session lifecycle.
//!
//! A [`Qplot`] is always in one of two states:
//!
//! | State | Meaning |
//! |-------|---------|
//! | idle | a fresh session is open (or will be opened on next use) |
//! | processing | the header has been replayed and arguments are being run |
//!
//! [`Qplot::plot`] is the only transition out of idle. Whatever happens
//! while processing, the session is closed and a new one opened before
//! `plot` returns.

use crate::error::PlotError;
use qplot_dispatch::{
    run, Args, Command, DispatchOptions, Report, StyleStore, UnsupportedPolicy,
};
use qplot_pipe::{Session, Transport, TransportError};
use std::io::Write;

/// Builder for [`Qplot`] with non-default dispatch options.
///
/// ```rust
/// use qplot::{Qplot, Recorder, UnsupportedPolicy};
///
/// let qplot = Qplot::builder(Recorder::new())
///     .on_unsupported(UnsupportedPolicy::Error)
///     .build()
///     .unwrap();
/// assert!(qplot.header().is_empty());
/// ```
pub struct QplotBuilder<T: Transport> {
    transport: T,
    options: DispatchOptions,
}

impl<T: Transport> QplotBuilder<T> {
    /// What to do when a selected style cannot draw an object.
    ///
    /// Defaults to [`UnsupportedPolicy::Warn`].
    pub fn on_unsupported(mut self, policy: UnsupportedPolicy) -> Self {
        self.options = self.options.on_unsupported(policy);
        self
    }

    pub fn options(mut self, options: DispatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Opens the first session. The engine starts with an empty header.
    pub fn build(self) -> Result<Qplot<T>, PlotError> {
        let session = self.transport.open()?;
        log::debug!("opened initial session {:?}", session);
        Ok(Qplot {
            transport: self.transport,
            session: Some(session),
            styles: StyleStore::new(),
            header: Vec::new(),
            options: self.options,
            invocations: 0,
            resets: 0,
        })
    }
}

/// Owns a backend transport, the style selections and the header.
///
/// The style store and header persist for the life of the engine. The
/// session lives for exactly one [`plot`](Qplot::plot) call.
pub struct Qplot<T: Transport> {
    transport: T,
    session: Option<Session>,
    styles: StyleStore,
    header: Vec<u8>,
    options: DispatchOptions,
    invocations: u64,
    resets: u64,
}

impl<T: Transport> Qplot<T> {
    /// Opens a session and captures `header` as the header.
    ///
    /// Canvas styles in `header` are written to the header buffer; object
    /// styles select defaults for their object types. Objects are drawn into
    /// the header too, which is rarely what you want.
    pub fn new<A: Args>(transport: T, header: A) -> Result<Self, PlotError> {
        let mut qplot = Self::builder(transport).build()?;
        qplot.add_to_header(header)?;
        Ok(qplot)
    }

    pub fn builder(transport: T) -> QplotBuilder<T> {
        QplotBuilder {
            transport,
            options: DispatchOptions::default(),
        }
    }

    /// Runs `args` with output captured, and appends the captured bytes to
    /// the header.
    ///
    /// On error nothing is appended, but style selections made before the
    /// failing argument stay in effect.
    pub fn add_to_header<A: Args>(&mut self, args: A) -> Result<Report, PlotError> {
        let commands = args.commands();
        let session = live(&mut self.session, &self.transport)?;
        let styles = &mut self.styles;
        let options = &self.options;

        let (result, captured) = session.capture(|s| run(s, styles, &commands, options));
        let report = result?;

        log::debug!(
            "header extended by {} byte(s) from {} argument(s)",
            captured.len(),
            commands.len()
        );
        self.header.extend_from_slice(&captured);
        Ok(report)
    }

    /// Plots `args`: replays the header, runs every argument left to right,
    /// then resets the session.
    ///
    /// The reset happens whether or not processing succeeded. If both fail,
    /// the processing error is returned and the reset error is logged.
    pub fn plot<A: Args>(&mut self, args: A) -> Result<Report, PlotError> {
        let commands = args.commands();
        self.invocations += 1;
        log::debug!("invocation {}: {:?}", self.invocations, commands);

        let processed = self.process(&commands);
        let reset = self.reset();

        match (processed, reset) {
            (Ok(report), Ok(())) => Ok(report),
            (Ok(_), Err(err)) => Err(err.into()),
            (Err(err), Ok(())) => Err(err),
            (Err(err), Err(reset_err)) => {
                log::warn!(
                    "session reset after failed invocation {} also failed: {}",
                    self.invocations,
                    reset_err
                );
                Err(err)
            }
        }
    }

    fn process(&mut self, commands: &[Command<'_>]) -> Result<Report, PlotError> {
        let session = live(&mut self.session, &self.transport)?;
        log::trace!("replaying {} header byte(s)", self.header.len());
        session.write_all(&self.header)?;
        Ok(run(session, &mut self.styles, commands, &self.options)?)
    }

    /// Closes the current session and opens the next one.
    ///
    /// Only the close result is returned. A failed open is logged and
    /// retried on next use of the session.
    fn reset(&mut self) -> Result<(), TransportError> {
        self.resets += 1;
        let closed = match self.session.take() {
            Some(session) => session.close(),
            None => Ok(()),
        };

        match self.transport.open() {
            Ok(session) => self.session = Some(session),
            Err(err) => log::warn!("could not open next session, retrying on next use: {}", err),
        }

        closed
    }

    /// Writes bytes straight into the live session, bypassing dispatch.
    ///
    /// They are sent ahead of the next call's header replay.
    pub fn write_raw(&mut self, bytes: &[u8]) -> Result<(), PlotError> {
        live(&mut self.session, &self.transport)?.write_all(bytes)?;
        Ok(())
    }

    /// The live session, e.g. for reading backend output through
    /// [`Session::reader`].
    pub fn session(&mut self) -> Result<&mut Session, PlotError> {
        Ok(live(&mut self.session, &self.transport)?)
    }

    pub fn header(&self) -> &[u8] {
        &self.header
    }

    pub fn styles(&self) -> &StyleStore {
        &self.styles
    }

    pub fn options(&self) -> &DispatchOptions {
        &self.options
    }

    /// Number of [`plot`](Qplot::plot) calls so far.
    pub fn invocations(&self) -> u64 {
        self.invocations
    }

    /// Number of session resets so far. Equal to `invocations()`.
    pub fn resets(&self) -> u64 {
        self.resets
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Closes the live session and reports how the backend exited.
    ///
    /// Dropping a `Qplot` does the same but can only log failures.
    pub fn close(mut self) -> Result<(), PlotError> {
        match self.session.take() {
            Some(session) => Ok(session.close()?),
            None => Ok(()),
        }
    }
}

impl<T: Transport> Drop for Qplot<T> {
    fn drop(&mut self) {
        if let Some(session) = self.session.take() {
            if let Err(err) = session.close() {
                log::warn!("backend session did not close cleanly: {}", err);
            }
        }
    }
}

/// The open session in `slot`, opening one through `transport` if needed.
fn live<'a, T: Transport>(
    slot: &'a mut Option<Session>,
    transport: &T,
) -> Result<&'a mut Session, TransportError> {
    let session = match slot.take() {
        Some(session) => session,
        None => {
            log::debug!("opening session");
            transport.open()?
        }
    };
    Ok(slot.insert(session))
}
