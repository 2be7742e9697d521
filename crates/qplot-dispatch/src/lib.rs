//! Type-directed routing of plot objects to styles.
//!
//! `qplot-dispatch` decides, for each argument of a plot call, whether it is a
//! canvas style, an object style or a plain object, and acts on it:
//!
//! - Canvas styles write to the session straight away.
//! - Object styles are remembered in a [`StyleStore`], once per object type
//!   they support.
//! - Plain objects are drawn by whichever style is stored for their type.
//!
//! # Declaring styles and objects
//!
//! ```rust
//! use qplot_dispatch::*;
//! use qplot_pipe::{Recorder, Session, Transport};
//! use std::io::{self, Write};
//!
//! struct Samples(Vec<f64>);
//!
//! #[derive(Clone)]
//! struct Points;
//!
//! enum SampleStyles {
//!     Points(Points),
//! }
//!
//! impl Draw<Samples> for Points {
//!     fn draw(&self, session: &mut Session, samples: &Samples) -> io::Result<Drawn> {
//!         writeln!(session, "plot '-' with points")?;
//!         for v in &samples.0 {
//!             writeln!(session, "{}", v)?;
//!         }
//!         writeln!(session, "e")?;
//!         Ok(Drawn::Rendered)
//!     }
//! }
//!
//! impl ObjectStyle for Points {
//!     type Supports = (Samples,);
//! }
//!
//! impl PlotObject for Samples {
//!     type Styles = SampleStyles;
//! }
//!
//! impl From<Points> for SampleStyles {
//!     fn from(p: Points) -> Self {
//!         SampleStyles::Points(p)
//!     }
//! }
//!
//! impl StyleVariant for SampleStyles {
//!     fn alternative(&self) -> &'static str {
//!         "Points"
//!     }
//! }
//!
//! impl Visit<Samples> for SampleStyles {
//!     fn visit(&self, session: &mut Session, samples: &Samples) -> io::Result<Drawn> {
//!         match self {
//!             SampleStyles::Points(p) => p.draw(session, samples),
//!         }
//!     }
//! }
//!
//! impl Arg for Points {
//!     fn command(&self) -> Command<'_> {
//!         Command::Select(self)
//!     }
//! }
//!
//! impl Arg for Samples {
//!     fn command(&self) -> Command<'_> {
//!         Command::Object(self)
//!     }
//! }
//!
//! let recorder = Recorder::new();
//! let mut session = recorder.open().unwrap();
//! let mut store = StyleStore::new();
//! let samples = Samples(vec![1.0, 2.0]);
//!
//! let report = run(
//!     &mut session,
//!     &mut store,
//!     &(Points, &samples).commands(),
//!     &DispatchOptions::default(),
//! )
//! .unwrap();
//! session.close().unwrap();
//!
//! assert_eq!(report.drawn(), vec![("Samples", "Points")]);
//! assert_eq!(recorder.last().unwrap(), "plot '-' with points\n1\n2\ne\n");
//! ```
//!
//! The `qplot` crate's derives generate everything from `ObjectStyle` down.

mod classify;
mod error;
mod report;
mod resolve;
mod store;
mod style;

#[cfg(test)]
mod fixtures;

pub use classify::{kind_of, Arg, ArgKind, Args, Command, Dispatch, Select};
pub use error::{DispatchError, Result};
pub use report::{Report, Step};
pub use resolve::{
    apply_canvas, dispatch, run, update, DispatchOptions, Outcome, UnsupportedPolicy,
};
pub use store::{ObjectKey, StyleStore};
pub use style::{Canvas, Draw, Drawn, ObjectStyle, PlotObject, StyleVariant, Supports, Visit};
