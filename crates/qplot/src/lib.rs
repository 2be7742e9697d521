//! # qplot - Typed Style Composition for Plotting Backends
//!
//! qplot lets one call mix *styles* and *objects*. Every object is routed to
//! whichever style is currently selected for its type:
//!
//! - **Canvas styles** (output file, terminal size, palette) write to the
//!   backend as soon as they are reached.
//! - **Object styles** (heat map, contour plot, line plot) are remembered per
//!   object type and outlive the call that selected them.
//! - **Objects** are drawn by the style remembered for their type.
//!
//! Arguments given at construction form the *header*: their output is
//! captured once and replayed before every later call. Each call then gets a
//! fresh backend session, so nothing the backend remembers leaks from one
//! plot into the next.
//!
//! ## Quick Start
//!
//! ```rust
//! use qplot::prelude::*;
//! use std::io::{self, Write};
//!
//! #[derive(PlotObject)]
//! #[plot(styles = SeriesStyles)]
//! struct Series(Vec<f64>);
//!
//! #[derive(Clone, Style)]
//! #[style(supports(Series))]
//! struct Lines;
//!
//! impl Draw<Series> for Lines {
//!     fn draw(&self, session: &mut Session, series: &Series) -> io::Result<Drawn> {
//!         writeln!(session, "plot '-' with lines")?;
//!         for (i, y) in series.0.iter().enumerate() {
//!             writeln!(session, "{} {}", i, y)?;
//!         }
//!         writeln!(session, "e")?;
//!         Ok(Drawn::Rendered)
//!     }
//! }
//!
//! #[derive(StyleVariant)]
//! enum SeriesStyles {
//!     Lines(Lines),
//! }
//!
//! #[derive(Style)]
//! struct Title(&'static str);
//!
//! impl Canvas for Title {
//!     fn apply(&self, session: &mut Session) -> io::Result<()> {
//!         writeln!(session, "set title '{}'", self.0)
//!     }
//! }
//!
//! # fn main() -> Result<(), qplot::PlotError> {
//! let recorder = Recorder::new();
//! let mut qplot = Qplot::new(recorder.clone(), (Title("demo"), Lines))?;
//!
//! qplot.plot((Series(vec![0.5, 1.5]),))?;
//!
//! assert_eq!(
//!     recorder.last().unwrap(),
//!     "set title 'demo'\nplot '-' with lines\n0 0.5\n1 1.5\ne\n"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Crates
//!
//! | Crate | Contents |
//! |-------|----------|
//! | `qplot-pipe` | [`Transport`], [`Session`], process and in-memory backends |
//! | `qplot-dispatch` | style traits, classification, [`StyleStore`], [`run`] |
//! | `qplot-macros` | the `Style`, `PlotObject` and `StyleVariant` derives |
//!
//! This crate re-exports all three and adds the [`Qplot`] engine.

// Lets the derives' `::qplot::` paths resolve inside this crate's own tests.
extern crate self as qplot;

mod engine;
mod error;

pub mod prelude;

pub use engine::{Qplot, QplotBuilder};
pub use error::PlotError;

// Dispatch layer
pub use qplot_dispatch::{
    apply_canvas, dispatch, kind_of, run, update, Arg, ArgKind, Args, Canvas, Command, Dispatch,
    DispatchError, DispatchOptions, Draw, Drawn, ObjectKey, ObjectStyle, Outcome, PlotObject,
    Report, Select, Step, StyleStore, StyleVariant, Supports, UnsupportedPolicy, Visit,
};

// Transport layer
pub use qplot_pipe::{
    gnuplot, python, Channel, MemoryChannel, ProcessChannel, ProcessTransport, Recorder, Session,
    Transport, TransportError, GNUPLOT_ENV, PYTHON_ENV,
};

// Derive macros
pub use qplot_macros::{PlotObject, Style, StyleVariant};
