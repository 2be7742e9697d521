//! Everything needed to declare styles and objects and plot them.
//!
//! ```rust
//! use qplot::prelude::*;
//! ```

pub use crate::{
    Arg, Args, Canvas, Draw, Drawn, PlotError, PlotObject, Qplot, Recorder, Session, Style,
    StyleVariant, Transport, UnsupportedPolicy,
};
