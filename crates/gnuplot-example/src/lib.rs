//! Driving gnuplot through qplot.
//!
//! [`data`] holds the plottable types, [`styles`] the gnuplot styles for them
//! and [`run_demo`] a worked session that renders one grid four ways.

pub mod data;
pub mod styles;

mod demo;

pub use demo::run_demo;
