//! Plottable data and the gnuplot inline-data encoding.

use qplot::{PlotObject, Session};
use std::io::{self, Write};

/// A dense 2-D grid of integer samples, stored row-major.
#[derive(Debug, Clone, PartialEq, PlotObject)]
#[plot(styles = crate::styles::Scalar2d)]
pub struct Grid {
    rows: usize,
    cols: usize,
    values: Vec<i32>,
}

impl Grid {
    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> i32) -> Self {
        let mut values = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                values.push(f(i, j));
            }
        }
        Self { rows, cols, values }
    }

    /// `(i - rows/2)² - (j - cols/2)²`, truncated toward zero.
    pub fn saddle(rows: usize, cols: usize) -> Self {
        let ci = rows as f32 / 2.0;
        let cj = cols as f32 / 2.0;
        Self::from_fn(rows, cols, |i, j| {
            ((i as f32 - ci).powi(2) - (j as f32 - cj).powi(2)) as i32
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> Option<i32> {
        if i < self.rows && j < self.cols {
            self.values.get(i * self.cols + j).copied()
        } else {
            None
        }
    }

    /// `(i, j, value)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, i32)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(move |(k, &v)| (k / self.cols, k % self.cols, v))
    }
}

/// A 1-D sequence of samples, plotted against its index.
#[derive(Debug, Clone, PartialEq, PlotObject)]
#[plot(styles = crate::styles::Scalar1d)]
pub struct Series(pub Vec<f64>);

/// Sends `grid` as an inline `'-'` data block: one `i j value` line per
/// cell, terminated by `e`.
pub fn send_data(session: &mut Session, grid: &Grid) -> io::Result<()> {
    for (i, j, v) in grid.cells() {
        writeln!(session, "{} {} {}", i, j, v)?;
    }
    writeln!(session, "e")
}
