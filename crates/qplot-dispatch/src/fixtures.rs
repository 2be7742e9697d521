//! Hand-written styles and objects shared by the unit tests.

use crate::classify::{Arg, Command};
use crate::style::{Canvas, Draw, Drawn, ObjectStyle, PlotObject, StyleVariant, Visit};
use qplot_pipe::Session;
use std::io::{self, Write};

pub struct Grid(pub Vec<Vec<i32>>);

pub struct Series(pub Vec<f64>);

pub fn grid(rows: usize, cols: usize) -> Grid {
    Grid(vec![vec![0; cols]; rows])
}

pub fn series(values: &[f64]) -> Series {
    Series(values.to_vec())
}

#[derive(Debug, Clone, Default)]
pub struct HeatMap;

#[derive(Debug, Clone, Default)]
pub struct Contour;

/// Selected for both grids and series, but only draws series.
#[derive(Debug, Clone, Default)]
pub struct Lines;

pub struct Title(pub &'static str);

pub enum Surface {
    HeatMap(HeatMap),
    Contour(Contour),
    Lines(Lines),
}

pub enum Trace {
    Lines(Lines),
}

impl Canvas for Title {
    fn apply(&self, session: &mut Session) -> io::Result<()> {
        writeln!(session, "set title '{}'", self.0)
    }
}

impl Draw<Grid> for HeatMap {
    fn draw(&self, session: &mut Session, grid: &Grid) -> io::Result<Drawn> {
        let cols = grid.0.first().map_or(0, Vec::len);
        writeln!(session, "heatmap {}x{}", grid.0.len(), cols)?;
        Ok(Drawn::Rendered)
    }
}

impl Draw<Grid> for Contour {
    fn draw(&self, session: &mut Session, grid: &Grid) -> io::Result<Drawn> {
        let cols = grid.0.first().map_or(0, Vec::len);
        writeln!(session, "contour {}x{}", grid.0.len(), cols)?;
        Ok(Drawn::Rendered)
    }
}

impl Draw<Grid> for Lines {}

impl Draw<Series> for Lines {
    fn draw(&self, session: &mut Session, series: &Series) -> io::Result<Drawn> {
        writeln!(session, "lines {}", series.0.len())?;
        Ok(Drawn::Rendered)
    }
}

impl ObjectStyle for HeatMap {
    type Supports = (Grid,);
}

impl ObjectStyle for Contour {
    type Supports = (Grid,);
}

impl ObjectStyle for Lines {
    type Supports = (Grid, Series);
}

impl PlotObject for Grid {
    type Styles = Surface;
}

impl PlotObject for Series {
    type Styles = Trace;
}

impl From<HeatMap> for Surface {
    fn from(style: HeatMap) -> Self {
        Surface::HeatMap(style)
    }
}

impl From<Contour> for Surface {
    fn from(style: Contour) -> Self {
        Surface::Contour(style)
    }
}

impl From<Lines> for Surface {
    fn from(style: Lines) -> Self {
        Surface::Lines(style)
    }
}

impl From<Lines> for Trace {
    fn from(style: Lines) -> Self {
        Trace::Lines(style)
    }
}

impl StyleVariant for Surface {
    fn alternative(&self) -> &'static str {
        match self {
            Surface::HeatMap(_) => "HeatMap",
            Surface::Contour(_) => "Contour",
            Surface::Lines(_) => "Lines",
        }
    }
}

impl StyleVariant for Trace {
    fn alternative(&self) -> &'static str {
        "Lines"
    }
}

impl Visit<Grid> for Surface {
    fn visit(&self, session: &mut Session, grid: &Grid) -> io::Result<Drawn> {
        match self {
            Surface::HeatMap(style) => style.draw(session, grid),
            Surface::Contour(style) => style.draw(session, grid),
            Surface::Lines(style) => style.draw(session, grid),
        }
    }
}

impl Visit<Series> for Trace {
    fn visit(&self, session: &mut Session, series: &Series) -> io::Result<Drawn> {
        match self {
            Trace::Lines(style) => style.draw(session, series),
        }
    }
}

impl Arg for Title {
    fn command(&self) -> Command<'_> {
        Command::Canvas(self)
    }
}

impl Arg for HeatMap {
    fn command(&self) -> Command<'_> {
        Command::Select(self)
    }
}

impl Arg for Contour {
    fn command(&self) -> Command<'_> {
        Command::Select(self)
    }
}

impl Arg for Lines {
    fn command(&self) -> Command<'_> {
        Command::Select(self)
    }
}

impl Arg for Grid {
    fn command(&self) -> Command<'_> {
        Command::Object(self)
    }
}

impl Arg for Series {
    fn command(&self) -> Command<'_> {
        Command::Object(self)
    }
}
