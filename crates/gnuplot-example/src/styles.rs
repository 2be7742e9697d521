//! gnuplot styles.
//!
//! Object styles:
//!
//! | Style | Draws | As |
//! |-------|-------|----|
//! | [`HeatMap`] | [`Grid`] | image |
//! | [`NumberGrid`] | [`Grid`] | image with each value printed on its cell |
//! | [`ContourPlot`] | [`Grid`] | surface with contour lines |
//! | [`LinePlot`] | [`Series`] | lines against the sample index |
//!
//! Canvas styles: [`Header`], [`Filename`], [`ImageSize`], [`Colours`].

use crate::data::{send_data, Grid, Series};
use qplot::{Canvas, Draw, Drawn, Session, Style, StyleVariant};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, Style)]
#[style(supports(Grid))]
pub struct HeatMap;

impl Draw<Grid> for HeatMap {
    fn draw(&self, session: &mut Session, grid: &Grid) -> io::Result<Drawn> {
        writeln!(session, "plot '-' using 1:2:3 with image")?;
        send_data(session, grid)?;
        Ok(Drawn::Rendered)
    }
}

#[derive(Debug, Clone, Copy, Default, Style)]
#[style(supports(Grid))]
pub struct NumberGrid;

impl Draw<Grid> for NumberGrid {
    fn draw(&self, session: &mut Session, grid: &Grid) -> io::Result<Drawn> {
        writeln!(
            session,
            "plot '-' using 1:2:3 with image, '-' using 1:2:3 with labels font \"PTMono,8\""
        )?;
        // One data block per plot clause.
        send_data(session, grid)?;
        send_data(session, grid)?;
        Ok(Drawn::Rendered)
    }
}

#[derive(Debug, Clone, Copy, Default, Style)]
#[style(supports(Grid))]
pub struct ContourPlot;

impl Draw<Grid> for ContourPlot {
    fn draw(&self, session: &mut Session, grid: &Grid) -> io::Result<Drawn> {
        writeln!(session, "set dgrid3d {}, {}", grid.rows(), grid.cols())?;
        writeln!(session, "set contour surface")?;
        writeln!(
            session,
            "splot '-' using 1:2:3 with lines linetype 2 linewidth 1"
        )?;
        send_data(session, grid)?;
        writeln!(session, "unset contour")?;
        writeln!(session, "unset dgrid3d")?;
        Ok(Drawn::Rendered)
    }
}

#[derive(Debug, Clone, Copy, Default, Style)]
#[style(supports(Series))]
pub struct LinePlot;

impl Draw<Series> for LinePlot {
    fn draw(&self, session: &mut Session, series: &Series) -> io::Result<Drawn> {
        writeln!(session, "plot '-' using 1:2 with lines")?;
        for (i, y) in series.0.iter().enumerate() {
            writeln!(session, "{} {}", i, y)?;
        }
        writeln!(session, "e")?;
        Ok(Drawn::Rendered)
    }
}

/// Styles legal for [`Grid`].
#[derive(Debug, Clone, StyleVariant)]
pub enum Scalar2d {
    HeatMap(HeatMap),
    NumberGrid(NumberGrid),
    Contour(ContourPlot),
}

/// Styles legal for [`Series`].
#[derive(Debug, Clone, StyleVariant)]
pub enum Scalar1d {
    Lines(LinePlot),
}

// ============================================================================
// Canvas styles
// ============================================================================

/// PNG terminal at 640x480, writing to `output`.
#[derive(Debug, Clone, Style)]
pub struct Header {
    output: PathBuf,
}

impl Header {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new("output.png")
    }
}

impl Canvas for Header {
    fn apply(&self, session: &mut Session) -> io::Result<()> {
        writeln!(session, "set terminal png size 640, 480")?;
        writeln!(session, "set output {}", quoted(&self.output.display().to_string()))
    }
}

/// Output file; `.png` is appended to the stem.
#[derive(Debug, Clone, Style)]
pub struct Filename {
    stem: PathBuf,
}

impl Filename {
    pub fn new(stem: impl Into<PathBuf>) -> Self {
        Self { stem: stem.into() }
    }
}

impl Canvas for Filename {
    fn apply(&self, session: &mut Session) -> io::Result<()> {
        let path = format!("{}.png", self.stem.display());
        writeln!(session, "set output {}", quoted(&path))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Style)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for ImageSize {
    fn default() -> Self {
        Self::new(640, 480)
    }
}

impl Canvas for ImageSize {
    fn apply(&self, session: &mut Session) -> io::Result<()> {
        writeln!(
            session,
            "set terminal png size {}, {}",
            self.width, self.height
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    Ocean,
    #[default]
    Rainbow,
    Hot,
}

impl Palette {
    /// gnuplot `rgbformulae` indices for the red, green and blue channels.
    pub fn formulae(self) -> (u8, u8, u8) {
        match self {
            Palette::Ocean => (23, 28, 3),
            Palette::Rainbow => (33, 13, 10),
            Palette::Hot => (21, 22, 23),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Style)]
pub struct Colours {
    pub palette: Palette,
}

impl Colours {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl Canvas for Colours {
    fn apply(&self, session: &mut Session) -> io::Result<()> {
        let (r, g, b) = self.palette.formulae();
        writeln!(session, "set palette rgbformulae {},{},{}", r, g, b)
    }
}

/// A gnuplot single-quoted string literal.
fn quoted(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use qplot::{kind_of, Arg, ArgKind, Recorder, Transport};

    fn render(f: impl FnOnce(&mut Session) -> io::Result<()>) -> String {
        let recorder = Recorder::new();
        let mut session = recorder.open().unwrap();
        f(&mut session).unwrap();
        session.close().unwrap();
        recorder.last().unwrap()
    }

    #[test]
    fn test_classification() {
        assert_eq!(kind_of::<HeatMap>(), ArgKind::ObjectStyle);
        assert_eq!(kind_of::<NumberGrid>(), ArgKind::ObjectStyle);
        assert_eq!(kind_of::<ContourPlot>(), ArgKind::ObjectStyle);
        assert_eq!(kind_of::<LinePlot>(), ArgKind::ObjectStyle);
        assert_eq!(kind_of::<Header>(), ArgKind::CanvasStyle);
        assert_eq!(kind_of::<ImageSize>(), ArgKind::CanvasStyle);
        assert_eq!(kind_of::<Colours>(), ArgKind::CanvasStyle);
        assert_eq!(Filename::new("x").kind(), ArgKind::CanvasStyle);
        assert_eq!(Grid::saddle(1, 1).kind(), ArgKind::PlainObject);
    }

    #[test]
    fn test_number_grid_sends_data_twice() {
        let grid = Grid::from_fn(1, 1, |_, _| 7);
        let out = render(|s| NumberGrid.draw(s, &grid).map(|_| ()));
        assert_eq!(
            out,
            "plot '-' using 1:2:3 with image, '-' using 1:2:3 with labels font \"PTMono,8\"\n\
             0 0 7\ne\n0 0 7\ne\n"
        );
    }

    #[test]
    fn test_line_plot() {
        let series = Series(vec![0.5, -1.0]);
        let out = render(|s| LinePlot.draw(s, &series).map(|_| ()));
        assert_eq!(out, "plot '-' using 1:2 with lines\n0 0.5\n1 -1\ne\n");
    }

    #[test]
    fn test_palettes() {
        let out = render(|s| {
            Colours::new(Palette::Ocean).apply(s)?;
            Colours::new(Palette::Hot).apply(s)?;
            Colours::default().apply(s)
        });
        assert_eq!(
            out,
            "set palette rgbformulae 23,28,3\n\
             set palette rgbformulae 21,22,23\n\
             set palette rgbformulae 33,13,10\n"
        );
    }

    #[test]
    fn test_filename_quotes_path() {
        let out = render(|s| Filename::new("it's").apply(s));
        assert_eq!(out, "set output 'it''s.png'\n");
    }

    #[test]
    fn test_header_default() {
        let out = render(|s| Header::default().apply(s));
        assert_eq!(out, "set terminal png size 640, 480\nset output 'output.png'\n");
    }
}
