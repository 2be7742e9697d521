use crate::data::Grid;
use crate::styles::{Colours, ContourPlot, Filename, Header, HeatMap, ImageSize, Palette};
use qplot::{PlotError, Qplot, Report, Transport};
use std::path::Path;

/// Plots a `size`×`size` saddle four times into `out_dir`.
///
/// 1. `Grid1.png` as a heat map (the header's default style).
/// 2. `Grid2.png` as a contour plot, which stays selected from here on.
/// 3. `Grid3.png` at 800x600.
/// 4. `output.png` after switching the header palette to ocean.
pub fn run_demo<T: Transport>(
    transport: T,
    out_dir: &Path,
    size: usize,
) -> Result<Vec<Report>, PlotError> {
    let grid = Grid::saddle(size, size);
    let header = (
        Header::new(out_dir.join("output.png")),
        HeatMap,
        Colours::new(Palette::Rainbow),
    );

    let mut qplot = Qplot::new(transport, header)?;
    let mut reports = Vec::with_capacity(4);

    reports.push(qplot.plot((Filename::new(out_dir.join("Grid1")), &grid))?);
    reports.push(qplot.plot((Filename::new(out_dir.join("Grid2")), ContourPlot, &grid))?);
    reports.push(qplot.plot((
        ImageSize::new(800, 600),
        Filename::new(out_dir.join("Grid3")),
        &grid,
    ))?);

    qplot.add_to_header((Colours::new(Palette::Ocean),))?;
    reports.push(qplot.plot((&grid,))?);

    log::info!(
        "{} plot(s) sent, {} header byte(s)",
        qplot.invocations(),
        qplot.header().len()
    );
    qplot.close()?;
    Ok(reports)
}
