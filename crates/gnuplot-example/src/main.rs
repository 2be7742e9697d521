use anyhow::{Context, Result};
use clap::Parser;
use gnuplot_example::run_demo;
use log::info;
use qplot::ProcessTransport;
use std::path::PathBuf;

/// Render a saddle surface four ways with gnuplot
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Directory the PNG files are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Print the gnuplot script to stdout instead of running gnuplot
    #[arg(long)]
    dry_run: bool,

    /// gnuplot executable [default: $QPLOT_GNUPLOT or gnuplot]
    #[arg(long)]
    gnuplot: Option<String>,

    /// Edge length of the plotted grid
    #[arg(long, default_value_t = 20)]
    size: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let transport = match (&cli.gnuplot, cli.dry_run) {
        (_, true) => ProcessTransport::new("cat"),
        (Some(program), false) => ProcessTransport::new(program.as_str()),
        (None, false) => qplot::gnuplot(),
    };
    info!("backend: {}", transport.program());

    if !cli.dry_run {
        std::fs::create_dir_all(&cli.out_dir)
            .with_context(|| format!("Failed to create {}", cli.out_dir.display()))?;
    }

    let reports = run_demo(transport, &cli.out_dir, cli.size).context("gnuplot demo failed")?;
    for (i, report) in reports.iter().enumerate() {
        info!("plot {}: {:?}", i + 1, report.drawn());
    }
    Ok(())
}
