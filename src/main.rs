//! Command-line front end: read a point list, print its hull, optionally plot it.
//!
//! ```text
//! giftwrap points.csv --svg hull.svg
//! points loaded: 120 | hull vertices: 9
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use giftwrap::io::{render_svg, CsvPointSource, SvgStyle};
use giftwrap::HullSummary;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Delimited text file with a header row
    input: PathBuf,

    /// Field delimiter (a single ASCII character)
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Header of the x coordinate column
    #[arg(long, default_value = "x")]
    x_column: String,

    /// Header of the y coordinate column
    #[arg(long, default_value = "y")]
    y_column: String,

    /// Write an SVG plot of the points and hull to this path
    #[arg(long)]
    svg: Option<PathBuf>,

    /// SVG width in pixels
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// SVG height in pixels
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Print each hull vertex as `x,y` after the summary
    #[arg(long)]
    print_hull: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if !args.delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got {:?}", args.delimiter);
    }

    let points: Vec<giftwrap::Point2<f64>> = CsvPointSource::new()
        .delimiter(args.delimiter as u8)
        .x_column(args.x_column.as_str())
        .y_column(args.y_column.as_str())
        .read_path(&args.input)
        .with_context(|| format!("could not read points from {}", args.input.display()))?;

    let summary = HullSummary::from_points(&points).context("could not compute hull")?;
    info!(area = summary.area, perimeter = summary.perimeter, "hull computed");

    println!("{summary}");
    if args.print_hull {
        for p in &summary.hull {
            println!("{},{}", p.x, p.y);
        }
    }

    if let Some(path) = &args.svg {
        let style = SvgStyle {
            width: args.width,
            height: args.height,
            ..SvgStyle::default()
        };
        let document = render_svg(&points, &summary.hull, &style);
        fs::write(path, document)
            .with_context(|| format!("could not write {}", path.display()))?;
        info!(path = %path.display(), "wrote plot");
    }

    Ok(())
}
