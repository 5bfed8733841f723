//! Input/output for point lists and hull plots.
//!
//! Reads points from delimited text and renders hulls as SVG.

mod csv;
mod svg;

pub use self::csv::{read_points_csv, CsvPointSource, PointSourceError};
pub use self::svg::{polyline_to_svg_path, render_svg, SvgStyle};
