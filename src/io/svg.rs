//! SVG export of point sets and their hulls.
//!
//! [`render_svg`] produces a standalone SVG document showing every input
//! point and the hull polygon, closed back to its first vertex.
//!
//! # Example
//!
//! ```
//! use giftwrap::hull::compute_hull;
//! use giftwrap::io::{render_svg, SvgStyle};
//! use giftwrap::Point2;
//!
//! let points = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(0.0, 4.0),
//!     Point2::new(1.0, 1.0),
//! ];
//! let hull = compute_hull(&points).unwrap();
//!
//! let svg = render_svg(&points, &hull, &SvgStyle::default());
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains(" Z\""));
//! ```

use std::fmt::{self, Write};

use crate::bounds::Aabb2;
use crate::primitives::Point2;
use num_traits::Float;

/// Converts a polyline to an SVG path string.
///
/// # Arguments
///
/// * `points` - The polyline vertices
/// * `closed` - If true, adds a Z command to close the path
///
/// # Example
///
/// ```
/// use giftwrap::{Point2, io::polyline_to_svg_path};
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 10.0),
/// ];
///
/// let svg = polyline_to_svg_path(&points, true);
/// assert_eq!(svg, "M 0 0 L 10 0 L 10 10 Z");
/// ```
pub fn polyline_to_svg_path<F: Float + fmt::Display>(points: &[Point2<F>], closed: bool) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };

    let mut result = format!("M {} {}", first.x, first.y);
    for p in rest {
        // Writing to a String cannot fail
        let _ = write!(result, " L {} {}", p.x, p.y);
    }
    if closed {
        result.push_str(" Z");
    }
    result
}

/// Appearance of a rendered hull plot.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    /// Document width in pixels.
    pub width: f64,
    /// Document height in pixels.
    pub height: f64,
    /// Empty border kept around the data, in pixels.
    pub margin: f64,
    /// Radius of input point markers.
    pub point_radius: f64,
    /// Radius of hull vertex markers.
    pub vertex_radius: f64,
    /// Stroke width of the hull outline.
    pub stroke_width: f64,
    pub background: String,
    pub point_color: String,
    pub hull_color: String,
    pub hull_fill: String,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            margin: 40.0,
            point_radius: 3.0,
            vertex_radius: 5.0,
            stroke_width: 2.0,
            background: "#ffffff".to_string(),
            point_color: "#1f77b4".to_string(),
            hull_color: "#d62728".to_string(),
            hull_fill: "none".to_string(),
        }
    }
}

/// Maps data coordinates into the document, y pointing up.
struct Viewport {
    center: Point2<f64>,
    scale: f64,
    width: f64,
    height: f64,
}

impl Viewport {
    fn fit(points: &[Point2<f64>], style: &SvgStyle) -> Self {
        let inner_w = (style.width - 2.0 * style.margin).max(0.0);
        let inner_h = (style.height - 2.0 * style.margin).max(0.0);

        let (center, scale) = match Aabb2::from_points(points.iter().copied()) {
            None => (Point2::origin(), 1.0),
            Some(bounds) => {
                let (w, h) = (bounds.width(), bounds.height());
                let scale = match (w > 0.0, h > 0.0) {
                    (true, true) => (inner_w / w).min(inner_h / h),
                    (true, false) => inner_w / w,
                    (false, true) => inner_h / h,
                    (false, false) => 1.0,
                };
                (bounds.center(), scale)
            }
        };

        Self {
            center,
            scale,
            width: style.width,
            height: style.height,
        }
    }

    fn project(&self, p: Point2<f64>) -> Point2<f64> {
        Point2::new(
            round2(self.width / 2.0 + (p.x - self.center.x) * self.scale),
            round2(self.height / 2.0 - (p.y - self.center.y) * self.scale),
        )
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Renders `points` and their `hull` as a standalone SVG document.
///
/// The plot is fitted into the document with `style.margin` on every side.
/// The hull outline is drawn closed when it has at least 2 vertices; hull
/// vertices get larger markers than the other points.
pub fn render_svg(points: &[Point2<f64>], hull: &[Point2<f64>], style: &SvgStyle) -> String {
    let viewport = Viewport::fit(points, style);
    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = style.width,
        h = style.height
    );
    let _ = writeln!(
        out,
        r#"<rect width="100%" height="100%" fill="{}"/>"#,
        style.background
    );

    if hull.len() >= 2 {
        let projected: Vec<_> = hull.iter().map(|&p| viewport.project(p)).collect();
        let _ = writeln!(
            out,
            r#"<path d="{}" fill="{}" stroke="{}" stroke-width="{}" stroke-linejoin="round"/>"#,
            polyline_to_svg_path(&projected, true),
            style.hull_fill,
            style.hull_color,
            style.stroke_width
        );
    }

    for &p in points {
        let s = viewport.project(p);
        let _ = writeln!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            s.x, s.y, style.point_radius, style.point_color
        );
    }

    for &p in hull {
        let s = viewport.project(p);
        let _ = writeln!(
            out,
            r#"<circle class="hull-vertex" cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            s.x, s.y, style.vertex_radius, style.hull_color
        );
    }

    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> SvgStyle {
        SvgStyle {
            width: 200.0,
            height: 100.0,
            margin: 10.0,
            ..SvgStyle::default()
        }
    }

    #[test]
    fn test_polyline_to_svg() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
        ];

        let svg = polyline_to_svg_path(&points, false);
        assert!(svg.starts_with("M 0 0"));
        assert!(svg.contains("L 10 0"));
        assert!(!svg.ends_with("Z"));
    }

    #[test]
    fn test_polyline_to_svg_empty() {
        let points: Vec<Point2<f64>> = vec![];
        assert_eq!(polyline_to_svg_path(&points, true), "");
    }

    #[test]
    fn test_render_counts_markers() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
            Point2::new(2.0, 2.0),
        ];
        let hull = points[..4].to_vec();
        let svg = render_svg(&points, &hull, &style());

        assert_eq!(svg.matches("<circle").count(), 9);
        assert_eq!(svg.matches("hull-vertex").count(), 4);
        assert_eq!(svg.matches("<path").count(), 1);
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_render_fits_and_flips_y() {
        // 4x4 square into a 180x80 inner area: scale 20, centred at (100, 50)
        let hull = vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ];
        let svg = render_svg(&hull, &hull, &style());
        assert!(svg.contains(r#"d="M 60 90 L 140 90 L 140 10 L 60 10 Z""#));
    }

    #[test]
    fn test_render_single_point_has_no_outline() {
        let points = vec![Point2::new(3.0, 3.0)];
        let svg = render_svg(&points, &points, &style());

        assert!(!svg.contains("<path"));
        assert!(svg.contains(r#"cx="100" cy="50""#));
    }

    #[test]
    fn test_render_segment_hull_is_closed() {
        let points = vec![Point2::new(0.0, 1.0), Point2::new(10.0, 1.0)];
        let svg = render_svg(&points, &points, &style());

        // Horizontal extent only: scale from the width, y stays centred
        assert!(svg.contains(r#"d="M 10 50 L 190 50 Z""#));
    }

    #[test]
    fn test_render_empty() {
        let svg = render_svg(&[], &[], &SvgStyle::default());
        assert!(svg.starts_with("<svg"));
        assert!(!svg.contains("<circle"));
    }
}
