//! giftwrap - Convex hulls by gift wrapping
//!
//! Computes the convex hull of a 2D point set with the Jarvis march, plus the
//! small amount of I/O around it: reading point lists from delimited text and
//! rendering the result as SVG.

pub mod bounds;
pub mod error;
pub mod hull;
pub mod io;
pub mod predicates;
pub mod primitives;

pub use error::HullError;
pub use hull::{compute_hull, compute_hull_indices, HullSummary};
pub use predicates::{orient2d, Orientation};
pub use primitives::{Point2, Vec2};
