//! Exact 2D predicates over integer points.
//!
//! Purpose
//! - Decide orientation, collinear segment overlap, point-in-triangle and
//!   pairwise triangle relations without any rounding.
//!
//! Arithmetic
//! - Every predicate is a sign test on `cross`/`dot` of point differences;
//!   products are accumulated in `i128` (see `vector`). No division, no floats.
//!
//! Code cross-refs: `partition::validate_partition` composes these.

pub mod relation;
pub mod segment;
pub mod triangle;
pub mod vector;

pub use relation::{are_nested, are_separate, classify, edges_overlap, Conflict, Relation};
pub use segment::segments_overlap;
pub use triangle::{is_triangle_valid, PointStatus, Triangle};
pub use vector::{cross, dot, in_coord_range, mag2, orient, side, FmtPt, Pt, COORD_LIMIT};
