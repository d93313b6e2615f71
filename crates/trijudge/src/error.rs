use thiserror::Error;

use crate::geom2::{Conflict, Triangle};

/// Why a proposed partition is rejected.
///
/// Indices are 0-based positions in the partition's triangle order.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("{tri} is not a valid triangle")]
    Degenerate { index: usize, tri: Triangle },

    #[error("Triangle {a} intersects with {b} (collinear edges overlap)")]
    EdgeOverlap {
        i: usize,
        j: usize,
        a: Triangle,
        b: Triangle,
    },

    #[error("Triangle {a} intersects with {b}")]
    PartialOverlap {
        i: usize,
        j: usize,
        a: Triangle,
        b: Triangle,
    },
}

impl Rejection {
    pub(crate) fn conflict(conflict: Conflict, i: usize, j: usize, a: Triangle, b: Triangle) -> Self {
        match conflict {
            Conflict::EdgeOverlap => Rejection::EdgeOverlap { i, j, a, b },
            Conflict::PartialOverlap => Rejection::PartialOverlap { i, j, a, b },
        }
    }

    /// Positions of the offending triangle(s).
    pub fn offenders(&self) -> Vec<usize> {
        match *self {
            Rejection::Degenerate { index, .. } => vec![index],
            Rejection::EdgeOverlap { i, j, .. } | Rejection::PartialOverlap { i, j, .. } => {
                vec![i, j]
            }
        }
    }
}

/// Invalid assignment of point labels to triangles.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AssignError {
    #[error("Expected number of triangles to be in range [0, {max}] but was {count}")]
    CountOutOfRange { count: i64, max: usize },

    #[error("Expected point index to be in range [1, {n}] but was {index}")]
    IndexOutOfRange { index: i64, n: usize },

    #[error("Point {index} was used more than once")]
    PointReused { index: usize },
}

/// Malformed case input or output text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected end of input at line {line}, expected {expected}")]
    UnexpectedEof { line: usize, expected: &'static str },

    #[error("line {line}: expected {expected}, found `{found}`")]
    Unexpected {
        line: usize,
        expected: &'static str,
        found: String,
    },

    #[error("line {line}: {what} {value} is out of range")]
    OutOfRange {
        line: usize,
        what: &'static str,
        value: i64,
    },

    #[error("line {line}: expected `Case #{expected}:`, found `{found}`")]
    CaseHeader {
        line: usize,
        expected: usize,
        found: String,
    },

    #[error("line {line}: {source}")]
    TriangleCount { line: usize, source: AssignError },

    #[error("line {line}: trailing data `{found}`")]
    Trailing { line: usize, found: String },
}
