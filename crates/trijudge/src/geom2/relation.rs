//! Pairwise classification of two triangles.
//!
//! Decision order
//! 1. Any collinear overlap between an edge of `a` and an edge of `b`
//!    → `Conflicting(EdgeOverlap)`.
//! 2. Some edge line (of `a` or `b`) puts all of `a` on one side and all of
//!    `b` on the other, ignoring points on the line → `Separate`.
//! 3. All vertices of one triangle inside-or-on the other → `Nested`.
//! 4. Otherwise → `Conflicting(PartialOverlap)`.
//!
//! `Nested` is accepted by callers. A triangle strictly inside another is
//! therefore not a conflict; this matches the reference judge.

use std::cmp::Ordering;

use super::segment::segments_overlap;
use super::triangle::Triangle;
use super::vector::{side, Pt};

/// Why a pair of triangles is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conflict {
    /// Two edges lie on one line and share a point.
    EdgeOverlap,
    /// Neither separable by an edge line nor nested.
    PartialOverlap,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    Separate,
    Nested,
    Conflicting(Conflict),
}

impl Relation {
    #[inline]
    pub fn is_acceptable(self) -> bool {
        !matches!(self, Relation::Conflicting(_))
    }
}

pub fn classify(a: &Triangle, b: &Triangle) -> Relation {
    if edges_overlap(a, b) {
        Relation::Conflicting(Conflict::EdgeOverlap)
    } else if are_separate(a, b) {
        Relation::Separate
    } else if are_nested(a, b) {
        Relation::Nested
    } else {
        Relation::Conflicting(Conflict::PartialOverlap)
    }
}

/// Any of the nine edge pairs overlaps collinearly.
pub fn edges_overlap(a: &Triangle, b: &Triangle) -> bool {
    a.edges().iter().any(|&(p, q)| {
        b.edges()
            .iter()
            .any(|&(r, s)| segments_overlap(p, q, r, s))
    })
}

/// Some directed edge of `a` or `b` is a separating line.
pub fn are_separate(a: &Triangle, b: &Triangle) -> bool {
    a.edges()
        .into_iter()
        .chain(b.edges())
        .any(|(u, v)| match (dominant_side(u, v, &a.v), dominant_side(u, v, &b.v)) {
            (Some(sa), Some(sb)) => sa != sb,
            _ => false,
        })
}

/// Either triangle lies inside-or-on the other.
#[inline]
pub fn are_nested(a: &Triangle, b: &Triangle) -> bool {
    a.is_within(b) || b.is_within(a)
}

/// Common side of `pts` relative to `u → v`, skipping points on the line.
///
/// `None` if points fall on both sides; `Some(Equal)` if all are on the line.
fn dominant_side(u: Pt, v: Pt, pts: &[Pt; 3]) -> Option<Ordering> {
    let mut dom = Ordering::Equal;
    for &p in pts {
        match side(u, v, p) {
            Ordering::Equal => {}
            s if dom == Ordering::Equal => dom = s,
            s if s != dom => return None,
            _ => {}
        }
    }
    Some(dom)
}
