//! Triangles over integer points: validity and point membership.

use std::fmt;

use super::vector::{cross, FmtPt, Pt};

/// Ordered triple of points.
///
/// Vertex order carries no geometric meaning; it is kept so diagnostics
/// print the triangle the way it was given.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triangle {
    pub v: [Pt; 3],
}

/// Where a point lies relative to a closed triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointStatus {
    Outside,
    Boundary,
    Inside,
}

impl Triangle {
    #[inline]
    pub fn new(a: Pt, b: Pt, c: Pt) -> Self {
        Self { v: [a, b, c] }
    }

    /// Twice the signed area, `cross(B-A, C-A)`.
    #[inline]
    pub fn area2(&self) -> i128 {
        let [a, b, c] = self.v;
        cross(b - a, c - a)
    }

    /// Non-degenerate iff the three points are not collinear.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.area2() != 0
    }

    /// Edges `(v[k], v[k+1 mod 3])` for `k = 0, 1, 2`.
    #[inline]
    pub fn edges(&self) -> [(Pt, Pt); 3] {
        let [a, b, c] = self.v;
        [(a, b), (b, c), (c, a)]
    }

    /// Same triangle with vertices in counter-clockwise order
    /// (B and C swapped when the area is negative).
    #[inline]
    pub fn ccw(&self) -> Triangle {
        let [a, b, c] = self.v;
        if self.area2() < 0 {
            Triangle::new(a, c, b)
        } else {
            *self
        }
    }

    /// Half-plane test against the three CCW edges. Zero on an edge with no
    /// negative side counts as `Boundary`.
    pub fn point_status(&self, p: Pt) -> PointStatus {
        let [a, b, c] = self.ccw().v;
        let s = [cross(b - a, p - a), cross(c - b, p - b), cross(a - c, p - c)];
        if s.iter().any(|&x| x < 0) {
            PointStatus::Outside
        } else if s.iter().any(|&x| x == 0) {
            PointStatus::Boundary
        } else {
            PointStatus::Inside
        }
    }

    /// Inside or on the boundary.
    #[inline]
    pub fn contains(&self, p: Pt) -> bool {
        self.point_status(p) != PointStatus::Outside
    }

    /// Every vertex of `self` lies inside or on `outer`.
    pub fn is_within(&self, outer: &Triangle) -> bool {
        self.v.iter().all(|&p| outer.contains(p))
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.v;
        write!(f, "{{{}, {}, {}}}", FmtPt(a), FmtPt(b), FmtPt(c))
    }
}

/// Free-function form of [`Triangle::is_valid`].
#[inline]
pub fn is_triangle_valid(t: &Triangle) -> bool {
    t.is_valid()
}
