//! Integer points and the four exact vector operations every predicate uses.
//!
//! - `Pt`: a point/vector with `i64` coordinates (`nalgebra::Vector2<i64>`).
//! - `dot`, `cross`, `mag2`: accumulate in `i128`.
//!
//! Overflow
//! - For `|x|, |y| <= COORD_LIMIT` every difference of two points fits in
//!   `i64` and every product sum fits in `i128`, so all results are exact.

use nalgebra::Vector2;
use std::cmp::Ordering;
use std::fmt;

/// Point (or difference vector) with exact integer coordinates.
pub type Pt = Vector2<i64>;

/// Largest absolute coordinate accepted from input (2^61).
pub const COORD_LIMIT: i64 = 1 << 61;

#[inline]
pub fn dot(u: Pt, v: Pt) -> i128 {
    u.x as i128 * v.x as i128 + u.y as i128 * v.y as i128
}

/// `u.x * v.y - u.y * v.x`; positive iff `v` is counter-clockwise from `u`.
#[inline]
pub fn cross(u: Pt, v: Pt) -> i128 {
    u.x as i128 * v.y as i128 - u.y as i128 * v.x as i128
}

#[inline]
pub fn mag2(v: Pt) -> i128 {
    dot(v, v)
}

/// Orientation of `p` relative to the directed line `a → b`.
#[inline]
pub fn orient(a: Pt, b: Pt, p: Pt) -> i128 {
    cross(b - a, p - a)
}

/// Side of `p` relative to the directed line `a → b` (`Greater` = left).
#[inline]
pub fn side(a: Pt, b: Pt, p: Pt) -> Ordering {
    orient(a, b, p).cmp(&0)
}

#[inline]
pub fn in_coord_range(c: i64) -> bool {
    (-COORD_LIMIT..=COORD_LIMIT).contains(&c)
}

/// Display adapter printing a point as `(x, y)`.
#[derive(Clone, Copy)]
pub struct FmtPt(pub Pt);

impl fmt::Display for FmtPt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_sign_follows_orientation() {
        let e1 = Pt::new(1, 0);
        let e2 = Pt::new(0, 1);
        assert_eq!(cross(e1, e2), 1);
        assert_eq!(cross(e2, e1), -1);
        assert_eq!(cross(e1, Pt::new(-7, 0)), 0);
    }

    #[test]
    fn dot_and_mag2() {
        assert_eq!(dot(Pt::new(2, 3), Pt::new(4, -1)), 5);
        assert_eq!(mag2(Pt::new(3, 4)), 25);
    }

    #[test]
    fn add_sub_are_componentwise() {
        let a = Pt::new(5, -2);
        let b = Pt::new(-1, 7);
        assert_eq!(a + b, Pt::new(4, 5));
        assert_eq!(a - b, Pt::new(6, -9));
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let a = Pt::new(-COORD_LIMIT, -COORD_LIMIT);
        let b = Pt::new(COORD_LIMIT, -COORD_LIMIT);
        let c = Pt::new(-COORD_LIMIT, COORD_LIMIT);
        let area2 = orient(a, b, c);
        let side = 2 * COORD_LIMIT as i128;
        assert_eq!(area2, side * side);
        assert_eq!(mag2(b - a), side * side);
    }

    #[test]
    fn fmt_matches_diagnostics() {
        assert_eq!(FmtPt(Pt::new(-3, 12)).to_string(), "(-3, 12)");
    }
}
