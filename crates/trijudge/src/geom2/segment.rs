//! Collinear segment overlap.

use super::vector::{cross, dot, mag2, Pt};

/// True iff segments `ab` and `cd` lie on one line and share at least one point.
///
/// A shared endpoint on a common line counts (projection exactly `0` or
/// exactly `|ab|²`). Segments meeting at a point without being collinear do not.
///
/// Symmetric in the two segments and in their endpoint order only when both
/// have positive length: a point segment `ab` is collinear with everything and
/// always reports overlap, while `cd` compared against a point need not.
pub fn segments_overlap(a: Pt, b: Pt, c: Pt, d: Pt) -> bool {
    let ab = b - a;
    let ac = c - a;
    let ad = d - a;
    if cross(ab, ac) != 0 || cross(ab, ad) != 0 {
        return false;
    }
    let len2 = mag2(ab);
    let dot_c = dot(ab, ac);
    if (0..=len2).contains(&dot_c) {
        return true;
    }
    let dot_d = dot(ab, ad);
    if (0..=len2).contains(&dot_d) {
        return true;
    }
    // Both endpoints project outside ab: overlap iff cd straddles it.
    dot_c.signum() != dot_d.signum()
}
