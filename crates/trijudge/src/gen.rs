//! Random judged cases with a known-valid reference partition.
//!
//! Model
//! - Triangle `k` is drawn inside the vertical strip
//!   `[k·w, k·w + w - 2] × [0, h]`; strips leave a one-unit gap, so any two
//!   triangles are disjoint convex sets and some edge line separates them.
//! - Spare points get a strip of their own and are never referenced.
//! - Labels are shuffled so the reference does not read `1 2 3 / 4 5 6 ...`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::case::{CaseInput, CaseOutput};
use crate::geom2::{Pt, Triangle};

/// Case shape.
#[derive(Clone, Copy, Debug)]
pub struct CaseCfg {
    pub triangles: usize,
    pub extra_points: usize,
    /// Strip pitch along x; clamped to at least 3.
    pub strip_width: i64,
    /// Strip height along y; clamped to at least 1.
    pub height: i64,
}

impl Default for CaseCfg {
    fn default() -> Self {
        Self {
            triangles: 8,
            extra_points: 2,
            strip_width: 1_000,
            height: 1_000,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedCase {
    pub input: CaseInput,
    pub reference: CaseOutput,
}

/// Non-degenerate triangle with vertices in `[x0, x1] × [y0, y1]`
/// (needs `x1 > x0` and `y1 > y0`).
pub fn draw_triangle_in<R: Rng>(rng: &mut R, x0: i64, x1: i64, y0: i64, y1: i64) -> Triangle {
    let draw = |rng: &mut R| Pt::new(rng.gen_range(x0..=x1), rng.gen_range(y0..=y1));
    for _ in 0..64 {
        let t = Triangle::new(draw(rng), draw(rng), draw(rng));
        if t.is_valid() {
            return t;
        }
    }
    Triangle::new(Pt::new(x0, y0), Pt::new(x1, y0), Pt::new(x0, y1))
}

pub fn draw_case(cfg: CaseCfg, tok: ReplayToken) -> GeneratedCase {
    let mut rng = tok.to_std_rng();
    let w = cfg.strip_width.max(3);
    let h = cfg.height.max(1);

    let mut points = Vec::with_capacity(3 * cfg.triangles + cfg.extra_points);
    for k in 0..cfg.triangles as i64 {
        let t = draw_triangle_in(&mut rng, k * w, k * w + w - 2, 0, h);
        points.extend(t.v);
    }
    let spare_x = cfg.triangles as i64 * w;
    for _ in 0..cfg.extra_points {
        points.push(Pt::new(
            rng.gen_range(spare_x..=spare_x + w - 2),
            rng.gen_range(0..=h),
        ));
    }

    // order[label - 1] = original position
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.shuffle(&mut rng);
    let mut label = vec![0i64; points.len()];
    for (k, &pos) in order.iter().enumerate() {
        label[pos] = k as i64 + 1;
    }
    let shuffled = order.iter().map(|&pos| points[pos]).collect();
    let triples = (0..cfg.triangles)
        .map(|t| [label[3 * t], label[3 * t + 1], label[3 * t + 2]])
        .collect();

    GeneratedCase {
        input: CaseInput { points: shuffled },
        reference: CaseOutput { triples },
    }
}

/// `count` cases drawn with tokens `(seed, 0..count)`.
pub fn draw_cases(cfg: CaseCfg, seed: u64, count: usize) -> Vec<GeneratedCase> {
    (0..count as u64)
        .map(|index| draw_case(cfg, ReplayToken { seed, index }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::{CheckCfg, Partition};
    use std::collections::HashSet;

    #[test]
    fn reference_partition_is_valid() {
        let cfg = CaseCfg {
            triangles: 12,
            extra_points: 5,
            strip_width: 20,
            height: 15,
        };
        for case in draw_cases(cfg, 7, 25) {
            assert_eq!(case.input.points.len(), 41);
            let p = Partition::from_indices(&case.input.points, &case.reference.triples).unwrap();
            assert_eq!(p.len(), 12);
            assert_eq!(p.check(CheckCfg::exhaustive()), Ok(()));
        }
    }

    #[test]
    fn tiny_strips_still_give_valid_triangles() {
        let cfg = CaseCfg {
            triangles: 30,
            extra_points: 0,
            strip_width: 0,
            height: 0,
        };
        let case = draw_case(cfg, ReplayToken { seed: 1, index: 0 });
        let p = Partition::from_indices(&case.input.points, &case.reference.triples).unwrap();
        assert!(p.triangles().iter().all(Triangle::is_valid));
        assert_eq!(p.check(CheckCfg::default()), Ok(()));
    }

    #[test]
    fn labels_are_a_permutation() {
        let case = draw_case(CaseCfg::default(), ReplayToken { seed: 3, index: 9 });
        let used: HashSet<i64> = case.reference.triples.iter().flatten().copied().collect();
        assert_eq!(used.len(), 3 * CaseCfg::default().triangles);
        let n = case.input.points.len() as i64;
        assert!(used.iter().all(|&l| (1..=n).contains(&l)));
    }

    #[test]
    fn replay_is_deterministic() {
        let tok = ReplayToken { seed: 42, index: 3 };
        assert_eq!(draw_case(CaseCfg::default(), tok), draw_case(CaseCfg::default(), tok));
        let other = ReplayToken { seed: 42, index: 4 };
        assert_ne!(draw_case(CaseCfg::default(), tok), draw_case(CaseCfg::default(), other));
    }
}
