//! Partition validator: every triangle non-degenerate, every pair acceptable.
//!
//! Order
//! - Triangles are checked in input order; the first degenerate triangle
//!   stops the scan before any pair is looked at.
//! - Pairs `(i, j)` with `i < j` are visited in lexicographic order, so the
//!   first reported conflict is deterministic.
//!
//! `ScanMode::Exhaustive` keeps the same order but collects every violation;
//! pairs involving a degenerate triangle are skipped in that mode.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{AssignError, Rejection};
use crate::geom2::{classify, Pt, Relation, Triangle};

/// Violation reporting policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanMode {
    #[default]
    FirstFailure,
    Exhaustive,
}

/// Validator configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct CheckCfg {
    pub scan: ScanMode,
}

impl CheckCfg {
    pub fn exhaustive() -> Self {
        Self {
            scan: ScanMode::Exhaustive,
        }
    }
}

/// Ordered sequence of triangles proposed as a partition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition {
    triangles: Vec<Triangle>,
}

impl Partition {
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// Build from 1-based point labels, checking the labelling itself:
    /// at most `n / 3` triangles, labels in `1..=n`, no label used twice.
    pub fn from_indices(points: &[Pt], triples: &[[i64; 3]]) -> Result<Self, AssignError> {
        let n = points.len();
        if triples.len() > n / 3 {
            return Err(AssignError::CountOutOfRange {
                count: triples.len() as i64,
                max: n / 3,
            });
        }
        let mut used = HashSet::with_capacity(3 * triples.len());
        let mut triangles = Vec::with_capacity(triples.len());
        for triple in triples {
            let mut v = [Pt::zeros(); 3];
            for (slot, &label) in v.iter_mut().zip(triple) {
                let k = usize::try_from(label)
                    .ok()
                    .filter(|&k| (1..=n).contains(&k))
                    .ok_or(AssignError::IndexOutOfRange { index: label, n })?;
                if !used.insert(k) {
                    return Err(AssignError::PointReused { index: k });
                }
                *slot = points[k - 1];
            }
            triangles.push(Triangle { v });
        }
        Ok(Self { triangles })
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Validate under `cfg`; the error list is non-empty and holds exactly one
    /// entry in `FirstFailure` mode.
    pub fn check(&self, cfg: CheckCfg) -> Result<(), Vec<Rejection>> {
        match cfg.scan {
            ScanMode::FirstFailure => validate_partition(&self.triangles).map_err(|r| vec![r]),
            ScanMode::Exhaustive => {
                let all = collect_violations(&self.triangles);
                if all.is_empty() {
                    Ok(())
                } else {
                    Err(all)
                }
            }
        }
    }
}

impl From<Vec<Triangle>> for Partition {
    fn from(triangles: Vec<Triangle>) -> Self {
        Self::new(triangles)
    }
}

/// Accept or reject a partition, stopping at the first violation.
pub fn validate_partition(triangles: &[Triangle]) -> Result<(), Rejection> {
    if let Some(index) = triangles.iter().position(|t| !t.is_valid()) {
        let r = Rejection::Degenerate {
            index,
            tri: triangles[index],
        };
        debug!(index, "degenerate triangle");
        return Err(r);
    }
    for (i, a) in triangles.iter().enumerate() {
        for (j, b) in triangles.iter().enumerate().skip(i + 1) {
            if let Relation::Conflicting(c) = classify(a, b) {
                debug!(i, j, conflict = ?c, "conflicting pair");
                return Err(Rejection::conflict(c, i, j, *a, *b));
            }
        }
    }
    Ok(())
}

/// Every violation, degenerate triangles first, then conflicting pairs.
pub fn collect_violations(triangles: &[Triangle]) -> Vec<Rejection> {
    let mut out: Vec<Rejection> = triangles
        .iter()
        .enumerate()
        .filter(|(_, t)| !t.is_valid())
        .map(|(index, &tri)| Rejection::Degenerate { index, tri })
        .collect();
    for (i, a) in triangles.iter().enumerate() {
        if !a.is_valid() {
            continue;
        }
        for (j, b) in triangles.iter().enumerate().skip(i + 1) {
            if !b.is_valid() {
                continue;
            }
            if let Relation::Conflicting(c) = classify(a, b) {
                out.push(Rejection::conflict(c, i, j, *a, *b));
            }
        }
    }
    debug!(violations = out.len(), "exhaustive scan");
    out
}
