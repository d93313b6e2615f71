//! Exact judge for triangle partitions of labelled integer point sets.
//!
//! Layers
//! - `geom2`: exact integer predicates (orientation, collinear overlap,
//!   point-in-triangle, pairwise triangle relation).
//! - `partition`: validity of a whole proposed partition.
//! - `case`, `judge`: text format and per-case verdicts around the core.
//! - `gen`: reproducible random cases with a valid reference partition.
//!
//! API Policy
//! - `validate_partition` and `Triangle::is_valid` are the core contract;
//!   everything else is a convenience layer and may change.

pub mod api;
pub mod case;
pub mod error;
pub mod gen;
pub mod geom2;
pub mod judge;
pub mod partition;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{AssignError, ParseError, Rejection};
pub use geom2::{is_triangle_valid, Pt, Triangle};
pub use partition::{validate_partition, CheckCfg, Partition, ScanMode};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::case::{CaseInput, CaseOutput};
    pub use crate::geom2::{classify, Conflict, PointStatus, Pt, Relation, Triangle};
    pub use crate::judge::Verdict;
    pub use crate::partition::{validate_partition, CheckCfg, Partition, ScanMode};
    pub use crate::Rejection;
}
