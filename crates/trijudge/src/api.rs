//! Curated surface for the CLI and benches.
//!
//! Groups the text format, the judge and the generator under one import;
//! the predicates stay in `geom2`.

// Text format
pub use crate::case::{parse_input, parse_output, write_input, write_output, CaseInput, CaseOutput};
// Verdicts
pub use crate::judge::{compare_counts, judge_all, judge_case, Verdict};
// Validation
pub use crate::partition::{collect_violations, validate_partition, CheckCfg, Partition, ScanMode};
// Random cases
pub use crate::gen::{draw_case, draw_cases, draw_triangle_in, CaseCfg, GeneratedCase, ReplayToken};
