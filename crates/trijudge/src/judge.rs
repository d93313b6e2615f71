//! Per-case verdicts: validate the reference and the submission, then compare
//! triangle counts.
//!
//! Problems with the reference are `JudgeError`, problems with the submission
//! are `WrongAnswer`. A submission with more triangles than the reference is
//! a `JudgeError` (the reference is assumed optimal).

use std::fmt;

use tracing::{debug, trace};

use crate::case::{CaseInput, CaseOutput};
use crate::error::Rejection;
use crate::partition::{CheckCfg, Partition};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    WrongAnswer(String),
    JudgeError(String),
}

impl Verdict {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Verdict::Accepted => "ACCEPTED",
            Verdict::WrongAnswer(_) => "WRONG_ANSWER",
            Verdict::JudgeError(_) => "JUDGE_ERROR",
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Verdict::Accepted => None,
            Verdict::WrongAnswer(r) | Verdict::JudgeError(r) => Some(r.as_str()),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason() {
            None => f.write_str(self.tag()),
            Some(r) => write!(f, "{}: {}", self.tag(), r),
        }
    }
}

/// Outcome of building and validating one side's partition.
fn checked(input: &CaseInput, out: &CaseOutput, cfg: CheckCfg) -> Result<Partition, String> {
    let p = Partition::from_indices(&input.points, &out.triples).map_err(|e| e.to_string())?;
    p.check(cfg).map_err(|errs| join(&errs))?;
    Ok(p)
}

fn join(errs: &[Rejection]) -> String {
    errs.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Judge one case. Without a reference only the submission's validity is checked.
pub fn judge_case(
    input: &CaseInput,
    reference: Option<&CaseOutput>,
    submitted: &CaseOutput,
    cfg: CheckCfg,
) -> Verdict {
    let reference = match reference.map(|r| checked(input, r, cfg)).transpose() {
        Ok(r) => r,
        Err(e) => return Verdict::JudgeError(e),
    };
    let submitted = match checked(input, submitted, cfg) {
        Ok(p) => p,
        Err(e) => return Verdict::WrongAnswer(e),
    };
    let Some(reference) = reference else {
        return Verdict::Accepted;
    };
    compare_counts(reference.len(), submitted.len())
}

/// Reference count vs submitted count.
pub fn compare_counts(reference: usize, submitted: usize) -> Verdict {
    use std::cmp::Ordering::*;
    match reference.cmp(&submitted) {
        Greater => Verdict::WrongAnswer(format!(
            "Judge provides {reference} triangles but contestant only provides {submitted}"
        )),
        Less => Verdict::JudgeError(format!(
            "Judge provides only {reference} triangles but contestant provides {submitted}"
        )),
        Equal => Verdict::Accepted,
    }
}

/// Judge every case; `reference`, when given, must have one entry per case.
pub fn judge_all(
    inputs: &[CaseInput],
    reference: Option<&[CaseOutput]>,
    submitted: &[CaseOutput],
    cfg: CheckCfg,
) -> Vec<Verdict> {
    inputs
        .iter()
        .zip(submitted)
        .enumerate()
        .map(|(k, (input, sub))| {
            let v = judge_case(input, reference.and_then(|r| r.get(k)), sub, cfg);
            if v.is_accepted() {
                trace!(case = k + 1, "accepted");
            } else {
                debug!(case = k + 1, verdict = %v, "rejected");
            }
            v
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::Pt;

    fn input(raw: &[(i64, i64)]) -> CaseInput {
        CaseInput {
            points: raw.iter().map(|&(x, y)| Pt::new(x, y)).collect(),
        }
    }

    fn out(triples: &[[i64; 3]]) -> CaseOutput {
        CaseOutput {
            triples: triples.to_vec(),
        }
    }

    fn seven() -> CaseInput {
        // two disjoint triangles and one spare point
        input(&[(0, 0), (4, 0), (0, 4), (10, 0), (14, 0), (10, 4), (1, 1)])
    }

    #[test]
    fn equal_counts_accept() {
        let reference = out(&[[1, 2, 3], [4, 5, 6]]);
        let submitted = out(&[[6, 5, 4], [3, 1, 2]]);
        let v = judge_case(&seven(), Some(&reference), &submitted, CheckCfg::default());
        assert_eq!(v, Verdict::Accepted);
    }

    #[test]
    fn fewer_triangles_is_wrong_answer() {
        let reference = out(&[[1, 2, 3], [4, 5, 6]]);
        let v = judge_case(&seven(), Some(&reference), &out(&[[1, 2, 3]]), CheckCfg::default());
        assert_eq!(
            v,
            Verdict::WrongAnswer("Judge provides 2 triangles but contestant only provides 1".into())
        );
    }

    #[test]
    fn more_triangles_is_judge_error() {
        let submitted = out(&[[1, 2, 3], [4, 5, 6]]);
        let v = judge_case(&seven(), Some(&out(&[[1, 2, 3]])), &submitted, CheckCfg::default());
        assert!(matches!(v, Verdict::JudgeError(_)));
    }

    #[test]
    fn invalid_reference_is_judge_error() {
        let v = judge_case(&seven(), Some(&out(&[[1, 2, 2]])), &out(&[]), CheckCfg::default());
        assert_eq!(v, Verdict::JudgeError("Point 2 was used more than once".into()));
    }

    #[test]
    fn invalid_submission_is_wrong_answer() {
        let inp = input(&[(0, 0), (2, 0), (0, 2), (1, 0), (3, 0), (1, -2)]);
        let v = judge_case(&inp, None, &out(&[[1, 2, 3], [4, 5, 6]]), CheckCfg::default());
        assert_eq!(v.tag(), "WRONG_ANSWER");
        assert!(v.reason().is_some_and(|r| r.contains("collinear edges overlap")));
    }

    #[test]
    fn judge_all_pairs_cases_in_order() {
        let inputs = vec![seven(), input(&[(0, 0), (0, 0), (1, 1)])];
        let subs = vec![out(&[[1, 2, 3]]), out(&[[1, 2, 3]])];
        let v = judge_all(&inputs, None, &subs, CheckCfg::default());
        assert_eq!(v[0], Verdict::Accepted);
        assert_eq!(
            v[1],
            Verdict::WrongAnswer("{(0, 0), (0, 0), (1, 1)} is not a valid triangle".into())
        );
        assert_eq!(
            v[1].to_string(),
            "WRONG_ANSWER: {(0, 0), (0, 0), (1, 1)} is not a valid triangle"
        );
    }
}
