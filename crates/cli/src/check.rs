use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use trijudge::api::{judge_all, parse_input, parse_output, CaseOutput, CheckCfg, Verdict};

/// Files and policy for one `check` run.
pub struct CheckJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub reference: Option<PathBuf>,
    pub cfg: CheckCfg,
}

/// One line of the report.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CaseReport {
    pub case: usize,
    pub verdict: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CaseReport {
    fn new(case: usize, v: &Verdict) -> Self {
        Self {
            case,
            verdict: v.tag(),
            reason: v.reason().map(str::to_string),
        }
    }

    pub fn accepted(&self) -> bool {
        self.verdict == "ACCEPTED"
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Judge every case of `job`.
///
/// An unreadable reference is an error of the run itself; an unreadable
/// submission marks every case as a wrong answer with the parse error.
pub fn run_check(job: &CheckJob) -> Result<Vec<CaseReport>> {
    let inputs = parse_input(&read(&job.input)?)
        .with_context(|| format!("parsing case input {}", job.input.display()))?;
    tracing::info!(cases = inputs.len(), input = %job.input.display(), "loaded cases");

    let reference: Option<Vec<CaseOutput>> = match &job.reference {
        Some(path) => Some(
            parse_output(&read(path)?, &inputs)
                .with_context(|| format!("parsing reference output {}", path.display()))?,
        ),
        None => None,
    };

    let verdicts = match parse_output(&read(&job.output)?, &inputs) {
        Ok(submitted) => judge_all(&inputs, reference.as_deref(), &submitted, job.cfg),
        Err(e) => {
            tracing::warn!(error = %e, "submission does not parse");
            vec![Verdict::WrongAnswer(e.to_string()); inputs.len()]
        }
    };

    Ok(verdicts
        .iter()
        .enumerate()
        .map(|(k, v)| CaseReport::new(k + 1, v))
        .collect())
}

pub fn render_text(reports: &[CaseReport]) -> String {
    reports
        .iter()
        .map(|r| match &r.reason {
            None => format!("Case #{}: {}\n", r.case, r.verdict),
            Some(reason) => format!("Case #{}: {}: {}\n", r.case, r.verdict, reason),
        })
        .collect()
}

pub fn render_json(reports: &[CaseReport]) -> Result<String> {
    let accepted = reports.iter().filter(|r| r.accepted()).count();
    let doc = serde_json::json!({
        "version": trijudge::VERSION,
        "accepted": accepted,
        "total": reports.len(),
        "cases": reports,
    });
    Ok(serde_json::to_string_pretty(&doc)?)
}
