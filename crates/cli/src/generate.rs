use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use trijudge::api::{draw_cases, write_input, write_output, CaseCfg, GeneratedCase};

/// Write `cases` generated cases to `input` and their reference partitions to `output`.
pub fn write_generated(
    cfg: CaseCfg,
    seed: u64,
    cases: usize,
    input: &Path,
    output: &Path,
) -> Result<()> {
    let drawn = draw_cases(cfg, seed, cases);
    let (inputs, refs): (Vec<_>, Vec<_>) = drawn
        .into_iter()
        .map(|GeneratedCase { input, reference }| (input, reference))
        .unzip();
    for path in [input, output] {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
    }
    fs::write(input, write_input(&inputs))
        .with_context(|| format!("writing {}", input.display()))?;
    fs::write(output, write_output(&refs))
        .with_context(|| format!("writing {}", output.display()))?;
    tracing::info!(seed, cases, triangles = cfg.triangles, "generated");
    Ok(())
}
