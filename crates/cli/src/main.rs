use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;
use trijudge::api::CaseCfg;
use trijudge::{CheckCfg, ScanMode};

mod check;
mod generate;

#[derive(Parser)]
#[command(name = "trijudge")]
#[command(about = "Exact judge for triangle partitions of integer point sets")]
struct Cmd {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Judge a submitted output file against a case input file
    Check {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
        /// Reference output; enables the triangle count comparison
        #[arg(long)]
        reference: Option<PathBuf>,
        /// Report every violation instead of the first one per case
        #[arg(long)]
        exhaustive: bool,
        /// Print a JSON report
        #[arg(long)]
        json: bool,
    },
    /// Write random cases and a valid reference output
    Gen {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 1)]
        cases: usize,
        #[arg(long, default_value_t = 8)]
        triangles: usize,
        #[arg(long, default_value_t = 2)]
        extra: usize,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Check {
            input,
            output,
            reference,
            exhaustive,
            json,
        } => {
            let scan = if exhaustive {
                ScanMode::Exhaustive
            } else {
                ScanMode::FirstFailure
            };
            let job = check::CheckJob {
                input,
                output,
                reference,
                cfg: CheckCfg { scan },
            };
            run_check(&job, json)
        }
        Action::Gen {
            seed,
            cases,
            triangles,
            extra,
            input,
            output,
        } => {
            let cfg = CaseCfg {
                triangles,
                extra_points: extra,
                ..CaseCfg::default()
            };
            generate::write_generated(cfg, seed, cases, &input, &output)
        }
    }
}

fn run_check(job: &check::CheckJob, json: bool) -> Result<()> {
    let reports = check::run_check(job)?;
    if json {
        println!("{}", check::render_json(&reports)?);
    } else {
        print!("{}", check::render_text(&reports));
    }
    let rejected = reports.iter().filter(|r| !r.accepted()).count();
    if rejected > 0 {
        bail!("{rejected} of {} cases not accepted", reports.len());
    }
    Ok(())
}
