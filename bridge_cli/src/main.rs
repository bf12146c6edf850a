//! # Parapet CLI
//!
//! Runs one IRC 5:2015 design session and prints the verdicts, the
//! normalized cross-section and the design record.
//!
//! ```text
//! bridge_cli [input.json]
//! ```
//!
//! Without an argument a built-in sample input is evaluated. Set
//! `RUST_LOG=bridge_core=debug` to see builder selection and barrier
//! insertions.

use std::fs;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bridge_core::clauses::{ClauseResult, ClauseStatus};
use bridge_core::{DesignInput, DesignSession, GeometryOutcome};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let input = match std::env::args().nth(1) {
        Some(path) => {
            info!(%path, "loading design input");
            let json = fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
            DesignInput::from_json(&json).with_context(|| format!("parsing {}", path))?
        }
        None => {
            info!("no input file given, evaluating built-in sample");
            DesignInput::sample()
        }
    };

    let session = DesignSession::evaluate(&input).context("evaluating design")?;
    print_report(&session);

    println!();
    println!("JSON Output:");
    println!("{}", serde_json::to_string_pretty(&session)?);

    Ok(())
}

fn print_report(session: &DesignSession) {
    let meta = &session.meta;
    println!("═══════════════════════════════════════");
    println!("  {} CROSS-SECTION CHECK", meta.code);
    println!("═══════════════════════════════════════");
    println!();
    println!("Bridge:   {}", meta.bridge_name);
    println!("Job:      {}", meta.job_id);
    println!("Engineer: {}", meta.engineer);
    println!("Session:  {} ({})", meta.id, meta.created.format("%Y-%m-%d %H:%M UTC"));
    println!();
    println!("Cross-section:");
    println!("  {}", session.layout);
    println!();
    println!("Clause Checks:");
    for clause in &session.clauses {
        println!("  {} {}", status_icon(clause), clause.clause);
        println!("         {}", clause.remark);
    }
    println!();

    match &session.geometry {
        Some(GeometryOutcome::Built(geometry)) => {
            println!("Geometry ({}):", geometry.namespace());
            if let Some(load) = geometry.total_load_kn_m() {
                println!("  Self-weight: {:.3} kN/m", load);
            }
        }
        Some(GeometryOutcome::NotApplicable { selection, reason, .. }) => {
            println!("Geometry: not applicable ({}): {}", selection, reason);
        }
        None => println!("Geometry: none"),
    }
    println!();

    println!("Design Record:");
    for (key, value) in session.record.iter() {
        println!("  {:<40} {}", key, value);
    }
    println!();

    let failing = session.non_compliant();
    let missing = session.missing_inputs();
    println!("═══════════════════════════════════════");
    println!(
        "  RESULT: {} ({} non-compliant, {} missing input)",
        if failing.is_empty() { "PASS" } else { "FAIL" },
        failing.len(),
        missing.len()
    );
    println!("═══════════════════════════════════════");
}

fn status_icon(clause: &ClauseResult) -> &'static str {
    match clause.status {
        ClauseStatus::Compliant => "[OK]  ",
        ClauseStatus::NonCompliant => "[FAIL]",
        ClauseStatus::NotApplicable => "[N/A] ",
        ClauseStatus::MissingInput => "[??]  ",
    }
}
