//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Reads and decodes the uploaded rows
//! 2. Runs every aggregator into one report
//! 3. Writes output files

use super::models::AnalyzeArgs;
use crate::aggregator::build_report;
use crate::output::{render_text_summary, write_report, write_summary};
use crate::parser::read_table;
use crate::utils::config::MAX_FAIL_BUCKET_LIMIT;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input read or decode failures
/// * Any aggregator error (validation, unknown subject, invalid data)
/// * File write errors
pub fn execute_analyze(args: AnalyzeArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Starting analysis of: {}", args.input.display());

    info!("Step 1/3: Reading records...");
    let table = read_table(&args.input)
        .with_context(|| format!("Failed to read records from {}", args.input.display()))?;

    debug!(
        "Decoded {} records, {} subjects, {} students",
        table.len(),
        table.subjects().len(),
        table.students().len()
    );

    info!("Step 2/3: Computing statistics...");
    let source = args.input.display().to_string();
    let report = build_report(
        &table,
        &source,
        args.subject.as_deref(),
        args.fail_bucket_limit,
    )
    .context("Failed to compute statistics")?;

    info!(
        "Overall: {} passed every subject, {} failed at least one",
        report.overall.total_pass, report.overall.total_fail
    );

    info!("Step 3/3: Writing output files...");
    write_report(&report, &args.output_json).context("Failed to write report JSON")?;
    info!("✓ Report written to: {}", args.output_json.display());

    if let Some(summary_path) = &args.output_summary {
        write_summary(&report, summary_path).context("Failed to write text summary")?;
        info!("✓ Summary written to: {}", summary_path.display());
    }

    if args.print_summary {
        println!("\n{}", render_text_summary(&report));
    }

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if let Some(subject) = &args.subject {
        if subject.trim().is_empty() {
            anyhow::bail!("Subject name cannot be blank");
        }
    }

    if args.fail_bucket_limit == 0 {
        anyhow::bail!("fail_bucket_limit must be greater than 0");
    }

    if args.fail_bucket_limit > MAX_FAIL_BUCKET_LIMIT {
        anyhow::bail!(
            "fail_bucket_limit is too large (max {})",
            MAX_FAIL_BUCKET_LIMIT
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_args_valid() {
        let args = AnalyzeArgs {
            subject: Some("Math".to_string()),
            ..Default::default()
        };
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_empty_input() {
        let args = AnalyzeArgs {
            input: PathBuf::new(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_blank_subject() {
        let args = AnalyzeArgs {
            subject: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_bucket_limit_zero() {
        let args = AnalyzeArgs {
            fail_bucket_limit: 0,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_bucket_limit_too_large() {
        let args = AnalyzeArgs {
            fail_bucket_limit: 51,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }
}
