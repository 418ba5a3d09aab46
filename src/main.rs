//! Exam Stats CLI
//!
//! Computes pass/fail rates, grade distributions and mark histograms
//! from uploaded student examination records.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use exam_stats::commands::{
    display_schema, display_version, execute_analyze, list_subjects, validate_args,
    validate_report_file, AnalyzeArgs,
};
use exam_stats::utils::config::DEFAULT_FAIL_BUCKET_LIMIT;
use std::path::PathBuf;

/// Exam Stats - descriptive statistics for exam records
#[derive(Parser, Debug)]
#[command(name = "exam-stats")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute statistics and write a report
    Analyze {
        /// JSON rows produced by the upload step
        #[arg(short, long, env = "EXAM_STATS_INPUT")]
        input: PathBuf,

        /// Break down a single subject (default: every subject)
        #[arg(short, long)]
        subject: Option<String>,

        /// Output path for JSON report
        #[arg(short, long, default_value = "report.json")]
        output: PathBuf,

        /// Output path for a text summary (optional)
        #[arg(long)]
        summary_file: Option<PathBuf>,

        /// Highest fail count given its own bucket
        #[arg(long, default_value_t = DEFAULT_FAIL_BUCKET_LIMIT)]
        fail_bucket_limit: usize,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// List the subjects in an input file
    Subjects {
        /// JSON rows produced by the upload step
        #[arg(short, long, env = "EXAM_STATS_INPUT")]
        input: PathBuf,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Analyze {
            input,
            subject,
            output,
            summary_file,
            fail_bucket_limit,
            summary,
        } => {
            let args = AnalyzeArgs {
                input,
                subject,
                output_json: output,
                output_summary: summary_file,
                fail_bucket_limit,
                print_summary: summary,
            };

            validate_args(&args)?;
            execute_analyze(args)?;
        }

        Commands::Subjects { input } => {
            list_subjects(input)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
