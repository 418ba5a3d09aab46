use crate::utils::config::DEFAULT_FAIL_BUCKET_LIMIT;
use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// JSON row payload produced by the upload step
    pub input: PathBuf,

    /// Single subject to break down (None = every subject)
    pub subject: Option<String>,

    /// Output path for the JSON report
    pub output_json: PathBuf,

    /// Output path for a text summary (optional)
    pub output_summary: Option<PathBuf>,

    /// Highest fail count with its own keyed bucket
    pub fail_bucket_limit: usize,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("records.json"),
            subject: None,
            output_json: PathBuf::from("report.json"),
            output_summary: None,
            fail_bucket_limit: DEFAULT_FAIL_BUCKET_LIMIT,
            print_summary: false,
        }
    }
}
