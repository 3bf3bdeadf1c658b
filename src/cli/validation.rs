// validation.rs - Input validation utilities

use crate::cli::args::Args;
use regex::Regex;
use std::time::Duration;

/// Output format names accepted by the result writers.
pub const OUTPUT_FORMATS: [&str; 3] = ["tsv", "csv", "json"];

#[derive(Debug)]
pub struct ValidationResult {
    pub time_budget: Duration,
    pub include_regex: Option<Regex>,
    pub exclude_regex: Option<Regex>,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    // Validate output format
    if !OUTPUT_FORMATS.contains(&args.format.to_lowercase().as_str()) {
        return Err(format!(
            "Unsupported output format: {}. Use: {}",
            args.format,
            OUTPUT_FORMATS.join(", ")
        ));
    }

    // The budget is always finite; zero is legal and makes every brute-force
    // run return its initial empty best.
    let time_budget = Duration::from_secs(args.time_budget);

    // Compile regex patterns
    let include_regex = if let Some(pattern) = &args.include_labels {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid include_labels regex: {}", e))?)
    } else {
        None
    };

    let exclude_regex = if let Some(pattern) = &args.exclude_labels {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid exclude_labels regex: {}", e))?)
    } else {
        None
    };

    Ok(ValidationResult {
        time_budget,
        include_regex,
        exclude_regex,
    })
}
