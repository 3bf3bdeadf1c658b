// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub input: Option<String>,
    pub output: Option<String>,
    pub format: Option<String>,

    // Evaluation settings
    pub time_budget: Option<u64>,
    pub show_tables: Option<bool>,

    // Label filtering
    pub include_labels: Option<String>,
    pub exclude_labels: Option<String>,

    // Flags
    pub dry_run: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# seqlcs.toml - Configuration file for seqlcs
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Path to input sequence file ('Label = Sequence' lines, or FASTA)
input = "/path/to/sequences.txt"

# Output results file (omit for console table only)
output = "results.tsv"

# Output format: tsv, csv, json
format = "tsv"

# =============================================================================
# EVALUATION SETTINGS
# =============================================================================

# Brute-force wall-clock budget per pair, in seconds
time_budget = 120

# Print the DP table for each pair
show_tables = false

# =============================================================================
# LABEL FILTERING
# =============================================================================

# Include only sequences whose label matches regex pattern
# include_labels = "^sample_.*"

# Exclude sequences whose label matches regex pattern
# exclude_labels = "control.*"

# =============================================================================
# FLAGS
# =============================================================================

# Validate inputs without computation (dry run)
dry_run = false
"#
        .to_string()
    }
}
