// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.input.is_none() {
            self.input = config.input;
        }
        if self.output.is_none() {
            self.output = config.output;
        }

        // Core settings (only override defaults, not explicit CLI values)
        if self.format == "tsv" && config.format.is_some() {
            self.format = config.format.unwrap();
        }
        if self.time_budget == 120 && config.time_budget.is_some() {
            self.time_budget = config.time_budget.unwrap();
        }

        // Label filtering
        if self.include_labels.is_none() {
            self.include_labels = config.include_labels;
        }
        if self.exclude_labels.is_none() {
            self.exclude_labels = config.exclude_labels;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.show_tables && config.show_tables.unwrap_or(false) {
            self.show_tables = true;
        }
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_args() -> Args {
        Args {
            input: None,
            output: None,
            format: String::from("tsv"),
            time_budget: 120,
            show_tables: false,
            include_labels: None,
            exclude_labels: None,
            dry_run: false,
            config: None,
            generate_config: false,
        }
    }

    #[test]
    fn test_config_fills_unset_values() {
        let config = Config {
            input: Some("sequences.txt".to_string()),
            format: Some("json".to_string()),
            time_budget: Some(30),
            show_tables: Some(true),
            ..Config::default()
        };
        let args = default_args().merge_with_config(config);
        assert_eq!(args.input.as_deref(), Some("sequences.txt"));
        assert_eq!(args.format, "json");
        assert_eq!(args.time_budget, 30);
        assert!(args.show_tables);
    }

    #[test]
    fn test_cli_values_win() {
        let mut args = default_args();
        args.input = Some("cli.txt".to_string());
        args.format = String::from("csv");
        args.time_budget = 7;

        let config = Config {
            input: Some("config.txt".to_string()),
            format: Some("json".to_string()),
            time_budget: Some(30),
            ..Config::default()
        };
        let args = args.merge_with_config(config);
        assert_eq!(args.input.as_deref(), Some("cli.txt"));
        assert_eq!(args.format, "csv");
        assert_eq!(args.time_budget, 7);
    }

    #[test]
    fn test_empty_config_changes_nothing() {
        let args = default_args().merge_with_config(Config::default());
        assert_eq!(args.format, "tsv");
        assert_eq!(args.time_budget, 120);
        assert!(!args.show_tables);
        assert!(!args.dry_run);
    }
}
