// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// seqlcs - DP vs brute-force longest common subsequence comparison
pub struct Args {
    /// path to input sequence file ('Label = Sequence' lines, or FASTA)
    #[argh(option)]
    pub input: Option<String>,

    /// output results file (console table only when omitted)
    #[argh(option)]
    pub output: Option<String>,

    /// output format: tsv, csv, json (default: tsv)
    #[argh(option, default = "String::from(\"tsv\")")]
    pub format: String,

    /// brute-force wall-clock budget per pair, in seconds (default: 120)
    #[argh(option, default = "120")]
    pub time_budget: u64,

    /// print the DP table for each pair
    #[argh(switch)]
    pub show_tables: bool,

    /// include only sequences whose label matches regex pattern
    #[argh(option)]
    pub include_labels: Option<String>,

    /// exclude sequences whose label matches regex pattern
    #[argh(option)]
    pub exclude_labels: Option<String>,

    /// validate inputs without computation (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
