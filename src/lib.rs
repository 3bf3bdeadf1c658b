// lib.rs - seqlcs library root

//! # seqlcs - Dual-algorithm longest common subsequence comparison
//!
//! Computes the LCS of every pair in a collection of DNA sequences twice -
//! once with the polynomial dynamic-programming algorithm and once with a
//! time-bounded brute-force subsequence search - and reports, for each run,
//! the discovered LCS, elapsed time and comparison count, so the two
//! strategies can be contrasted on identical inputs.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use seqlcs::prelude::*;
//!
//! // Load validated sequences ('Label = Sequence' lines or FASTA)
//! let sequences = SequenceSet::from_file(std::path::Path::new("sequences.txt"))?;
//!
//! // Run both algorithms over every pair
//! let evaluator = PairwiseEvaluator::new(PairwiseEvaluator::DEFAULT_TIME_BUDGET);
//! let evaluation = evaluator.evaluate(&sequences);
//!
//! for ((i, j), metrics) in &evaluation.dp {
//!     println!("{}-{}: '{}' in {:.4}s", i, j, metrics.lcs, metrics.elapsed_seconds);
//! }
//! # Ok::<(), String>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::core::{brute_force_lcs, is_common_subsequence, lcs_dp};
    pub use crate::core::{
        BruteForceOutcome, DpOutcome, DpTable, PairMetrics, PairwiseEvaluation,
        PairwiseEvaluator, Subsequences,
    };
    pub use crate::data::{Sequence, SequenceSet};
    pub use crate::output::write_results;
}

// Re-export main types at the root level for convenience
pub use crate::core::{PairMetrics, PairwiseEvaluation, PairwiseEvaluator};
pub use crate::data::{Sequence, SequenceSet};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
