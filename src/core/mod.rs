// mod.rs - Core comparison engine module

pub mod brute;
pub mod dp;
pub mod evaluator;
pub mod subsequence;
pub mod tester;

// Re-export main types for convenience
pub use brute::{brute_force_lcs, BruteForceOutcome};
pub use dp::{lcs_dp, DpOutcome, DpTable};
pub use evaluator::{PairKey, PairMetrics, PairwiseEvaluation, PairwiseEvaluator};
pub use subsequence::Subsequences;
pub use tester::is_common_subsequence;
