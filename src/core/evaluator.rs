// evaluator.rs - Pairwise orchestration of both LCS algorithms

use std::collections::BTreeMap;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::core::brute::brute_force_lcs;
use crate::core::dp::{lcs_dp, DpOutcome, DpTable};
use crate::data::SequenceSet;

/// Indices into the evaluated sequence set, always (i, j) with i < j.
pub type PairKey = (usize, usize);

/// Metrics from one algorithm run on one sequence pair.
#[derive(Debug, Clone, Serialize)]
pub struct PairMetrics {
    pub len1: usize,
    pub len2: usize,
    pub lcs: String,
    pub elapsed_seconds: f64,
    pub comparisons: usize,
}

/// Everything produced by one evaluation sweep.
///
/// The two metric maps share the same key set, so a consumer can zip them by
/// key; iteration order is evaluation order. DP tables are retained per pair
/// for diagnostic display, and `truncated` records pairs whose brute-force
/// run hit the time budget together with the number of candidates examined
/// before stopping.
#[derive(Debug, Default)]
pub struct PairwiseEvaluation {
    pub dp: BTreeMap<PairKey, PairMetrics>,
    pub brute: BTreeMap<PairKey, PairMetrics>,
    pub dp_tables: BTreeMap<PairKey, DpTable>,
    pub truncated: BTreeMap<PairKey, usize>,
}

/// Runs both algorithms over every unordered pair of a sequence set.
pub struct PairwiseEvaluator {
    time_budget: Duration,
}

impl PairwiseEvaluator {
    /// Default brute-force budget per pair.
    pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(120);

    pub fn new(time_budget: Duration) -> Self {
        Self { time_budget }
    }

    /// Evaluate every pair (i, j) with i < j in ascending order, DP first,
    /// then brute force under the configured budget.
    ///
    /// Pairs run strictly one after another; nothing else competes for the
    /// clock, so elapsed times and comparison counts are directly comparable
    /// across pairs and algorithms. Fewer than two sequences produce empty
    /// result maps.
    pub fn evaluate(&self, sequences: &SequenceSet) -> PairwiseEvaluation {
        let n = sequences.len();
        let total_pairs = if n < 2 { 0 } else { n * (n - 1) / 2 };
        let mut evaluation = PairwiseEvaluation::default();

        if total_pairs == 0 {
            return evaluation;
        }

        println!(
            "🔄 Evaluating {} sequence pairs ({}s brute-force budget per pair)...",
            total_pairs,
            self.time_budget.as_secs_f64()
        );

        let pb = ProgressBar::new(total_pairs as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} pairs")
                .unwrap()
                .progress_chars("#>-"),
        );

        for i in 0..n {
            for j in (i + 1)..n {
                let seq1 = sequences.residues(i);
                let seq2 = sequences.residues(j);
                let pair_label = format!("{}-{}", sequences.label(i), sequences.label(j));

                let DpOutcome {
                    lcs,
                    table,
                    comparisons,
                    elapsed,
                    len1,
                    len2,
                } = lcs_dp(seq1, seq2);
                evaluation.dp.insert(
                    (i, j),
                    PairMetrics {
                        len1,
                        len2,
                        lcs,
                        elapsed_seconds: elapsed.as_secs_f64(),
                        comparisons,
                    },
                );
                evaluation.dp_tables.insert((i, j), table);

                let brute = brute_force_lcs(seq1, seq2, self.time_budget, &pair_label);
                if brute.timed_out {
                    evaluation.truncated.insert((i, j), brute.candidates_tested);
                }
                evaluation.brute.insert(
                    (i, j),
                    PairMetrics {
                        len1: brute.len1,
                        len2: brute.len2,
                        lcs: brute.lcs,
                        elapsed_seconds: brute.elapsed.as_secs_f64(),
                        comparisons: brute.comparisons,
                    },
                );

                pb.inc(1);
            }
        }

        pb.finish_and_clear();
        evaluation
    }
}
