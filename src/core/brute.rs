// brute.rs - Exhaustive LCS search with pruning and a wall-clock budget

use std::time::{Duration, Instant};

use crate::core::subsequence::Subsequences;
use crate::core::tester::is_common_subsequence;

/// Result of one brute-force run on a sequence pair.
#[derive(Debug, Clone)]
pub struct BruteForceOutcome {
    pub lcs: String,
    pub comparisons: usize,
    pub elapsed: Duration,
    pub len1: usize,
    pub len2: usize,
    /// Candidates that reached the tester; pruned candidates are not counted.
    pub candidates_tested: usize,
    /// True when enumeration stopped on the time budget instead of running dry.
    pub timed_out: bool,
}

/// Find the LCS of two sequences by enumerating every subsequence of the
/// first and testing each against both.
///
/// Candidates no longer than the current best are skipped without any
/// comparisons. The wall clock is stamped once per candidate, before any
/// work on it; when the stamp exceeds the budget the enumeration stops and
/// the best found so far is the final answer. Reported elapsed time is the
/// stamp of the last candidate considered - never a fresh reading taken
/// after the loop - so DP and brute-force timings stay comparable.
///
/// `pair_label` only names the pair in the budget-expiry notice.
pub fn brute_force_lcs(
    seq1: &str,
    seq2: &str,
    budget: Duration,
    pair_label: &str,
) -> BruteForceOutcome {
    let start = Instant::now();
    let mut longest = String::new();
    let mut longest_len = 0;
    let mut comparisons = 0;
    let mut candidates_tested = 0;
    let mut timed_out = false;
    let mut last_stamp = start;

    for candidate in Subsequences::new(seq1) {
        last_stamp = Instant::now();
        if last_stamp.duration_since(start) > budget {
            println!(
                "⏱️  Brute force time budget exceeded for {} after examining {} candidates",
                pair_label, candidates_tested
            );
            timed_out = true;
            break;
        }

        let candidate_len = candidate.chars().count();
        if candidate_len <= longest_len {
            continue;
        }

        let (common, visited) = is_common_subsequence(&candidate, &[seq1, seq2]);
        comparisons += visited;
        candidates_tested += 1;
        if common && candidate_len > longest_len {
            longest = candidate;
            longest_len = candidate_len;
        }
    }

    BruteForceOutcome {
        lcs: longest,
        comparisons,
        elapsed: last_stamp.duration_since(start),
        len1: seq1.chars().count(),
        len2: seq2.chars().count(),
        candidates_tested,
        timed_out,
    }
}
