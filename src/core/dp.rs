// dp.rs - Dynamic-programming LCS with table reconstruction

use std::time::{Duration, Instant};

/// LCS length table for one sequence pair.
///
/// Cell (i, j) holds the LCS length of the length-i prefix of the first
/// sequence and the length-j prefix of the second, so row 0 and column 0 are
/// always zero and cell (len1, len2) is the LCS length of the full pair.
#[derive(Debug, Clone)]
pub struct DpTable {
    cells: Vec<usize>,
    rows: usize,
    cols: usize,
}

impl DpTable {
    fn zeroed(len1: usize, len2: usize) -> Self {
        Self {
            cells: vec![0; (len1 + 1) * (len2 + 1)],
            rows: len1 + 1,
            cols: len2 + 1,
        }
    }

    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    fn set(&mut self, i: usize, j: usize, value: usize) {
        self.cells[i * self.cols + j] = value;
    }

    /// (rows, cols) including the zero row and column.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Iterate rows top to bottom, for display.
    pub fn rows(&self) -> impl Iterator<Item = &[usize]> {
        self.cells.chunks(self.cols)
    }
}

/// Result of one DP run on a sequence pair.
#[derive(Debug, Clone)]
pub struct DpOutcome {
    pub lcs: String,
    pub table: DpTable,
    pub comparisons: usize,
    pub elapsed: Duration,
    pub len1: usize,
    pub len2: usize,
}

/// Compute the LCS of two sequences with the classic bottom-up table.
///
/// One comparison is counted per cell visited during the fill, so the
/// comparison total is always len1 * len2. Elapsed time covers the fill and
/// the reconstruction. Empty inputs produce an empty LCS over a table of
/// zeros.
pub fn lcs_dp(seq1: &str, seq2: &str) -> DpOutcome {
    let start = Instant::now();
    let s1: Vec<char> = seq1.chars().collect();
    let s2: Vec<char> = seq2.chars().collect();
    let (len1, len2) = (s1.len(), s2.len());

    let mut table = DpTable::zeroed(len1, len2);
    let mut comparisons = 0;

    for i in 1..=len1 {
        for j in 1..=len2 {
            comparisons += 1;
            let value = if s1[i - 1] == s2[j - 1] {
                table.get(i - 1, j - 1) + 1
            } else {
                table.get(i - 1, j).max(table.get(i, j - 1))
            };
            table.set(i, j, value);
        }
    }

    let lcs = reconstruct(&s1, &s2, &table);

    DpOutcome {
        lcs,
        table,
        comparisons,
        elapsed: start.elapsed(),
        len1,
        len2,
    }
}

/// Recover one LCS string by walking the filled table backward from
/// (len1, len2).
///
/// On a symbol match the walk moves diagonally and keeps the symbol.
/// Otherwise it skips a symbol of the first sequence (moves up) whenever the
/// cell above is >= the cell to the left, and skips from the second sequence
/// only when the left cell is strictly greater. The >= branch makes the walk
/// deterministic; preferring left instead would return a different, equally
/// valid LCS.
fn reconstruct(s1: &[char], s2: &[char], table: &DpTable) -> String {
    let mut lcs = Vec::new();
    let mut i = s1.len();
    let mut j = s2.len();

    while i > 0 && j > 0 {
        if s1[i - 1] == s2[j - 1] {
            lcs.push(s1[i - 1]);
            i -= 1;
            j -= 1;
        } else if table.get(i - 1, j) >= table.get(i, j - 1) {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    lcs.reverse();
    lcs.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tester::is_common_subsequence;

    #[test]
    fn test_agcat_gac() {
        let outcome = lcs_dp("AGCAT", "GAC");
        // "GA" is the other maximum-length answer; the up-on-tie walk
        // always picks "AC".
        assert_eq!(outcome.lcs, "AC");
        assert_eq!(outcome.comparisons, 15);
        assert_eq!(outcome.len1, 5);
        assert_eq!(outcome.len2, 3);
        assert_eq!(outcome.table.get(5, 3), 2);
    }

    #[test]
    fn test_identical_sequences() {
        let outcome = lcs_dp("ATG", "ATG");
        assert_eq!(outcome.lcs, "ATG");
        assert_eq!(outcome.comparisons, 9);
    }

    #[test]
    fn test_empty_inputs() {
        let outcome = lcs_dp("", "GATTACA");
        assert_eq!(outcome.lcs, "");
        assert_eq!(outcome.comparisons, 0);
        assert!(outcome.table.rows().all(|row| row.iter().all(|&v| v == 0)));

        let outcome = lcs_dp("GATTACA", "");
        assert_eq!(outcome.lcs, "");
        assert_eq!(outcome.comparisons, 0);
    }

    #[test]
    fn test_table_invariants() {
        let outcome = lcs_dp("GATTACA", "TACG");
        let table = &outcome.table;
        let (rows, cols) = table.dimensions();
        assert_eq!((rows, cols), (8, 5));
        for i in 0..rows {
            assert_eq!(table.get(i, 0), 0);
        }
        for j in 0..cols {
            assert_eq!(table.get(0, j), 0);
        }
        // Lengths never decrease along a row or column.
        for i in 1..rows {
            for j in 1..cols {
                assert!(table.get(i, j) >= table.get(i - 1, j));
                assert!(table.get(i, j) >= table.get(i, j - 1));
            }
        }
    }

    #[test]
    fn test_tie_break_skips_first_sequence() {
        // Both "A" and "G" are valid answers; the up-on-tie rule keeps the
        // symbol matched nearest the start of the first sequence.
        assert_eq!(lcs_dp("AG", "GA").lcs, "A");
    }

    #[test]
    fn test_result_is_a_common_subsequence() {
        let pairs = [
            ("AGCAT", "GAC"),
            ("GATTACA", "TACG"),
            ("ACGTACGT", "TGCATGCA"),
            ("AAAA", "AA"),
        ];
        for (seq1, seq2) in pairs {
            let outcome = lcs_dp(seq1, seq2);
            let (common, _) = is_common_subsequence(&outcome.lcs, &[seq1, seq2]);
            assert!(common, "'{}' not common to {} / {}", outcome.lcs, seq1, seq2);
        }
    }
}
