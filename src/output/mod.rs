// mod.rs - Result presentation and writers

use crate::core::{DpTable, PairMetrics, PairwiseEvaluation};
use crate::data::SequenceSet;
use serde::Serialize;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        create_dir_all(parent).map_err(|e| {
            format!(
                "Failed to create parent directory '{}': {}",
                parent.display(),
                e
            )
        })?;
    }
    Ok(())
}

/// Print the loaded sequences the way results will reference them.
pub fn print_sequences(sequences: &SequenceSet) {
    println!("Loaded Sequences:");
    for sequence in &sequences.sequences {
        println!("{}: {}", sequence.label, sequence.residues);
    }
}

/// Print one pair's DP table, row by row.
pub fn print_dp_table(table: &DpTable) {
    println!("DP Table:");
    for row in table.rows() {
        let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        println!("[{}]", cells.join(", "));
    }
}

/// Print the detailed per-pair report, optionally with DP tables.
pub fn print_pair_details(
    sequences: &SequenceSet,
    evaluation: &PairwiseEvaluation,
    show_tables: bool,
) {
    for (key, dp) in &evaluation.dp {
        let brute = &evaluation.brute[key];
        println!(
            "\nPair {}-{}",
            sequences.label(key.0),
            sequences.label(key.1)
        );
        println!(
            "Sequence 1 (Length {}): {}",
            dp.len1,
            sequences.residues(key.0)
        );
        println!(
            "Sequence 2 (Length {}): {}",
            dp.len2,
            sequences.residues(key.1)
        );
        if show_tables {
            if let Some(table) = evaluation.dp_tables.get(key) {
                print_dp_table(table);
            }
        }
        println!(
            "DP: '{}', Time={:.4}s, Comparisons={}",
            dp.lcs, dp.elapsed_seconds, dp.comparisons
        );
        println!(
            "BF: '{}', Time={:.4}s, Comparisons={}",
            brute.lcs, brute.elapsed_seconds, brute.comparisons
        );
        if let Some(candidates) = evaluation.truncated.get(key) {
            println!(
                "⚠️  Brute force truncated by the time budget after {} candidates",
                candidates
            );
        }
    }
}

/// Render the final fixed-width comparison table over both result sets.
pub fn render_table(sequences: &SequenceSet, evaluation: &PairwiseEvaluation) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<15} {:<8} {:<8} {:<27} {:<12} {:<15} {:<27} {:<12} {}\n",
        "Sequence Pair",
        "Length 1",
        "Length 2",
        "LCS DP",
        "Time DP (s)",
        "Comparisons DP",
        "LCS BF",
        "Time BF (s)",
        "Comparisons BF"
    ));
    out.push_str(&format!("{}\n", "-".repeat(135)));

    for (key, dp) in &evaluation.dp {
        let brute = &evaluation.brute[key];
        let pair = format!(
            "{}-{}",
            sequences.label(key.0),
            sequences.label(key.1)
        );
        out.push_str(&format!(
            "{:<15} {:<8} {:<8} {:<27} {:<12} {:<15} {:<27} {:<12} {}\n",
            pair,
            dp.len1,
            dp.len2,
            dp.lcs,
            format!("{:.4}", dp.elapsed_seconds),
            dp.comparisons,
            brute.lcs,
            format!("{:.4}", brute.elapsed_seconds),
            brute.comparisons
        ));
    }

    out
}

/// Write results in TSV format
pub fn write_tsv(
    file_path: &str,
    sequences: &SequenceSet,
    evaluation: &PairwiseEvaluation,
    command_line: &str,
) -> Result<(), String> {
    write_delimited(file_path, sequences, evaluation, command_line, '\t')
}

/// Write results in CSV format
pub fn write_csv(
    file_path: &str,
    sequences: &SequenceSet,
    evaluation: &PairwiseEvaluation,
    command_line: &str,
) -> Result<(), String> {
    write_delimited(file_path, sequences, evaluation, command_line, ',')
}

fn write_delimited(
    file_path: &str,
    sequences: &SequenceSet,
    evaluation: &PairwiseEvaluation,
    command_line: &str,
    delimiter: char,
) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);

    // Write command header
    writeln!(writer, "# Command: {}", command_line).map_err(|e| format!("Write error: {}", e))?;
    writeln!(
        writer,
        "# Generated: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )
    .map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# seqlcs v{}", env!("CARGO_PKG_VERSION"))
        .map_err(|e| format!("Write error: {}", e))?;

    // Write header
    let columns = [
        "pair",
        "length1",
        "length2",
        "lcs_dp",
        "time_dp_s",
        "comparisons_dp",
        "lcs_bf",
        "time_bf_s",
        "comparisons_bf",
        "bf_truncated",
    ];
    let header: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
    writeln!(writer, "{}", header.join(&delimiter.to_string()))
        .map_err(|e| format!("Write error: {}", e))?;

    // Write one row per pair
    for (key, dp) in &evaluation.dp {
        let brute = &evaluation.brute[key];
        let fields = [
            format!("{}-{}", sequences.label(key.0), sequences.label(key.1)),
            dp.len1.to_string(),
            dp.len2.to_string(),
            dp.lcs.clone(),
            format!("{:.4}", dp.elapsed_seconds),
            dp.comparisons.to_string(),
            brute.lcs.clone(),
            format!("{:.4}", brute.elapsed_seconds),
            brute.comparisons.to_string(),
            evaluation.truncated.contains_key(key).to_string(),
        ];
        writeln!(writer, "{}", fields.join(&delimiter.to_string()))
            .map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Results written to: {}", file_path);
    Ok(())
}

#[derive(Serialize)]
struct JsonMetadata {
    command: String,
    generated: String,
    version: &'static str,
}

#[derive(Serialize)]
struct JsonPair<'a> {
    pair: String,
    dp: &'a PairMetrics,
    brute_force: &'a PairMetrics,
    brute_force_truncated: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    metadata: JsonMetadata,
    pairs: Vec<JsonPair<'a>>,
}

/// Write results in JSON format; provenance goes into a metadata object
/// since JSON has no comment lines.
pub fn write_json(
    file_path: &str,
    sequences: &SequenceSet,
    evaluation: &PairwiseEvaluation,
    command_line: &str,
) -> Result<(), String> {
    ensure_parent_dir(file_path)?;

    let report = JsonReport {
        metadata: JsonMetadata {
            command: command_line.to_string(),
            generated: chrono::Utc::now()
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            version: env!("CARGO_PKG_VERSION"),
        },
        pairs: evaluation
            .dp
            .iter()
            .map(|(key, dp)| JsonPair {
                pair: format!("{}-{}", sequences.label(key.0), sequences.label(key.1)),
                dp,
                brute_force: &evaluation.brute[key],
                brute_force_truncated: evaluation.truncated.contains_key(key),
            })
            .collect(),
    };

    let data = serde_json::to_vec_pretty(&report)
        .map_err(|e| format!("Failed to serialize results: {}", e))?;
    std::fs::write(file_path, data)
        .map_err(|e| format!("Failed to write output file '{}': {}", file_path, e))?;

    println!("✅ Results written to: {}", file_path);
    Ok(())
}

/// Write results in the specified format
pub fn write_results(
    file_path: &str,
    format: &str,
    sequences: &SequenceSet,
    evaluation: &PairwiseEvaluation,
    command_line: &str,
) -> Result<(), String> {
    match format.to_lowercase().as_str() {
        "tsv" => write_tsv(file_path, sequences, evaluation, command_line),
        "csv" => write_csv(file_path, sequences, evaluation, command_line),
        "json" => write_json(file_path, sequences, evaluation, command_line),
        _ => Err(format!(
            "Unsupported output format: {}. Use: tsv, csv, json",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PairwiseEvaluator;
    use crate::data::{Sequence, SequenceSet};
    use std::time::Duration;

    fn evaluated_set() -> (SequenceSet, PairwiseEvaluation) {
        let sequences = SequenceSet {
            sequences: vec![
                Sequence {
                    label: "S1".to_string(),
                    residues: "AGCAT".to_string(),
                },
                Sequence {
                    label: "S2".to_string(),
                    residues: "GAC".to_string(),
                },
            ],
        };
        let evaluation =
            PairwiseEvaluator::new(Duration::from_secs(120)).evaluate(&sequences);
        (sequences, evaluation)
    }

    #[test]
    fn test_render_table_lists_each_pair() {
        let (sequences, evaluation) = evaluated_set();
        let table = render_table(&sequences, &evaluation);
        assert!(table.starts_with("Sequence Pair"));
        assert!(table.contains("S1-S2"));
        assert!(table.contains("AC"));
        assert!(table.contains("15"));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let (sequences, evaluation) = evaluated_set();
        let error =
            write_results("out.xml", "xml", &sequences, &evaluation, "seqlcs").unwrap_err();
        assert!(error.contains("xml"));
        assert!(error.contains("tsv, csv, json"));
    }

    #[test]
    fn test_json_pair_record_field_names() {
        let (sequences, evaluation) = evaluated_set();
        let key = (0usize, 1usize);
        let record = JsonPair {
            pair: format!("{}-{}", sequences.label(0), sequences.label(1)),
            dp: &evaluation.dp[&key],
            brute_force: &evaluation.brute[&key],
            brute_force_truncated: false,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"pair\":\"S1-S2\""));
        assert!(json.contains("\"elapsed_seconds\""));
        assert!(json.contains("\"comparisons\":15"));
    }
}
