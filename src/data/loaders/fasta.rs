// fasta.rs - FASTA sequence loader

use crate::data::sequence::{validate_residues, Sequence, SequenceSet};
use bio::io::fasta;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Load sequences from a FASTA file. Record ids become labels.
pub fn load_fasta(path: &Path) -> Result<SequenceSet, String> {
    let file = File::open(path)
        .map_err(|e| format!("Failed to open FASTA file '{}': {}", path.display(), e))?;
    from_reader(BufReader::new(file))
}

/// Parse FASTA records from any reader.
///
/// Residues are uppercased before validation so lowercase-masked FASTA input
/// passes the same alphabet check as labelled input.
pub fn from_reader<R: Read>(reader: R) -> Result<SequenceSet, String> {
    let reader = fasta::Reader::new(reader);
    let mut set = SequenceSet::new();

    for record_result in reader.records() {
        let record = record_result.map_err(|e| format!("Invalid FASTA record: {}", e))?;
        let label = record.id().to_string();

        let residues = String::from_utf8(record.seq().to_vec())
            .map_err(|e| format!("Non-UTF-8 sequence data in record '{}': {}", label, e))?
            .to_uppercase();
        if residues.is_empty() {
            return Err(format!("Empty sequence in FASTA record '{}'", label));
        }
        validate_residues(&label, &residues)?;

        set.sequences.push(Sequence { label, residues });
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_loads_fasta_records() {
        let input = ">seq1 first sample\nACGT\n>seq2\nGATT\nACA\n";
        let set = from_reader(Cursor::new(input)).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.label(0), "seq1");
        assert_eq!(set.residues(0), "ACGT");
        // Multi-line records are concatenated.
        assert_eq!(set.residues(1), "GATTACA");
    }

    #[test]
    fn test_lowercase_residues_are_uppercased() {
        let set = from_reader(Cursor::new(">s\nacgt\n")).unwrap();
        assert_eq!(set.residues(0), "ACGT");
    }

    #[test]
    fn test_rejects_bad_alphabet() {
        let error = from_reader(Cursor::new(">s\nACGN\n")).unwrap_err();
        assert!(error.contains('N'));
    }

    #[test]
    fn test_missing_file_error_names_path() {
        let error = load_fasta(Path::new("/nonexistent/sequences.fasta")).unwrap_err();
        assert!(error.contains("/nonexistent/sequences.fasta"));
    }
}
