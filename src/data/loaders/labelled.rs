// labelled.rs - "Label = Sequence" line format loader

use crate::data::sequence::{validate_residues, Sequence, SequenceSet};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Load a labelled sequence file.
///
/// One `Label = Sequence` pair per line. Blank lines and lines starting with
/// `#` are skipped; anything else must split on `=` into exactly two parts.
pub fn load_labelled(path: &Path) -> Result<SequenceSet, String> {
    let file = File::open(path)
        .map_err(|e| format!("Failed to open sequence file '{}': {}", path.display(), e))?;
    from_reader(file)
}

/// Parse labelled sequences from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<SequenceSet, String> {
    let reader = BufReader::new(reader);
    let mut set = SequenceSet::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split('=').collect();
        if parts.len() != 2 {
            return Err(format!(
                "Invalid format at line {}: '{}'. Expected 'Label = Sequence'",
                line_num + 1,
                line
            ));
        }

        let label = parts[0].trim().to_string();
        let residues = parts[1].trim().to_string();
        if residues.is_empty() {
            return Err(format!(
                "Empty sequence for '{}' at line {}",
                label,
                line_num + 1
            ));
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
    fn test_loads_labelled_lines() {
        let input = "S1 = ACGT\nS2 = GATTACA\n";
        let set = from_reader(Cursor::new(input)).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.label(0), "S1");
        assert_eq!(set.residues(0), "ACGT");
        assert_eq!(set.label(1), "S2");
        assert_eq!(set.residues(1), "GATTACA");
    }

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let input = "# sample data\n\nS1 = ACGT\n\n# trailing comment\n";
        let set = from_reader(Cursor::new(input)).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_rejects_bad_alphabet() {
        let error = from_reader(Cursor::new("S1 = ACGX\n")).unwrap_err();
        assert!(error.contains("S1"));
        assert!(error.contains('X'));
    }

    #[test]
    fn test_rejects_malformed_line() {
        let error = from_reader(Cursor::new("just a sequence\n")).unwrap_err();
        assert!(error.contains("line 1"));
        assert!(error.contains("Expected 'Label = Sequence'"));

        let error = from_reader(Cursor::new("S1 = AC = GT\n")).unwrap_err();
        assert!(error.contains("line 1"));
    }

    #[test]
    fn test_rejects_empty_sequence() {
        let error = from_reader(Cursor::new("S1 =\n")).unwrap_err();
        assert!(error.contains("Empty sequence"));
        assert!(error.contains("S1"));
    }

    #[test]
    fn test_missing_file_error_names_path() {
        let error = load_labelled(Path::new("/nonexistent/sequences.txt")).unwrap_err();
        assert!(error.contains("/nonexistent/sequences.txt"));
    }
}
