// sequence.rs - Validated DNA sequence collection

use regex::Regex;
use std::path::Path;

/// Symbols the loaders accept.
pub const ALPHABET: [char; 4] = ['A', 'C', 'G', 'T'];

/// A single labelled DNA sequence.
#[derive(Debug, Clone)]
pub struct Sequence {
    pub label: String,
    pub residues: String,
}

/// Ordered collection of validated sequences.
///
/// Position in the collection identifies a sequence; the pair keys produced
/// by the evaluator index into this order, so it must not change between
/// loading and presentation.
#[derive(Debug, Clone, Default)]
pub struct SequenceSet {
    pub sequences: Vec<Sequence>,
}

impl SequenceSet {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self {
            sequences: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn label(&self, index: usize) -> &str {
        &self.sequences[index].label
    }

    pub fn residues(&self, index: usize) -> &str {
        &self.sequences[index].residues
    }

    /// Load sequences from a file, dispatching on the extension: FASTA for
    /// .fasta/.fa/.fna, the labelled line format otherwise.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

        let set = match extension {
            "fasta" | "fa" | "fna" => {
                println!("🧬 Loading FASTA sequences from: {}", path.display());
                crate::data::loaders::fasta::load_fasta(path)?
            }
            _ => {
                println!("🧬 Loading labelled sequences from: {}", path.display());
                crate::data::loaders::labelled::load_labelled(path)?
            }
        };

        println!("✅ Sequences loaded: {} entries", set.len());
        Ok(set)
    }

    /// Keep only sequences whose label passes the include/exclude filters.
    pub fn apply_label_filters(&mut self, include: Option<&Regex>, exclude: Option<&Regex>) {
        if include.is_none() && exclude.is_none() {
            return;
        }

        let initial = self.sequences.len();
        self.sequences.retain(|sequence| {
            if let Some(regex) = include {
                if !regex.is_match(&sequence.label) {
                    return false;
                }
            }
            if let Some(regex) = exclude {
                if regex.is_match(&sequence.label) {
                    return false;
                }
            }
            true
        });

        println!(
            "🔍 Label filters kept {} of {} sequences",
            self.sequences.len(),
            initial
        );
    }
}

/// Validate residues against the fixed alphabet.
///
/// The comparison engine never re-checks alphabet membership; loaders call
/// this once per sequence so everything downstream can assume clean input.
pub fn validate_residues(label: &str, residues: &str) -> Result<(), String> {
    for symbol in residues.chars() {
        if !ALPHABET.contains(&symbol) {
            return Err(format!(
                "Invalid sequence detected in {}: '{}' is not one of A, C, G, T",
                label, symbol
            ));
        }
    }
    Ok(())
}
