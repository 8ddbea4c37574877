use serde::Serialize;
use std::fmt;

/// Size of a built index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub documents: usize,
    /// Distinct indexed words
    pub words: usize,
    /// Distinct sampled trigrams
    pub trigrams: usize,
    /// Total entries across all word posting lists
    pub word_postings: usize,
    /// Total entries across all trigram posting lists
    pub trigram_postings: usize,
}

impl IndexStats {
    /// Average posting-list length for words
    pub fn avg_word_postings(&self) -> f64 {
        if self.words == 0 {
            0.0
        } else {
            self.word_postings as f64 / self.words as f64
        }
    }
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Index Statistics")?;
        writeln!(f, "================")?;
        writeln!(f)?;
        writeln!(f, "Document count:   {}", self.documents)?;
        writeln!(f, "Distinct words:   {}", self.words)?;
        writeln!(f, "Word postings:    {}", self.word_postings)?;
        writeln!(f, "Avg docs/word:    {:.2}", self.avg_word_postings())?;
        writeln!(f, "Trigrams:         {}", self.trigrams)?;
        write!(f, "Trigram postings: {}", self.trigram_postings)
    }
}
