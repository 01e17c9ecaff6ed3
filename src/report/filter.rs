// Keyword filter over report titles.

use anyhow::{Context, Result};
use regex::Regex;

/// Whole-word, case-insensitive title filter. An empty or blank term
/// matches everything.
#[derive(Debug, Clone)]
pub struct KeywordFilter {
    pattern: Option<Regex>,
}

impl KeywordFilter {
    pub fn new(term: &str) -> Result<Self> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Self { pattern: None });
        }

        // Word boundaries are Unicode-aware, so "economía" is one word
        let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term)))
            .with_context(|| format!("Cannot build a filter for '{term}'"))?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    pub fn is_active(&self) -> bool {
        self.pattern.is_some()
    }

    pub fn matches(&self, title: &str) -> bool {
        self.pattern.as_ref().map_or(true, |p| p.is_match(title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_term_matches_everything() {
        for term in ["", "   ", "\t"] {
            let filter = KeywordFilter::new(term).unwrap();
            assert!(!filter.is_active());
            assert!(filter.matches("cualquier cosa"));
        }
    }

    #[test]
    fn test_whole_word_only() {
        let filter = KeywordFilter::new("dólar").unwrap();
        assert!(filter.matches("Sube el DÓLAR otra vez"));
        assert!(filter.matches("Dólar: qué esperar"));
        assert!(!filter.matches("Los dólares del Estado"));
    }

    #[test]
    fn test_accented_letters_are_word_characters() {
        let filter = KeywordFilter::new("econom").unwrap();
        assert!(!filter.matches("La economía crece"));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let filter = KeywordFilter::new("PIT-CNT").unwrap();
        assert!(filter.matches("Paro del PIT-CNT el jueves"));
        let filter = KeywordFilter::new("a.b").unwrap();
        assert!(!filter.matches("axb"));
    }

    #[test]
    fn test_multi_word_term() {
        let filter = KeywordFilter::new("frente amplio").unwrap();
        assert!(filter.matches("Internas del Frente Amplio"));
    }
}
