// Curated dictionary of Uruguayan institutions, matched in two tiers.
//
// Token tier: single-word entries (mostly acronyms like IRPF or BPS) match a
// title token exactly, case-sensitive. Phrase tier: multi-word entries match
// as a case-insensitive substring anywhere in the title. Single-word entries
// never go through substring search, so "MEC" does not fire inside "MECánica".

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Built-in entries. Acronyms first, then multi-word names.
pub const BUILTIN_ENTRIES: &[&str] = &[
    // Taxes and public bodies
    "IRPF", "IVA", "IASS", "BPS", "DGI", "BCU", "BROU", "BHU", "ANV", "ANEP", "CODICEN",
    "UTE", "OSE", "ANTEL", "ANCAP", "ASSE", "INAU", "INISA", "MIDES", "MEF", "MSP", "MEC",
    "MTOP", "MIEM", "MGAP", "MVOT", "MTSS", "MRREE", "MDN", "MINTUR", "INE", "INAC", "INIA",
    "LATU", "OPP", "AGESIC", "URSEA", "URSEC", "JUTEP", "SODRE", "UDELAR", "UTEC", "AFAP",
    "SMU", "AUF", "CUTCSA", "PIT-CNT", "FA", "IM",
    // Institutions with multi-word names
    "Frente Amplio",
    "Partido Nacional",
    "Partido Colorado",
    "Cabildo Abierto",
    "Partido Independiente",
    "Poder Ejecutivo",
    "Poder Judicial",
    "Suprema Corte de Justicia",
    "Fiscalía General",
    "Corte Electoral",
    "Tribunal de Cuentas",
    "Intendencia de Montevideo",
    "Intendencia de Canelones",
    "Junta Departamental",
    "Torre Ejecutiva",
    "Banco Central",
    "Banco República",
    "Ministerio del Interior",
    "Hospital de Clínicas",
    "Universidad de la República",
];

#[derive(Debug, Deserialize)]
struct DictionaryFile {
    entries: Vec<String>,
}

/// Two-tier entity dictionary.
#[derive(Debug, Clone, Default)]
pub struct EntityDictionary {
    /// Single-word entries in insertion order (for listing)
    tokens: Vec<String>,
    token_set: HashSet<String>,
    /// Multi-word entries with their lowercase form for matching
    phrases: Vec<(String, String)>,
}

impl EntityDictionary {
    /// The dictionary shipped with the crate.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_ENTRIES.iter().copied())
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dictionary = Self::default();
        dictionary.extend(entries);
        dictionary
    }

    /// Built-in entries plus the ones listed in a JSON file of the form
    /// `{"entries": ["SINAE", "Plan Ceibal"]}`.
    pub fn builtin_with_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read entity dictionary {}", path.display()))?;
        let file: DictionaryFile = serde_json::from_str(&content)
            .with_context(|| format!("Invalid entity dictionary {}", path.display()))?;

        let mut dictionary = Self::builtin();
        dictionary.extend(file.entries);
        Ok(dictionary)
    }

    /// Add entries, routing each to its tier. Blank and duplicate entries are skipped.
    pub fn extend<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for entry in entries {
            let entry: String = entry.into();
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            if entry.contains(' ') {
                let lower = entry.to_lowercase();
                if !self.phrases.iter().any(|(_, l)| *l == lower) {
                    self.phrases.push((entry.to_string(), lower));
                }
            } else if self.token_set.insert(entry.to_string()) {
                self.tokens.push(entry.to_string());
            }
        }
    }

    /// Token tier: entries equal to a whitespace-separated title token
    /// (surrounding punctuation stripped), in title order.
    pub fn match_tokens(&self, title: &str) -> Vec<String> {
        title
            .split_whitespace()
            .map(strip_punctuation)
            .filter(|token| self.token_set.contains(*token))
            .map(str::to_string)
            .collect()
    }

    /// Phrase tier: multi-word entries found anywhere in the title, ignoring
    /// case, in dictionary order. The dictionary spelling is returned.
    pub fn match_phrases(&self, title: &str) -> Vec<String> {
        let lower = title.to_lowercase();
        self.phrases
            .iter()
            .filter(|(_, phrase)| lower.contains(phrase.as_str()))
            .map(|(entry, _)| entry.clone())
            .collect()
    }

    pub fn token_entries(&self) -> &[String] {
        &self.tokens
    }

    pub fn phrase_entries(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(|(entry, _)| entry.as_str())
    }

    pub fn len(&self) -> usize {
        self.tokens.len() + self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Trim leading and trailing characters that can't belong to an entry.
/// Inner hyphens survive ("PIT-CNT").
fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}
