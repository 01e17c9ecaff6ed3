// Rule-based Spanish analyzer — the default NLP backend.
//
// Runs entirely locally with no model files. Tagging combines an embedded
// lexicon (verb forms, auxiliaries, gazetteer, organization cue words) with
// the Spanish stop-word list from the `stop-words` crate and a handful of
// conjugation suffix rules. Entity spans are runs of proper nouns, labeled
// from the gazetteer and cue words.

use std::collections::{HashMap, HashSet};

use anyhow::{Context, Result};
use serde::Deserialize;
use stop_words::{get, LANGUAGE};
use tracing::debug;

use super::traits::{Analysis, Analyzer, EntityLabel, EntitySpan, PartOfSpeech, Token};

const LEXICON_JSON: &str = include_str!("lexicon_es.json");

/// Conjugation endings mapped to the infinitive ending they most likely
/// come from. Longest endings first.
const VERB_SUFFIXES: [(&str, &str); 12] = [
    ("ieron", "er"),
    ("iendo", "er"),
    ("aron", "ar"),
    ("arán", "ar"),
    ("erán", "er"),
    ("irán", "ir"),
    ("ando", "ar"),
    ("ará", "ar"),
    ("erá", "er"),
    ("irá", "ir"),
    ("ió", "er"),
    ("ó", "ar"),
];

/// Stems shorter than this are never treated as verbs ("cuando", "dónde").
const MIN_VERB_STEM: usize = 3;

/// Punctuation after which the next word starts a new clause, so its
/// capital letter says nothing about it being a name.
const CLAUSE_BREAKS: [&str; 13] = [
    ".", ":", ";", "¿", "?", "¡", "!", "\"", "“", "”", "«", "»", "|",
];

#[derive(Debug, Deserialize)]
struct LexiconFile {
    verbs: HashMap<String, String>,
    auxiliaries: HashMap<String, String>,
    locations: Vec<String>,
    organization_cues: Vec<String>,
    connectors: Vec<String>,
}

/// Deterministic Spanish analyzer backed by the embedded lexicon.
pub struct LexiconAnalyzer {
    verbs: HashMap<String, String>,
    auxiliaries: HashMap<String, String>,
    locations: HashSet<String>,
    organization_cues: HashSet<String>,
    connectors: HashSet<String>,
    stop_words: HashSet<String>,
}

impl LexiconAnalyzer {
    /// Build the analyzer from the lexicon compiled into the binary.
    pub fn load() -> Result<Self> {
        Self::from_json(LEXICON_JSON)
    }

    /// Build the analyzer from a lexicon document with the same layout as
    /// the embedded one.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: LexiconFile =
            serde_json::from_str(json).context("Failed to parse the Spanish lexicon")?;

        if file.verbs.is_empty() {
            anyhow::bail!("Spanish lexicon contains no verb forms");
        }

        let stop_words: HashSet<String> = get(LANGUAGE::Spanish)
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect();
        if stop_words.is_empty() {
            anyhow::bail!("No Spanish stop words available; cannot tag function words");
        }

        debug!(
            verbs = file.verbs.len(),
            locations = file.locations.len(),
            stop_words = stop_words.len(),
            "Loaded Spanish lexicon"
        );

        Ok(Self {
            verbs: lowercase_map(file.verbs),
            auxiliaries: lowercase_map(file.auxiliaries),
            locations: lowercase_set(file.locations),
            organization_cues: lowercase_set(file.organization_cues),
            connectors: lowercase_set(file.connectors),
            stop_words,
        })
    }

    /// Tag a single word. `clause_initial` is true for the first word of the
    /// title and for words right after a clause break.
    fn tag(&self, word: &str, clause_initial: bool) -> (PartOfSpeech, String) {
        if !word.chars().any(char::is_alphanumeric) {
            return (PartOfSpeech::Punctuation, word.to_string());
        }

        let lower = word.to_lowercase();

        if word
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        {
            return (PartOfSpeech::Numeral, lower);
        }
        if let Some(lemma) = self.auxiliaries.get(&lower) {
            return (PartOfSpeech::Auxiliary, lemma.clone());
        }
        if let Some(lemma) = self.verbs.get(&lower) {
            return (PartOfSpeech::Verb, lemma.clone());
        }
        if is_acronym(word) || (is_capitalized(word) && !clause_initial) {
            return (PartOfSpeech::ProperNoun, word.to_string());
        }
        if self.stop_words.contains(&lower) {
            return (PartOfSpeech::Function, lower);
        }
        if self.locations.contains(&lower) {
            return (PartOfSpeech::ProperNoun, word.to_string());
        }
        if let Some(lemma) = infinitive_from_suffix(&lower) {
            return (PartOfSpeech::Verb, lemma);
        }
        if lower.ends_with("mente") && lower.chars().count() > 6 {
            return (PartOfSpeech::Adverb, lower);
        }

        (PartOfSpeech::Noun, lower)
    }

    fn is_connector(&self, token: &Token) -> bool {
        self.connectors.contains(&token.text.to_lowercase())
    }

    /// A span starts at a proper noun, or at a capitalized clause-initial
    /// word immediately followed by one ("Lacalle Pou", "Carolina Cosse").
    fn starts_span(&self, tokens: &[Token], i: usize) -> bool {
        let token = &tokens[i];
        if token.pos == PartOfSpeech::ProperNoun {
            return true;
        }
        token.pos == PartOfSpeech::Noun
            && is_capitalized(&token.text)
            && tokens
                .get(i + 1)
                .is_some_and(|next| next.pos == PartOfSpeech::ProperNoun)
    }

    /// Group tokens into entity spans and label them.
    fn entity_spans(&self, chars: &[char], tokens: &[Token]) -> Vec<EntitySpan> {
        let mut spans = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            if !self.starts_span(tokens, i) {
                i += 1;
                continue;
            }

            let mut end = i;
            let mut j = i + 1;
            loop {
                if tokens.get(j).is_some_and(|t| t.pos == PartOfSpeech::ProperNoun) {
                    end = j;
                    j += 1;
                    continue;
                }
                // Up to two connectors may sit between names: "Universidad de la República"
                let connectors = tokens[j.min(tokens.len())..]
                    .iter()
                    .take(2)
                    .take_while(|t| self.is_connector(t))
                    .count();
                if connectors > 0
                    && tokens
                        .get(j + connectors)
                        .is_some_and(|t| t.pos == PartOfSpeech::ProperNoun)
                {
                    end = j + connectors;
                    j = end + 1;
                    continue;
                }
                break;
            }

            spans.push(self.label_span(chars, &tokens[i..=end]));
            i = end + 1;
        }

        spans
    }

    fn label_span(&self, chars: &[char], span: &[Token]) -> EntitySpan {
        let first = &span[0];
        let last = &span[span.len() - 1];
        let end = (last.start + last.text.chars().count()).min(chars.len());
        let text: String = chars[first.start..end].iter().collect();
        let lower = text.to_lowercase();

        let words: Vec<&Token> = span.iter().filter(|t| !self.is_connector(t)).collect();

        let label = if self.locations.contains(&lower) {
            EntityLabel::Location
        } else if span
            .iter()
            .any(|t| self.organization_cues.contains(&t.text.to_lowercase()))
            || (words.len() == 1 && is_acronym(&words[0].text))
        {
            EntityLabel::Organization
        } else if words.iter().all(|t| is_acronym(&t.text)) {
            // All-caps kickers ("ÚLTIMO MOMENTO") are shouting, not names
            EntityLabel::Misc
        } else if words.len() >= 2 {
            EntityLabel::Person
        } else {
            EntityLabel::Misc
        };

        EntitySpan { text, label }
    }
}

impl Analyzer for LexiconAnalyzer {
    fn name(&self) -> &str {
        "lexicon-es"
    }

    fn analyze(&self, text: &str) -> Analysis {
        let chars: Vec<char> = text.chars().collect();
        let raw = tokenize(&chars);

        let mut tokens = Vec::with_capacity(raw.len());
        let mut clause_initial = true;

        for (start, word) in raw {
            let (pos, lemma) = self.tag(&word, clause_initial);
            clause_initial = if pos == PartOfSpeech::Punctuation {
                clause_initial || CLAUSE_BREAKS.contains(&word.as_str())
            } else {
                false
            };
            tokens.push(Token {
                text: word,
                lemma,
                pos,
                start,
            });
        }

        let entities = self.entity_spans(&chars, &tokens);

        Analysis { tokens, entities }
    }
}

/// Split text into word and punctuation tokens, with character offsets.
///
/// Words are runs of alphanumerics. A hyphen between two alphanumerics stays
/// inside the word ("PIT-CNT"), as does a dot or comma between two digits
/// ("1.500"). Every other non-space character is a token of its own.
fn tokenize(chars: &[char]) -> Vec<(usize, String)> {
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if !c.is_alphanumeric() {
            tokens.push((i, c.to_string()));
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() {
            if chars[i].is_alphanumeric() {
                i += 1;
                continue;
            }
            let prev = chars[i - 1];
            let Some(next) = chars.get(i + 1) else {
                break;
            };
            let joins = match chars[i] {
                '-' => prev.is_alphanumeric() && next.is_alphanumeric(),
                '.' | ',' => prev.is_ascii_digit() && next.is_ascii_digit(),
                _ => false,
            };
            if !joins {
                break;
            }
            i += 1;
        }
        tokens.push((start, chars[start..i].iter().collect()));
    }

    tokens
}

/// All letters uppercase, at least two characters ("IRPF", "PIT-CNT", "G20").
pub(crate) fn is_acronym(word: &str) -> bool {
    word.chars().count() >= 2
        && word.chars().any(char::is_alphabetic)
        && word
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase)
}

fn is_capitalized(word: &str) -> bool {
    word.chars().count() >= 2 && word.chars().next().is_some_and(char::is_uppercase)
}

fn infinitive_from_suffix(lower: &str) -> Option<String> {
    VERB_SUFFIXES.iter().find_map(|(suffix, ending)| {
        let stem = lower.strip_suffix(suffix)?;
        (stem.chars().count() >= MIN_VERB_STEM && stem.chars().all(char::is_alphabetic))
            .then(|| format!("{stem}{ending}"))
    })
}

fn lowercase_map(map: HashMap<String, String>) -> HashMap<String, String> {
    map.into_iter()
        .map(|(k, v)| (k.to_lowercase(), v.to_lowercase()))
        .collect()
}

fn lowercase_set(words: Vec<String>) -> HashSet<String> {
    words.into_iter().map(|w| w.to_lowercase()).collect()
}
