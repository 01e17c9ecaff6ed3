// Analyzer trait — the swap-ready abstraction over tokenization, tagging and NER.
//
// Classifiers never call a concrete analyzer. They receive an `Analysis`
// (or a `&dyn Analyzer`) so tests can inject a stub with hand-picked tags.

use serde::Serialize;

/// Coarse part-of-speech tags. Only the distinctions the classifiers
/// care about are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Verb,
    /// ser / estar / haber and friends. Kept apart from `Verb` so that
    /// "es" or "fue" alone does not make a title narrative.
    Auxiliary,
    Adverb,
    /// Closed-class words: articles, prepositions, pronouns, conjunctions.
    Function,
    Numeral,
    Punctuation,
}

/// A single token with its lemma and tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
    /// Character offset of the token in the analyzed text
    pub start: usize,
}

impl Token {
    pub fn new(text: &str, lemma: &str, pos: PartOfSpeech, start: usize) -> Self {
        Self {
            text: text.to_string(),
            lemma: lemma.to_string(),
            pos,
            start,
        }
    }

    pub fn is_verb(&self) -> bool {
        self.pos == PartOfSpeech::Verb
    }
}

/// Type label attached to a named-entity span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityLabel {
    Person,
    Organization,
    Location,
    /// Capitalized span the analyzer could not place. Not reported as an entity.
    Misc,
}

impl EntityLabel {
    /// Whether spans with this label count as entities for a title.
    pub fn is_named(&self) -> bool {
        matches!(
            self,
            EntityLabel::Person | EntityLabel::Organization | EntityLabel::Location
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySpan {
    /// Exact text of the span as it appears in the title
    pub text: String,
    pub label: EntityLabel,
}

impl EntitySpan {
    pub fn new(text: &str, label: EntityLabel) -> Self {
        Self {
            text: text.to_string(),
            label,
        }
    }
}

/// Everything an analyzer knows about one piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub entities: Vec<EntitySpan>,
}

impl Analysis {
    pub fn has_verb(&self) -> bool {
        self.tokens.iter().any(Token::is_verb)
    }

    /// Spans labeled person, organization or location, in text order.
    pub fn named_entities(&self) -> impl Iterator<Item = &EntitySpan> {
        self.entities.iter().filter(|e| e.label.is_named())
    }
}

/// Trait for the NLP capability the classifiers consume.
///
/// Implementations are shared read-only across the whole run, so they must
/// be `Send + Sync` and `analyze` must not need `&mut self`.
pub trait Analyzer: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Tokenize, tag and extract entity spans from `text`.
    fn analyze(&self, text: &str) -> Analysis;
}
