// Style classifier — narrative, declarative or descriptive.
//
// A title is narrative when something happens (a verb) to someone (an entity).
// The declarative rule only fires when the tagger missed the reporting verb:
// reporting verbs are verbs, so rule 1 normally catches them first. It stays
// as the fallback for tagger misses.

use serde::Serialize;

use crate::entities::EntitySet;
use crate::nlp::{Analysis, Analyzer};

/// Reporting verbs that mark a title as someone's statement.
pub const DECLARATIVE_VERBS: [&str; 32] = [
    "anunció",
    "confirmó",
    "decidió",
    "rechazó",
    "afirmó",
    "aseguró",
    "advirtió",
    "denunció",
    "reveló",
    "declaró",
    "sostuvo",
    "explicó",
    "señaló",
    "admitió",
    "reconoció",
    "negó",
    "pidió",
    "reclamó",
    "propuso",
    "criticó",
    "defendió",
    "respondió",
    "dijo",
    "destacó",
    "informó",
    "manifestó",
    "planteó",
    "cuestionó",
    "expresó",
    "aprobó",
    "presentó",
    "ordenó",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Narrative,
    Declarative,
    Descriptive,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Narrative => "narrative",
            Style::Declarative => "declarative",
            Style::Descriptive => "descriptive",
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify style from an existing analysis of the title.
pub fn classify_style(analysis: &Analysis, entities: &EntitySet) -> Style {
    if entities.is_empty() {
        return Style::Descriptive;
    }

    if analysis.has_verb() {
        return Style::Narrative;
    }

    let declarative = analysis.tokens.iter().any(|token| {
        is_declarative_verb(&token.text.to_lowercase())
            || is_declarative_verb(&token.lemma.to_lowercase())
    });
    if declarative {
        return Style::Declarative;
    }

    Style::Descriptive
}

/// Run the analyzer on `title` and classify its style.
pub fn style(analyzer: &dyn Analyzer, title: &str, entities: &EntitySet) -> Style {
    classify_style(&analyzer.analyze(title), entities)
}

fn is_declarative_verb(word: &str) -> bool {
    DECLARATIVE_VERBS.contains(&word)
}
