// Tone classifier — interrogative, exclamatory or neutral.
//
// Questions win over exclamations: "¿Increíble?" is interrogative.

use serde::Serialize;

/// Words that open a question even when the title drops the "¿".
const INTERROGATIVE_LEADS: [&str; 10] = [
    "qué", "quién", "quiénes", "cuándo", "cómo", "dónde", "cuál", "cuáles", "por qué", "para qué",
];

/// Sensational vocabulary, matched as case-insensitive substrings.
const EXCLAMATORY_WORDS: [&str; 12] = [
    "insólito",
    "sorprendente",
    "impresionante",
    "increíble",
    "dramático",
    "emotivo",
    "desgarrador",
    "escándalo",
    "alerta",
    "brutal",
    "impactante",
    "¡atención!",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Interrogative,
    Exclamatory,
    Neutral,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Interrogative => "interrogative",
            Tone::Exclamatory => "exclamatory",
            Tone::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify the tone of a title. First matching rule wins.
pub fn classify_tone(title: &str) -> Tone {
    let lower = title.to_lowercase();

    let question_mark = title.contains('¿') || title.contains('?');
    let question_lead = INTERROGATIVE_LEADS
        .iter()
        .any(|lead| lower.starts_with(&format!("{lead} ")));
    if question_mark || question_lead {
        return Tone::Interrogative;
    }

    let exclamation_mark = title.contains('¡') || title.contains('!');
    if exclamation_mark || EXCLAMATORY_WORDS.iter().any(|w| lower.contains(w)) {
        return Tone::Exclamatory;
    }

    Tone::Neutral
}
