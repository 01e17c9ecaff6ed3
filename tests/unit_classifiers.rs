// Unit tests for the title classifiers.
//
// Tests each classifier through the public API: tone precedence, quotation
// marks, entity position thresholds, numeric formats and counts, and style
// with a stub analyzer so the outcome does not depend on the lexicon. The
// last section runs the built-in analyzer end to end on a few headlines.

use titulares::classify::numeric::{numeric_profile, spelled_numbers};
use titulares::classify::position::classify_entity_position;
use titulares::classify::quote::has_quote;
use titulares::classify::style::style;
use titulares::classify::tone::classify_tone;
use titulares::classify::{classify_title, EntityPosition, NumericFormat, Style, Tone};
use titulares::entities::{EntityExtractor, EntitySet};
use titulares::nlp::{Analysis, Analyzer, PartOfSpeech, Token};

/// Tags a fixed list of words as verbs and everything else as nouns.
/// Never produces entity spans.
struct StubAnalyzer {
    verbs: Vec<&'static str>,
}

impl StubAnalyzer {
    fn new(verbs: &[&'static str]) -> Self {
        Self {
            verbs: verbs.to_vec(),
        }
    }
}

impl Analyzer for StubAnalyzer {
    fn name(&self) -> &str {
        "stub"
    }

    fn analyze(&self, text: &str) -> Analysis {
        let mut offset = 0;
        let tokens = text
            .split_whitespace()
            .map(|word| {
                let pos = if self.verbs.contains(&word) {
                    PartOfSpeech::Verb
                } else {
                    PartOfSpeech::Noun
                };
                let token = Token::new(word, &word.to_lowercase(), pos, offset);
                offset += word.chars().count() + 1;
                token
            })
            .collect();
        Analysis {
            tokens,
            entities: Vec::new(),
        }
    }
}

fn set(entities: &[&str]) -> EntitySet {
    entities.iter().copied().collect()
}

// ============================================================
// Tone
// ============================================================

#[test]
fn tone_question_marks_are_interrogative() {
    assert_eq!(classify_tone("¿Qué pasó con la IRPF?"), Tone::Interrogative);
    assert_eq!(classify_tone("Sube la nafta?"), Tone::Interrogative);
}

#[test]
fn tone_question_word_without_marks() {
    assert_eq!(classify_tone("Cómo sacar la cédula"), Tone::Interrogative);
    assert_eq!(classify_tone("Por qué llueve tanto"), Tone::Interrogative);
}

#[test]
fn tone_question_word_needs_following_space() {
    assert_eq!(classify_tone("Cuándo"), Tone::Neutral);
    assert_eq!(classify_tone("Quienes votaron"), Tone::Neutral);
}

#[test]
fn tone_exclamation_marks_and_words() {
    assert_eq!(classify_tone("¡Gol de Suárez!"), Tone::Exclamatory);
    assert_eq!(classify_tone("Un final INCREÍBLE en el Centenario"), Tone::Exclamatory);
    assert_eq!(classify_tone("Alerta amarilla por tormentas"), Tone::Exclamatory);
}

#[test]
fn tone_question_beats_exclamation() {
    assert_eq!(classify_tone("¿Un escándalo?"), Tone::Interrogative);
}

#[test]
fn tone_is_always_one_of_three() {
    for title in ["", "   ", "¿", "!", "Texto común", "12345", "\"cita\""] {
        let tone = classify_tone(title);
        assert!(matches!(
            tone,
            Tone::Interrogative | Tone::Exclamatory | Tone::Neutral
        ));
    }
}

// ============================================================
// Quotation
// ============================================================

#[test]
fn quote_straight_and_curly() {
    assert!(has_quote(r#"Orsi: "vamos a cumplir""#));
    assert!(has_quote("Orsi: “vamos a cumplir”"));
    assert!(has_quote("cierre sin abrir”"));
}

#[test]
fn quote_other_marks_do_not_count() {
    assert!(!has_quote("Los «cracks» del fútbol"));
    assert!(!has_quote("El 'Loco' Abreu vuelve"));
}

// ============================================================
// Entity position
// ============================================================

#[test]
fn position_empty_set_is_none() {
    assert_eq!(
        classify_entity_position("Cualquier titular", &EntitySet::new()),
        EntityPosition::None
    );
}

#[test]
fn position_thresholds() {
    let bps = set(&["BPS"]);
    assert_eq!(
        classify_entity_position("BPS anuncia cambios en las jubilaciones", &bps),
        EntityPosition::Start
    );
    // 29 / 49 ≈ 0.59
    assert_eq!(
        classify_entity_position("Las jubilaciones que paga el BPS cambian en marzo", &bps),
        EntityPosition::Middle
    );
    // 57 / 60 = 0.95
    assert_eq!(
        classify_entity_position(
            "Cambios en las jubilaciones del próximo año: qué dice el BPS",
            &bps
        ),
        EntityPosition::End
    );
}

#[test]
fn position_uses_first_entity_only() {
    let entities = set(&["PIT-CNT", "BPS"]);
    // PIT-CNT at 9 / 16, BPS is never looked at
    assert_eq!(
        classify_entity_position("Paro del PIT-CNT", &entities),
        EntityPosition::Middle
    );
}

#[test]
fn position_entity_not_in_title_is_none() {
    assert_eq!(
        classify_entity_position("Sin menciones", &set(&["ANCAP"])),
        EntityPosition::None
    );
}

// ============================================================
// Numeric
// ============================================================

#[test]
fn numeric_digits_only() {
    let profile = numeric_profile(r#"El ministro anunció "nuevas medidas" para 2025"#);
    assert_eq!(profile.format, NumericFormat::Digit);
    assert!(profile.has_numbers);
    assert_eq!(profile.count, 1);
}

#[test]
fn numeric_spelled_only() {
    let profile = numeric_profile("tres personas");
    assert_eq!(profile.format, NumericFormat::Spelled);
    assert_eq!(profile.count, 1);
}

#[test]
fn numeric_both_counts_distinct_words() {
    // "dos" twice counts once; 3 and 10 count separately
    let profile = numeric_profile("Dos de cada 10: los dos casos y 3 más");
    assert_eq!(profile.format, NumericFormat::Both);
    assert_eq!(profile.count, 3);
}

#[test]
fn numeric_words_are_whole_words() {
    assert!(spelled_numbers("Una docena de milanesas").is_empty());
    assert!(spelled_numbers("Cientos de personas").is_empty());
    let found = spelled_numbers("Mil, dos mil: ¿cuántos?");
    assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["dos", "mil"]);
}

#[test]
fn numeric_none() {
    let profile = numeric_profile("Llueve en Montevideo");
    assert_eq!(profile.format, NumericFormat::None);
    assert!(!profile.has_numbers);
    assert_eq!(profile.count, 0);
}

// ============================================================
// Style (stub analyzer)
// ============================================================

#[test]
fn style_verb_and_entity_is_narrative() {
    let analyzer = StubAnalyzer::new(&["paga"]);
    assert_eq!(
        style(&analyzer, "El BPS paga el aguinaldo", &set(&["BPS"])),
        Style::Narrative
    );
}

#[test]
fn style_reporting_verb_fallback_is_declarative() {
    // The stub misses the verb; the reporting-verb list still catches it
    let analyzer = StubAnalyzer::new(&[]);
    assert_eq!(
        style(&analyzer, "El BPS confirmó el aguinaldo", &set(&["BPS"])),
        Style::Declarative
    );
}

#[test]
fn style_without_entities_is_descriptive() {
    let analyzer = StubAnalyzer::new(&["paga", "confirmó"]);
    assert_eq!(
        style(&analyzer, "Quién paga y quién confirmó", &EntitySet::new()),
        Style::Descriptive
    );
}

// ============================================================
// classify_title
// ============================================================

#[test]
fn classify_question_with_acronym() {
    let analyzer = StubAnalyzer::new(&["pasó"]);
    let c = classify_title(&analyzer, &EntityExtractor::default(), "¿Qué pasó con la IRPF?");
    assert_eq!(c.tone, Tone::Interrogative);
    assert!(!c.has_quote);
    assert!(c.entities.contains("IRPF"));
    assert_eq!(c.style, Style::Narrative);
}

#[test]
fn classify_quote_and_year() {
    let analyzer = StubAnalyzer::new(&["anunció"]);
    let c = classify_title(
        &analyzer,
        &EntityExtractor::default(),
        r#"El ministro anunció "nuevas medidas" para 2025"#,
    );
    assert!(c.has_quote);
    assert_eq!(c.numeric.format, NumericFormat::Digit);
    assert_eq!(c.numeric.count, 1);
    assert_eq!(c.tone, Tone::Neutral);
    assert!(c.entities.is_empty());
    assert_eq!(c.entity_position, EntityPosition::None);
    assert_eq!(c.style, Style::Descriptive);
}

#[test]
fn classify_spelled_number() {
    let analyzer = StubAnalyzer::new(&[]);
    let c = classify_title(&analyzer, &EntityExtractor::default(), "tres personas");
    assert_eq!(c.numeric.format, NumericFormat::Spelled);
    assert_eq!(c.numeric.count, 1);
}

// ============================================================
// Built-in analyzer
// ============================================================

#[test]
fn lexicon_headline_end_to_end() {
    let analyzer = titulares::nlp::shared().unwrap();
    let c = classify_title(
        analyzer.as_ref(),
        &EntityExtractor::default(),
        "Lacalle Pou anunció cambios en el BPS",
    );
    let entities: Vec<&str> = c.entities.iter().collect();
    assert_eq!(entities, vec!["Lacalle Pou", "BPS"]);
    assert_eq!(c.entity_position, EntityPosition::Start);
    assert_eq!(c.style, Style::Narrative);
    assert_eq!(c.tone, Tone::Neutral);
}

#[test]
fn lexicon_question_keeps_dictionary_acronym() {
    let analyzer = titulares::nlp::shared().unwrap();
    let c = classify_title(
        analyzer.as_ref(),
        &EntityExtractor::default(),
        "¿Qué pasó con la IRPF?",
    );
    assert_eq!(c.tone, Tone::Interrogative);
    assert!(!c.has_quote);
    assert!(c.entities.contains("IRPF"));
    assert_eq!(c.entities.len(), 1);
}
