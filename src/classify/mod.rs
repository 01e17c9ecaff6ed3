// Title classifiers — independent heuristics applied to every headline.
//
// Each submodule is a pure function of the title (plus the entity set or the
// analyzer output where needed). `classify_title` runs all of them once,
// sharing a single analyzer pass between entity extraction and style.

pub mod numeric;
pub mod position;
pub mod quote;
pub mod style;
pub mod tone;

use serde::Serialize;

use crate::entities::{EntityExtractor, EntitySet};
use crate::nlp::Analyzer;

pub use numeric::{NumericFormat, NumericProfile};
pub use position::EntityPosition;
pub use style::Style;
pub use tone::Tone;

/// Everything the classifiers say about one title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleClassification {
    pub entities: EntitySet,
    pub tone: Tone,
    pub has_quote: bool,
    pub entity_position: EntityPosition,
    pub style: Style,
    pub numeric: NumericProfile,
}

/// Run every classifier on `title`.
pub fn classify_title(
    analyzer: &dyn Analyzer,
    extractor: &EntityExtractor,
    title: &str,
) -> TitleClassification {
    let analysis = analyzer.analyze(title);
    let entities = extractor.extract(title, &analysis);

    TitleClassification {
        tone: tone::classify_tone(title),
        has_quote: quote::has_quote(title),
        entity_position: position::classify_entity_position(title, &entities),
        style: style::classify_style(&analysis, &entities),
        numeric: numeric::numeric_profile(title),
        entities,
    }
}
