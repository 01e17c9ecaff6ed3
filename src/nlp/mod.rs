// NLP analysis — tokenization, part-of-speech tags and entity spans.
//
// The Analyzer trait defines the capability; LexiconAnalyzer is the built-in
// Spanish implementation. One analyzer is shared by the whole process.

pub mod lexicon;
pub mod traits;

use std::sync::Arc;

use anyhow::Result;
use once_cell::sync::OnceCell;
use tracing::info;

pub use traits::{Analysis, Analyzer, EntityLabel, EntitySpan, PartOfSpeech, Token};

static SHARED: OnceCell<Arc<dyn Analyzer>> = OnceCell::new();

/// The process-wide analyzer, built on first call and reused afterwards.
///
/// Call this once before touching any input so a broken analyzer stops the
/// run before a single row is processed. Pass the returned handle into the
/// classifiers; they never look it up themselves.
pub fn shared() -> Result<Arc<dyn Analyzer>> {
    SHARED
        .get_or_try_init(|| {
            let analyzer = lexicon::LexiconAnalyzer::load()?;
            info!(analyzer = analyzer.name(), "NLP analyzer initialized");
            Ok::<Arc<dyn Analyzer>, anyhow::Error>(Arc::new(analyzer))
        })
        .cloned()
}
