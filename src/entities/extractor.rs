// Entity extraction — analyzer spans merged with dictionary matches.

use serde::Serialize;

use super::dictionary::EntityDictionary;
use crate::nlp::Analysis;

/// Unique entity strings in the order they were found.
///
/// Order is deterministic: analyzer spans in text order, then token-tier
/// dictionary matches in text order, then phrase-tier matches in dictionary
/// order. Uniqueness is by exact string, so "IRPF" and "Irpf" are distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EntitySet(Vec<String>);

impl EntitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity; returns false if it was already present.
    pub fn insert(&mut self, entity: impl Into<String>) -> bool {
        let entity = entity.into();
        if self.0.contains(&entity) {
            return false;
        }
        self.0.push(entity);
        true
    }

    /// The entity the position classifier looks at.
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn contains(&self, entity: &str) -> bool {
        self.0.iter().any(|e| e == entity)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }
}

impl<S: Into<String>> FromIterator<S> for EntitySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = EntitySet::new();
        for entity in iter {
            set.insert(entity);
        }
        set
    }
}

/// Combines analyzer entity spans with the institutional dictionary.
#[derive(Debug, Clone)]
pub struct EntityExtractor {
    dictionary: EntityDictionary,
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new(EntityDictionary::builtin())
    }
}

impl EntityExtractor {
    pub fn new(dictionary: EntityDictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &EntityDictionary {
        &self.dictionary
    }

    /// Extract the entity set of `title` given the analyzer's view of it.
    pub fn extract(&self, title: &str, analysis: &Analysis) -> EntitySet {
        let mut entities = EntitySet::new();

        for span in analysis.named_entities() {
            entities.insert(span.text.as_str());
        }
        for entry in self.dictionary.match_tokens(title) {
            entities.insert(entry);
        }
        for entry in self.dictionary.match_phrases(title) {
            entities.insert(entry);
        }

        entities
    }
}
