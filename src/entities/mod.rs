// Entity extraction — analyzer spans plus the curated institutional dictionary.

pub mod dictionary;
pub mod extractor;

pub use dictionary::EntityDictionary;
pub use extractor::{EntityExtractor, EntitySet};
