use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::entities::EntityDictionary;

/// Rows shown in the terminal table when neither the flag nor the
/// environment says otherwise.
pub const DEFAULT_DISPLAY_LIMIT: usize = 20;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// setting has a default, so an empty environment is valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// How many report rows the terminal table shows (TITULARES_DISPLAY_LIMIT)
    pub display_limit: usize,
    /// Extra dictionary entries merged over the built-in list
    /// (TITULARES_ENTITY_DICTIONARY, a JSON file)
    pub dictionary_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_limit: DEFAULT_DISPLAY_LIMIT,
            dictionary_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let display_limit = match env::var("TITULARES_DISPLAY_LIMIT") {
            Ok(raw) => parse_limit(&raw)?,
            Err(_) => DEFAULT_DISPLAY_LIMIT,
        };

        let dictionary_path = env::var("TITULARES_ENTITY_DICTIONARY")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            display_limit,
            dictionary_path,
        })
    }

    /// The effective entity dictionary: built-in entries plus the
    /// configured file, if any.
    pub fn entity_dictionary(&self) -> Result<EntityDictionary> {
        match &self.dictionary_path {
            Some(path) => EntityDictionary::builtin_with_file(path).with_context(|| {
                format!(
                    "Failed to load TITULARES_ENTITY_DICTIONARY from {}",
                    path.display()
                )
            }),
            None => Ok(EntityDictionary::builtin()),
        }
    }
}

fn parse_limit(raw: &str) -> Result<usize> {
    let limit: usize = raw.trim().parse().with_context(|| {
        format!("TITULARES_DISPLAY_LIMIT must be a positive number, got '{raw}'")
    })?;
    if limit == 0 {
        anyhow::bail!("TITULARES_DISPLAY_LIMIT must be at least 1");
    }
    Ok(limit)
}
