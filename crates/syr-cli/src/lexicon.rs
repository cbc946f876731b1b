//! Loading of the JSON word list used for proclitic detection.
//!
//! The file is a JSON object whose keys are bare word forms; values are
//! ignored.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("could not read dictionary: {0}")]
    Io(#[from] io::Error),
    #[error("dictionary is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dictionary must be a JSON object of word forms")]
    NotAnObject,
}

pub fn parse_lexicon(json: &str) -> Result<HashSet<String>, LexiconError> {
    match serde_json::from_str(json)? {
        serde_json::Value::Object(map) => Ok(map.into_iter().map(|(word, _)| word).collect()),
        _ => Err(LexiconError::NotAnObject),
    }
}

pub fn load_lexicon(path: &Path) -> Result<HashSet<String>, LexiconError> {
    let content = fs::read_to_string(path)?;
    parse_lexicon(&content)
}
