//! Whole-text transcription: word splitting, proclitic isolation, and
//! joining of per-word renderings.

#[cfg(test)]
mod proptests;

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::BuildHasher;

use tracing::{debug, debug_span};

use crate::catalog::letters::{BETH, DALATH, LAMMAD, WAW};
use crate::catalog::Catalog;
use crate::classify::{classify, classify_word};
use crate::engine::{render_word, OutputForm, Transcription};
use crate::token::tokenize;

/// Prefix letters that attach to a host word as particles (b-, d-, w-, l-).
pub const PROCLITIC_LETTERS: [char; 4] = [BETH, DALATH, WAW, LAMMAD];

/// Inserted after an isolated proclitic. Not in the catalog, so it forms a
/// foreign token of its own.
pub const PROCLITIC_SEPARATOR: char = '\'';

/// Set of known bare word forms, used only for membership.
pub trait Lexicon: Sync {
    fn contains(&self, word: &str) -> bool;
}

impl<S: BuildHasher + Sync> Lexicon for HashSet<String, S> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl<V: Sync, S: BuildHasher + Sync> Lexicon for HashMap<String, V, S> {
    fn contains(&self, word: &str) -> bool {
        self.contains_key(word)
    }
}

impl Lexicon for BTreeSet<String> {
    fn contains(&self, word: &str) -> bool {
        BTreeSet::contains(self, word)
    }
}

impl<V: Sync> Lexicon for BTreeMap<String, V> {
    fn contains(&self, word: &str) -> bool {
        self.contains_key(word)
    }
}

impl Lexicon for serde_json::Map<String, serde_json::Value> {
    fn contains(&self, word: &str) -> bool {
        self.contains_key(word)
    }
}

#[derive(Clone, Copy)]
pub struct Transcriber<'a> {
    catalog: &'a Catalog,
    lexicon: Option<&'a dyn Lexicon>,
}

impl<'a> Transcriber<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            lexicon: None,
        }
    }

    pub fn with_lexicon(mut self, lexicon: Option<&'a dyn Lexicon>) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// The word reduced to letters and their marks, without surrounding
    /// whitespace, punctuation or foreign characters.
    pub fn skeleton(&self, word: &str) -> String {
        word.trim()
            .chars()
            .filter(|&c| {
                let category = classify(self.catalog, c).category();
                category.is_base() || category.is_diacritic()
            })
            .collect()
    }

    /// If `word` is a proclitic letter glued to a host word the lexicon
    /// knows, return the word with a separator after the proclitic.
    pub fn isolate_proclitic(&self, word: &str) -> Option<String> {
        let lexicon = self.lexicon?;
        let skeleton = self.skeleton(word);

        let mut chars = skeleton.chars();
        let first = chars.next()?;
        let second = chars.next()?;
        if !PROCLITIC_LETTERS.contains(&first) {
            return None;
        }
        if classify(self.catalog, second).category().is_diacritic() {
            return None;
        }
        let host = &skeleton[first.len_utf8()..];
        if !lexicon.contains(host) {
            return None;
        }

        debug!(host, "isolated proclitic");
        let mut raw = word.chars();
        let head = raw.next()?;
        let mut split = String::with_capacity(word.len() + 1);
        split.push(head);
        split.push(PROCLITIC_SEPARATOR);
        split.push_str(raw.as_str());
        Some(split)
    }

    pub fn transcribe_word(&self, word: &str) -> Transcription {
        let _span = debug_span!("transcribe_word", word).entered();
        let isolated = self.isolate_proclitic(word);
        let word = isolated.as_deref().unwrap_or(word);

        let graphemes = classify_word(self.catalog, word);
        let names: Vec<&str> = graphemes.iter().map(|g| g.name.as_str()).collect();
        debug!(graphemes = ?names);
        render_word(&tokenize(graphemes))
    }

    /// Transcribe space-separated text. Every word's rendering is followed
    /// by one space; consecutive spaces yield empty words.
    pub fn transcribe_text(&self, text: &str) -> Transcription {
        let mut out = Transcription::default();
        for word in text.split(' ') {
            out.push_word(&self.transcribe_word(word));
        }
        out
    }
}

/// Transcribe `text` with the global catalog, returning one rendering.
pub fn transcribe(text: &str, dictionary: Option<&dyn Lexicon>, want_latin: bool) -> String {
    transcribe_both(text, dictionary).into_form(OutputForm::from_latin_flag(want_latin))
}

/// Transcribe `text` with the global catalog, returning both renderings.
pub fn transcribe_both(text: &str, dictionary: Option<&dyn Lexicon>) -> Transcription {
    Transcriber::new(Catalog::global())
        .with_lexicon(dictionary)
        .transcribe_text(text)
}
