//! Character classification against the grapheme catalog.

use std::ops::Deref;

use crate::catalog::{Catalog, Category, Grapheme};

/// One input character after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified<'c> {
    Known(&'c Grapheme),
    /// Not in the catalog; carries the raw character as both sounds.
    Foreign(Grapheme),
}

impl Classified<'_> {
    pub fn category(&self) -> Category {
        match self {
            Classified::Known(g) => g.category,
            Classified::Foreign(_) => Category::Foreign,
        }
    }
}

impl Deref for Classified<'_> {
    type Target = Grapheme;

    fn deref(&self) -> &Grapheme {
        match self {
            Classified::Known(g) => *g,
            Classified::Foreign(g) => g,
        }
    }
}

pub fn classify(catalog: &Catalog, c: char) -> Classified<'_> {
    match catalog.lookup(c) {
        Some(g) => Classified::Known(g),
        None => Classified::Foreign(Grapheme::foreign(c)),
    }
}

/// Classify every character of `word`, in reading order.
pub fn classify_word<'c>(catalog: &'c Catalog, word: &str) -> Vec<Classified<'c>> {
    word.chars().map(|c| classify(catalog, c)).collect()
}
