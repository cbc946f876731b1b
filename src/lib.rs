//! Eastern-Syriac to IPA and Latin transcription.
//!
//! Text is split into words, each word's characters are classified against
//! the grapheme catalog, grouped into letter-anchored tokens, and rendered
//! by context rules that look at the neighbouring tokens.

pub mod batch;
pub mod catalog;
pub mod classify;
pub mod engine;
pub mod rules;
pub mod token;
pub mod trace_init;
pub mod transcribe;

pub use catalog::{Catalog, CatalogError, Category, Grapheme};
pub use engine::{OutputForm, Transcription};
pub use transcribe::{transcribe, transcribe_both, Lexicon, Transcriber};
