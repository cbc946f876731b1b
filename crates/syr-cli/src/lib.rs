pub mod commands;
pub mod lexicon;
