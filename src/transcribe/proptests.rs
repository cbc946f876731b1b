//! Property-based tests for whole-text transcription.

use proptest::prelude::*;

use super::*;
use crate::catalog::Category;

fn catalog_chars(filter: fn(Category) -> bool) -> Vec<char> {
    Catalog::global()
        .iter()
        .filter(|g| filter(g.category))
        .map(|g| g.surface)
        .collect()
}

/// Syriac words built only from letters and their marks.
fn arb_syriac_word() -> impl Strategy<Value = String> {
    let letters = catalog_chars(Category::is_base);
    let marks = catalog_chars(Category::is_diacritic);
    prop::collection::vec(
        prop_oneof![
            3 => prop::sample::select(letters),
            1 => prop::sample::select(marks),
        ],
        0..12,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn arb_foreign_char() -> impl Strategy<Value = char> {
    any::<char>().prop_filter("not in catalog, not a space", |c| {
        *c != ' ' && Catalog::global().lookup(*c).is_none()
    })
}

proptest! {
    #[test]
    fn transcription_is_total(word in arb_syriac_word()) {
        let out = transcribe_both(&word, None);
        prop_assert!(out.ipa.ends_with(' '));
        prop_assert!(out.latin.ends_with(' '));
    }

    #[test]
    fn one_output_word_per_input_word(words in prop::collection::vec(arb_syriac_word(), 1..6)) {
        let text = words.join(" ");
        let out = transcribe_both(&text, None);
        prop_assert_eq!(out.ipa.matches(' ').count(), words.len());
        prop_assert_eq!(out.latin.matches(' ').count(), words.len());
    }

    #[test]
    fn foreign_chars_pass_through(c in arb_foreign_char()) {
        let text = c.to_string();
        let expected = format!("{c} ");
        prop_assert_eq!(transcribe(&text, None, false), expected.clone());
        prop_assert_eq!(transcribe(&text, None, true), expected);
    }

    #[test]
    fn classification_is_stable(c in any::<char>()) {
        let catalog = Catalog::global();
        prop_assert_eq!(classify(catalog, c), classify(catalog, c));
    }

    #[test]
    fn single_form_matches_both(word in arb_syriac_word()) {
        let out = transcribe_both(&word, None);
        prop_assert_eq!(transcribe(&word, None, false), out.ipa);
        prop_assert_eq!(transcribe(&word, None, true), out.latin);
    }
}
