//! Grouping of classified graphemes into letter-anchored tokens.

use crate::catalog::{Category, Grapheme};
use crate::classify::Classified;

/// A base letter with its attached marks, or a standalone foreign character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Token<'c> {
    pub base: Option<&'c Grapheme>,
    pub vowel: Option<&'c Grapheme>,
    pub modifier: Option<&'c Grapheme>,
    pub talqana: Option<&'c Grapheme>,
    pub qanuna: Option<&'c Grapheme>,
    pub siyameh: Option<&'c Grapheme>,
    pub punctuation: Option<&'c Grapheme>,
    pub foreign: Option<Grapheme>,
}

fn keep_first<'c>(slot: &mut Option<&'c Grapheme>, g: &'c Grapheme) {
    if slot.is_none() {
        *slot = Some(g);
    }
}

impl<'c> Token<'c> {
    /// Sort an accumulated group into slots. Repeated categories keep the
    /// first occurrence in reading order; later ones are dropped.
    pub fn from_group(group: &[&'c Grapheme]) -> Self {
        let mut token = Token::default();
        for &g in group {
            let slot = match g.category {
                Category::Letter | Category::Matres => &mut token.base,
                Category::Vowel => &mut token.vowel,
                Category::Modifier => &mut token.modifier,
                Category::Talqana => &mut token.talqana,
                Category::Qanuna => &mut token.qanuna,
                Category::Siyameh => &mut token.siyameh,
                Category::Punctuation => &mut token.punctuation,
                Category::Foreign => continue,
            };
            keep_first(slot, g);
        }
        token
    }

    pub fn foreign(g: Grapheme) -> Self {
        Token {
            foreign: Some(g),
            ..Token::default()
        }
    }

    pub fn has_vowel(&self) -> bool {
        self.vowel.is_some()
    }

    /// Whether the vowel sign attached here has one of the given names.
    pub fn vowel_is_any(&self, names: &[&str]) -> bool {
        self.vowel.is_some_and(|v| names.contains(&v.name.as_str()))
    }

    pub fn base_is(&self, surface: char) -> bool {
        self.base.is_some_and(|b| b.surface == surface)
    }
}

fn close<'c>(tokens: &mut Vec<Token<'c>>, open: &mut Vec<&'c Grapheme>) {
    if !open.is_empty() {
        tokens.push(Token::from_group(open));
        open.clear();
    }
}

/// Group one word's graphemes into tokens.
///
/// A letter closes the open group and starts a new one. A foreign character
/// closes the open group and becomes a token of its own. Everything else
/// attaches to the open group, which may have no letter yet.
pub fn tokenize<'c, I>(graphemes: I) -> Vec<Token<'c>>
where
    I: IntoIterator<Item = Classified<'c>>,
{
    let (mut tokens, mut open) = graphemes.into_iter().fold(
        (Vec::new(), Vec::new()),
        |(mut tokens, mut open), g| {
            match g {
                Classified::Foreign(foreign) => {
                    close(&mut tokens, &mut open);
                    tokens.push(Token::foreign(foreign));
                }
                Classified::Known(g) => {
                    if g.category.is_base() {
                        close(&mut tokens, &mut open);
                    }
                    open.push(g);
                }
            }
            (tokens, open)
        },
    );
    close(&mut tokens, &mut open);
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::classify::classify_word;

    fn tokens(word: &str) -> Vec<Token<'static>> {
        tokenize(classify_word(Catalog::global(), word))
    }

    fn name(g: Option<&Grapheme>) -> Option<&str> {
        g.map(|g| g.name.as_str())
    }

    #[test]
    fn tokenize_empty() {
        assert!(tokens("").is_empty());
    }

    #[test]
    fn tokenize_letters_with_marks() {
        // beth+rukakha+zqappa, taw+ptakha
        let toks = tokens("ܒ݂ܵܬܲ");
        assert_eq!(toks.len(), 2);
        assert_eq!(name(toks[0].base), Some("BETH"));
        assert_eq!(name(toks[0].modifier), Some("RUKAKHA"));
        assert_eq!(name(toks[0].vowel), Some("ZQAPPA"));
        assert_eq!(name(toks[1].base), Some("TAW"));
        assert_eq!(name(toks[1].vowel), Some("PTAKHA"));
        assert!(toks[1].modifier.is_none());
    }

    #[test]
    fn first_vowel_wins() {
        let toks = tokens("ܒܵܲ");
        assert_eq!(toks.len(), 1);
        assert_eq!(name(toks[0].vowel), Some("ZQAPPA"));
    }

    #[test]
    fn first_modifier_wins() {
        let toks = tokens("ܟ݂̰");
        assert_eq!(name(toks[0].modifier), Some("RUKAKHA"));
    }

    #[test]
    fn foreign_stands_alone() {
        let toks = tokens("ܒxܵ");
        assert_eq!(toks.len(), 3);
        assert_eq!(name(toks[0].base), Some("BETH"));
        assert_eq!(toks[1].foreign.as_ref().map(|g| g.surface), Some('x'));
        assert!(toks[1].base.is_none());
        // the vowel after a foreign character opens a base-less token
        assert!(toks[2].base.is_none());
        assert_eq!(name(toks[2].vowel), Some("ZQAPPA"));
    }

    #[test]
    fn punctuation_attaches_to_open_token() {
        let toks = tokens("ܒܵ،");
        assert_eq!(toks.len(), 1);
        assert_eq!(name(toks[0].punctuation), Some("SYRCOMMA"));
    }

    #[test]
    fn leading_punctuation_has_no_base() {
        let toks = tokens("،ܒ");
        assert_eq!(toks.len(), 2);
        assert!(toks[0].base.is_none());
        assert_eq!(name(toks[0].punctuation), Some("SYRCOMMA"));
    }

    #[test]
    fn special_marks_fill_their_slots() {
        // taw+talqana, meem+qanuna top, dotless resh+siyameh
        let toks = tokens("ܬ݇ܡ̇ܖ̈");
        assert_eq!(toks.len(), 3);
        assert_eq!(name(toks[0].talqana), Some("TALQANA"));
        assert_eq!(name(toks[1].qanuna), Some("QANUNA_TOP"));
        assert_eq!(name(toks[2].siyameh), Some("SIYAMEH"));
    }

    #[test]
    fn vowel_name_helpers() {
        let toks = tokens("ܒܵܗ");
        assert!(toks[0].has_vowel());
        assert!(toks[0].vowel_is_any(&["PTAKHA", "ZQAPPA"]));
        assert!(!toks[1].vowel_is_any(&["ZQAPPA"]));
        assert!(toks[1].base_is('ܗ'));
    }
}
