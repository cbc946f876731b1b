//! Context rules attached to modifier, matres, talqana, qanuna and siyameh
//! graphemes.
//!
//! Every rule is a pure function of the letter being realized and the
//! previous, current and next tokens of the word.

use std::borrow::Cow;

use serde::Deserialize;

use crate::catalog::letters::*;
use crate::catalog::Grapheme;
use crate::token::Token;

/// Vowels after which a word-final alap or heh only lengthens the vowel.
const LENGTHENED_VOWELS: [&str; 4] = ["ZQAPPA", "PTAKHA", "ZLAMA_KIRYA", "ZLAMA_YARIKHA"];

const ALAP_WEST: &str = "ALAP_WEST";

/// An (IPA, Latin) pair.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sound<'a> {
    pub ipa: Cow<'a, str>,
    pub latin: Cow<'a, str>,
}

impl<'a> Sound<'a> {
    pub const SILENT: Sound<'static> = Sound::fixed("", "");

    pub const fn fixed(ipa: &'a str, latin: &'a str) -> Self {
        Sound {
            ipa: Cow::Borrowed(ipa),
            latin: Cow::Borrowed(latin),
        }
    }

    /// The grapheme's default sounds.
    pub fn of(g: &'a Grapheme) -> Self {
        Sound::fixed(&g.ipa, &g.latin)
    }

    pub fn punctuation(g: &'a Grapheme) -> Self {
        let mark = g.punctuation_mark();
        Sound {
            ipa: mark.clone(),
            latin: mark,
        }
    }

    fn then(self, ipa: &str, latin: &str) -> Sound<'static> {
        Sound {
            ipa: Cow::Owned(format!("{}{ipa}", self.ipa)),
            latin: Cow::Owned(format!("{}{latin}", self.latin)),
        }
    }

    fn after(self, ipa: &str, latin: &str) -> Sound<'static> {
        Sound {
            ipa: Cow::Owned(format!("{ipa}{}", self.ipa)),
            latin: Cow::Owned(format!("{latin}{}", self.latin)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Khwasa,
    Rwakha,
    Rukakha,
    RukakhaSemicircle,
    Majliana,
    Siyameh,
    Matres,
    Talqana,
    QanunaTop,
    QanunaBottom,
}

impl Rule {
    pub fn resolve<'c>(
        self,
        letter: &'c Grapheme,
        prev: Option<&Token<'c>>,
        this: &Token<'c>,
        next: Option<&Token<'c>>,
    ) -> Sound<'c> {
        match self {
            Rule::Khwasa => khwasa(letter, prev, next),
            Rule::Rwakha => match letter.surface {
                WAW => Sound::fixed("o", "o"),
                _ => Sound::SILENT,
            },
            Rule::Rukakha => rukakha(letter),
            Rule::RukakhaSemicircle => match letter.surface {
                PEH => Sound::fixed("f", "f"),
                _ => Sound::of(letter),
            },
            Rule::Majliana => majliana(letter),
            Rule::Siyameh => match letter.surface {
                DOTLESS_RESH => Sound::fixed("r", "r"),
                _ => Sound::of(letter),
            },
            Rule::Matres => matres(letter, prev, this, next),
            Rule::Talqana => Sound::SILENT,
            Rule::QanunaTop => qanuna_top(letter, prev, this),
            Rule::QanunaBottom => match letter.surface {
                MEEM if !this.has_vowel() => Sound::of(letter).then("ɪ", "i"),
                _ => Sound::of(letter),
            },
        }
    }
}

fn khwasa<'c>(letter: &'c Grapheme, prev: Option<&Token<'c>>, next: Option<&Token<'c>>) -> Sound<'c> {
    // squeezed between two vowel-less neighbours
    let shortened = matches!((prev, next), (Some(p), Some(n)) if !p.has_vowel() && !n.has_vowel());
    match letter.surface {
        YODH if shortened => Sound::fixed("ɪ", "i"),
        YODH => Sound::fixed("i", "ee"),
        WAW => Sound::fixed("u", "u"),
        _ => Sound::SILENT,
    }
}

fn rukakha(letter: &Grapheme) -> Sound<'_> {
    match letter.surface {
        BETH => Sound::fixed("w", "w"),
        GAMMAL => Sound::fixed("ɣ", "gh"),
        DALATH => Sound::fixed("ð", "dh"),
        KAP => Sound::fixed("x", "kh"),
        PEH => Sound::fixed("f", "f"),
        TAW => Sound::fixed("θ", "th"),
        _ => Sound::of(letter),
    }
}

fn majliana(letter: &Grapheme) -> Sound<'_> {
    match letter.surface {
        GAMMAL => Sound::fixed("dʒ", "j"),
        ZAIN | SHIN => Sound::fixed("ʒ", "zh"),
        KAP => Sound::fixed("tʃ", "ch"),
        _ => Sound::of(letter),
    }
}

fn qanuna_top<'c>(letter: &'c Grapheme, prev: Option<&Token<'c>>, this: &Token<'c>) -> Sound<'c> {
    match letter.surface {
        MEEM if !this.has_vowel() => Sound::of(letter).then("ɑ", "a"),
        HEH if prev.is_some_and(|p| !p.has_vowel()) => Sound::of(letter).after("ɑ", "a"),
        _ => Sound::of(letter),
    }
}

/// No following token, or the following token carries no letter.
fn ends_word(next: Option<&Token<'_>>) -> bool {
    next.map_or(true, |n| n.base.is_none())
}

fn after_lengthened_vowel(prev: Option<&Token<'_>>) -> bool {
    prev.is_some_and(|p| p.vowel_is_any(&LENGTHENED_VOWELS))
}

fn matres<'c>(
    letter: &'c Grapheme,
    prev: Option<&Token<'c>>,
    this: &Token<'c>,
    next: Option<&Token<'c>>,
) -> Sound<'c> {
    match letter.surface {
        ALAP => alap(letter, prev, this, next),
        HEH if ends_word(next) && after_lengthened_vowel(prev) => Sound::SILENT,
        YODH => {
            let starts_word = prev.map_or(true, |p| p.base.is_none());
            let before_glide = next.is_some_and(|n| n.base_is(WAW) || n.base_is(HEH));
            if starts_word && before_glide {
                Sound::fixed("i", "i")
            } else {
                Sound::of(letter)
            }
        }
        _ => Sound::of(letter),
    }
}

fn alap<'c>(
    letter: &'c Grapheme,
    prev: Option<&Token<'c>>,
    this: &Token<'c>,
    next: Option<&Token<'c>>,
) -> Sound<'c> {
    if this.has_vowel() {
        return Sound::SILENT;
    }

    let Some(prev) = prev else {
        // word-initial: a following glide carries the vowel
        let glide_follows = next
            .and_then(|n| n.modifier)
            .is_some_and(|m| matches!(m.rule, Some(Rule::Khwasa | Rule::Rwakha)));
        return if glide_follows {
            Sound::SILENT
        } else if letter.name == ALAP_WEST {
            Sound::fixed("o", "o")
        } else {
            Sound::fixed("ɑ", "a")
        };
    };

    let word_final = ends_word(next) || next.is_some_and(|n| n.punctuation.is_some());
    if word_final && after_lengthened_vowel(Some(prev)) {
        return Sound::SILENT;
    }
    if prev.base.is_some() && next.is_some_and(|n| n.base.is_some()) {
        return Sound::SILENT;
    }
    Sound::of(letter)
}
