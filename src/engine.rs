//! Per-word phonological rendering of a token sequence.

use crate::catalog::Category;
use crate::rules::Sound;
use crate::token::Token;

/// Which rendering a caller wants back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputForm {
    #[default]
    Ipa,
    Latin,
}

impl OutputForm {
    pub fn from_latin_flag(want_latin: bool) -> Self {
        if want_latin {
            OutputForm::Latin
        } else {
            OutputForm::Ipa
        }
    }
}

/// IPA and Latin renderings produced side by side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcription {
    pub ipa: String,
    pub latin: String,
}

impl Transcription {
    pub fn push(&mut self, sound: &Sound<'_>) {
        self.ipa.push_str(&sound.ipa);
        self.latin.push_str(&sound.latin);
    }

    /// Append another rendering followed by a word separator.
    pub fn push_word(&mut self, word: &Transcription) {
        self.ipa.push_str(&word.ipa);
        self.ipa.push(' ');
        self.latin.push_str(&word.latin);
        self.latin.push(' ');
    }

    pub fn get(&self, form: OutputForm) -> &str {
        match form {
            OutputForm::Ipa => &self.ipa,
            OutputForm::Latin => &self.latin,
        }
    }

    pub fn into_form(self, form: OutputForm) -> String {
        match form {
            OutputForm::Ipa => self.ipa,
            OutputForm::Latin => self.latin,
        }
    }
}

impl From<Sound<'_>> for Transcription {
    fn from(sound: Sound<'_>) -> Self {
        Transcription {
            ipa: sound.ipa.into_owned(),
            latin: sound.latin.into_owned(),
        }
    }
}

impl From<Transcription> for (String, String) {
    fn from(t: Transcription) -> Self {
        (t.ipa, t.latin)
    }
}

/// Sound of a token's letter, before its vowel.
///
/// Precedence: siyameh, then modifier, then qanuna, then the letter's own
/// matres rule, then the letter's default sounds.
fn letter_sound<'c>(
    prev: Option<&Token<'c>>,
    token: &Token<'c>,
    next: Option<&Token<'c>>,
) -> Sound<'c> {
    let Some(letter) = token.base else {
        return Sound::SILENT;
    };
    let matres = Some(letter).filter(|l| l.category == Category::Matres);
    let rule = token
        .siyameh
        .or(token.modifier)
        .or(token.qanuna)
        .or(matres)
        .and_then(|g| g.rule);
    match rule {
        Some(rule) => rule.resolve(letter, prev, token, next),
        None => Sound::of(letter),
    }
}

/// Render one word's tokens.
///
/// A token with punctuation but no letter ends the word: only that
/// punctuation is returned, whatever came before it.
pub fn render_word(tokens: &[Token<'_>]) -> Transcription {
    let mut out = Transcription::default();

    for (idx, token) in tokens.iter().enumerate() {
        let prev = idx.checked_sub(1).map(|i| &tokens[i]);
        let next = tokens.get(idx + 1);

        if token.base.is_none() {
            if let Some(p) = token.punctuation {
                return Sound::punctuation(p).into();
            }
        }

        if let Some(foreign) = &token.foreign {
            out.push(&Sound::of(foreign));
        } else if let Some(talqana) = token.talqana {
            // silences the letter and its vowel
            let sound = match (token.base, talqana.rule) {
                (Some(letter), Some(rule)) => rule.resolve(letter, prev, token, next),
                _ => Sound::SILENT,
            };
            out.push(&sound);
        } else {
            out.push(&letter_sound(prev, token, next));
            if let Some(vowel) = token.vowel {
                out.push(&Sound::of(vowel));
            }
        }

        if let Some(p) = token.punctuation {
            out.push(&Sound::punctuation(p));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::classify::classify_word;
    use crate::token::tokenize;

    fn render(word: &str) -> (String, String) {
        render_word(&tokenize(classify_word(Catalog::global(), word))).into()
    }

    fn p(ipa: &str, latin: &str) -> (String, String) {
        (ipa.to_string(), latin.to_string())
    }

    #[test]
    fn render_empty() {
        assert_eq!(render(""), p("", ""));
    }

    #[test]
    fn render_letter_and_vowel() {
        assert_eq!(render("ܒܵ"), p("bɑ", "ba"));
        assert_eq!(render("ܫܠܵܡܵܐ"), p("ʃlɑmɑ", "šlama"));
    }

    #[test]
    fn modifier_precedes_vowel() {
        assert_eq!(render("ܒ݂ܵ"), p("wɑ", "wa"));
    }

    #[test]
    fn talqana_drops_letter_and_vowel() {
        assert_eq!(render("ܒܵܬ݇ܵ"), p("bɑ", "ba"));
    }

    #[test]
    fn siyameh_beats_modifier() {
        // dotless resh with siyameh and a stray rukakha
        assert_eq!(render("ܖ݂̈"), p("r", "r"));
    }

    #[test]
    fn foreign_passes_through() {
        assert_eq!(render("abc"), p("abc", "abc"));
        assert_eq!(render("ܒܵ1"), p("bɑ1", "ba1"));
    }

    #[test]
    fn leading_punctuation_short_circuits() {
        assert_eq!(render("،"), p(",", ","));
        assert_eq!(render("؟ܒܵ"), p("?", "?"));
    }

    #[test]
    fn bare_punctuation_discards_earlier_output() {
        // a foreign character closes the token, so the comma stands alone
        assert_eq!(render("a،"), p(",", ","));
    }

    #[test]
    fn trailing_punctuation_is_appended() {
        assert_eq!(render("ܒܵ،"), p("bɑ,", "ba,"));
        assert_eq!(render("ܒܵ܃"), p("bɑ.", "ba."));
    }

    #[test]
    fn baseless_vowel_renders_alone() {
        assert_eq!(render("ܵ"), p("ɑ", "a"));
    }

    #[test]
    fn output_form_selection() {
        let t = Transcription {
            ipa: "bɑ".into(),
            latin: "ba".into(),
        };
        assert_eq!(t.get(OutputForm::Ipa), "bɑ");
        assert_eq!(t.get(OutputForm::Latin), "ba");
        assert_eq!(OutputForm::from_latin_flag(true), OutputForm::Latin);
        assert_eq!(OutputForm::from_latin_flag(false), OutputForm::Ipa);
        assert_eq!(t.into_form(OutputForm::Latin), "ba");
    }
}
