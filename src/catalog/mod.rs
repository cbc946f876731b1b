//! Grapheme catalog for Eastern-Syriac script.
//!
//! The catalog is a TOML table of every recognized symbol (letters, vowel
//! signs, modifier diacritics, punctuation) with its category and default
//! sounds. The embedded default is parsed once into a process-wide
//! singleton; `init_custom` may replace it before first use.

mod config;

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::rules::Rule;

pub use config::{parse_catalog_toml, CatalogError};

pub const DEFAULT_CATALOG_TOML: &str = include_str!("default_catalog.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Name given to synthetic graphemes built for unrecognized characters.
pub const FOREIGN_NAME: &str = "NON-SYR-CHAR";

/// Surface forms of the letters the context rules single out.
pub mod letters {
    pub const ALAP: char = '\u{0710}';
    pub const BETH: char = '\u{0712}';
    pub const GAMMAL: char = '\u{0713}';
    pub const DALATH: char = '\u{0715}';
    pub const DOTLESS_RESH: char = '\u{0716}';
    pub const HEH: char = '\u{0717}';
    pub const WAW: char = '\u{0718}';
    pub const ZAIN: char = '\u{0719}';
    pub const YODH: char = '\u{071D}';
    pub const KAP: char = '\u{071F}';
    pub const LAMMAD: char = '\u{0720}';
    pub const MEEM: char = '\u{0721}';
    pub const PEH: char = '\u{0726}';
    pub const SHIN: char = '\u{072B}';
    pub const TAW: char = '\u{072C}';
}

/// Primary role of a grapheme. Exactly one per entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Letter,
    /// A letter that may act as a vowel-length marker (alap, heh, yodh).
    Matres,
    Vowel,
    Modifier,
    Talqana,
    Qanuna,
    Siyameh,
    Punctuation,
    #[serde(skip_deserializing)]
    Foreign,
}

impl Category {
    /// Letters anchor tokens; matres letters are letters too.
    pub fn is_base(self) -> bool {
        matches!(self, Category::Letter | Category::Matres)
    }

    /// Marks that attach to the preceding base letter.
    pub fn is_diacritic(self) -> bool {
        matches!(
            self,
            Category::Vowel
                | Category::Modifier
                | Category::Talqana
                | Category::Qanuna
                | Category::Siyameh
        )
    }

    pub fn requires_rule(self) -> bool {
        matches!(
            self,
            Category::Matres
                | Category::Modifier
                | Category::Talqana
                | Category::Qanuna
                | Category::Siyameh
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grapheme {
    pub name: String,
    pub surface: char,
    pub category: Category,
    pub ipa: String,
    pub latin: String,
    /// Replacement text for punctuation (e.g. the Syriac comma becomes `,`).
    pub punctuation: Option<String>,
    pub rule: Option<Rule>,
}

impl Grapheme {
    /// Pass-through grapheme for a character the catalog does not know.
    pub fn foreign(c: char) -> Self {
        Self {
            name: FOREIGN_NAME.to_string(),
            surface: c,
            category: Category::Foreign,
            ipa: c.to_string(),
            latin: c.to_string(),
            punctuation: None,
            rule: None,
        }
    }

    /// Rendered form of a punctuation mark: the override, else the mark itself.
    pub fn punctuation_mark(&self) -> Cow<'_, str> {
        match &self.punctuation {
            Some(p) => Cow::Borrowed(p.as_str()),
            None => Cow::Owned(self.surface.to_string()),
        }
    }
}

pub struct Catalog {
    graphemes: Vec<Grapheme>,
    by_surface: HashMap<char, usize>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    pub fn from_toml(toml_str: &str) -> Result<Self, CatalogError> {
        parse_catalog_toml(toml_str).map(Self::build)
    }

    /// Build a catalog from graphemes that already passed `parse_catalog_toml`.
    fn build(graphemes: Vec<Grapheme>) -> Self {
        let mut by_surface = HashMap::new();
        let mut by_name = HashMap::new();
        for (idx, g) in graphemes.iter().enumerate() {
            // later entries overwrite earlier ones sharing a surface form
            by_surface.insert(g.surface, idx);
            by_name.insert(g.name.clone(), idx);
        }
        Self {
            graphemes,
            by_surface,
            by_name,
        }
    }

    /// Set a custom catalog TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), CatalogError> {
        // Validate eagerly
        parse_catalog_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| CatalogError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    ///
    /// Panics on first use if the catalog TOML is invalid: a catalog entry
    /// without its rule is a build defect, not an input condition.
    pub fn global() -> &'static Catalog {
        static INSTANCE: OnceLock<Catalog> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_CATALOG_TOML);
            Catalog::from_toml(toml_str).expect("grapheme catalog TOML must be valid")
        })
    }

    /// Returns the embedded default catalog TOML content.
    pub fn default_toml() -> &'static str {
        DEFAULT_CATALOG_TOML
    }

    pub fn get(&self, name: &str) -> Option<&Grapheme> {
        self.by_name.get(name).map(|&idx| &self.graphemes[idx])
    }

    /// Entry that wins classification for `c`.
    pub fn lookup(&self, c: char) -> Option<&Grapheme> {
        self.by_surface.get(&c).map(|&idx| &self.graphemes[idx])
    }

    /// Every entry whose surface form is `c`, in catalog order.
    pub fn matching(&self, c: char) -> impl Iterator<Item = &Grapheme> {
        self.graphemes.iter().filter(move |g| g.surface == c)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Grapheme> {
        self.graphemes.iter()
    }

    pub fn len(&self) -> usize {
        self.graphemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphemes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_catalog_loads() {
        let catalog = Catalog::global();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.len(), catalog.iter().count());
    }

    #[test]
    fn get_by_name() {
        let catalog = Catalog::global();
        let beth = catalog.get("BETH").unwrap();
        assert_eq!(beth.surface, letters::BETH);
        assert_eq!(beth.category, Category::Letter);
        assert_eq!((beth.ipa.as_str(), beth.latin.as_str()), ("b", "b"));
        assert!(catalog.get("NOPE").is_none());
    }

    #[test]
    fn matres_letters_carry_matres_rule() {
        let catalog = Catalog::global();
        for name in ["ALAP", "HEH", "YODH"] {
            let g = catalog.get(name).unwrap();
            assert_eq!(g.category, Category::Matres, "{name}");
            assert_eq!(g.rule, Some(Rule::Matres), "{name}");
        }
    }

    #[test]
    fn every_rule_category_has_rule() {
        for g in Catalog::global().iter() {
            assert_eq!(g.category.requires_rule(), g.rule.is_some(), "{}", g.name);
        }
    }

    #[test]
    fn shared_surface_last_entry_wins() {
        let catalog = Catalog::global();
        let names: Vec<&str> = catalog.matching('\u{0736}').map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["RWASA_TOP", "HWASA_TOP", "ESASA_TOP"]);
        assert_eq!(catalog.lookup('\u{0736}').unwrap().name, "ESASA_TOP");
        assert_eq!(catalog.lookup('\u{0737}').unwrap().name, "ESASA_BOTTOM");
    }

    #[test]
    fn majliana_top_and_bottom_share_rule() {
        let catalog = Catalog::global();
        assert_eq!(catalog.get("MAJLIANA_TOP").unwrap().rule, Some(Rule::Majliana));
        assert_eq!(
            catalog.get("MAJLIANA_BOTTOM").unwrap().rule,
            Some(Rule::Majliana)
        );
    }

    #[test]
    fn punctuation_mark_uses_override() {
        let catalog = Catalog::global();
        assert_eq!(catalog.get("SYRCOMMA").unwrap().punctuation_mark(), ",");
        assert_eq!(catalog.get("SYRQUESTION").unwrap().punctuation_mark(), "?");
        assert_eq!(catalog.get("SYRCOLON").unwrap().punctuation_mark(), ".");
    }

    #[test]
    fn punctuation_mark_falls_back_to_surface() {
        let catalog = Catalog::from_toml(
            r#"
[[grapheme]]
name = "BANG"
surface = "!"
category = "punctuation"
"#,
        )
        .unwrap();
        assert_eq!(catalog.get("BANG").unwrap().punctuation_mark(), "!");
    }

    #[test]
    fn foreign_grapheme_passes_through() {
        let g = Grapheme::foreign('x');
        assert_eq!(g.category, Category::Foreign);
        assert_eq!(g.ipa, "x");
        assert_eq!(g.latin, "x");
        assert_eq!(g.name, FOREIGN_NAME);
    }

    #[test]
    fn default_toml_is_embedded() {
        assert!(Catalog::default_toml().contains("[[grapheme]]"));
    }
}
