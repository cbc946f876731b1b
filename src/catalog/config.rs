use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use super::{Category, Grapheme};
use crate::rules::Rule;

#[derive(Deserialize)]
struct CatalogConfig {
    #[serde(default)]
    grapheme: Vec<GraphemeEntry>,
}

#[derive(Deserialize)]
struct GraphemeEntry {
    name: String,
    surface: String,
    category: Category,
    #[serde(default)]
    ipa: String,
    #[serde(default)]
    latin: String,
    #[serde(default)]
    punctuation: Option<String>,
    #[serde(default)]
    rule: Option<Rule>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("catalog has no [[grapheme]] entries")]
    Empty,
    #[error("surface of {name} must be exactly one character, got {surface:?}")]
    SurfaceNotOneChar { name: String, surface: String },
    #[error("duplicate grapheme name: {0}")]
    DuplicateName(String),
    #[error("{name} is a {category:?} grapheme but defines no rule")]
    MissingRule { name: String, category: Category },
    #[error("{name} is a {category:?} grapheme and cannot carry a rule")]
    UnexpectedRule { name: String, category: Category },
    #[error("surface {surface:?} is both {first:?} and {second:?}")]
    ConflictingSurface {
        surface: char,
        first: Category,
        second: Category,
    },
    #[error("grapheme catalog already initialized")]
    AlreadyInitialized,
}

/// Parse catalog TOML into graphemes, in file order.
pub fn parse_catalog_toml(toml_str: &str) -> Result<Vec<Grapheme>, CatalogError> {
    let config: CatalogConfig =
        toml::from_str(toml_str).map_err(|e| CatalogError::Parse(e.to_string()))?;

    if config.grapheme.is_empty() {
        return Err(CatalogError::Empty);
    }

    let graphemes = config
        .grapheme
        .into_iter()
        .map(into_grapheme)
        .collect::<Result<Vec<_>, _>>()?;
    validate(&graphemes)?;
    Ok(graphemes)
}

fn into_grapheme(entry: GraphemeEntry) -> Result<Grapheme, CatalogError> {
    let mut chars = entry.surface.chars();
    let surface = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            return Err(CatalogError::SurfaceNotOneChar {
                name: entry.name,
                surface: entry.surface,
            })
        }
    };

    match (entry.category.requires_rule(), entry.rule) {
        (true, None) => {
            return Err(CatalogError::MissingRule {
                name: entry.name,
                category: entry.category,
            })
        }
        (false, Some(_)) => {
            return Err(CatalogError::UnexpectedRule {
                name: entry.name,
                category: entry.category,
            })
        }
        _ => {}
    }

    Ok(Grapheme {
        name: entry.name,
        surface,
        category: entry.category,
        ipa: entry.ipa,
        latin: entry.latin,
        punctuation: entry.punctuation.filter(|p| !p.is_empty()),
        rule: entry.rule,
    })
}

/// Cross-entry checks: unique names, one category per surface form.
pub(super) fn validate(graphemes: &[Grapheme]) -> Result<(), CatalogError> {
    let mut names = HashSet::new();
    let mut categories: HashMap<char, Category> = HashMap::new();

    for g in graphemes {
        if !names.insert(g.name.as_str()) {
            return Err(CatalogError::DuplicateName(g.name.clone()));
        }
        let first = *categories.entry(g.surface).or_insert(g.category);
        if first != g.category {
            return Err(CatalogError::ConflictingSurface {
                surface: g.surface,
                first,
                second: g.category,
            });
        }
    }

    Ok(())
}
