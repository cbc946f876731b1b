use std::fs;

use unicode_width::UnicodeWidthStr;

use syr_engine::classify::{classify_word, Classified};
use syr_engine::Catalog;

/// Shown under combining marks so they have something to sit on.
const DOTTED_CIRCLE: char = '\u{25CC}';

pub fn catalog_export() {
    print!("{}", Catalog::default_toml());
}

pub fn catalog_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let catalog = die!(Catalog::from_toml(&content), "Error: {}");
    println!("OK: {} graphemes", catalog.len());
}

pub fn graphemes_cmd(text: &str) {
    let graphemes = classify_word(Catalog::global(), text);
    print!("{}", format_grapheme_table(&graphemes));
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

fn display_surface(g: &Classified<'_>) -> String {
    if g.category().is_diacritic() {
        format!("{DOTTED_CIRCLE}{}", g.surface)
    } else {
        g.surface.escape_debug().to_string()
    }
}

/// One row per grapheme: name, surface, category, IPA, Latin.
pub fn format_grapheme_table(graphemes: &[Classified<'_>]) -> String {
    let rows: Vec<[String; 5]> = graphemes
        .iter()
        .map(|g| {
            [
                g.name.clone(),
                display_surface(g),
                format!("{:?}", g.category()),
                g.ipa.clone(),
                g.latin.clone(),
            ]
        })
        .collect();

    let mut widths = [0usize; 5];
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.width());
        }
    }

    let mut out = String::new();
    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, w)| pad(cell, w))
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }
    out
}
