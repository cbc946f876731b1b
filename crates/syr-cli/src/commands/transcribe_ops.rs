use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process;

use tracing::debug;

use syr_engine::batch::transcribe_lines;
use syr_engine::{Catalog, Lexicon, OutputForm, Transcription};

use crate::lexicon::load_lexicon;

pub struct TranscribeOptions<'a> {
    pub text: Option<&'a str>,
    pub file: Option<&'a str>,
    pub output: Option<&'a str>,
    pub latin: bool,
    pub both: bool,
    pub dictionary: Option<&'a str>,
    pub catalog: Option<&'a str>,
    pub jobs: usize,
}

/// One output line: the selected rendering, or IPA and Latin tab-separated.
pub fn format_line(t: &Transcription, form: OutputForm, both: bool) -> String {
    if both {
        format!("{}\t{}", t.ipa, t.latin)
    } else {
        t.get(form).to_string()
    }
}

pub fn transcribe_cmd(opts: &TranscribeOptions) {
    if let Some(path) = opts.catalog {
        let content = die!(fs::read_to_string(path), "Error reading catalog {path}: {}");
        die!(Catalog::init_custom(content), "Error: {}");
    }

    let lexicon = opts.dictionary.map(|path| {
        die!(
            load_lexicon(Path::new(path)),
            "Error: could not open dictionary file {path}: {}"
        )
    });
    if let Some(ref words) = lexicon {
        debug!(words = words.len(), "loaded dictionary");
    }

    let lines: Vec<String> = match (opts.text, opts.file) {
        (Some(text), _) => {
            debug!(text, "input text");
            vec![text.to_string()]
        }
        (None, Some(file)) => {
            let content = die!(fs::read_to_string(file), "Error opening input file {file}: {}");
            content.lines().map(str::to_string).collect()
        }
        (None, None) => {
            eprintln!("Error: no input [--text|--file] specified");
            process::exit(1);
        }
    };

    let lexicon_ref = lexicon.as_ref().map(|words| words as &dyn Lexicon);
    let results = transcribe_lines(&lines, lexicon_ref, opts.jobs);

    let mut out: Box<dyn Write> = match opts.output {
        Some(path) => Box::new(BufWriter::new(die!(
            File::create(path),
            "Error opening output file {path}: {}"
        ))),
        None => Box::new(io::stdout().lock()),
    };

    let form = OutputForm::from_latin_flag(opts.latin);
    for t in &results {
        die!(
            writeln!(out, "{}", format_line(t, form, opts.both)),
            "Error writing output: {}"
        );
    }
    die!(out.flush(), "Error writing output: {}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_single_and_both() {
        let t = Transcription {
            ipa: "bɑ ".into(),
            latin: "ba ".into(),
        };
        assert_eq!(format_line(&t, OutputForm::Ipa, false), "bɑ ");
        assert_eq!(format_line(&t, OutputForm::Latin, false), "ba ");
        assert_eq!(format_line(&t, OutputForm::Latin, true), "bɑ \tba ");
    }
}
