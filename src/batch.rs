//! Multi-line transcription across worker threads.
//!
//! Lines are independent, so they are split into contiguous chunks, one per
//! worker, and results are concatenated back in input order.

use std::thread;

use tracing::debug_span;

use crate::catalog::Catalog;
use crate::engine::Transcription;
use crate::transcribe::{Lexicon, Transcriber};

pub fn transcribe_lines<S>(
    lines: &[S],
    lexicon: Option<&dyn Lexicon>,
    workers: usize,
) -> Vec<Transcription>
where
    S: AsRef<str> + Sync,
{
    let _span = debug_span!("transcribe_lines", lines = lines.len(), workers).entered();
    let transcriber = Transcriber::new(Catalog::global()).with_lexicon(lexicon);

    if workers <= 1 || lines.len() <= 1 {
        return lines
            .iter()
            .map(|line| transcriber.transcribe_text(line.as_ref()))
            .collect();
    }

    let chunk_size = lines.len().div_ceil(workers);
    thread::scope(|scope| {
        let handles: Vec<_> = lines
            .chunks(chunk_size)
            .enumerate()
            .map(|(idx, chunk)| {
                thread::Builder::new()
                    .name(format!("syr-transcribe-{idx}"))
                    .spawn_scoped(scope, move || {
                        chunk
                            .iter()
                            .map(|line| transcriber.transcribe_text(line.as_ref()))
                            .collect::<Vec<_>>()
                    })
                    .expect("failed to spawn transcription worker")
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| match handle.join() {
                Ok(chunk) => chunk,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn batch_matches_sequential() {
        let lines: Vec<String> = (0..17)
            .map(|i| if i % 2 == 0 { "ܒܵ ܫܠܵܡܵܐ".into() } else { "ܒ݂ܵ،".into() })
            .collect();
        let sequential = transcribe_lines(&lines, None, 1);
        let parallel = transcribe_lines(&lines, None, 4);
        assert_eq!(sequential, parallel);
        assert_eq!(parallel[0].ipa, "bɑ ʃlɑmɑ ");
        assert_eq!(parallel[1].latin, "wa, ");
    }

    #[test]
    fn batch_empty() {
        let lines: [&str; 0] = [];
        assert!(transcribe_lines(&lines, None, 8).is_empty());
    }

    #[test]
    fn batch_with_lexicon() {
        let dict: HashSet<String> = ["ܒܝܬܐ".to_string()].into_iter().collect();
        let lines = ["ܒܒܝܬܐ", "ܒܒܝܬܐ", "ܒܒܝܬܐ"];
        for t in transcribe_lines(&lines, Some(&dict), 3) {
            assert_eq!(t.ipa, "b'bjtʔ ");
        }
    }

    #[test]
    fn more_workers_than_lines() {
        let lines = ["ܒܵ", "ܐ"];
        let out = transcribe_lines(&lines, None, 16);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].ipa, "ɑ ");
    }
}
