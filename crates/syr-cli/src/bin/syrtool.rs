use std::path::Path;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use syr_cli::commands::transcribe_ops::TranscribeOptions;
use syr_cli::commands::{catalog_ops, transcribe_ops};

#[derive(Parser)]
#[command(name = "syrtool", about = "Syriac to IPA and Latin transcriber")]
struct Cli {
    /// Enable verbose logging output on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Write JSON trace logs to this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transcribe Syriac text
    Transcribe {
        /// Input text
        #[arg(short, long)]
        text: Option<String>,
        /// Read Syriac input from a text file, one line at a time
        #[arg(short, long, conflicts_with = "text")]
        file: Option<String>,
        /// Write the transcription to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
        /// Transcribe into Latin phonetics in place of IPA
        #[arg(short, long)]
        latin: bool,
        /// Print IPA and Latin separated by a tab
        #[arg(long, conflicts_with = "latin")]
        both: bool,
        /// JSON word dictionary used to detect proclitic prefixes
        #[arg(short, long)]
        dictionary: Option<String>,
        /// Replacement grapheme catalog (TOML)
        #[arg(long)]
        catalog: Option<String>,
        /// Number of worker threads for file input
        #[arg(short, long, default_value = "1")]
        jobs: usize,
    },
    /// Show how each character of the text is classified
    Graphemes {
        /// Text to classify
        text: String,
    },
    /// Print the embedded grapheme catalog
    CatalogExport,
    /// Validate a grapheme catalog TOML file
    CatalogValidate {
        /// Catalog file
        file: String,
    },
}

fn init_logging(verbose: bool, trace_dir: Option<&str>) {
    if let Some(dir) = trace_dir {
        syr_engine::trace_init::init_tracing(Path::new(dir));
    } else if verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("syr_engine=debug,syr_cli=debug")),
            )
            .init();
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.trace_dir.as_deref());

    match cli.command {
        Command::Transcribe {
            text,
            file,
            output,
            latin,
            both,
            dictionary,
            catalog,
            jobs,
        } => transcribe_ops::transcribe_cmd(&TranscribeOptions {
            text: text.as_deref(),
            file: file.as_deref(),
            output: output.as_deref(),
            latin,
            both,
            dictionary: dictionary.as_deref(),
            catalog: catalog.as_deref(),
            jobs,
        }),
        Command::Graphemes { text } => catalog_ops::graphemes_cmd(&text),
        Command::CatalogExport => catalog_ops::catalog_export(),
        Command::CatalogValidate { file } => catalog_ops::catalog_validate(&file),
    }
}
