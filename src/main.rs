use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use std::process;

mod errors;
mod logging;
mod operations;
mod ui;

use errors::{map_load_error, map_save_error};

/// Sectioned list builder - group labeled items under an alphabet rail
///
/// Examples:
///   # Group by Latin letters, uncategorized items last
///   sectionist contacts.json
///
///   # Korean contacts grouped by leading consonant
///   sectionist contacts.json --index hangul
///
///   # Custom index, uncategorized items first
///   sectionist contacts.json --index "a,b,c,ㄱ,ㄴ" --uncategorized top
///
///   # Write the sections as JSON for a renderer
///   sectionist contacts.json --output sections.json
#[derive(Parser, Debug)]
#[command(name = "sectionist")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Document Format:\n  \
    - A JSON array of items, each with a \"value\" label and any other fields\n  \
    - Or an object {\"items\": [...], \"char_index\": [...], \"uncategorized_at_top\": bool}\n\n\
Index:\n  \
    - Presets: latin, hangul, latin+hangul\n  \
    - Comma-separated single characters: \"a,b,ㄱ\"\n  \
    - Or a run of characters: \"abcㄱㄴ\"\n\n\
Logging:\n  \
    - Set SECTIONIST_LOG (or RUST_LOG) to e.g. debug")]
pub struct Cli {
    /// Path to the items JSON document
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Section index (overrides the document's char_index)
    #[arg(short, long, value_name = "INDEX")]
    index: Option<String>,

    /// Where the "#" section goes (overrides the document's setting)
    #[arg(short, long, value_enum, value_name = "PLACEMENT")]
    uncategorized: Option<Placement>,

    /// Output format for stdout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the sections as JSON to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Placement {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    logging::init();

    if let Err(err) = operations::run(&cli) {
        report_error(&err, &cli);
        process::exit(1);
    }
}

fn report_error(err: &anyhow::Error, cli: &Cli) {
    let (title, message, details) = match err.downcast_ref::<sectionist_core::Error>() {
        Some(e) => match (e, &cli.output) {
            (sectionist_core::Error::Io { path, .. }, Some(output)) if path == output => {
                map_save_error(e, output)
            }
            _ => map_load_error(e, &cli.file),
        },
        None => (
            "Error".to_string(),
            "Something went wrong.".to_string(),
            format!("{:#}", err),
        ),
    };

    eprintln!("{}: {}\n", title.red().bold(), message);
    for line in details.lines() {
        eprintln!("  {}", line);
    }
}
