use anyhow::Context;
use sectionist_core::char_index::{latin, parse_char_index};
use sectionist_core::{
    compute_sections, load_document, save_sections, validate_char_index, Item, Section,
    SectionDocument,
};

use crate::ui::format_sections;
use crate::{Cli, OutputFormat, Placement};

/// Grouping settings after merging CLI flags over the document's own
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub char_index: Vec<String>,
    pub uncategorized_at_top: bool,
}

/// CLI flag wins, then the document, then the Latin index with the
/// catch-all section at the bottom
pub fn resolve_settings(
    index: Option<&str>,
    placement: Option<Placement>,
    document: &SectionDocument,
) -> sectionist_core::Result<Settings> {
    let char_index = match index {
        Some(input) => parse_char_index(input)?,
        None => document.char_index.clone().unwrap_or_else(latin),
    };

    let uncategorized_at_top = match placement {
        Some(Placement::Top) => true,
        Some(Placement::Bottom) => false,
        None => document.uncategorized_at_top.unwrap_or(false),
    };

    Ok(Settings {
        char_index,
        uncategorized_at_top,
    })
}

/// Render sections for stdout
pub fn render(sections: &[Section<Item>], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(format_sections(sections)),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(sections).context("failed to serialize sections")?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Load, group and emit in one pass
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let document = load_document(&cli.file)?;
    let settings = resolve_settings(cli.index.as_deref(), cli.uncategorized, &document)?;

    if let Err(problems) = validate_char_index(&settings.char_index) {
        for problem in problems {
            tracing::warn!("{}", problem);
        }
    }

    let item_count = document.items.len();
    let sections = compute_sections(
        document.items,
        &settings.char_index,
        settings.uncategorized_at_top,
    );
    tracing::info!(items = item_count, sections = sections.len(), "grouped items");

    match &cli.output {
        Some(path) => {
            save_sections(&sections, path)?;
            tracing::info!(path = %path.display(), "wrote sections");
        }
        None => print!("{}", render(&sections, cli.format)?),
    }

    Ok(())
}
