pub mod annotation;
pub mod cue_sheet;
pub mod error;
pub mod utility;

use std::{
    fs::{self, File},
    io::Read,
    path::Path,
};

use anyhow::{Context, Result};
use tracing::debug;

use crate::{
    annotation::block::{split_annotation_blocks, TrailingBlock},
    cue_sheet::{cue::Cue, parser::parse_cues, prefix::PrefixConfig, renderer::render_cue_table},
    error::ScriptsheetError,
    utility::{normalize_new_lines, split_lines_inclusive},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub prefixes: PrefixConfig,
    pub trailing_block: TrailingBlock,
}

// Annotated Markdown -> cues
pub fn parse_markdown(markdown: &str, options: &ConvertOptions) -> Result<Vec<Cue>> {
    let markdown = normalize_new_lines(markdown);
    let lines = split_lines_inclusive(&markdown);

    let blocks = split_annotation_blocks(&lines, options.trailing_block);
    debug!(lines = lines.len(), blocks = blocks.len(), "annotation blocks found");

    parse_cues(&blocks, &options.prefixes)
}

// Annotated Markdown -> Markdown cue table
pub fn convert_markdown(markdown: &str, options: &ConvertOptions) -> Result<String> {
    let cues = parse_markdown(markdown, options)?;
    Ok(render_cue_table(&cues))
}

pub fn read_source(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|source| ScriptsheetError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let mut markdown = String::new();
    file.read_to_string(&mut markdown)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(markdown)
}

// Reads `source`, writes the cue table to `dest` and returns the cue count.
// Nothing is written unless every annotation converts.
pub fn convert_file(source: &Path, dest: &Path, options: &ConvertOptions) -> Result<usize> {
    let markdown = read_source(source)?;

    let cues = parse_markdown(&markdown, options)
        .with_context(|| format!("Failed to convert {}", source.display()))?;
    let table = render_cue_table(&cues);

    fs::write(dest, table).with_context(|| format!("Failed to write {}", dest.display()))?;

    Ok(cues.len())
}
