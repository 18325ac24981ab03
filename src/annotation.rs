// Annotations exported by the Obsidian "Annotator" plugin are block quotes.
// Each quote carries one JSON payload line with the annotation's comment
// text, next to other quoted lines that are ignored here.

pub mod block;
pub mod payload;

pub const BLOCK_QUOTE_MARKER: char = '>';
