use anyhow::Result;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    annotation::{block::AnnotationBlock, BLOCK_QUOTE_MARKER},
    error::ScriptsheetError,
};

pub const HIGHLIGHT_MARKER: &str = "==";

// The decoded JSON payload of one annotation. Keys keep document order.
#[derive(Debug, Clone, PartialEq)]
pub struct CueRecord {
    pub block: usize,
    pub line: usize,
    fields: Map<String, Value>,
}

impl CueRecord {
    pub fn decode(payload: &str, block: usize, line: usize) -> Result<Self, ScriptsheetError> {
        let value: Value = serde_json::from_str(payload)
            .map_err(|source| ScriptsheetError::MalformedPayload {
                block,
                line,
                source,
            })?;

        let fields = match value {
            Value::Object(fields) => fields,
            _ => return Err(ScriptsheetError::PayloadNotObject { block, line }),
        };

        if !matches!(fields.get("text"), Some(Value::String(_))) {
            return Err(ScriptsheetError::MissingText { block, line });
        }

        Ok(Self {
            block,
            line,
            fields,
        })
    }

    // Free-text comment of the annotation.
    pub fn text(&self) -> &str {
        self.fields
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    // The highlighted excerpt is looked up in the record keys, not in `text`:
    // the first key that contains "==" yields the part after the marker.
    pub fn highlighted_text(&self) -> Option<&str> {
        self.fields
            .keys()
            .find_map(|key| key.split(HIGHLIGHT_MARKER).nth(1))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

// A payload line is a quoted line whose content starts with '{'.
pub fn payload_of(line: &str) -> Option<&str> {
    let content = line.strip_prefix(BLOCK_QUOTE_MARKER)?;
    if content.starts_with('{') {
        Some(content.trim())
    } else {
        None
    }
}

// Decodes the first payload line of the block. Later payload lines are ignored.
pub fn find_cue_record(block: &AnnotationBlock, block_number: usize) -> Result<Option<CueRecord>> {
    for (offset, line) in block.lines.iter().enumerate() {
        let Some(payload) = payload_of(line) else {
            continue;
        };

        let line_number = block.first_line + offset;
        let record = CueRecord::decode(payload, block_number, line_number)?;
        debug!(
            block = block_number,
            line = line_number,
            "annotation payload decoded"
        );

        return Ok(Some(record));
    }

    debug!(block = block_number, "annotation block has no payload");
    Ok(None)
}
