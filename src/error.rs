use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptsheetError {
    #[error("Source file does not exist or path is incorrect.")]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed annotation payload in block {block} (line {line})")]
    MalformedPayload {
        block: usize,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Annotation payload in block {block} (line {line}) is not an object")]
    PayloadNotObject { block: usize, line: usize },

    #[error("Annotation payload in block {block} (line {line}) has no string \"text\" field")]
    MissingText { block: usize, line: usize },
}
