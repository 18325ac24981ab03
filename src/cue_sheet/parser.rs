use anyhow::Result;
use tracing::debug;

use crate::{
    annotation::{block::AnnotationBlock, payload::find_cue_record},
    cue_sheet::{cue::Cue, prefix::PrefixConfig},
};

// One cue per annotation block that carries a payload, in block order.
pub fn parse_cues(blocks: &[AnnotationBlock], prefixes: &PrefixConfig) -> Result<Vec<Cue>> {
    let mut cues = Vec::new();

    for (i, block) in blocks.iter().enumerate() {
        let Some(record) = find_cue_record(block, i + 1)? else {
            continue;
        };

        let cue = Cue::from_record(&record, prefixes);
        debug!(block = record.block, number = %cue.number, "cue parsed");

        cues.push(cue);
    }

    Ok(cues)
}
