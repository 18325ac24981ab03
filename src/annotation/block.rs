use tracing::{debug, warn};

use super::BLOCK_QUOTE_MARKER;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationBlock<'a> {
    pub first_line: usize, // 1-based line number of the first quoted line
    pub lines: Vec<&'a str>,
}

impl<'a> AnnotationBlock<'a> {
    fn start(line_number: usize, line: &'a str) -> Self {
        Self {
            first_line: line_number,
            lines: vec![line],
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// What to do with a block that is still open when the document ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailingBlock {
    // Historical behaviour: a block is only emitted once a non-quoted line
    // closes it, so a quote at the very end of the file is lost.
    #[default]
    Drop,
    Keep,
}

pub fn is_block_quote_line(line: &str) -> bool {
    line.starts_with(BLOCK_QUOTE_MARKER)
}

// Groups maximal runs of quoted lines. Non-quoted lines are discarded.
pub fn split_annotation_blocks<'a>(
    lines: &[&'a str],
    trailing: TrailingBlock,
) -> Vec<AnnotationBlock<'a>> {
    let mut blocks = Vec::new();
    let mut current: Option<AnnotationBlock<'a>> = None;

    for (i, &line) in lines.iter().enumerate() {
        let quoted = is_block_quote_line(line);

        match current.as_mut() {
            Some(block) if quoted => block.lines.push(line),
            Some(_) => {
                // the terminating line is dropped, not re-examined
                if let Some(block) = current.take() {
                    debug!(
                        first_line = block.first_line,
                        len = block.len(),
                        "annotation block closed"
                    );
                    blocks.push(block);
                }
            }
            None if quoted => current = Some(AnnotationBlock::start(i + 1, line)),
            None => {}
        }
    }

    if let Some(block) = current {
        match trailing {
            TrailingBlock::Keep => {
                debug!(
                    first_line = block.first_line,
                    len = block.len(),
                    "annotation block closed by end of file"
                );
                blocks.push(block);
            }
            TrailingBlock::Drop => warn!(
                first_line = block.first_line,
                "annotation block at end of file has no closing line and is skipped"
            ),
        }
    }

    blocks
}
