// Cue sheet: comment lines of each annotation are matched against prefixes
// and flattened into one table row per annotation.

pub mod cue;
pub mod parser;
pub mod prefix;
pub mod renderer;
