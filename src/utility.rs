pub mod str;

pub use self::str::{normalize_new_lines, split_lines_inclusive, strip_char_prefix};
