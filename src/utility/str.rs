use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

// CR+LF and lone CR are read as LF
pub fn normalize_new_lines(txt: &str) -> Cow<'_, str> {
    static REGEX_NEW_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r").unwrap());

    REGEX_NEW_LINE.replace_all(txt, "\n")
}

// Lines keep their trailing '\n'. The last line may lack one.
pub fn split_lines_inclusive(txt: &str) -> Vec<&str> {
    txt.split_inclusive('\n').collect()
}

// Drops the first `count` characters (not bytes) of `s`.
pub fn strip_char_prefix(s: &str, count: usize) -> &str {
    match s.char_indices().nth(count) {
        Some((i, _)) => &s[i..],
        None => "",
    }
}
