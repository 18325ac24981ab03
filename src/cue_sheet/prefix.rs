use crate::utility::strip_char_prefix;

// Comment fields that are tagged by a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueField {
    Number,
    Time,
    Label,
    Notes,
    Scene,
    Mark,
    Block,
    Follow,
    Execute,
}

impl CueField {
    pub const ALL: [CueField; 9] = [
        CueField::Number,
        CueField::Time,
        CueField::Label,
        CueField::Notes,
        CueField::Scene,
        CueField::Mark,
        CueField::Block,
        CueField::Follow,
        CueField::Execute,
    ];

    pub fn default_prefix(self) -> &'static str {
        match self {
            CueField::Number => "Q",
            CueField::Time => "I",
            CueField::Label => "Label:",
            CueField::Notes => "Notes:",
            CueField::Scene => "Scene:",
            CueField::Mark => "M",
            CueField::Block => "B",
            CueField::Follow => "F",
            CueField::Execute => "X",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixConfig {
    pub cue: String,
    pub time: String,
    pub label: String,
    pub notes: String,
    pub scene: String,
    pub mark: String,
    pub block: String,
    pub follow: String,
    pub execute: String,
}

impl Default for PrefixConfig {
    fn default() -> Self {
        let d = |field: CueField| field.default_prefix().to_owned();
        Self {
            cue: d(CueField::Number),
            time: d(CueField::Time),
            label: d(CueField::Label),
            notes: d(CueField::Notes),
            scene: d(CueField::Scene),
            mark: d(CueField::Mark),
            block: d(CueField::Block),
            follow: d(CueField::Follow),
            execute: d(CueField::Execute),
        }
    }
}

impl PrefixConfig {
    pub fn get(&self, field: CueField) -> &str {
        match field {
            CueField::Number => &self.cue,
            CueField::Time => &self.time,
            CueField::Label => &self.label,
            CueField::Notes => &self.notes,
            CueField::Scene => &self.scene,
            CueField::Mark => &self.mark,
            CueField::Block => &self.block,
            CueField::Follow => &self.follow,
            CueField::Execute => &self.execute,
        }
    }

    pub fn set(&mut self, field: CueField, prefix: impl Into<String>) {
        let prefix = prefix.into();
        match field {
            CueField::Number => self.cue = prefix,
            CueField::Time => self.time = prefix,
            CueField::Label => self.label = prefix,
            CueField::Notes => self.notes = prefix,
            CueField::Scene => self.scene = prefix,
            CueField::Mark => self.mark = prefix,
            CueField::Block => self.block = prefix,
            CueField::Follow => self.follow = prefix,
            CueField::Execute => self.execute = prefix,
        }
    }
}

// A comment line matches when its lowercase form starts with the lowercase
// prefix, or when it starts with the lowercase prefix followed by a space.
// The value keeps everything after the prefix's character count, including
// a separating space.
pub fn match_prefix<'a>(comment: &'a str, prefix: &str) -> Option<&'a str> {
    let lower_prefix = prefix.to_lowercase();

    let matched = comment.to_lowercase().starts_with(&lower_prefix)
        || comment.starts_with(&format!("{} ", lower_prefix));

    if matched {
        Some(strip_char_prefix(comment, prefix.chars().count()))
    } else {
        None
    }
}
