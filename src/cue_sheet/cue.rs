use crate::{
    annotation::payload::CueRecord,
    cue_sheet::prefix::{match_prefix, CueField, PrefixConfig},
};

pub const COMMENT_DELIMITER: char = '\n';

// One row of the cue sheet. Fields default to "".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cue {
    pub number: String,
    pub time: String,
    pub text: String,
    pub label: String,
    pub notes: String,
    pub scene: String,
    pub mark: String,
    pub block: String,
    pub follow: String,
    pub execute: String,
}

impl Cue {
    pub fn from_record(record: &CueRecord, prefixes: &PrefixConfig) -> Self {
        let mut cue = Cue::from_comment(record.text(), prefixes);
        if let Some(text) = record.highlighted_text() {
            cue.text = text.to_owned();
        }
        cue
    }

    // Every comment line is checked against every prefix; a later match
    // overwrites an earlier one.
    pub fn from_comment(comment: &str, prefixes: &PrefixConfig) -> Self {
        let mut cue = Cue::default();

        for line in comment.split(COMMENT_DELIMITER) {
            for field in CueField::ALL {
                if let Some(value) = match_prefix(line, prefixes.get(field)) {
                    *cue.field_mut(field) = value.to_owned();
                }
            }
        }

        cue
    }

    fn field_mut(&mut self, field: CueField) -> &mut String {
        match field {
            CueField::Number => &mut self.number,
            CueField::Time => &mut self.time,
            CueField::Label => &mut self.label,
            CueField::Notes => &mut self.notes,
            CueField::Scene => &mut self.scene,
            CueField::Mark => &mut self.mark,
            CueField::Block => &mut self.block,
            CueField::Follow => &mut self.follow,
            CueField::Execute => &mut self.execute,
        }
    }

    // Column order of the rendered table.
    pub fn columns(&self) -> [&str; 10] {
        [
            self.number.as_str(),
            self.time.as_str(),
            self.text.as_str(),
            self.label.as_str(),
            self.notes.as_str(),
            self.scene.as_str(),
            self.mark.as_str(),
            self.block.as_str(),
            self.follow.as_str(),
            self.execute.as_str(),
        ]
    }
}
