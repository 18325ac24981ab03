use crate::cue_sheet::cue::Cue;

pub const TABLE_HEADER: &str =
    "| Cue Number | Time | Cue Line | Label | Notes | Scene | Mark | Block | Follow | Execute |\n";
pub const TABLE_SEPARATOR: &str =
    "| ---------- | ---- | -------- | ----- | ----- | ----- | ---- | ----- | ------ | ------- |\n";

pub fn render_cue_row(cue: &Cue) -> String {
    format!("| {} |\n", cue.columns().join(" | "))
}

// Markdown pipe table: header, separator and one row per cue.
pub fn render_cue_table(cues: &[Cue]) -> String {
    let mut table = String::new();
    table.push_str(TABLE_HEADER);
    table.push_str(TABLE_SEPARATOR);

    for cue in cues {
        table.push_str(&render_cue_row(cue));
    }

    table
}
