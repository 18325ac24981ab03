use std::{fs, path::PathBuf};

use anyhow::Result;
use pretty_assertions::assert_eq;

use scriptsheet::{
    annotation::block::TrailingBlock,
    convert_markdown,
    cue_sheet::{
        prefix::{CueField, PrefixConfig},
        renderer::{TABLE_HEADER, TABLE_SEPARATOR},
    },
    error::ScriptsheetError,
    parse_markdown, ConvertOptions,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn table(rows: &[&str]) -> String {
    let mut table = format!("{}{}", TABLE_HEADER, TABLE_SEPARATOR);
    for row in rows {
        table.push_str(row);
        table.push('\n');
    }
    table
}

#[test]
fn test_annotator_export() -> Result<()> {
    let markdown = fs::read_to_string(fixture("hamlet_annotations.md"))?;
    let expected = fs::read_to_string(fixture("hamlet_cue_sheet.md"))?;

    let converted = convert_markdown(&markdown, &ConvertOptions::default())?;

    assert_eq!(converted, expected);
    Ok(())
}

#[test]
fn test_table_shape() -> Result<()> {
    let markdown = fs::read_to_string(fixture("hamlet_annotations.md"))?;
    let options = ConvertOptions::default();

    let cues = parse_markdown(&markdown, &options)?;
    let converted = convert_markdown(&markdown, &options)?;
    let lines: Vec<&str> = converted.lines().collect();

    assert_eq!(cues.len(), 3);
    assert_eq!(lines.len(), cues.len() + 2);
    for row in &lines[2..] {
        assert!(row.starts_with("| ") && row.ends_with(" |"));
        assert_eq!(row.matches(" | ").count(), 9);
    }
    Ok(())
}

#[test]
fn test_default_cue_prefix() -> Result<()> {
    let converted = convert_markdown("> {x}\n>{\"text\": \"Q42\"}\n\n", &ConvertOptions::default())?;

    assert_eq!(converted, table(&["| 42 |  |  |  |  |  |  |  |  |  |"]));
    Ok(())
}

#[test]
fn test_lowercase_comment_lines() -> Result<()> {
    let markdown = ">{\"text\": \"q42\\nlabel: Open\\nLABEL:Close\\nscene: 2\"}\n\n";

    let cues = parse_markdown(markdown, &ConvertOptions::default())?;

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].number, "42");
    assert_eq!(cues[0].label, "Close");
    assert_eq!(cues[0].scene, " 2");
    Ok(())
}

#[test]
fn test_highlight_in_text_is_not_cue_line() -> Result<()> {
    let markdown = ">{\"text\": \"Q1\\nI00:01:02\\nLabel: Open\\n==CUE HERE==\"}\n\n";

    let converted = convert_markdown(markdown, &ConvertOptions::default())?;

    assert_eq!(
        converted,
        table(&["| 1 | 00:01:02 |  |  Open |  |  |  |  |  |  |"])
    );
    Ok(())
}

#[test]
fn test_custom_prefixes() -> Result<()> {
    let mut prefixes = PrefixConfig::default();
    prefixes.set(CueField::Number, "LX");
    prefixes.set(CueField::Execute, "GO");
    let options = ConvertOptions {
        prefixes,
        ..Default::default()
    };

    let cues = parse_markdown(">{\"text\": \"LX7\\nQ9\\nGo now\"}\n\n", &options)?;

    assert_eq!(cues[0].number, "7");
    assert_eq!(cues[0].execute, " now");
    Ok(())
}

#[test]
fn test_trailing_block() -> Result<()> {
    let markdown = fs::read_to_string(fixture("trailing_block.md"))?;

    let dropped = parse_markdown(&markdown, &ConvertOptions::default())?;
    assert_eq!(dropped.len(), 1);
    assert_eq!(dropped[0].number, "1");

    let kept = parse_markdown(
        &markdown,
        &ConvertOptions {
            trailing_block: TrailingBlock::Keep,
            ..Default::default()
        },
    )?;
    assert_eq!(kept.len(), 2);
    assert_eq!(kept[1].number, "2");
    Ok(())
}

#[test]
fn test_crlf_source() -> Result<()> {
    let markdown = fs::read_to_string(fixture("hamlet_annotations.md"))?.replace('\n', "\r\n");
    let expected = fs::read_to_string(fixture("hamlet_cue_sheet.md"))?;

    assert_eq!(convert_markdown(&markdown, &ConvertOptions::default())?, expected);
    Ok(())
}

#[test]
fn test_no_annotations() -> Result<()> {
    let converted = convert_markdown("# Empty\n\nNo quotes.\n", &ConvertOptions::default())?;

    assert_eq!(converted, table(&[]));
    Ok(())
}

#[test]
fn test_malformed_payload() {
    let markdown = "# Cues\n\n>{\"text\": \"Q1\"}\n\n>%%\n>{\"text\": \"Q2\",}\n\n";

    let err = convert_markdown(markdown, &ConvertOptions::default()).unwrap_err();

    match err.downcast_ref::<ScriptsheetError>() {
        Some(ScriptsheetError::MalformedPayload { block, line, .. }) => {
            assert_eq!((*block, *line), (2, 6));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_payload_without_text() {
    let err = convert_markdown(">{\"comment\": \"Q1\"}\n\n", &ConvertOptions::default()).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ScriptsheetError>(),
        Some(ScriptsheetError::MissingText { block: 1, line: 1 })
    ));
}
