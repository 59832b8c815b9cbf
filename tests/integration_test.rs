//! Integration tests for csvtranspose

use csvtranspose::{TransposeError, Transposer};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn workspace() -> (TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.csv");
    let output = dir.path().join("output.csv");
    (dir, input, output)
}

#[test]
fn test_basic_transpose() {
    let (_dir, input, output) = workspace();
    fs::write(&input, "a,b,c\n1,2,3\n4,5,6\n").unwrap();

    let summary = Transposer::new().run(&input, &output).unwrap();
    assert_eq!(summary.rows_read, 3);
    assert_eq!(summary.columns, 3);

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content, "a,1,4\nb,2,5\nc,3,6\n");
}

#[test]
fn test_round_trip_restores_original() {
    let (dir, input, output) = workspace();
    let original = "a,b,c,d\n1,2,3,4\n5,6,7,8\n";
    fs::write(&input, original).unwrap();

    let back = dir.path().join("back.csv");
    Transposer::new().run(&input, &output).unwrap();
    Transposer::new().run(&output, &back).unwrap();

    assert_eq!(fs::read_to_string(&back).unwrap(), original);
}

#[test]
fn test_order_preservation() {
    // Output row i is the comma-join of field i from every input row
    let (_dir, input, output) = workspace();

    let rows = 20;
    let cols = 7;
    let mut content = String::new();
    for r in 0..rows {
        let row: Vec<String> = (0..cols).map(|c| format!("r{}c{}", r, c)).collect();
        content.push_str(&row.join(","));
        content.push('\n');
    }
    fs::write(&input, content).unwrap();

    let summary = Transposer::new().run(&input, &output).unwrap();
    assert_eq!(summary.rows_read, rows);
    assert_eq!(summary.columns, cols as usize);

    let transposed = fs::read_to_string(&output).unwrap();
    for (c, line) in transposed.lines().enumerate() {
        let expected: Vec<String> = (0..rows).map(|r| format!("r{}c{}", r, c)).collect();
        assert_eq!(line, expected.join(","));
    }
}

#[test]
fn test_single_column_becomes_single_row() {
    let (_dir, input, output) = workspace();
    fs::write(&input, "one\ntwo\nthree\nfour\n").unwrap();

    let summary = Transposer::new().run(&input, &output).unwrap();
    assert_eq!(summary.columns, 1);

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content, "one,two,three,four\n");
}

#[test]
fn test_single_row_becomes_single_column() {
    let (_dir, input, output) = workspace();
    fs::write(&input, "a,b,c\n").unwrap();

    let summary = Transposer::new().run(&input, &output).unwrap();
    assert_eq!(summary.rows_read, 1);

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content, "a\nb\nc\n");
}

#[test]
fn test_empty_fields_kept_in_position() {
    let (_dir, input, output) = workspace();
    fs::write(&input, "a,,c\n,2,\n").unwrap();

    Transposer::new().run(&input, &output).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content, "a,\n,2\nc,\n");
}

#[test]
fn test_mismatched_columns_fails_without_output() {
    let (_dir, input, output) = workspace();
    fs::write(&input, "x,y\n1,2\n3\n").unwrap();

    let err = Transposer::new().run(&input, &output).unwrap_err();
    assert!(matches!(err, TransposeError::MalformedInput(_)));
    assert_eq!(err.exit_code(), 5);
    assert!(!output.exists());
}

#[test]
fn test_extra_columns_fail_too() {
    let (_dir, input, output) = workspace();
    fs::write(&input, "x,y\n1,2,3\n").unwrap();

    let err = Transposer::new().run(&input, &output).unwrap_err();
    assert!(matches!(err, TransposeError::MalformedInput(_)));
    assert!(!output.exists());
}

#[test]
fn test_empty_input_fails_on_header_read() {
    let (_dir, input, output) = workspace();
    fs::write(&input, "").unwrap();

    let err = Transposer::new().run(&input, &output).unwrap_err();
    assert!(matches!(err, TransposeError::ReadInput(_)));
    assert_eq!(err.exit_code(), 3);
    assert!(!output.exists());
}

#[test]
fn test_missing_input_fails_on_open() {
    let (dir, _input, output) = workspace();

    let err = Transposer::new()
        .run(dir.path().join("nope.csv"), &output)
        .unwrap_err();
    assert!(matches!(err, TransposeError::OpenInput(_)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_unwritable_destination_fails_on_open() {
    let (dir, input, _output) = workspace();
    fs::write(&input, "a,b\n1,2\n").unwrap();

    let err = Transposer::new()
        .run(&input, dir.path().join("missing_dir").join("out.csv"))
        .unwrap_err();
    assert!(matches!(err, TransposeError::OpenOutput(_)));
    assert_eq!(err.exit_code(), 6);
}

#[test]
fn test_existing_output_is_truncated() {
    let (_dir, input, output) = workspace();
    fs::write(&input, "a,b\n1,2\n").unwrap();
    fs::write(&output, "previous run leftovers\nmore leftovers\n").unwrap();

    Transposer::new().run(&input, &output).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content, "a,1\nb,2\n");
}

#[test]
fn test_missing_final_newline_still_counts() {
    let (_dir, input, output) = workspace();
    fs::write(&input, "a,b\n1,2").unwrap();

    let summary = Transposer::new().run(&input, &output).unwrap();
    assert_eq!(summary.rows_read, 2);

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content, "a,1\nb,2\n");
}

#[test]
fn test_crlf_input_normalizes() {
    let (_dir, input, output) = workspace();
    fs::write(&input, "a,b\r\n1,2\r\n").unwrap();

    Transposer::new().run(&input, &output).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content, "a,1\nb,2\n");
}

#[test]
fn test_wide_matrix() {
    // The wide-to-tall direction is the tool's original use case
    let (_dir, input, output) = workspace();

    let cols = 500;
    let header: Vec<String> = (0..cols).map(|c| format!("marker{}", c)).collect();
    let row1: Vec<String> = (0..cols).map(|c| (c % 3).to_string()).collect();
    let row2: Vec<String> = (0..cols).map(|c| (c % 2).to_string()).collect();
    let content = format!(
        "{}\n{}\n{}\n",
        header.join(","),
        row1.join(","),
        row2.join(",")
    );
    fs::write(&input, content).unwrap();

    let summary = Transposer::new().run(&input, &output).unwrap();
    assert_eq!(summary.rows_read, 3);
    assert_eq!(summary.columns, cols as usize);

    let transposed = fs::read_to_string(&output).unwrap();
    assert_eq!(transposed.lines().count(), cols as usize);
    assert_eq!(transposed.lines().next().unwrap(), "marker0,0,0");
}

#[test]
fn test_compressed_round_trip() {
    let (dir, _input, _output) = workspace();
    let input = dir.path().join("input.csv.zst");
    let output = dir.path().join("output.csv.zst");
    let back = dir.path().join("back.csv");

    // Write the compressed input through the crate's own writer
    {
        let mut writer = csvtranspose::RowWriter::create(&input).unwrap();
        writer.write_line("a,b,c").unwrap();
        writer.write_line("1,2,3").unwrap();
        writer.save().unwrap();
    }

    Transposer::new().run(&input, &output).unwrap();
    Transposer::new().run(&output, &back).unwrap();

    let content = fs::read_to_string(&back).unwrap();
    assert_eq!(content, "a,b,c\n1,2,3\n");
}
