//! Library-level pipeline tests: read -> rewrite -> write

use datefix_content::BlockScanner;
use datefix_fs::{NormalizedPath, checksum, io};
use std::fs;

fn run_pipeline(input: &NormalizedPath, output: &NormalizedPath) {
    let scanner = BlockScanner::default();
    let source = io::read_text(input).unwrap();
    let outcome = scanner.rewrite(&source);
    io::write_text(output, &outcome.output).unwrap();
}

#[test]
fn pipeline_rewrites_blocks_and_preserves_everything_else() {
    let dir = tempfile::tempdir().unwrap();
    let input = NormalizedPath::new(dir.path().join("rrule.rs"));
    let output = NormalizedPath::new(dir.path().join("new.rs"));

    fs::write(
        input.to_native(),
        concat!(
            "// fixture dates, ymd_hms mentioned in a comment\n",
            "let a = &[ymd_hms(2020,1,1), ymd_hms(2020,1,2),];\n",
            "let lone = ymd_hms(2020,3,3);\n",
            "let b = &[\n    ymd_hms(2021,5,1),\n];\n",
        ),
    )
    .unwrap();

    run_pipeline(&input, &output);

    let written = io::read_text(&output).unwrap();
    assert_eq!(
        written,
        concat!(
            "// fixture dates, ymd_hms mentioned in a comment\n",
            "let a = &[ymd_hmso(2020,1,1), ymd_hmso(2020,1,2),];\n",
            "let lone = ymd_hms(2020,3,3);\n",
            "let b = &[\n    ymd_hmso(2021,5,1),\n];\n",
        ),
    );
}

#[test]
fn pipeline_is_idempotent_across_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = NormalizedPath::new(dir.path().join("rrule.rs"));
    let once = NormalizedPath::new(dir.path().join("once.rs"));
    let twice = NormalizedPath::new(dir.path().join("twice.rs"));

    fs::write(
        input.to_native(),
        "&[ymd_hms(2020,6,1), ymd_hms(2020,6,2),]\n",
    )
    .unwrap();

    run_pipeline(&input, &once);
    run_pipeline(&once, &twice);

    assert_eq!(
        checksum::file_checksum(&once).unwrap(),
        checksum::file_checksum(&twice).unwrap()
    );
}

#[test]
fn pipeline_round_trips_non_matching_files_byte_for_byte() {
    let dir = tempfile::tempdir().unwrap();
    let input = NormalizedPath::new(dir.path().join("plain.rs"));
    let output = NormalizedPath::new(dir.path().join("copy.rs"));

    let source = "fn main() { let x = ymd_hms(2020,1,1); }\n";
    fs::write(input.to_native(), source).unwrap();

    run_pipeline(&input, &output);

    assert_eq!(io::read_text(&output).unwrap(), source);
    assert_eq!(
        checksum::content_checksum(source),
        checksum::file_checksum(&output).unwrap()
    );
}

#[test]
fn pipeline_overwrites_an_existing_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = NormalizedPath::new(dir.path().join("rrule.rs"));
    let output = NormalizedPath::new(dir.path().join("new.rs"));

    fs::write(input.to_native(), "&[ymd_hms(1),]").unwrap();
    fs::write(output.to_native(), "previous run leftovers").unwrap();

    run_pipeline(&input, &output);

    assert_eq!(io::read_text(&output).unwrap(), "&[ymd_hmso(1),]");
}
