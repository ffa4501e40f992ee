//! End-to-end tests driving the datefix binary across the workspace

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn datefix() -> Command {
    Command::cargo_bin("datefix").unwrap()
}

#[test]
fn full_migration_of_a_fixture_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("rrule.rs");
    let output = dir.path().join("new.rs");

    fs::write(
        &input,
        concat!(
            "#[test]\n",
            "fn weekly_dates() {\n",
            "    let expected = &[ymd_hms(2020,9,2), ymd_hms(2020,9,9), ymd_hms(2020,9,16),];\n",
            "    check(expected);\n",
            "}\n",
            "\n",
            "// ymd_hms outside a block stays as-is\n",
            "fn helper() -> DateTime { ymd_hms(1970,1,1) }\n",
            "\n",
            "#[test]\n",
            "fn monthly_dates() {\n",
            "    let expected = &[ymd_hms(2020,10,1), ymd_hms(2020,11,1),];\n",
            "    check(expected);\n",
            "}\n",
        ),
    )
    .unwrap();

    datefix()
        .current_dir(dir.path())
        .arg("rewrite")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("new.rs"));

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("&[ymd_hmso(2020,9,2), ymd_hmso(2020,9,9), ymd_hmso(2020,9,16),]"));
    assert!(written.contains("&[ymd_hmso(2020,10,1), ymd_hmso(2020,11,1),]"));
    assert!(written.contains("// ymd_hms outside a block stays as-is"));
    assert!(written.contains("fn helper() -> DateTime { ymd_hms(1970,1,1) }"));
    // Input is untouched.
    assert!(fs::read_to_string(&input).unwrap().contains("&[ymd_hms(2020,9,2)"));
}

#[test]
fn scan_then_rewrite_agree_on_block_counts() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("rrule.rs");
    let output = dir.path().join("new.rs");
    fs::write(&input, "&[ymd_hms(1),] mid &[ymd_hms(2), ymd_hms(3),]\n").unwrap();

    let scan = datefix()
        .current_dir(dir.path())
        .args(["scan", "--json"])
        .arg(&input)
        .assert()
        .success();
    let scan_report: serde_json::Value =
        serde_json::from_slice(&scan.get_output().stdout).unwrap();

    let rewrite = datefix()
        .current_dir(dir.path())
        .args(["rewrite", "--json"])
        .arg(&input)
        .arg(&output)
        .assert()
        .success();
    let rewrite_report: serde_json::Value =
        serde_json::from_slice(&rewrite.get_output().stdout).unwrap();

    assert_eq!(
        scan_report["blocks"].as_array().unwrap().len() as u64,
        rewrite_report["blocks"].as_u64().unwrap()
    );
    assert_eq!(rewrite_report["substitutions"], 3);
}

#[test]
fn rerunning_over_the_output_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("rrule.rs");
    let once = dir.path().join("once.rs");
    let twice = dir.path().join("twice.rs");
    fs::write(&input, "&[ymd_hms(2020,1,1), ymd_hms(2020,1,2),]\n").unwrap();

    datefix()
        .current_dir(dir.path())
        .arg("rewrite")
        .arg(&input)
        .arg(&once)
        .assert()
        .success();

    let second = datefix()
        .current_dir(dir.path())
        .args(["rewrite", "--json"])
        .arg(&once)
        .arg(&twice)
        .assert()
        .success();
    let report: serde_json::Value =
        serde_json::from_slice(&second.get_output().stdout).unwrap();

    assert_eq!(report["changed"], false);
    assert_eq!(
        fs::read_to_string(&once).unwrap(),
        fs::read_to_string(&twice).unwrap()
    );
}
