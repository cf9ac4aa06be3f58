//! Drives the command-line front end against an in-memory writer.

use std::fs;

use clap::Parser;
use vfo_designer::cli::{self, Cli};

fn run(args: &[&str]) -> vfo_designer::errors::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("vfo-designer").chain(args.iter().copied()))
        .expect("arguments parse");
    let mut out = Vec::new();
    cli::run(&cli, &mut out)?;
    Ok(String::from_utf8(out).expect("report is utf-8"))
}

const EIGHTY_METRES: [&str; 9] = [
    "parallel", "--f-min", "3.5", "--f-max", "4.0", "--cv-min", "10", "--cv-max", "365",
];

// ── Parallel subcommand ───────────────────────────────────────────

#[test]
fn test_parallel_report_lists_rows_then_skipped_padding() {
    let report = run(&EIGHTY_METRES).unwrap();
    let (table, failures) = report.split_once("\n\n").expect("blank line before failures");

    let lines: Vec<_> = table.lines().collect();
    assert!(lines[0].starts_with("Series C [pF]"));
    assert!(lines[1].chars().all(|c| c == '-'));
    assert_eq!(lines.len() - 2, 7);

    let last = lines.last().unwrap();
    assert!(last.starts_with("100.0000"));
    assert!(last.contains("217.6279"));

    assert_eq!(failures.lines().filter(|l| l.contains("skipped")).count(), 3);
    assert!(failures.starts_with("Series C 1.0000 pF skipped"));
}

#[test]
fn test_parallel_schematic_follows_table() {
    let mut args = EIGHTY_METRES.to_vec();
    args.push("--schematic");
    let report = run(&args).unwrap();
    assert!(report.contains("C_p"));
}

#[test]
fn test_parallel_curves_use_requested_samples() {
    let path = std::env::temp_dir().join(format!("vfo-designer-cli-{}.csv", std::process::id()));
    let path_arg = path.to_str().unwrap();

    let mut args = EIGHTY_METRES.to_vec();
    args.extend(["--curves", path_arg, "--samples", "5"]);
    run(&args).unwrap();

    let csv = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("label,capacitance_pF,frequency_MHz"));
    // Seven feasible padding values, five samples each.
    assert_eq!(lines.count(), 7 * 5);
}

#[test]
fn test_parallel_rejects_inverted_tuning_range() {
    let err = run(&[
        "parallel", "--f-min", "3.5", "--f-max", "4.0", "--cv-min", "365", "--cv-max", "10",
    ])
    .unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_parallel_rejects_descending_series_bounds() {
    let mut args = EIGHTY_METRES.to_vec();
    args.extend(["--series-start", "100", "--series-stop", "1"]);
    assert!(run(&args).unwrap_err().is_invalid_input());
}

// ── Progressive subcommand ────────────────────────────────────────

#[test]
fn test_progressive_report_shows_derived_capacitors() {
    let report = run(&[
        "progressive",
        "--f-min",
        "14.225",
        "--f-max",
        "14.35",
        "--inductance",
        "0.784",
        "--c1",
        "15",
        "--cv-max",
        "145",
        "--schematic",
    ])
    .unwrap();

    let row = report.lines().nth(2).expect("result row");
    let values: Vec<f64> = row.split_whitespace().map(|v| v.parse().unwrap()).collect();
    assert_eq!(values.len(), 5);
    assert!((values[2] - 43.022).abs() < 1.0e-2);
    assert!((values[3] - 145.777).abs() < 1.0e-2);
    assert!(report.contains("C3"));
}

#[test]
fn test_progressive_rejects_inverted_band() {
    let err = run(&[
        "progressive",
        "--f-min",
        "14.35",
        "--f-max",
        "14.225",
        "--inductance",
        "0.784",
        "--c1",
        "15",
        "--cv-max",
        "145",
    ])
    .unwrap_err();
    assert!(err.is_invalid_input());
}
