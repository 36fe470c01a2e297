// tests/table_file.rs
//
// Tests for loading schedule tables from CSV/TSV files through the CLI layer.
//
use std::fs;
use std::path::PathBuf;

use rec_schedules::cli::{load_schedule, parse_args, run_to};
use rec_schedules::{Error, TableError};

fn tmp(path: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(path);
    p
}

fn args(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn csv_table_renders() {
    let p = tmp("rec_sched_pool.csv");
    fs::write(
        &p,
        "Pool - lane swim - January 6 to April 6\n\
         ,Monday,Tuesday\n\
         Lane swim,\"7 - 8:30 am, 6 - 7 pm\",n/a\n",
    ).unwrap();

    let params = parse_args(args(&["table", p.to_str().unwrap(), "--facility", "Pool"])).unwrap();
    let s = load_schedule(&p, &params).unwrap();
    assert_eq!(s.name, "lane swim");
    assert_eq!(s.slot_count(), 2);

    let mut out = Vec::new();
    run_to(&params, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("    ~ [MO 18:00 - 19:00] lane swim\n"), "{text}");
    let _ = fs::remove_file(&p);
}

#[test]
fn tsv_by_extension() {
    let p = tmp("rec_sched_arena.tsv");
    fs::write(&p, "Arena - public skating\n\tSaturday\nPublic skating\t1 - 2:30 pm\n").unwrap();

    let params = parse_args(args(&["table", p.to_str().unwrap()])).unwrap();
    let s = load_schedule(&p, &params).unwrap();
    assert_eq!(s.activities[0].name, "public skate");
    assert!(s.warnings.is_empty());
    let _ = fs::remove_file(&p);
}

#[test]
fn broken_table_is_an_error() {
    let p = tmp("rec_sched_broken.csv");
    fs::write(&p, "Pool\n,Monday,Tuesday\nSwim,9-10\n").unwrap();

    let params = parse_args(args(&["table", p.to_str().unwrap()])).unwrap();
    let err = load_schedule(&p, &params).unwrap_err();
    assert!(matches!(err, Error::Table(TableError::RowSizeMismatch { .. })));
    let _ = fs::remove_file(&p);
}

#[test]
fn missing_file_is_io_error() {
    let params = parse_args(args(&["table", "/nonexistent/rec_sched.csv"])).unwrap();
    let err = load_schedule(&PathBuf::from("/nonexistent/rec_sched.csv"), &params).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
