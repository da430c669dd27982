//! Integration tests for directory batch parsing.

use std::fs;

use resparse::batch::{self, BatchEvent};
use resparse::{BatchOptions, Error, JsonFormat, ResumeParser};

fn write_fixtures(dir: &std::path::Path) {
    fs::write(dir.join("alice.txt"), "Alice Smith\nalice@example.com\nPython, SQL").unwrap();
    fs::write(dir.join("bob.txt"), "Bob Jones\nbob@example.com\n+1 555 987 6543").unwrap();
    fs::write(dir.join("carol.txt"), "Carol White\ngithub.com/carolw").unwrap();
    fs::write(dir.join("broken.pdf"), b"not a pdf at all").unwrap();
}

#[test]
fn test_three_valid_one_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    let report = resparse::parse_directory(dir.path()).unwrap();

    assert_eq!(report.len(), 4);
    assert_eq!(report.success_count(), 3);
    assert_eq!(report.failure_count(), 1);

    let (path, err) = report.failures().next().unwrap();
    assert!(path.ends_with("broken.pdf"));
    assert!(matches!(err, Error::TextExtraction(_)));

    let emails: Vec<_> = report
        .successes()
        .filter_map(|(_, r)| r.email.clone())
        .collect();
    assert_eq!(emails, vec!["alice@example.com", "bob@example.com"]);
}

#[test]
fn test_report_sorted_by_path() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    let parser = ResumeParser::with_defaults().unwrap();
    let report =
        batch::parse_directory(&parser, dir.path(), &BatchOptions::new().with_threads(4)).unwrap();

    let names: Vec<String> = report
        .outcomes
        .iter()
        .map(|o| o.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["alice.txt", "bob.txt", "broken.pdf", "carol.txt"]);
}

#[test]
fn test_report_json() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    let report = resparse::parse_directory(dir.path()).unwrap();
    let json = report.to_json(JsonFormat::Compact).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let entries = value.as_array().unwrap();

    assert_eq!(entries.len(), 4);
    assert!(entries[0]["record"].is_object());
    assert!(entries[2]["error"].is_string());
}

#[test]
fn test_failure_event() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    let parser = ResumeParser::with_defaults().unwrap();
    let (tx, rx) = crossbeam_channel::unbounded();
    batch::parse_directory_with_events(&parser, dir.path(), &BatchOptions::default(), tx)
        .unwrap();

    let events: Vec<BatchEvent> = rx.iter().collect();
    let started = events
        .iter()
        .filter(|e| matches!(e, BatchEvent::Started { .. }))
        .count();
    assert_eq!(started, 4);
    assert!(events.iter().any(
        |e| matches!(e, BatchEvent::Failed { path, .. } if path.ends_with("broken.pdf"))
    ));
}

#[test]
fn test_not_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("alice.txt");
    fs::write(&file, "Alice").unwrap();

    let result = resparse::parse_directory(&file);
    assert!(matches!(result, Err(Error::NotADirectory(_))));
}

#[test]
fn test_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    let report = resparse::parse_directory(dir.path()).unwrap();
    assert!(report.is_empty());
}

#[test]
fn test_unsupported_file_recorded() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "Ann Lee\nann@example.com").unwrap();
    fs::write(dir.path().join("b.txt"), "Ben Ray\nben@example.com").unwrap();
    fs::write(dir.path().join("c.txt"), "Cid Moss\ncid@example.com").unwrap();
    fs::write(dir.path().join("d.xyz"), "Dee Park\ndee@example.com").unwrap();

    let report = resparse::parse_directory(dir.path()).unwrap();
    assert_eq!(report.len(), 4);
    assert_eq!(report.success_count(), 3);
    assert_eq!(report.failure_count(), 1);

    let (path, err) = report.failures().next().unwrap();
    assert!(path.ends_with("d.xyz"));
    assert!(matches!(err, Error::UnsupportedFormat(ref ext) if ext == "xyz"));

    let parser = ResumeParser::with_defaults().unwrap();
    let options = BatchOptions::new().with_skip_unsupported(true);
    let report = batch::parse_directory(&parser, dir.path(), &options).unwrap();
    assert_eq!(report.len(), 3);
    assert_eq!(report.failure_count(), 0);
}
