use goodlinks_export::{export, load_links, Destination, ExportError};
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

const SAMPLE: &str = r#"[
    {"url": "https://e.com/p#s", "tags": [], "addedAt": 1000.7},
    {"url": "https://rust-lang.org/learn", "title": "Learn", "tags": ["rust", "lang"], "addedAt": 1700000000.123},
    {"url": "https://news.example.com/a#comments", "tags": ["news"], "addedAt": 1600000000, "readAt": 1600000100.9}
]"#;

fn setup_input(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("goodlinks.json");
    fs::write(&input, contents).unwrap();
    (dir, input)
}

fn read_lines(path: &std::path::Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[rstest]
#[case(Destination::Instapaper, "https://e.com/p,,,Unread,1000")]
#[case(Destination::Raindrop, "https://e.com/p,Inbox,,,,1000")]
fn test_single_record_scenario(#[case] destination: Destination, #[case] expected_row: &str) {
    let (dir, input) = setup_input(r#"[{"url":"https://e.com/p#s","tags":[],"addedAt":1000.7}]"#);

    let links = load_links(&input).unwrap();
    let summary = export(destination, &links, dir.path()).unwrap();

    assert_eq!(summary.count, 1);
    assert!(summary.to_string().contains(destination.filename()));

    let lines = read_lines(&summary.path);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], destination.profile().header.join(","));
    assert_eq!(lines[1], expected_row);
}

#[test]
fn test_instapaper_full_export() {
    let (dir, input) = setup_input(SAMPLE);

    let links = load_links(&input).unwrap();
    let summary = export(Destination::Instapaper, &links, dir.path()).unwrap();

    assert_eq!(summary.count, 3);
    assert_eq!(
        read_lines(&summary.path),
        vec![
            "URL,Title,Selection,Folder,Timestamp",
            "https://e.com/p,,,Unread,1000",
            "https://rust-lang.org/learn,,,rust,1700000000",
            "https://news.example.com/a,,,Archive,1600000000",
        ]
    );
}

#[test]
fn test_raindrop_full_export() {
    let (dir, input) = setup_input(SAMPLE);

    let links = load_links(&input).unwrap();
    let summary = export(Destination::Raindrop, &links, dir.path()).unwrap();

    assert_eq!(summary.count, 3);
    assert_eq!(
        read_lines(&summary.path),
        vec![
            "url,folder,title,description,tags,created",
            "https://e.com/p,Inbox,,,,1000",
            "https://rust-lang.org/learn,Inbox,,,\"rust, lang\",1700000000",
            "https://news.example.com/a,Archive,,,news,1600000000",
        ]
    );
}

#[rstest]
#[case(Destination::Instapaper)]
#[case(Destination::Raindrop)]
fn test_empty_export_writes_header_only(#[case] destination: Destination) {
    let (dir, input) = setup_input("[]");

    let links = load_links(&input).unwrap();
    let summary = export(destination, &links, dir.path()).unwrap();

    assert_eq!(summary.count, 0);
    assert!(summary.to_string().starts_with("Successfully converted 0 links"));
    assert_eq!(read_lines(&summary.path).len(), 1);
}

#[test]
fn test_malformed_record_stops_before_output() {
    let (dir, input) = setup_input(
        r#"[{"url": "https://a.com", "tags": [], "addedAt": 1}, {"url": "https://b.com", "tags": []}]"#,
    );

    let err = load_links(&input).unwrap_err();
    assert!(matches!(err, ExportError::InvalidRecord { index: 1, .. }));
    assert!(!dir.path().join(Destination::Instapaper.filename()).exists());
}
