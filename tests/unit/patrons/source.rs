use super::*;

#[test]
fn name_list_trims_and_drops_blanks() {
    let names = parse_name_list("  Bob \n\n\tAlice\r\n   \nZoe");
    assert_eq!(names, ["Bob", "Alice", "Zoe"]);
    assert!(parse_name_list("\n \n").is_empty());
}

#[test]
fn sort_ignores_case_and_is_stable() {
    let mut names: Vec<String> = ["bob", "Alice", "Bob", "zoe", "adam"]
        .map(String::from)
        .to_vec();
    sort_case_insensitive(&mut names);
    assert_eq!(names, ["adam", "Alice", "bob", "Bob", "zoe"]);
}

#[test]
fn cache_round_trips_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache/patrons_cache.json");
    let cache = PatronCache::new(vec!["Bob".into(), "Alice".into()]);
    assert!(cache.timestamp.parse::<u64>().unwrap() > 0);

    cache.write(&path).unwrap();
    assert_eq!(PatronCache::read(&path).unwrap(), cache);
}

#[test]
fn cache_accepts_foreign_timestamps() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patrons_cache.json");
    std::fs::write(
        &path,
        r#"{"timestamp": "2024-05-01T12:00:00.123456", "patrons": ["Zoe"]}"#,
    )
    .unwrap();
    let cache = PatronCache::read(&path).unwrap();
    assert_eq!(cache.patrons, ["Zoe"]);
    assert_eq!(cache.timestamp, "2024-05-01T12:00:00.123456");
}

#[test]
fn missing_or_malformed_cache_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(PatronCache::read(&dir.path().join("nope.json")).is_err());

    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{\"patrons\": 3}").unwrap();
    assert!(matches!(
        PatronCache::read(&bad).unwrap_err(),
        CreditsError::Serde(_)
    ));
}

#[test]
fn read_name_list_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("names.txt");
    std::fs::write(&path, "Bob\nAlice\n").unwrap();
    assert_eq!(read_name_list(&path).unwrap(), ["Bob", "Alice"]);
}
