use super::*;
use serde_json::json;

#[test]
fn keys_round_trip_and_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for f in FontFamily::ALL {
        assert!(seen.insert(f.key()), "duplicate key {}", f.key());
        assert_eq!(FontFamily::from_key(f.key()), Some(*f));
    }
    assert_eq!(FontFamily::ALL.len(), 35);
    assert_eq!(FontFamily::ALL[0], FontFamily::default());
}

#[test]
fn single_weight_families_reuse_regular_for_bold() {
    assert_eq!(FontFamily::BebasNeue.file_for(true), "BebasNeue-Regular.ttf");
    assert_eq!(FontFamily::Inter.file_for(true), "Inter-Bold.ttf");
    assert_eq!(FontFamily::NotoSans.file_for(false), "NotoSansCJKsc-Regular.otf");
}

#[test]
fn unknown_family_deserializes_to_default() {
    let f: FontFamily = serde_json::from_value(json!("comic_sans")).unwrap();
    assert_eq!(f, FontFamily::NotoSans);
    let f: FontFamily = serde_json::from_value(json!("lora")).unwrap();
    assert_eq!(f, FontFamily::Lora);
    assert_eq!(serde_json::to_value(FontFamily::DmSans).unwrap(), json!("dm_sans"));
}

#[test]
fn missing_files_fall_back_to_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let registry = FontRegistry::new(dir.path()).with_system_paths(vec![]);
    let resolved = registry.resolve(FontFamily::Roboto, true);
    assert!(matches!(resolved.face, FontFace::Builtin));
    assert_eq!(resolved.source, FontSource::Builtin);
}

#[test]
fn corrupt_font_file_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Roboto-Regular.ttf"), b"not a font").unwrap();
    let registry = FontRegistry::new(dir.path()).with_system_paths(vec![]);
    let resolved = registry.resolve(FontFamily::Roboto, false);
    assert_eq!(resolved.source, FontSource::Builtin);
}

#[test]
fn outline_font_rejects_garbage_bytes() {
    assert!(OutlineFont::from_bytes(vec![0u8; 16]).is_err());
}
