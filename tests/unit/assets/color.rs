use super::*;
use serde_json::json;

#[test]
fn parses_long_and_short_hex() {
    assert_eq!(parse_hex("#FFD700").unwrap(), Rgb::GOLD);
    assert_eq!(parse_hex("ffd700").unwrap(), Rgb::GOLD);
    assert_eq!(parse_hex("#fff").unwrap(), Rgb::WHITE);
    assert_eq!(parse_hex("  #000000 ").unwrap(), Rgb::BLACK);
}

#[test]
fn rejects_malformed_hex() {
    assert!(parse_hex("#12345").is_err());
    assert!(parse_hex("#gg0000").is_err());
    assert!(parse_hex("#ééé").is_err());
}

#[test]
fn serde_accepts_hex_and_array() {
    let c: Rgb = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Rgb::new(255, 0, 0));

    let c: Rgb = serde_json::from_value(json!([1, 2, 3])).unwrap();
    assert_eq!(c, Rgb::new(1, 2, 3));

    assert_eq!(serde_json::to_value(Rgb::GOLD).unwrap(), json!("#ffd700"));
}
