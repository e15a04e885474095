use super::*;

#[test]
fn speed_covers_patrons_frame_and_header() {
    let plan = ScrollPlan::new(2000, 720, 100, 5.0).unwrap();
    assert_eq!(plan.total_scroll_px, 2820);
    assert_eq!(plan.speed_px_per_s, 564.0);
}

#[test]
fn endpoints() {
    let plan = ScrollPlan::new(2000, 720, 100, 5.0).unwrap();
    assert_eq!(plan.position(0.0), 820.0);
    assert_eq!(plan.position(5.0), -2000.0);

    let odd = ScrollPlan::new(1234, 1080, 165, 17.0).unwrap();
    assert!((odd.position(17.0) + 1234.0).abs() < 1e-9);
}

#[test]
fn expression_matches_position() {
    let plan = ScrollPlan::new(2000, 720, 100, 5.0).unwrap();
    assert_eq!(plan.overlay_y_expr(), "H+100-(t*564)");
}

#[test]
fn non_positive_duration_is_rejected() {
    assert!(ScrollPlan::new(10, 720, 100, 0.0).is_err());
    assert!(ScrollPlan::new(10, 720, 100, f64::NAN).is_err());
}
