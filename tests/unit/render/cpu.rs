use super::*;
use crate::foundation::core::Rect;
use crate::text::measure::ShapedText;

#[test]
fn background_fills_every_pixel() {
    let list = DisplayList::new(8, 4, Some(Rgb::new(10, 20, 30)));
    let img = rasterize(&list).unwrap();
    assert_eq!((img.width(), img.height()), (8, 4));
    for y in 0..4 {
        for x in 0..8 {
            assert_eq!(img.pixel(x, y), Some([10, 20, 30, 255]));
        }
    }
}

#[test]
fn rects_render_across_strip_boundaries() {
    let mut list = DisplayList::new(4, 2500, None);
    list.fill_rect(Rect::new(0.0, 1000.0, 4.0, 1100.0), Rgb::WHITE);
    list.fill_rect(Rect::new(0.0, 2400.0, 4.0, 2450.0), Rgb::GOLD);
    let img = rasterize(&list).unwrap();

    assert_eq!(img.pixel(1, 500), Some([0, 0, 0, 0]));
    assert_eq!(img.pixel(1, 1010), Some([255, 255, 255, 255]));
    assert_eq!(img.pixel(1, 1050), Some([255, 255, 255, 255]));
    assert_eq!(img.pixel(1, 1200), Some([0, 0, 0, 0]));
    assert_eq!(img.pixel(2, 2420), Some([255, 215, 0, 255]));
    assert!(!img.row_has_ink(2499));
}

#[test]
fn builtin_text_leaves_ink_inside_its_box() {
    let mut list = DisplayList::new(40, 40, None);
    let shaped = ShapedText::Builtin {
        text: "HI".to_owned(),
        unit_px: 2.0,
        width: 24.0,
        height: 14.0,
    };
    list.text(shaped, 4.0, 10.0, Rgb::WHITE);
    let img = rasterize(&list).unwrap();

    assert!((10..24).any(|y| img.row_has_ink(y)));
    assert!((0..10).all(|y| !img.row_has_ink(y)));
    assert!((24..40).all(|y| !img.row_has_ink(y)));
}

#[test]
fn builtin_glyph_stems_are_opaque_at_fractional_offsets() {
    let mut list = DisplayList::new(20, 30, None);
    let shaped = ShapedText::Builtin {
        text: "I".to_owned(),
        unit_px: 2.5,
        width: 15.0,
        height: 17.5,
    };
    list.text(shaped, 0.3, 5.25, Rgb::WHITE);
    let img = rasterize(&list).unwrap();

    // Middle column of the `I` spans x 5..8 and y 5..23 once snapped.
    for y in 5..23 {
        for x in 5..8 {
            assert_eq!(img.pixel(x, y), Some([255, 255, 255, 255]), "({x}, {y})");
        }
    }
    assert!(!img.row_has_ink(4));
    assert!(!img.row_has_ink(23));
}

#[test]
fn empty_text_is_not_recorded() {
    let mut list = DisplayList::new(10, 10, None);
    let shaped = ShapedText::Builtin {
        text: String::new(),
        unit_px: 1.0,
        width: 0.0,
        height: 7.0,
    };
    list.text(shaped, 0.0, 0.0, Rgb::WHITE);
    assert!(list.ops.is_empty());
}

#[test]
fn rejects_degenerate_sizes() {
    assert!(rasterize(&DisplayList::new(0, 10, None)).is_err());
    assert!(rasterize(&DisplayList::new(10, 0, None)).is_err());
    assert!(rasterize(&DisplayList::new(70_000, 1, None)).is_err());
}
