use super::*;
use crate::assets::fonts::FontFamily;

fn measurer(size: f32) -> TextMeasurer {
    TextMeasurer::new(FontFace::Builtin, size)
}

fn params(message: &str, align: HeaderAlign) -> HeaderParams<'_> {
    HeaderParams {
        message,
        width: 1280,
        style: StyleSpec::new(36, Rgb::WHITE, FontFamily::default(), false),
        align,
        background: Rgb::new(0, 0, 40),
        scale: 1.0,
    }
}

#[test]
fn height_is_lines_times_line_height_plus_padding() {
    let mut m = measurer(36.0);
    let one = layout_header("Thanks!", 1280, HeaderAlign::Left, 1.0, &mut m);
    assert_eq!(one.line_height, 50);
    assert_eq!(one.height, 50 + 60);

    let two = layout_header("Thanks\nto you", 1280, HeaderAlign::Left, 1.0, &mut m);
    assert_eq!(two.height, 2 * 50 + 60);
    assert_eq!(two.lines[1].top, 30 + 50);
}

#[test]
fn padding_and_margin_scale_with_resolution() {
    let mut m = measurer(54.0);
    let l = layout_header("Thanks!", 1920, HeaderAlign::Left, 1.5, &mut m);
    assert_eq!((l.padding, l.margin), (45, 75));
    assert_eq!(l.line_height, 75);
    assert_eq!(l.height, 75 + 90);
    assert_eq!(l.lines[0].words[0].x, 75.0);
}

#[test]
fn justify_spans_usable_width_except_last_line() {
    let mut m = measurer(36.0);
    let l = layout_header("one two three\nlast line", 1280, HeaderAlign::Justify, 1.0, &mut m);
    assert_eq!(l.usable_width(), 1180);

    let first = &l.lines[0].words;
    assert_eq!(first.len(), 3);
    assert_eq!(first[0].x, 50.0);
    let end = first[2].x + first[2].width;
    assert!((end - 1230.0).abs() < 0.01, "justified line ends at {end}");
    let gap_a = first[1].x - (first[0].x + first[0].width);
    let gap_b = first[2].x - (first[1].x + first[1].width);
    assert!((gap_a - gap_b).abs() < 0.01);

    let last = &l.lines[1].words;
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].text, "last line");
    assert_eq!(last[0].x, 50.0);
}

#[test]
fn justify_falls_back_to_left_when_words_overflow() {
    let mut m = measurer(36.0);
    let l = layout_header("aaaa bbbb\nx", 300, HeaderAlign::Justify, 1.0, &mut m);
    let words = &l.lines[0].words;
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].x, 50.0);
}

#[test]
fn justify_keeps_single_word_lines_left() {
    let mut m = measurer(36.0);
    let l = layout_header("Thanks\nto all of you", 1280, HeaderAlign::Justify, 1.0, &mut m);
    let first = &l.lines[0].words;
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].text, "Thanks");
    assert_eq!(first[0].x, 50.0);
}

#[test]
fn trailing_newline_does_not_justify_the_last_text_line() {
    let mut m = measurer(36.0);
    let l = layout_header("one two\n", 1280, HeaderAlign::Justify, 1.0, &mut m);
    assert_eq!(l.lines.len(), 2);
    assert_eq!(l.height, 2 * 50 + 60);
    let words = &l.lines[0].words;
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].text, "one two");
    assert_eq!(words[0].x, 50.0);
    assert!(l.lines[1].words.is_empty());

    let spread = layout_header("one two\nlast\n\n", 1280, HeaderAlign::Justify, 1.0, &mut m);
    let end = spread.lines[0].words[1].x + spread.lines[0].words[1].width;
    assert!((end - 1230.0).abs() < 0.01);
    assert_eq!(spread.lines[1].words[0].x, 50.0);
}

#[test]
fn center_and_right_offsets() {
    let mut m = measurer(36.0);
    let c = layout_header("Hi", 1280, HeaderAlign::Center, 1.0, &mut m);
    assert_eq!(c.lines[0].words[0].width, 54.0);
    assert_eq!(c.lines[0].words[0].x, 50.0 + (1180.0 - 54.0) / 2.0);

    let r = layout_header("Hi", 1280, HeaderAlign::Right, 1.0, &mut m);
    assert_eq!(r.lines[0].words[0].x, 1230.0 - 54.0);
}

#[test]
fn blank_lines_keep_their_line_box() {
    let mut m = measurer(36.0);
    let l = layout_header("a\n\nb", 1280, HeaderAlign::Left, 1.0, &mut m);
    assert_eq!(l.lines.len(), 3);
    assert!(l.lines[1].words.is_empty());
    assert_eq!(l.height, 3 * 50 + 60);
}

#[test]
fn render_fills_background_and_draws_text() {
    let block = render_header(&params("Hi", HeaderAlign::Left), FontFace::Builtin).unwrap();
    assert_eq!((block.image.width(), block.height()), (1280, 110));
    assert_eq!(block.image.pixel(0, 0), Some([0, 0, 40, 255]));
    assert_eq!(block.image.pixel(1279, 109), Some([0, 0, 40, 255]));
    // Left stem of the `H`, vertically centered in the first line box.
    assert_eq!(block.image.pixel(51, 55), Some([255, 255, 255, 255]));
}
