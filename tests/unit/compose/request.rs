use super::*;

fn solid(width: u32, height: u32, px: [u8; 4]) -> RasterImage {
    let data = px.repeat(width as usize * height as usize);
    RasterImage::from_premul(width, height, data).unwrap()
}

fn request() -> CompositionRequest {
    CompositionRequest::new(
        solid(1280, 100, [200, 0, 0, 255]),
        solid(1280, 2000, [128, 0, 0, 128]),
        Resolution::Hd720,
        Rgb::new(0, 0, 40),
        5.0,
    )
    .unwrap()
}

#[test]
fn plan_is_derived_from_layer_heights() {
    let req = request();
    assert_eq!(req.header_height(), 100);
    assert_eq!(req.patron_height(), 2000);
    assert_eq!(req.plan.speed_px_per_s, 564.0);
    assert_eq!(req.fps, Fps::CREDITS);
    assert_eq!(req.frame_count(), 150);
}

#[test]
fn layers_must_span_the_frame_width() {
    let err = CompositionRequest::new(
        solid(640, 100, [0, 0, 0, 255]),
        solid(1280, 10, [0, 0, 0, 0]),
        Resolution::Hd720,
        Rgb::BLACK,
        5.0,
    )
    .unwrap_err();
    assert!(err.to_string().contains("header image width 640"));
}

#[test]
fn ffmpeg_graph_strings() {
    let req = request();
    assert_eq!(req.background_source(), "color=c=0x000028:s=1280x720:d=5:r=30/1");
    assert_eq!(
        req.filter_complex(),
        "[1:v]format=rgba,scale=1280:2000[patron];\
         [0:v][patron]overlay=0:'H+100-(t*564)'[bg];\
         [bg][2:v]overlay=0:0[out]"
    );
}

#[test]
fn frame_stacks_background_patrons_header() {
    let req = request();

    let start = req.render_frame(0.0).unwrap();
    assert_eq!((start.width(), start.height()), (1280, 720));
    assert_eq!(start.pixel(10, 50), Some([200, 0, 0, 255]));
    assert_eq!(start.pixel(10, 500), Some([0, 0, 40, 255]));

    // Patron layer at y = -590 covers the whole frame; header stays on top.
    let mid = req.render_frame(2.5).unwrap();
    assert_eq!(mid.pixel(10, 50), Some([200, 0, 0, 255]));
    assert_eq!(mid.pixel(10, 500), Some([128, 0, 20, 255]));

    let end = req.render_frame(5.0).unwrap();
    assert_eq!(end.pixel(10, 500), Some([0, 0, 40, 255]));
}
