use super::*;

#[test]
fn from_premul_checks_length() {
    assert!(RasterImage::from_premul(2, 2, vec![0; 15]).is_err());
    let img = RasterImage::from_premul(2, 1, vec![1, 2, 3, 255, 0, 0, 0, 0]).unwrap();
    assert_eq!(img.pixel(0, 0), Some([1, 2, 3, 255]));
    assert_eq!(img.pixel(2, 0), None);
    assert!(img.row_has_ink(0));
}

#[test]
fn save_png_writes_straight_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("x.png");
    let img = RasterImage::from_premul(1, 1, vec![64, 32, 0, 128]).unwrap();
    img.save_png(&path).unwrap();

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.get_pixel(0, 0).0, [128, 64, 0, 128]);
}
