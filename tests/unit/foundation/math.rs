use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn unpremultiply_restores_straight_channels() {
    let mut px = vec![0u8, 0, 0, 0, 10, 20, 30, 255, 64, 32, 0, 128];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[0..4], &[0, 0, 0, 0]);
    assert_eq!(&px[4..8], &[10, 20, 30, 255]);
    assert_eq!(&px[8..12], &[128, 64, 0, 128]);
}
