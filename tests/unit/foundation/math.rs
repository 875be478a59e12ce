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
fn mul_div255_identity_and_zero() {
    for x in [0u16, 17, 128, 255] {
        assert_eq!(mul_div255_u16(x, 255), x);
        assert_eq!(mul_div255_u16(x, 0), 0);
    }
}

#[test]
fn scale_truncating_matches_integer_division() {
    assert_eq!(scale_truncating(400, 360, 800), Some(180));
    assert_eq!(scale_truncating(50, 180, 100), Some(90));
    assert_eq!(scale_truncating(10, 360, 1000), Some(3));
    assert_eq!(scale_truncating(1, 360, 1000), Some(0));
}

#[test]
fn scale_truncating_does_not_overflow_u32_products() {
    assert_eq!(scale_truncating(u32::MAX, 2, 4), Some(u32::MAX / 2));
}

#[test]
fn scale_truncating_reports_overflow_and_zero_reference() {
    assert_eq!(scale_truncating(u32::MAX, 4, 2), None);
    assert_eq!(scale_truncating(u32::MAX, u32::MAX, 1), None);
    assert_eq!(scale_truncating(10, 10, 0), None);
}
