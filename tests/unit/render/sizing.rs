use super::*;

#[test]
fn wide_source_scales_down_to_max() {
    assert_eq!(fit(800, 400, 180, 360), Some(FittedSize::new(360, 180)));
}

#[test]
fn small_wide_source_scales_up_to_min() {
    assert_eq!(fit(100, 50, 180, 360), Some(FittedSize::new(180, 90)));
}

#[test]
fn tall_sources_clamp_height() {
    assert_eq!(fit(400, 800, 180, 360), Some(FittedSize::new(180, 360)));
    assert_eq!(fit(50, 100, 180, 360), Some(FittedSize::new(90, 180)));
}

#[test]
fn in_range_passes_through() {
    assert_eq!(fit(300, 200, 180, 360), Some(FittedSize::new(300, 200)));
    assert_eq!(fit(200, 300, 180, 360), Some(FittedSize::new(200, 300)));
}

#[test]
fn squares_take_height_branch() {
    assert_eq!(fit(500, 500, 180, 360), Some(FittedSize::new(360, 360)));
    assert_eq!(fit(90, 90, 180, 360), Some(FittedSize::new(180, 180)));
    // Bounds are inclusive on both ends.
    assert_eq!(fit(360, 360, 180, 360), Some(FittedSize::new(360, 360)));
    assert_eq!(fit(180, 180, 180, 360), Some(FittedSize::new(180, 180)));
}

#[test]
fn secondary_axis_is_not_clamped() {
    assert_eq!(fit(1000, 10, 180, 360), Some(FittedSize::new(360, 3)));
    assert_eq!(fit(10, 1000, 180, 360), Some(FittedSize::new(3, 360)));
    assert_eq!(fit(100, 2, 180, 360), Some(FittedSize::new(180, 3)));
}

#[test]
fn dominant_axis_lands_in_range_and_ratio_is_kept() {
    let (min, max) = (180u32, 360u32);
    for w in (1..=1200).step_by(37) {
        for h in (1..=1200).step_by(41) {
            let size = fit(w, h, min, max).unwrap();
            let (orig_dom, orig_other, dom, other) = if w > h {
                (w, h, size.width, size.height)
            } else {
                (h, w, size.height, size.width)
            };
            if orig_dom > max {
                assert_eq!(dom, max);
            } else if orig_dom < min {
                assert_eq!(dom, min);
            } else {
                assert_eq!((dom, other), (orig_dom, orig_other));
                continue;
            }
            let exact = u64::from(orig_other) * u64::from(dom);
            let lower = u64::from(other) * u64::from(orig_dom);
            assert!(lower <= exact && exact < lower + u64::from(orig_dom));
        }
    }
}

#[test]
fn fitted_size_for_uses_truncated_config_bounds() {
    let config = ShapeConfig {
        max_dimension: 360.7,
        ..ShapeConfig::default()
    };
    assert_eq!(
        fitted_size_for(800, 400, &config).unwrap(),
        FittedSize::new(360, 180)
    );
}

#[test]
fn fitted_size_for_rejects_empty_and_collapsed() {
    let config = ShapeConfig::default();
    assert!(matches!(
        fitted_size_for(0, 10, &config),
        Err(BubbleError::Input(_))
    ));
    let err = fitted_size_for(1000, 1, &config).unwrap_err();
    assert!(err.to_string().contains("collapses"));
}

#[test]
fn zero_dominant_does_not_divide_by_zero() {
    assert_eq!(fit(0, 0, 180, 360), Some(FittedSize::new(0, 0)));
}

#[test]
fn huge_sources_still_fit_in_range() {
    assert_eq!(
        fit(u32::MAX, u32::MAX - 1, 180, 360),
        Some(FittedSize::new(360, 359))
    );
    assert_eq!(
        fitted_size_for(1, u32::MAX, &ShapeConfig::default()).unwrap_err().to_string(),
        format!("input error: fitted size of 1x{} collapses to 0x360", u32::MAX)
    );
}
