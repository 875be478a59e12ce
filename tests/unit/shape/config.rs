use super::*;

#[test]
fn defaults_match_documented_values() {
    let c = ShapeConfig::default();
    assert_eq!(c.radius, 12.0);
    assert_eq!(c.vertex_x, 30.0);
    assert_eq!(c.vertex_y, 50.0);
    assert_eq!(c.hemline_length, 27.0);
    assert_eq!(c.max_dimension, 360.0);
    assert_eq!(c.min_dimension, 180.0);
    assert_eq!(c.orientation, Orientation::Left);
    c.validate().unwrap();
}

#[test]
fn orientation_codes_roundtrip_and_reject_unknown() {
    assert_eq!(Orientation::from_code(0).unwrap(), Orientation::Right);
    assert_eq!(Orientation::from_code(1).unwrap(), Orientation::Left);
    for o in [Orientation::Left, Orientation::Right] {
        assert_eq!(Orientation::from_code(o.code()).unwrap(), o);
    }
    let err = Orientation::from_code(2).unwrap_err();
    assert!(matches!(err, BubbleError::Configuration(_)));
    assert!(Orientation::from_code(-1).is_err());
}

#[test]
fn orientation_parses_case_insensitive() {
    assert_eq!("LEFT".parse::<Orientation>().unwrap(), Orientation::Left);
    assert_eq!(" right ".parse::<Orientation>().unwrap(), Orientation::Right);
    assert!(matches!(
        "up".parse::<Orientation>(),
        Err(BubbleError::Configuration(_))
    ));
    assert_eq!(Orientation::Right.to_string(), "right");
}

#[test]
fn validate_rejects_negative_and_non_finite_values() {
    let bad = [
        ShapeConfig {
            radius: -1.0,
            ..ShapeConfig::default()
        },
        ShapeConfig {
            vertex_x: f64::NAN,
            ..ShapeConfig::default()
        },
        ShapeConfig {
            vertex_y: -0.5,
            ..ShapeConfig::default()
        },
        ShapeConfig {
            hemline_length: f64::INFINITY,
            ..ShapeConfig::default()
        },
        ShapeConfig {
            min_dimension: -10.0,
            ..ShapeConfig::default()
        },
    ];
    for c in bad {
        assert!(
            matches!(c.validate(), Err(BubbleError::Configuration(_))),
            "{c:?}"
        );
    }
}

#[test]
fn validate_rejects_inverted_bounds_but_allows_equal() {
    let inverted = ShapeConfig {
        max_dimension: 100.0,
        min_dimension: 200.0,
        ..ShapeConfig::default()
    };
    let err = inverted.validate().unwrap_err();
    assert!(err.to_string().contains("max_dimension"));

    let equal = ShapeConfig {
        max_dimension: 200.0,
        min_dimension: 200.0,
        ..ShapeConfig::default()
    };
    equal.validate().unwrap();
}

#[test]
fn json_partial_document_uses_defaults() {
    let c = ShapeConfig::from_json_str(r#"{ "radius": 4.0, "orientation": "right" }"#).unwrap();
    assert_eq!(c.radius, 4.0);
    assert_eq!(c.orientation, Orientation::Right);
    assert_eq!(c.vertex_x, DEFAULT_VERTEX_X);
    assert_eq!(c.max_dimension, DEFAULT_MAX_DIMENSION);
}

#[test]
fn json_rejects_unknown_orientation_and_invalid_values() {
    assert!(matches!(
        ShapeConfig::from_json_str(r#"{ "orientation": "up" }"#),
        Err(BubbleError::Configuration(_))
    ));
    assert!(matches!(
        ShapeConfig::from_json_str(r#"{ "max_dimension": 10.0 }"#),
        Err(BubbleError::Configuration(_))
    ));
    assert!(ShapeConfig::from_json_str("not json").is_err());
}

#[test]
fn json_roundtrip_preserves_fields() {
    let c = ShapeConfig::default().with_orientation(Orientation::Right);
    let s = serde_json::to_string(&c).unwrap();
    assert!(s.contains(r#""orientation":"right""#));
    assert_eq!(ShapeConfig::from_json_str(&s).unwrap(), c);
}

#[test]
fn pixel_bounds_truncate() {
    let c = ShapeConfig {
        max_dimension: 360.9,
        min_dimension: 180.2,
        ..ShapeConfig::default()
    };
    assert_eq!(c.max_dimension_px(), 360);
    assert_eq!(c.min_dimension_px(), 180);
}
