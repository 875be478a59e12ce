use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BubbleError::configuration("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(BubbleError::input("x").to_string().contains("input error:"));
    assert!(
        BubbleError::render("x")
            .to_string()
            .contains("render error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BubbleError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn question_mark_lifts_anyhow() {
    fn inner() -> BubbleResult<()> {
        Err::<(), _>(anyhow::anyhow!("lifted"))?;
        Ok(())
    }
    let err = inner().unwrap_err();
    assert!(matches!(err, BubbleError::Other(_)));
    assert_eq!(err.to_string(), "lifted");
}
