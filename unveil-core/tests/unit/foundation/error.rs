use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        UnveilError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        UnveilError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        UnveilError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        UnveilError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = UnveilError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
