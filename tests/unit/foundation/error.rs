use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        HoleMaskError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        HoleMaskError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        HoleMaskError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(HoleMaskError::io("x").to_string().contains("io error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = HoleMaskError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
