use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BuzzError::configuration("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        BuzzError::degenerate_signal("x")
            .to_string()
            .contains("degenerate signal:")
    );
    assert!(
        BuzzError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        BuzzError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BuzzError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
