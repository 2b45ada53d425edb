use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PlotlineError::data_unavailable("x")
            .to_string()
            .contains("data unavailable:")
    );
    assert!(
        PlotlineError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PlotlineError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn scene_out_of_range_reports_bounds() {
    let msg = PlotlineError::SceneOutOfRange { index: 7, len: 3 }.to_string();
    assert!(msg.contains('7'));
    assert!(msg.contains('3'));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PlotlineError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
