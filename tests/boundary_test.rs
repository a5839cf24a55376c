use version_gate::boundary::BoundaryWarning;
use version_gate::ui;

#[test]
fn test_boundary_warning_fetch_failed_display() {
    let warning = BoundaryWarning::FetchFailed {
        remote: "origin".to_string(),
        branch: "main".to_string(),
        reason: "authentication required".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("Could not fetch 'main'"),
        "Message should name the branch, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("authentication required"),
        "Message should contain the reason, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("origin/main"),
        "Message should name the local fallback, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_metadata_ignored_display() {
    let warning = BoundaryWarning::MetadataIgnored {
        version: "2.0.0-rc.1".to_string(),
        metadata: "-rc.1".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(display_msg.contains("2.0.0-rc.1"));
    assert!(display_msg.contains("ignored when comparing"));
}

#[test]
fn test_boundary_warning_equality() {
    let a = BoundaryWarning::MetadataIgnored {
        version: "1.0.0rc1".to_string(),
        metadata: "rc1".to_string(),
    };
    assert_eq!(a.clone(), a);
}

#[test]
fn test_display_boundary_warning_does_not_panic() {
    let warning = BoundaryWarning::FetchFailed {
        remote: "upstream".to_string(),
        branch: "develop".to_string(),
        reason: "network unreachable".to_string(),
    };
    ui::display_boundary_warning(&warning);
}
