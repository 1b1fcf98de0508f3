//! Mutation-path integration: batch semantics, writability enforcement,
//! delete translation.

use crate::integration::test_utils::seeded_gateway;
use restree::error::GatewayError;

#[test]
fn test_patch_moves_resource() {
    let gateway = seeded_gateway();
    gateway
        .patch("content", "/a", r#"[{"operation": "move", "target": "/x"}]"#)
        .unwrap();

    assert!(gateway.get("content", "/x").is_ok());
    // subtree followed the move
    assert!(gateway.get("content", "/x/b").is_ok());
    assert!(matches!(
        gateway.get("content", "/a").unwrap_err(),
        GatewayError::ResourceNotFound { .. }
    ));
}

#[test]
fn test_partial_batch_commits_before_failing() {
    let gateway = seeded_gateway();
    let err = gateway
        .patch(
            "content",
            "/a",
            r#"[{"operation": "move", "target": "/x"}, {"operation": "frobnicate"}]"#,
        )
        .unwrap_err();
    assert_eq!(err.to_string(), "Only move operation is supported.");
    assert_eq!(err.status(), 400);

    // the move before the failing operation stays committed
    assert!(gateway.get("content", "/x").is_ok());
    assert!(gateway.get("content", "/a").is_err());
}

#[test]
fn test_patch_rejects_malformed_bodies_before_touching_the_tree() {
    let gateway = seeded_gateway();

    for body in ["", "not json", "[]", "{\"operation\": \"move\"}"] {
        let err = gateway.patch("content", "/a", body).unwrap_err();
        assert_eq!(err.to_string(), "Only JSON request bodies are supported.");
    }

    // nothing moved
    assert!(gateway.get("content", "/a").is_ok());
}

#[test]
fn test_patch_read_only_repository_fails_before_decoding() {
    let gateway = seeded_gateway();

    // even a malformed body reports NotEditable: the writability check
    // runs before the batch is decoded
    let err = gateway.patch("archive", "/a", "not json").unwrap_err();
    assert!(matches!(err, GatewayError::NotEditable(_)));
    assert_eq!(err.status(), 404);

    let err = gateway
        .patch("archive", "/a", r#"[{"operation": "move", "target": "/x"}]"#)
        .unwrap_err();
    assert!(matches!(err, GatewayError::NotEditable(_)));

    // no partial mutation on the read-only tree
    assert!(gateway.get("archive", "/a").is_ok());
    assert!(gateway.get("archive", "/x").is_err());
}

#[test]
fn test_unknown_repository_is_consistent_across_operations() {
    let gateway = seeded_gateway();

    let err = gateway.get("nope", "/a").unwrap_err();
    assert!(matches!(err, GatewayError::RepositoryNotFound(_)));

    let err = gateway
        .patch("nope", "/a", r#"[{"operation": "move", "target": "/x"}]"#)
        .unwrap_err();
    assert!(matches!(err, GatewayError::RepositoryNotFound(_)));

    let err = gateway.delete("nope", "/a").unwrap_err();
    assert!(matches!(err, GatewayError::RepositoryNotFound(_)));
    assert_eq!(err.status(), 404);
}

#[test]
fn test_move_onto_occupied_target_is_bad_request() {
    let gateway = seeded_gateway();
    let err = gateway
        .patch("content", "/a/b", r#"[{"operation": "move", "target": "/a"}]"#)
        .unwrap_err();
    match err {
        GatewayError::BadRequest(message) => {
            assert!(message.contains("already exists"), "message: {}", message);
        }
        other => panic!("expected BadRequest, got {:?}", other),
    }
}

#[test]
fn test_delete_removes_subtree() {
    let gateway = seeded_gateway();
    gateway.delete("content", "/a").unwrap();
    assert!(gateway.get("content", "/a").is_err());
    assert!(gateway.get("content", "/a/b").is_err());
}

#[test]
fn test_delete_invalid_target_carries_handle_message() {
    let gateway = seeded_gateway();

    let err = gateway.delete("content", "/").unwrap_err();
    match err {
        GatewayError::BadRequest(message) => {
            assert_eq!(message, "Cannot remove the repository root.");
        }
        other => panic!("expected BadRequest, got {:?}", other),
    }

    // nothing else was removed
    assert!(gateway.get("content", "/a").is_ok());
    assert!(gateway.get("content", "/a/b").is_ok());
}

#[test]
fn test_delete_missing_resource_is_bad_request() {
    let gateway = seeded_gateway();
    let err = gateway.delete("content", "/ghost").unwrap_err();
    assert!(matches!(err, GatewayError::BadRequest(_)));
    assert_eq!(err.status(), 400);
}

#[test]
fn test_delete_read_only_repository() {
    let gateway = seeded_gateway();
    let err = gateway.delete("archive", "/a").unwrap_err();
    assert!(matches!(err, GatewayError::NotEditable(_)));
    assert_eq!(err.status(), 404);
    assert!(gateway.get("archive", "/a").is_ok());
}

#[test]
fn test_error_body_shape() {
    let gateway = seeded_gateway();
    let err = gateway
        .patch("content", "/a", r#"[{"operation": "rename"}]"#)
        .unwrap_err();
    assert_eq!(
        err.message_body(),
        serde_json::json!({"message": "Only move operation is supported."})
    );
}
