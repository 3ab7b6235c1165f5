use futures::executor::block_on;

use super::*;

fn sample_user() -> User {
    User { id: "u-1".to_owned(), email: Some("ada@example.com".to_owned()), role: Some("authenticated".to_owned()) }
}

// =============================================================
// classify_status
// =============================================================

#[test]
fn classify_status_success_range() {
    assert_eq!(classify_status(200), StatusClass::Ok);
    assert_eq!(classify_status(204), StatusClass::Ok);
}

#[test]
fn classify_status_rejected_token() {
    assert_eq!(classify_status(401), StatusClass::Unauthorized);
    assert_eq!(classify_status(403), StatusClass::Unauthorized);
}

#[test]
fn classify_status_unexpected() {
    assert_eq!(classify_status(404), StatusClass::Unexpected(404));
    assert_eq!(classify_status(500), StatusClass::Unexpected(500));
    assert_eq!(classify_status(302), StatusClass::Unexpected(302));
}

#[test]
fn classify_refresh_status_clears_only_on_rejected_grant() {
    assert_eq!(classify_refresh_status(200), StatusClass::Ok);
    assert_eq!(classify_refresh_status(400), StatusClass::Unauthorized);
    assert_eq!(classify_refresh_status(401), StatusClass::Unauthorized);
    assert_eq!(classify_refresh_status(403), StatusClass::Unexpected(403));
    assert_eq!(classify_refresh_status(500), StatusClass::Unexpected(500));
}

#[test]
fn refresh_request_body_carries_token() {
    let body = refresh_request_body("ref-1");
    assert_eq!(body, serde_json::json!({ "refresh_token": "ref-1" }));
}

// =============================================================
// StoredSession
// =============================================================

#[test]
fn parse_stored_session_reads_backend_shape() {
    let raw = r#"{
        "access_token": "tok",
        "refresh_token": "ref",
        "expires_at": 1700000000,
        "token_type": "bearer",
        "user": {"id": "u-1", "email": "ada@example.com"}
    }"#;
    let stored = parse_stored_session(raw).unwrap();
    assert_eq!(stored.access_token, "tok");
    assert_eq!(stored.refresh_token.as_deref(), Some("ref"));
    assert_eq!(stored.expires_at, Some(1_700_000_000));
    assert_eq!(stored.user.map(|u| u.id), Some("u-1".to_owned()));
}

#[test]
fn parse_stored_session_rejects_garbage() {
    let err = parse_stored_session("not json").unwrap_err();
    assert!(matches!(err, SessionError::Decode(msg) if msg.starts_with("stored session:")));
}

#[test]
fn parse_stored_session_requires_access_token() {
    assert!(parse_stored_session(r#"{"user": null}"#).is_err());
}

#[test]
fn stored_session_expiry() {
    let stored = StoredSession { access_token: "t".to_owned(), refresh_token: None, expires_at: Some(100), user: None };
    assert!(!stored.is_expired(99));
    assert!(stored.is_expired(100));
    assert!(stored.is_expired(101));
}

#[test]
fn stored_session_without_expiry_never_expires() {
    let stored = StoredSession { access_token: "t".to_owned(), refresh_token: None, expires_at: None, user: None };
    assert!(!stored.is_expired(i64::MAX));
}

#[test]
fn live_session_is_validated_as_is() {
    let stored = StoredSession {
        access_token: "t".to_owned(),
        refresh_token: Some("r".to_owned()),
        expires_at: Some(100),
        user: None,
    };
    assert_eq!(stored.action_at(99), StoredAction::Validate);
}

#[test]
fn expired_session_with_refresh_token_is_refreshed() {
    let stored = StoredSession {
        access_token: "t".to_owned(),
        refresh_token: Some("r".to_owned()),
        expires_at: Some(100),
        user: Some(sample_user()),
    };
    assert_eq!(stored.action_at(100), StoredAction::Refresh("r".to_owned()));
}

#[test]
fn expired_session_without_refresh_token_is_discarded() {
    let mut stored =
        StoredSession { access_token: "t".to_owned(), refresh_token: None, expires_at: Some(100), user: None };
    assert_eq!(stored.action_at(200), StoredAction::Discard);
    stored.refresh_token = Some(String::new());
    assert_eq!(stored.action_at(200), StoredAction::Discard);
}

#[test]
fn refreshed_grant_replaces_expired_session() {
    let token: TokenResponse = serde_json::from_str(
        r#"{"access_token":"t2","expires_in":3600,"refresh_token":"r2","user":{"id":"u-1"}}"#,
    )
    .unwrap();
    let fresh = token.into_stored(500);
    assert_eq!(fresh.action_at(500), StoredAction::Validate);
    assert_eq!(fresh.refresh_token.as_deref(), Some("r2"));
    assert_eq!(fresh.expires_at, Some(4_100));
}

// =============================================================
// TokenResponse
// =============================================================

#[test]
fn token_response_derives_expiry_from_expires_in() {
    let token = TokenResponse {
        access_token: "t".to_owned(),
        refresh_token: Some("r".to_owned()),
        expires_in: Some(3600),
        expires_at: None,
        user: sample_user(),
    };
    let stored = token.into_stored(1_000);
    assert_eq!(stored.expires_at, Some(4_600));
    assert_eq!(stored.user, Some(sample_user()));
}

#[test]
fn token_response_prefers_explicit_expires_at() {
    let token = TokenResponse {
        access_token: "t".to_owned(),
        refresh_token: None,
        expires_in: Some(3600),
        expires_at: Some(42),
        user: sample_user(),
    };
    assert_eq!(token.into_stored(1_000).expires_at, Some(42));
}

#[test]
fn stored_session_survives_storage_round_trip() {
    let token: TokenResponse = serde_json::from_str(
        r#"{"access_token":"t","token_type":"bearer","expires_in":60,"refresh_token":"r","user":{"id":"u-1"}}"#,
    )
    .unwrap();
    let stored = token.into_stored(10);
    let raw = serde_json::to_string(&stored).unwrap();
    assert_eq!(parse_stored_session(&raw).unwrap(), stored);
}

// =============================================================
// Off-browser behavior
// =============================================================

#[test]
fn session_source_reports_no_session_off_browser() {
    let sessions = SupabaseSessions::new(AuthConfig::default());
    assert_eq!(block_on(sessions.current_session()), Ok(None));
}

#[test]
fn sign_in_is_unavailable_off_browser() {
    let result = block_on(sign_in_with_password(&AuthConfig::default(), "a@b.com", "pw"));
    assert!(matches!(result, Err(SessionError::Transport(_))));
}

#[test]
fn sign_out_succeeds_off_browser() {
    assert_eq!(block_on(sign_out(&AuthConfig::default())), Ok(()));
}
