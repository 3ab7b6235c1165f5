use super::*;

// =============================================================
// AuthConfig::from_values
// =============================================================

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = AuthConfig::from_values(None, None, None);
    assert_eq!(cfg.url, DEFAULT_AUTH_URL);
    assert_eq!(cfg.anon_key, "");
    assert_eq!(cfg.storage_key, "sb-localhost-auth-token");
    assert_eq!(cfg.session_timeout, Duration::from_millis(DEFAULT_SESSION_TIMEOUT_MS));
}

#[test]
fn trims_trailing_slash_from_url() {
    let cfg = AuthConfig::from_values(Some("https://abcd.supabase.co/"), Some(" key "), None);
    assert_eq!(cfg.url, "https://abcd.supabase.co");
    assert_eq!(cfg.anon_key, "key");
}

#[test]
fn blank_url_falls_back_to_default() {
    let cfg = AuthConfig::from_values(Some("   "), None, None);
    assert_eq!(cfg.url, DEFAULT_AUTH_URL);
}

#[test]
fn parses_timeout_override() {
    let cfg = AuthConfig::from_values(None, None, Some("1500"));
    assert_eq!(cfg.session_timeout, Duration::from_millis(1500));
}

#[test]
fn invalid_or_zero_timeout_falls_back_to_default() {
    for raw in ["abc", "0", "-5", ""] {
        let cfg = AuthConfig::from_values(None, None, Some(raw));
        assert_eq!(cfg.session_timeout, Duration::from_millis(DEFAULT_SESSION_TIMEOUT_MS), "{raw}");
    }
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn endpoints_are_built_from_base_url() {
    let cfg = AuthConfig::from_values(Some("https://abcd.supabase.co"), None, None);
    assert_eq!(cfg.user_endpoint(), "https://abcd.supabase.co/auth/v1/user");
    assert_eq!(
        cfg.password_grant_endpoint(),
        "https://abcd.supabase.co/auth/v1/token?grant_type=password"
    );
    assert_eq!(cfg.logout_endpoint(), "https://abcd.supabase.co/auth/v1/logout");
}

#[test]
fn refresh_grant_endpoint_uses_refresh_token_grant() {
    let cfg = AuthConfig::from_values(Some("https://abcd.supabase.co/"), None, None);
    assert_eq!(
        cfg.refresh_grant_endpoint(),
        "https://abcd.supabase.co/auth/v1/token?grant_type=refresh_token"
    );
}

#[test]
fn guard_config_carries_timeout_and_login_path() {
    let cfg = AuthConfig::from_values(None, None, Some("250"));
    let guard = cfg.guard_config();
    assert_eq!(guard.session_timeout, Duration::from_millis(250));
    assert_eq!(guard.login_path, "/login");
}

// =============================================================
// storage_key_for
// =============================================================

#[test]
fn storage_key_uses_project_ref() {
    assert_eq!(storage_key_for("https://abcd.supabase.co"), "sb-abcd-auth-token");
}

#[test]
fn storage_key_ignores_port_and_path() {
    assert_eq!(storage_key_for("http://127.0.0.1:54321/base"), "sb-127-auth-token");
    assert_eq!(storage_key_for("http://localhost:54321"), "sb-localhost-auth-token");
}

#[test]
fn storage_key_without_scheme() {
    assert_eq!(storage_key_for("auth.example.com"), "sb-auth-auth-token");
}

#[test]
fn storage_key_for_empty_host() {
    assert_eq!(storage_key_for(""), "sb-local-auth-token");
}
