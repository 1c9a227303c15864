use axum::http::HeaderName;

use super::*;

fn config() -> ServerConfig {
    ServerConfig {
        port: 3000,
        public_dir: "public".into(),
        storage_dir: "storage".into(),
        user_header: HeaderName::from_static("x-dv-user"),
        app_title: "DV Tracker".to_owned(),
        fallback_user: None,
    }
}

fn headers_with(value: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("x-dv-user", HeaderValue::from_static(value));
    headers
}

#[test]
fn decode_user_header_reads_json_object() {
    let user = decode_user_header(&HeaderValue::from_static(r#"{"first_name":"Ana","role":"Cashier"}"#)).unwrap();
    assert_eq!(user.greeting_name(), "Ana");
    assert_eq!(user.role_label(), Some("Cashier"));
}

#[test]
fn decode_user_header_rejects_non_json() {
    let err = decode_user_header(&HeaderValue::from_static("Ana")).unwrap_err();
    assert!(matches!(err, UserHeaderError::Json(_)));
}

#[test]
fn decode_user_header_rejects_non_utf8() {
    let value = HeaderValue::from_bytes(&[0xff, 0xfe]).unwrap();
    assert!(matches!(decode_user_header(&value), Err(UserHeaderError::NotUtf8)));
}

#[test]
fn resolve_uses_header_user() {
    let page = resolve_page_context(&headers_with(r#"{"name":"Ana B"}"#), &config());
    assert_eq!(page.user().greeting_name(), "Ana B");
    assert_eq!(page.app_name, "DV Tracker");
}

#[test]
fn resolve_without_header_is_anonymous() {
    let page = resolve_page_context(&HeaderMap::new(), &config());
    assert_eq!(page.user(), &UserContext::default());
    assert_eq!(page.user().greeting_name(), "User");
}

#[test]
fn resolve_without_header_uses_fallback_user() {
    let mut cfg = config();
    cfg.fallback_user = Some(UserContext { first_name: Some("Dev".to_owned()), ..UserContext::default() });
    let page = resolve_page_context(&HeaderMap::new(), &cfg);
    assert_eq!(page.user().greeting_name(), "Dev");
}

#[test]
fn resolve_malformed_header_uses_fallback_user() {
    let mut cfg = config();
    cfg.fallback_user = Some(UserContext { first_name: Some("Dev".to_owned()), ..UserContext::default() });
    let page = resolve_page_context(&headers_with("not json"), &cfg);
    assert_eq!(page.user().greeting_name(), "Dev");
}

#[test]
fn resolve_respects_configured_header_name() {
    let mut cfg = config();
    cfg.user_header = HeaderName::from_static("x-auth-user");
    let page = resolve_page_context(&headers_with(r#"{"name":"Ana B"}"#), &cfg);
    assert_eq!(page.user().greeting_name(), "User");
}

#[test]
fn current_page_context_outside_request_is_anonymous() {
    let page = current_page_context(&config());
    assert_eq!(page.user().greeting_name(), "User");
}
