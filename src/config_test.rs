use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let env: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn defaults_apply_when_unset() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.public_dir, PathBuf::from("public"));
    assert_eq!(cfg.storage_dir, PathBuf::from("storage"));
    assert_eq!(cfg.user_header.as_str(), "x-dv-user");
    assert_eq!(cfg.app_title, "DV Tracker");
    assert!(cfg.fallback_user.is_none());
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = config_from(&[("PORT", "  "), ("DV_APP_TITLE", "")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.app_title, "DV Tracker");
}

#[test]
fn overrides_are_read() {
    let cfg = config_from(&[
        ("PORT", "8080"),
        ("DV_PUBLIC_DIR", "/srv/public"),
        ("DV_STORAGE_DIR", "/srv/storage"),
        ("DV_USER_HEADER", "X-Auth-User"),
        ("DV_APP_TITLE", "Voucher Desk"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.public_dir, PathBuf::from("/srv/public"));
    assert_eq!(cfg.storage_dir, PathBuf::from("/srv/storage"));
    assert_eq!(cfg.user_header.as_str(), "x-auth-user");
    assert_eq!(cfg.app_title, "Voucher Desk");
}

#[test]
fn invalid_port_is_rejected() {
    let err = config_from(&[("PORT", "eighty")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "eighty"));
    assert_eq!(err.to_string(), "invalid PORT: eighty");
}

#[test]
fn invalid_header_name_is_rejected() {
    let err = config_from(&[("DV_USER_HEADER", "bad header")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHeader(_)));
}

#[test]
fn missing_fallback_user_file_is_reported() {
    let err = config_from(&[("DV_FALLBACK_USER_FILE", "/nonexistent/dvtrack-user.yaml")]).unwrap_err();
    assert!(matches!(err, ConfigError::ReadUserFile { .. }));
}

#[test]
fn fallback_user_file_is_loaded() {
    let path = std::env::temp_dir().join(format!("dvtrack-user-{}.yaml", std::process::id()));
    std::fs::write(&path, "first_name: Ana\nrole: Accountant\nprofile_image: images/u1.png\n").unwrap();

    let cfg = config_from(&[("DV_FALLBACK_USER_FILE", path.to_str().unwrap())]).unwrap();
    std::fs::remove_file(&path).unwrap();

    let user = cfg.fallback_user.unwrap();
    assert_eq!(user.greeting_name(), "Ana");
    assert_eq!(user.role_label(), Some("Accountant"));
    assert_eq!(user.avatar_src(), "/storage/images/u1.png");
}

#[test]
fn parse_fallback_user_rejects_scalar_document() {
    assert!(parse_fallback_user("just a string").is_err());
}

#[test]
fn parse_fallback_user_accepts_partial_document() {
    let user = parse_fallback_user("name: Ana B\n").unwrap();
    assert_eq!(user.greeting_name(), "Ana B");
    assert_eq!(user.first_name, None);
}
