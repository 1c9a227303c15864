use super::*;

#[test]
fn escape_closes_modal() {
    assert!(is_close_key("Escape"));
}

#[test]
fn legacy_esc_key_closes_modal() {
    assert!(is_close_key("Esc"));
}

#[test]
fn other_keys_keep_modal_open() {
    for key in ["Enter", " ", "Tab", "escape", "ArrowDown"] {
        assert!(!is_close_key(key), "{key:?} should not close");
    }
}
