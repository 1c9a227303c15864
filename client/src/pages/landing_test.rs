use super::*;

#[test]
fn exactly_one_feature_is_active() {
    let active: Vec<&Feature> = FEATURES.iter().filter(|f| f.is_active()).collect();
    assert_eq!(FEATURES.len(), 4);
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].href, Some("/incoming-dvs"));
}

#[test]
fn hero_greeting_uses_fallback_chain() {
    let user = UserContext { name: Some("Ana B".to_owned()), ..UserContext::default() };
    assert_eq!(hero_greeting(&user), "Hello, Ana B!");
    assert_eq!(hero_greeting(&UserContext::default()), "Hello, User!");
}

#[test]
fn floating_icon_style_sets_position_and_delay_without_trailing_separator() {
    let icon = FloatingIcon { glyph: "📄", top: 8.0, left: 6.5, delay: 1.5 };
    assert_eq!(icon.style(), "top: 8%; left: 6.5%; animation-delay: 1.5s");
}

#[test]
fn background_icons_stay_on_screen() {
    for icon in BACKGROUND_ICONS {
        assert!((0.0..=100.0).contains(&icon.top));
        assert!((0.0..=100.0).contains(&icon.left));
    }
}

#[test]
fn floating_icon_style_never_ends_with_separator() {
    for icon in BACKGROUND_ICONS {
        assert!(!icon.style().ends_with(';'), "{}", icon.style());
    }
}
