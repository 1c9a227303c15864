use super::*;

#[test]
fn app_routes_are_recognized() {
    assert!(is_app_route("/"));
    assert!(is_app_route("/dashboard"));
    assert!(is_app_route("/gallery"));
}

#[test]
fn backend_routes_are_external() {
    for href in [INCOMING_DVS, NEW_DV, STATISTICS, PROFILE, LOGOUT] {
        assert!(!is_app_route(href), "{href} should be external");
    }
}

#[test]
fn link_method_defaults_to_get() {
    assert_eq!(LinkMethod::default(), LinkMethod::Get);
    assert_eq!(LinkMethod::Get.as_str(), "get");
    assert_eq!(LinkMethod::Post.as_str(), "post");
}

#[test]
fn nav_action_hrefs_match_backend_routes() {
    assert_eq!(NavAction::NewDv.href(), "/incoming-dvs/new");
    assert_eq!(NavAction::IncomingDvs.href(), "/incoming-dvs");
    assert_eq!(NavAction::Statistics.href(), "/statistics");
    assert_eq!(NavAction::Gallery.href(), "/gallery");
}

#[test]
fn only_new_dv_is_primary() {
    let primary: Vec<NavAction> = MAIN_ACTIONS.iter().copied().filter(|a| a.is_primary()).collect();
    assert_eq!(primary, vec![NavAction::NewDv]);
}

#[test]
fn gallery_actions_link_back_to_incoming() {
    assert_eq!(GALLERY_ACTIONS, &[NavAction::IncomingDvs]);
    assert_eq!(GALLERY_ACTIONS[0].label(), "Incoming DVs");
}
