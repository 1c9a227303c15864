//! Navigation link primitive.
//!
//! GET links render as anchors; backend-owned destinations carry
//! `rel="external"` so the router performs a full page load. POST links
//! render as a single-button form so the backend receives a real POST.

use leptos::prelude::*;

use crate::state::nav::{LinkMethod, is_app_route};

/// `rel` attribute for an anchor to `href`.
pub fn link_rel(href: &str) -> Option<&'static str> {
    if is_app_route(href) { None } else { Some("external") }
}

#[component]
pub fn NavLink(
    href: &'static str,
    #[prop(optional)] method: LinkMethod,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    match method {
        LinkMethod::Get => view! {
            <a href=href class=class rel=link_rel(href) title=title>
                {children()}
            </a>
        }
        .into_any(),
        LinkMethod::Post => view! {
            <form class="nav-link__form" method=method.as_str() action=href>
                <button type="submit" class=class title=title>
                    {children()}
                </button>
            </form>
        }
        .into_any(),
    }
}
