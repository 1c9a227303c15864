//! Root application component with routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders `shell` per request with that request's `PageContext`.
//! The context is embedded in the document so `hydrate` can rebuild the
//! same `App` in the browser.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, gallery::GalleryPage, landing::LandingPage};
use crate::state::page::PageContext;
use crate::util::assets::APP_LOGO;
use crate::util::page_props::{self, ELEMENT_ID};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions, page: PageContext) -> impl IntoView {
    let payload = page_props::encode(&page).unwrap_or_else(|err| {
        leptos::logging::warn!("page context not serializable: {err}");
        "{}".to_owned()
    });

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" href=APP_LOGO/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
                <script id=ELEMENT_ID type="application/json" inner_html=payload></script>
            </head>
            <body>
                <App page/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// `page` is passed down to every route explicitly rather than provided as
/// context.
#[component]
pub fn App(page: PageContext) -> impl IntoView {
    provide_meta_context();

    let landing = page.clone();
    let dashboard = page.clone();
    let gallery = page;

    view! {
        <Stylesheet id="leptos" href="/pkg/dvtrack.css"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=move || view! { <LandingPage page=landing.clone()/> }/>
                <Route path=StaticSegment("dashboard") view=move || view! { <DashboardPage page=dashboard.clone()/> }/>
                <Route path=StaticSegment("gallery") view=move || view! { <GalleryPage page=gallery.clone()/> }/>
            </Routes>
        </Router>
    }
}
