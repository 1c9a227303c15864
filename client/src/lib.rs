//! # client
//!
//! Leptos frontend for the disbursement-voucher (DV) tracker pages: landing,
//! dashboard, and gallery. Rendered on the server (`ssr`) and hydrated in the
//! browser (`hydrate`).
//!
//! The current user arrives as an explicit [`state::page::PageContext`]
//! value. Nothing in this crate talks to the network; routes such as
//! `/incoming-dvs` and `/logout` belong to the DV backend.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }

    let page = util::page_props::read_embedded();
    log::debug!("hydrating with user present: {}", page.auth.user.has_identity());
    leptos::mount::hydrate_body(move || view! { <App page/> });
}
