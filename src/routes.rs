//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos SSR renders `/`, `/dashboard`, and `/gallery`. Compiled client
//! assets live under `/pkg`, profile images under `/storage`, and every
//! other path falls through to the public asset directory (logos, default
//! avatar).

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use client::app::{App, shell};
use client::state::page::PageContext;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::session;

/// Full application router.
pub fn app(config: Arc<ServerConfig>, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(|| view! { <App page=PageContext::default()/> });

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            let config = config.clone();
            move || {
                let page = session::current_page_context(&config);
                shell(opts.clone(), page)
            }
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .nest_service("/storage", ServeDir::new(&config.storage_dir))
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
