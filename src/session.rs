//! Per-request page context resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authentication is owned by the fronting DV backend. It forwards the
//! signed-in user as a JSON header; this module turns that header into the
//! `PageContext` handed to the Leptos app. A missing or malformed header
//! renders the configured fallback user (or an anonymous one).

use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use client::state::page::{PageContext, UserContext};
use leptos::prelude::use_context;

use crate::config::ServerConfig;

#[derive(Debug, thiserror::Error)]
pub enum UserHeaderError {
    #[error("user header is not valid UTF-8")]
    NotUtf8,
    #[error("user header is not a user object: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode the JSON user object carried in `value`.
///
/// # Errors
///
/// Returns an error if the header is not UTF-8 or not a user object.
pub fn decode_user_header(value: &HeaderValue) -> Result<UserContext, UserHeaderError> {
    let raw = value.to_str().map_err(|_| UserHeaderError::NotUtf8)?;
    Ok(serde_json::from_str(raw)?)
}

/// Build the page context for a request with `headers`.
pub fn resolve_page_context(headers: &HeaderMap, config: &ServerConfig) -> PageContext {
    let fallback = || config.fallback_user.clone().unwrap_or_default();
    let user = match headers.get(&config.user_header) {
        Some(value) => decode_user_header(value).unwrap_or_else(|e| {
            tracing::warn!(error = %e, header = %config.user_header, "ignoring malformed user header");
            fallback()
        }),
        None => fallback(),
    };
    PageContext::for_user(user, config.app_title.clone())
}

/// Resolve the page context for the request currently being rendered.
///
/// Must run inside a Leptos SSR handler, which provides the request `Parts`.
pub fn current_page_context(config: &ServerConfig) -> PageContext {
    match use_context::<Parts>() {
        Some(parts) => resolve_page_context(&parts.headers, config),
        None => {
            tracing::debug!("no request parts in context; rendering anonymous page");
            resolve_page_context(&HeaderMap::new(), config)
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
