//! Per-request page context supplied by the DV backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server builds a `PageContext` for every request and passes it into
//! `App`. The same value is embedded in the SSR shell as JSON so hydration
//! starts from identical props. Views only read it.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use serde::{Deserialize, Serialize};

use crate::util::assets;

/// Greeting used when the user has neither a first name nor a name.
pub const FALLBACK_GREETING: &str = "User";

pub const DEFAULT_APP_NAME: &str = "DV Tracker";

/// The signed-in user as described by the DV backend.
///
/// Every field is optional; the backend may omit any of them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    /// Path of the profile image relative to `/storage`.
    #[serde(alias = "profile_image_ref")]
    pub profile_image: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl UserContext {
    /// First name, else full name, else `"User"`.
    pub fn greeting_name(&self) -> &str {
        non_blank(self.first_name.as_deref())
            .or_else(|| non_blank(self.name.as_deref()))
            .unwrap_or(FALLBACK_GREETING)
    }

    /// "First Last" when both parts exist, otherwise the greeting name.
    pub fn display_name(&self) -> String {
        match (non_blank(self.first_name.as_deref()), non_blank(self.last_name.as_deref())) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            _ => self.greeting_name().to_owned(),
        }
    }

    pub fn role_label(&self) -> Option<&str> {
        non_blank(self.role.as_deref())
    }

    pub fn avatar_src(&self) -> String {
        assets::avatar_src(self.profile_image.as_deref())
    }

    /// Whether any identifying field is set.
    pub fn has_identity(&self) -> bool {
        non_blank(self.first_name.as_deref()).is_some() || non_blank(self.name.as_deref()).is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    #[serde(default)]
    pub user: UserContext,
}

/// Shared props handed to every view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    #[serde(default)]
    pub auth: AuthContext,
    #[serde(default = "default_app_name")]
    pub app_name: String,
}

fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_owned()
}

impl Default for PageContext {
    fn default() -> Self {
        Self { auth: AuthContext::default(), app_name: default_app_name() }
    }
}

impl PageContext {
    pub fn for_user(user: UserContext, app_name: impl Into<String>) -> Self {
        Self { auth: AuthContext { user }, app_name: app_name.into() }
    }

    pub fn user(&self) -> &UserContext {
        &self.auth.user
    }

    /// Browser tab title for a page, e.g. `"Gallery | DV Tracker"`.
    pub fn title(&self, page: &str) -> String {
        format!("{page} | {}", self.app_name)
    }
}
