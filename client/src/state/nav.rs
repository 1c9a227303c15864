//! Route table and header actions for the navigation shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only `/`, `/dashboard`, and `/gallery` are rendered by this crate. Every
//! other destination belongs to the DV backend and must be reached with a
//! full page load.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

pub const HOME: &str = "/";
pub const DASHBOARD: &str = "/dashboard";
pub const GALLERY: &str = "/gallery";
pub const INCOMING_DVS: &str = "/incoming-dvs";
pub const NEW_DV: &str = "/incoming-dvs/new";
pub const STATISTICS: &str = "/statistics";
pub const PROFILE: &str = "/profile";
pub const LOGOUT: &str = "/logout";

const APP_ROUTES: &[&str] = &[HOME, DASHBOARD, GALLERY];

/// Whether `href` is served by this crate's router.
pub fn is_app_route(href: &str) -> bool {
    APP_ROUTES.contains(&href)
}

/// Request method a navigation link issues.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkMethod {
    #[default]
    Get,
    /// Submitted as a form so the backend sees a POST (logout).
    Post,
}

impl LinkMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
        }
    }
}

/// Contextual action links shown in the header next to logout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    NewDv,
    IncomingDvs,
    Statistics,
    Gallery,
}

impl NavAction {
    pub fn href(self) -> &'static str {
        match self {
            Self::NewDv => NEW_DV,
            Self::IncomingDvs => INCOMING_DVS,
            Self::Statistics => STATISTICS,
            Self::Gallery => GALLERY,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NewDv => "New DV",
            Self::IncomingDvs => "Incoming DVs",
            Self::Statistics => "Statistics",
            Self::Gallery => "Gallery",
        }
    }

    /// Primary actions get the filled button style.
    pub fn is_primary(self) -> bool {
        matches!(self, Self::NewDv)
    }
}

/// Header actions for the dashboard and landing pages.
pub const MAIN_ACTIONS: &[NavAction] = &[NavAction::NewDv, NavAction::IncomingDvs, NavAction::Statistics, NavAction::Gallery];

/// Header actions for the gallery page.
pub const GALLERY_ACTIONS: &[NavAction] = &[NavAction::IncomingDvs];
