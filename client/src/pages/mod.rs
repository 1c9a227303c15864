//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page receives the `PageContext` as a prop, owns any route-scoped
//! state, and delegates rendering details to `components`.

pub mod dashboard;
pub mod gallery;
pub mod landing;
