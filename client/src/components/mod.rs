//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and gallery surfaces from props only. State
//! lives in the owning page and flows down as values, signals, and callbacks.

pub mod avatar;
pub mod category_filter;
pub mod feature_card;
pub mod gallery_card;
pub mod gallery_modal;
pub mod nav_link;
pub mod nav_shell;
