//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate asset paths and SSR/browser handoff from page and
//! component logic to improve reuse and testability.

pub mod assets;
pub mod page_props;
