//! Client-side state and view-models.
//!
//! DESIGN
//! ======
//! State types here are plain data with pure transition functions. Pages wrap
//! them in signals; nothing in this module depends on a rendering harness.

pub mod gallery;
pub mod nav;
pub mod page;
