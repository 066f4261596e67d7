//! Utility helpers shared across the page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, the root
//! theme attribute) from form and submission logic.

pub mod storage;
pub mod theme;
