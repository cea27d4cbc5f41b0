//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod chart_geometry;
pub mod dark_mode;
#[cfg(feature = "hydrate")]
pub mod detection_canvas;
pub mod error;
pub mod scroll_reveal;
