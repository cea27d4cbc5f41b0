//! Page sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each section reads and writes shared state from the context providers set
//! up in [`crate::app::App`]; pure logic stays in `state` and `util`.

pub mod charts_panel;
pub mod contact_form;
pub mod detection_demo;
pub mod hero_carousel;
pub mod nav_bar;
pub mod penalty_table;
