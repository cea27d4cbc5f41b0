//! Route-level pages.
//!
//! ARCHITECTURE
//! ============
//! The site is a single scrolling page; the page module composes the sections
//! from `components` and wires page-wide effects.

pub mod dashboard;
