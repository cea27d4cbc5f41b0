//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split per widget (`carousel`, `detection`, `contact`, etc.) so
//! each component depends on a small focused model provided via context.

pub mod carousel;
pub mod charts;
pub mod contact;
pub mod detection;
pub mod penalties;
pub mod ui;
