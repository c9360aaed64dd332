//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components wire the auth layer into the Leptos view tree; route views are
//! wrapped rather than each page repeating its own redirect effect.

pub mod auth_gate;
