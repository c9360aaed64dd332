//! Utility helpers shared across the auth layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (location, redirects) and pure
//! URL building from the interceptors and components that use them.

pub mod auth;
pub mod login_url;
pub mod navigator;
