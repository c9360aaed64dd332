//! Client-side auth state.
//!
//! DESIGN
//! ======
//! `credential` owns the cookie-backed API key; `auth` bundles it with the
//! browser location and redirect capabilities used by guards and interceptors.

pub mod auth;
pub mod credential;
