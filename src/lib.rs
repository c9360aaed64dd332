//! # keygate
//!
//! Browser-side authentication glue for a Leptos single-page application
//! backed by a cookie-authenticated REST API.
//!
//! The crate attaches the API key cookie as a bearer token on outgoing
//! requests, resets the credential and bounces the browser to the login page
//! when the API answers 401, and gates restricted routes before they render.
//! The login page itself is served by the backend; `next=` carries the
//! originally requested location across the round-trip.

pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// Install console logging and the panic hook for the browser build.
#[cfg(feature = "hydrate")]
pub fn init_browser_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
