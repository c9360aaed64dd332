//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines request/response values and `ApiError`, `interceptors`
//! holds the auth middleware, `api` runs requests through both, and
//! `form_errors` turns validation rejections into per-field messages.

pub mod api;
pub mod form_errors;
pub mod interceptors;
pub mod types;
