//! Request/response middleware applied around every API call.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ApiClient` runs request interceptors in registration order before
//! dispatch, and response interceptors in registration order on every
//! rejection once its status is final. The caller composes the chain; nothing
//! registers itself.
//!
//! ERROR HANDLING
//! ==============
//! Response interceptors receive the rejection by value and must hand it back.
//! They may react to it but never turn a failure into a success, so callers
//! always see the original error.

#[cfg(test)]
#[path = "interceptors_test.rs"]
mod interceptors_test;

use crate::net::types::{ApiError, ApiRequest, AUTHORIZATION, CONTENT_TYPE, JSON_CONTENT_TYPE, Method};
use crate::state::auth::AuthSession;

pub trait RequestInterceptor {
    fn request(&self, request: ApiRequest) -> ApiRequest;
}

pub trait ResponseInterceptor {
    fn response_error(&self, error: ApiError) -> ApiError;
}

/// Ordered request and response interceptors.
#[derive(Default)]
pub struct InterceptorChain {
    request: Vec<Box<dyn RequestInterceptor>>,
    response: Vec<Box<dyn ResponseInterceptor>>,
}

impl InterceptorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stock chain: bearer token + PATCH content type out, 401 guard in.
    pub fn standard(session: &AuthSession) -> Self {
        Self::new()
            .with_request(RequestAuthenticator::new(session.clone()))
            .with_request(PatchJsonContentType)
            .with_response(ResponseAuthGuard::new(session.clone()))
    }

    #[must_use]
    pub fn with_request(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.request.push(Box::new(interceptor));
        self
    }

    #[must_use]
    pub fn with_response(mut self, interceptor: impl ResponseInterceptor + 'static) -> Self {
        self.response.push(Box::new(interceptor));
        self
    }

    pub fn apply_request(&self, request: ApiRequest) -> ApiRequest {
        self.request.iter().fold(request, |req, interceptor| interceptor.request(req))
    }

    pub fn apply_response_error(&self, error: ApiError) -> ApiError {
        self.response.iter().fold(error, |err, interceptor| interceptor.response_error(err))
    }
}

/// Adds `Authorization: Bearer <credential>` when a credential is stored.
pub struct RequestAuthenticator {
    session: AuthSession,
}

impl RequestAuthenticator {
    pub fn new(session: AuthSession) -> Self {
        Self { session }
    }
}

impl RequestInterceptor for RequestAuthenticator {
    fn request(&self, mut request: ApiRequest) -> ApiRequest {
        if let Some(credential) = self.session.credentials.get() {
            request.set_header(AUTHORIZATION, format!("Bearer {credential}"));
        }
        request
    }
}

/// On 401: clear the credential, send the browser to login, pass the error on.
pub struct ResponseAuthGuard {
    session: AuthSession,
}

impl ResponseAuthGuard {
    pub fn new(session: AuthSession) -> Self {
        Self { session }
    }
}

impl ResponseInterceptor for ResponseAuthGuard {
    fn response_error(&self, error: ApiError) -> ApiError {
        if error.is_unauthorized() {
            log::error!("API rejected authentication (401); resetting credential and redirecting to login");
            self.session.reset();
            self.session.redirect_to_login();
        }
        error
    }
}

/// JSON content type for PATCH requests that don't set their own.
pub struct PatchJsonContentType;

impl RequestInterceptor for PatchJsonContentType {
    fn request(&self, mut request: ApiRequest) -> ApiRequest {
        if request.method == Method::Patch && request.header(CONTENT_TYPE).is_none() {
            request.set_header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        }
        request
    }
}
