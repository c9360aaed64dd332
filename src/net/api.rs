//! REST API client wired through the auth interceptors.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Elsewhere the browser transport refuses every request, since the API key
//! cookie only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure, HTTP or transport, passes through the response interceptors
//! before it is returned, so a 401 always triggers the login redirect and the
//! caller still receives the error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use crate::config::AuthConfig;
use crate::net::interceptors::InterceptorChain;
use crate::net::types::{ApiError, ApiRequest, ApiResponse, CONTENT_TYPE, JSON_CONTENT_TYPE, Method};
use crate::state::auth::AuthSession;

/// Join the API base and a resource path.
///
/// Trailing slashes on the resource become `/?` so the backend's
/// slash-terminated routes are hit without a redirect that would drop the
/// `Authorization` header.
pub fn request_url(base: &str, resource_path: &str) -> String {
    let resource = if base.ends_with('/') {
        resource_path.trim_start_matches('/')
    } else {
        resource_path
    };
    let trimmed = resource.trim_end_matches('/');
    if trimmed.len() == resource.len() {
        format!("{base}{resource}")
    } else {
        format!("{base}{trimmed}/?")
    }
}

/// Sends a fully decorated request.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when no response was received. HTTP error
    /// statuses are returned as `Ok` responses; the client classifies them.
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// `gloo-net` backed transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Patch => Request::patch(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let prepared = match &request.body {
                Some(body) => builder.body(body.as_str()),
                None => builder.build(),
            }
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

            let resp = prepared.send().await.map_err(|e| {
                log::warn!("{} {} failed: {e}", request.method.as_str(), request.url);
                ApiError::Network(e.to_string())
            })?;
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }
}

/// API client running requests through an [`InterceptorChain`].
pub struct ApiClient<T> {
    base: String,
    interceptors: InterceptorChain,
    transport: T,
}

impl ApiClient<BrowserTransport> {
    /// Browser client with the standard auth interceptors.
    pub fn browser(config: AuthConfig) -> Self {
        let base = config.api_base.clone();
        let session = AuthSession::browser(config);
        Self::new(base, InterceptorChain::standard(&session), BrowserTransport)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base: impl Into<String>, interceptors: InterceptorChain, transport: T) -> Self {
        Self { base: base.into(), interceptors, transport }
    }

    /// Full URL for a resource path under this client's base.
    pub fn url(&self, resource_path: &str) -> String {
        request_url(&self.base, resource_path)
    }

    /// Run `request` through the interceptors and transport.
    ///
    /// # Errors
    ///
    /// Returns the (intercepted) rejection for non-2xx statuses and transport
    /// failures.
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let request = self.interceptors.apply_request(request);
        let outcome = match self.transport.send(&request).await {
            Ok(response) if response.is_success() => return Ok(response),
            Ok(response) => ApiError::from_response(response),
            Err(error) => error,
        };
        Err(self.interceptors.apply_response_error(outcome))
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn get(&self, resource_path: &str) -> Result<ApiResponse, ApiError> {
        self.send(ApiRequest::new(Method::Get, self.url(resource_path))).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`]; also fails if `body` cannot be serialized.
    pub async fn post_json<B: Serialize + ?Sized>(&self, resource_path: &str, body: &B) -> Result<ApiResponse, ApiError> {
        self.send_json(Method::Post, resource_path, body).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::post_json`].
    pub async fn put_json<B: Serialize + ?Sized>(&self, resource_path: &str, body: &B) -> Result<ApiResponse, ApiError> {
        self.send_json(Method::Put, resource_path, body).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::post_json`].
    pub async fn patch_json<B: Serialize + ?Sized>(
        &self,
        resource_path: &str,
        body: &B,
    ) -> Result<ApiResponse, ApiError> {
        self.send_json(Method::Patch, resource_path, body).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn delete(&self, resource_path: &str) -> Result<ApiResponse, ApiError> {
        self.send(ApiRequest::new(Method::Delete, self.url(resource_path))).await
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        resource_path: &str,
        body: &B,
    ) -> Result<ApiResponse, ApiError> {
        let mut request = ApiRequest::new(method, self.url(resource_path)).with_json(body)?;
        // PATCH gets its content type from `PatchJsonContentType`.
        if method != Method::Patch {
            request.set_header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        }
        self.send(request).await
    }
}
