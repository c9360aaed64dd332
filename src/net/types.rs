//! Request/response shapes passed through the interceptor chain.
//!
//! DESIGN
//! ======
//! Interceptors operate on these plain values rather than on `gloo-net`
//! builders so the chain can be exercised natively; the transport converts
//! at the last moment.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// An outgoing API request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), headers: BTreeMap::new(), body: None }
    }

    /// Header value, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Set a header, replacing any existing value under any casing.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.retain(|key, _| !key.eq_ignore_ascii_case(name));
        self.headers.insert(name.to_owned(), value.into());
    }

    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_header(name, value);
        self
    }

    /// Attach `value` as a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] if `value` fails to serialize.
    pub fn with_json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(value).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        self.body = Some(body);
        Ok(self)
    }
}

/// A completed HTTP exchange, successful or not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("authentication required")]
    Unauthorized { body: String },

    #[error("request failed: {status}")]
    Status { status: u16, body: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    pub const UNAUTHORIZED_STATUS: u16 = 401;

    /// Classify a non-2xx response.
    pub fn from_response(response: ApiResponse) -> Self {
        match response.status {
            Self::UNAUTHORIZED_STATUS => Self::Unauthorized { body: response.body },
            status => Self::Status { status, body: response.body },
        }
    }

    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(Self::UNAUTHORIZED_STATUS),
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) | Self::InvalidRequest(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(Self::UNAUTHORIZED_STATUS)
    }

    /// Response body of a rejected request.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { body } | Self::Status { body, .. } => Some(body),
            Self::Network(_) | Self::Decode(_) | Self::InvalidRequest(_) => None,
        }
    }
}
