use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::state::credential::{CredentialStore, MemoryCredentialStore};
use crate::util::navigator::{CurrentLocation, RecordingNavigator};

struct StubTransport {
    outcome: Result<ApiResponse, ApiError>,
    seen: RefCell<Vec<ApiRequest>>,
}

impl StubTransport {
    fn status(status: u16, body: &str) -> Self {
        Self { outcome: Ok(ApiResponse { status, body: body.to_owned() }), seen: RefCell::new(Vec::new()) }
    }

    fn failing(message: &str) -> Self {
        Self { outcome: Err(ApiError::Network(message.to_owned())), seen: RefCell::new(Vec::new()) }
    }
}

impl Transport for &StubTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        self.seen.borrow_mut().push(request.clone());
        self.outcome.clone()
    }
}

struct Fixture {
    session: AuthSession,
    store: Rc<MemoryCredentialStore>,
    navigator: Rc<RecordingNavigator>,
}

fn fixture(credential: Option<&str>) -> Fixture {
    let store = Rc::new(MemoryCredentialStore::new());
    if let Some(value) = credential {
        store.set(value);
    }
    let navigator = Rc::new(RecordingNavigator::new());
    let session = AuthSession::new(
        AuthConfig::default(),
        store.clone(),
        navigator.clone(),
        Rc::new(CurrentLocation::new(Some("/app/"), Some("#/items"))),
    );
    Fixture { session, store, navigator }
}

fn client<'a>(fx: &Fixture, transport: &'a StubTransport) -> ApiClient<&'a StubTransport> {
    ApiClient::new("/api/1.0/", InterceptorChain::standard(&fx.session), transport)
}

// =============================================================
// request_url
// =============================================================

#[test]
fn request_url_rewrites_trailing_slash() {
    assert_eq!(request_url("/api/1.0/", "/something/"), "/api/1.0/something/?");
    assert_eq!(request_url("/api/1.0/", "items//"), "/api/1.0/items/?");
}

#[test]
fn request_url_keeps_path_without_trailing_slash() {
    assert_eq!(request_url("/api/1.0/", "/something"), "/api/1.0/something");
}

#[test]
fn request_url_keeps_leading_slash_when_base_has_none() {
    assert_eq!(request_url("http://localhost:8000/api/1.0", "/something/"), "http://localhost:8000/api/1.0/something/?");
}

// =============================================================
// ApiClient
// =============================================================

#[test]
fn success_returns_response_and_sends_bearer() {
    let fx = fixture(Some("k"));
    let transport = StubTransport::status(200, r#"{"id": 1}"#);

    let response = block_on(client(&fx, &transport).get("/items/")).unwrap();

    assert_eq!(response.json::<serde_json::Value>().unwrap()["id"], 1);
    let seen = transport.seen.borrow();
    assert_eq!(seen[0].url, "/api/1.0/items/?");
    assert_eq!(seen[0].header("Authorization"), Some("Bearer k"));
}

#[test]
fn anonymous_request_has_no_authorization_header() {
    let fx = fixture(None);
    let transport = StubTransport::status(200, "[]");

    block_on(client(&fx, &transport).get("/public/")).unwrap();

    assert_eq!(transport.seen.borrow()[0].header("Authorization"), None);
}

#[test]
fn unauthorized_resets_redirects_and_still_fails() {
    let fx = fixture(Some("k"));
    let transport = StubTransport::status(401, "token expired");

    let result = block_on(client(&fx, &transport).get("/items/"));

    assert_eq!(result, Err(ApiError::Unauthorized { body: "token expired".to_owned() }));
    assert!(!fx.store.has());
    assert_eq!(fx.navigator.redirects(), vec!["/login/?next=/app/%23/items".to_owned()]);
}

#[test]
fn other_failures_pass_through_without_side_effects() {
    let fx = fixture(Some("k"));
    let transport = StubTransport::status(403, "forbidden");

    let result = block_on(client(&fx, &transport).delete("/items/3/"));

    assert_eq!(result, Err(ApiError::Status { status: 403, body: "forbidden".to_owned() }));
    assert!(fx.store.has());
    assert!(fx.navigator.redirects().is_empty());
}

#[test]
fn transport_failure_is_returned() {
    let fx = fixture(Some("k"));
    let transport = StubTransport::failing("offline");

    let result = block_on(client(&fx, &transport).get("/items/"));

    assert_eq!(result, Err(ApiError::Network("offline".to_owned())));
    assert!(fx.store.has());
}

#[test]
fn json_bodies_carry_content_type() {
    let fx = fixture(Some("k"));
    let transport = StubTransport::status(201, "{}");
    let api = client(&fx, &transport);
    let body = serde_json::json!({"name": "a"});

    block_on(api.post_json("/items/", &body)).unwrap();
    block_on(api.put_json("/items/1/", &body)).unwrap();
    block_on(api.patch_json("/items/1/", &body)).unwrap();

    let seen = transport.seen.borrow();
    let methods: Vec<Method> = seen.iter().map(|r| r.method).collect();
    assert_eq!(methods, vec![Method::Post, Method::Put, Method::Patch]);
    for request in seen.iter() {
        assert_eq!(request.header("Content-Type"), Some("application/json;charset=utf-8"));
        assert_eq!(request.body.as_deref(), Some(r#"{"name":"a"}"#));
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_transport_unavailable_outside_browser() {
    let result = block_on(BrowserTransport.send(&ApiRequest::new(Method::Get, "/x")));
    assert!(matches!(result, Err(ApiError::Network(_))));
}
