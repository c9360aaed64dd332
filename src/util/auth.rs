//! Route access checks run before a view is entered.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route requires a credential unless it opts out with
//! `allowAnonymous`. The check only spares users a screen full of failing
//! requests; the API still rejects unauthenticated calls and the 401
//! interceptor handles those.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::state::auth::AuthSession;

/// Per-route access annotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteAccess {
    #[serde(default)]
    pub allow_anonymous: bool,
}

impl RouteAccess {
    pub const ANONYMOUS: Self = Self { allow_anonymous: true };
}

/// The view a navigation is heading to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationTarget {
    pub path: String,
    pub access: Option<RouteAccess>,
}

impl NavigationTarget {
    pub fn new(path: impl Into<String>, access: Option<RouteAccess>) -> Self {
        Self { path: path.into(), access }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    Proceed,
    /// Transition aborted; the browser was sent to this URL.
    Redirect(String),
}

impl NavigationDecision {
    pub fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed)
    }
}

/// Routes without an annotation require a credential.
pub fn requires_credential(access: Option<&RouteAccess>) -> bool {
    !access.is_some_and(|a| a.allow_anonymous)
}

/// Decide whether navigation to `target` may proceed.
///
/// A blocked navigation redirects to the login page, with `next` pointing at
/// the location the browser is on when the check runs.
pub fn check_navigation(target: &NavigationTarget, session: &AuthSession) -> NavigationDecision {
    log::debug!("navigation to {} access={:?}", target.path, target.access);
    if requires_credential(target.access.as_ref()) && !session.is_logged_in() {
        let url = session.login_url(true);
        log::debug!("no credential for {}; redirecting to {url}", target.path);
        session.navigator.redirect_to(&url);
        return NavigationDecision::Redirect(url);
    }
    log::debug!("navigation to {} allowed", target.path);
    NavigationDecision::Proceed
}
