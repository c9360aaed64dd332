//! Route wrapper that enforces the credential requirement before rendering.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each routed view is wrapped in `<AuthGate>` with its access annotation.
//! The check re-runs whenever the router pathname changes, so it acts as a
//! pre-navigation hook: a blocked route never renders its children and the
//! browser leaves for the login page instead.
//!
//! TRADE-OFFS
//! ==========
//! Effects only run in the browser, so server rendering and the first hydrate
//! pass both render the closed gate. Gated content appears once the check
//! passes on the client.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::config::AuthConfig;
use crate::state::auth::AuthSession;
use crate::util::auth::{NavigationTarget, RouteAccess, check_navigation};

/// Render `children` only when the current route may be entered.
///
/// Omit `access` for routes that require a credential; pass
/// `access=RouteAccess::ANONYMOUS` for routes open to everyone.
#[component]
pub fn AuthGate(#[prop(optional)] access: Option<RouteAccess>, children: ChildrenFn) -> impl IntoView {
    let location = use_location();
    let allowed = RwSignal::new(false);

    Effect::new(move || {
        let target = NavigationTarget::new(location.pathname.get(), access);
        let session = AuthSession::browser(AuthConfig::from_build_env());
        allowed.set(check_navigation(&target, &session).is_proceed());
    });

    let children = StoredValue::new(children);
    view! {
        <Show when=move || allowed.get()>
            {children.with_value(|render| render())}
        </Show>
    }
}
