//! Browser location access and full-page redirects.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page lives on the backend, outside the SPA router, so auth
//! redirects replace `window.location` instead of pushing a client route.
//! Both capabilities are traits so guards and interceptors can be driven by
//! recording doubles in tests.
//!
//! TRADE-OFFS
//! ==========
//! Without the `hydrate` feature the window-backed implementations are inert:
//! the location is empty and redirects are dropped.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use std::cell::RefCell;

/// Sends the browser to another URL.
pub trait Navigator {
    fn redirect_to(&self, url: &str);
}

/// Reports where the browser currently is.
pub trait LocationSource {
    fn current(&self) -> CurrentLocation;
}

/// Pathname and hash fragment of the current page, as the browser reports them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CurrentLocation {
    pub pathname: Option<String>,
    pub hash: Option<String>,
}

impl CurrentLocation {
    pub fn new(pathname: Option<&str>, hash: Option<&str>) -> Self {
        Self { pathname: pathname.map(str::to_owned), hash: hash.map(str::to_owned) }
    }
}

/// A fixed location reports itself.
impl LocationSource for CurrentLocation {
    fn current(&self) -> CurrentLocation {
        self.clone()
    }
}

/// `window.location` backed navigator and location source.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn redirect_to(&self, url: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if window.location().set_href(url).is_err() {
                    log::warn!("redirect to {url} rejected by browser");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!("redirect to {url} skipped outside the browser");
        }
    }
}

impl LocationSource for WindowNavigator {
    fn current(&self) -> CurrentLocation {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return CurrentLocation::default();
            };
            let location = window.location();
            CurrentLocation { pathname: location.pathname().ok(), hash: location.hash().ok() }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            CurrentLocation::default()
        }
    }
}

/// Navigator that records redirect targets instead of following them.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    redirects: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every URL passed to `redirect_to`, oldest first.
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }

    pub fn last_redirect(&self) -> Option<String> {
        self.redirects.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect_to(&self, url: &str) {
        self.redirects.borrow_mut().push(url.to_owned());
    }
}
