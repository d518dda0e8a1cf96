//! Application paths and full-page navigation.

use dioxus_logger::tracing;

pub const LANDING_PATH: &str = "/";
pub const SIGNUP_PATH: &str = "/signup";
pub const LOGIN_PATH: &str = "/login";
pub const WORKER_DASHBOARD_PATH: &str = "/worker-dashboard";
pub const EMPLOYER_DASHBOARD_PATH: &str = "/employer-dashboard";

/// Replaces the current document with `path`, discarding all in-memory view state.
///
/// Returns `false` when there is no browser window to navigate, in which case the caller
/// has to fall back to an in-app route change.
pub fn hard_redirect(path: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            tracing::warn!("No browser window available to redirect to {}", path);
            return false;
        };

        match window.location().set_href(path) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("Failed to redirect to {}: {:?}", path, err);
                false
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("Hard redirect to {} requested outside a browser", path);
        false
    }
}
