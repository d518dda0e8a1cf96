use dioxus::prelude::*;
use khademni::model::auth::Role;

/// Reactive copy of the session role.
///
/// The session store itself is not reactive; views update this signal after login and
/// logout so the navbar and landing page re-render.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionState {
    pub role: Signal<Option<Role>>,
}

impl SessionState {
    pub fn new(role: Option<Role>) -> Self {
        Self {
            role: Signal::new(role),
        }
    }
}
