//! Client library for the Khademni job marketplace.
//!
//! Everything below the view layer lives here: the persisted [`session::SessionStore`],
//! the [`api::ApiClient`] that talks to the marketplace backend, and the
//! [`service`] layer (authentication and job flows) that the Dioxus views call into.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod navigation;
pub mod service;
pub mod session;
