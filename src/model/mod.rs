//! Data transfer objects exchanged with the marketplace backend.

pub mod api;
pub mod auth;
pub mod job;
