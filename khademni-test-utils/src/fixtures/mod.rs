//! Test fixture modules for mock data and HTTP endpoints.
//!
//! - `auth` - Signup and login responses
//! - `job` - Job postings and applications

pub mod auth;
pub mod job;
