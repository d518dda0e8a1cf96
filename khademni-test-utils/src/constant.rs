//! Placeholder values shared across tests.
//!
//! None of these are real credentials.

/// Token the mock backend hands out on signup and login.
pub static TEST_TOKEN: &str = "test-token";

pub static TEST_USERNAME: &str = "amine";

pub static TEST_EMAIL: &str = "amine@example.com";

pub static TEST_PASSWORD: &str = "hunter22";

/// Address nothing listens on, used to provoke connection failures.
///
/// Port 1 is reserved (tcpmux) and closed on any machine running the tests, so the
/// connection is refused immediately rather than timing out.
pub static UNREACHABLE_API_URL: &str = "http://127.0.0.1:1";
