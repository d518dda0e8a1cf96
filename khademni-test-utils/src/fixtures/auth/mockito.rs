//! Mock endpoints for the authentication API.

use khademni::model::auth::Role;
use mockito::Mock;

use crate::fixtures::auth::{factory, AuthFixtures};

impl<'a> AuthFixtures<'a> {
    /// Create a mock `POST /api/auth/login` endpoint answering with `token` and `role`.
    ///
    /// # Arguments
    /// - `token` - Bearer token to hand out
    /// - `role` - Role to report for the account
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint
    pub fn create_login_endpoint(&mut self, token: &str, role: Role, expected_requests: usize) -> Mock {
        let response = factory::mock_auth_response(token, role);

        self.setup
            .server
            .mock("POST", "/api/auth/login")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&response).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `POST /api/auth/signup` endpoint answering with `token` and `role`.
    pub fn create_signup_endpoint(&mut self, token: &str, role: Role, expected_requests: usize) -> Mock {
        let response = factory::mock_auth_response(token, role);

        self.setup
            .server
            .mock("POST", "/api/auth/signup")
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&response).unwrap())
            .expect(expected_requests)
            .create()
    }
}
