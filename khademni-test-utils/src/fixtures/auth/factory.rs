//! Factory functions for signup and login payloads.

use khademni::model::auth::{AuthResponseDto, LoginDto, Role, SignupDto};

use crate::constant::{TEST_EMAIL, TEST_PASSWORD, TEST_USERNAME};

/// Create a signup form for the standard test account with the given role.
pub fn mock_signup(role: Role) -> SignupDto {
    SignupDto {
        username: TEST_USERNAME.to_string(),
        email: TEST_EMAIL.to_string(),
        password: TEST_PASSWORD.to_string(),
        role,
    }
}

/// Create login credentials for the standard test account.
pub fn mock_login() -> LoginDto {
    LoginDto {
        username: TEST_USERNAME.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

pub fn mock_auth_response(token: &str, role: Role) -> AuthResponseDto {
    AuthResponseDto {
        token: token.to_string(),
        role,
    }
}
