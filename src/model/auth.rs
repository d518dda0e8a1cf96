use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::navigation::{EMPLOYER_DASHBOARD_PATH, WORKER_DASHBOARD_PATH};

/// Account role assigned by the backend at signup.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Worker,
    Employer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Worker => "worker",
            Role::Employer => "employer",
        }
    }

    /// Path of the dashboard a user with this role lands on after authenticating.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Worker => WORKER_DASHBOARD_PATH,
            Role::Employer => EMPLOYER_DASHBOARD_PATH,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown role: {0:?}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "worker" => Ok(Role::Worker),
            "employer" => Ok(Role::Employer),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// Registration form submitted to `POST /api/auth/signup`.
#[derive(Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupDto {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Credentials submitted to `POST /api/auth/login`.
#[derive(Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// Successful signup or login response.
///
/// A blank token fails decoding: the session store would treat it as logged out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponseDto {
    #[serde(deserialize_with = "non_blank")]
    pub token: String,
    pub role: Role,
}

fn non_blank<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.trim().is_empty() {
        return Err(de::Error::custom("token must not be empty"));
    }

    Ok(value)
}

impl fmt::Debug for SignupDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupDto")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

impl fmt::Debug for LoginDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginDto")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
