//! Persisted authentication session.
//!
//! The session is two string entries, the bearer token and the role tag, kept in a
//! [`SessionStorage`] backend that survives reloads. [`SessionStore`] is the only thing
//! allowed to read or write them; it is created once at startup, handed to the API
//! client and provided to the views through context.

pub mod storage;

use std::{fmt, rc::Rc, str::FromStr};

use dioxus_logger::tracing;

use crate::{config::Config, model::auth::Role, navigation::LANDING_PATH};

#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStorage;
#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
pub use storage::{MemoryStorage, SessionStorage};

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";

/// Snapshot of the persisted session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<Role>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Where this session should land: its role's dashboard, or the landing page.
    pub fn dashboard_path(&self) -> &'static str {
        match self.role {
            Some(role) => role.dashboard_path(),
            None => LANDING_PATH,
        }
    }
}

/// Owner of the persisted token and role. Clones share the same backend.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn SessionStorage>,
}

impl SessionStore {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self {
            storage: Rc::new(storage),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    /// Opens the persistent backend for the current target.
    pub fn for_config(config: &Config) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let _ = config;
            Self::new(BrowserStorage)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(FileStorage::open(&config.session_file))
        }
    }

    /// Stores the token and role together.
    pub fn set_session(&self, token: &str, role: Role) {
        self.storage
            .set_many(&[(TOKEN_KEY, token), (ROLE_KEY, role.as_str())]);
    }

    pub fn token(&self) -> Option<String> {
        self.storage
            .get(TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    pub fn role(&self) -> Option<Role> {
        let raw = self.storage.get(ROLE_KEY)?;

        match Role::from_str(&raw) {
            Ok(role) => Some(role),
            Err(err) => {
                tracing::warn!("Ignoring stored session role: {}", err);
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn session(&self) -> Session {
        Session {
            token: self.token(),
            role: self.role(),
        }
    }

    pub fn clear(&self) {
        self.storage.remove_many(&[TOKEN_KEY, ROLE_KEY]);
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .field("role", &self.role())
            .finish()
    }
}
