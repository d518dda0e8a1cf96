use dioxus::prelude::*;
use khademni::{model::auth::Role, session::Session};

use crate::client::{
    components::Navbar,
    routes::{EmployerDashboard, Landing, Login, NotFound, Signup, WorkerDashboard},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Landing {},

    #[route("/signup")]
    Signup {},

    #[route("/login")]
    Login {},

    #[route("/worker-dashboard")]
    WorkerDashboard {},

    #[route("/employer-dashboard")]
    EmployerDashboard {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    pub fn dashboard(role: Role) -> Self {
        match role {
            Role::Worker => Route::WorkerDashboard {},
            Role::Employer => Route::EmployerDashboard {},
        }
    }

    /// Where a freshly authenticated session should go.
    pub fn for_session(session: &Session) -> Self {
        match session.role {
            Some(role) => Route::dashboard(role),
            None => Route::Landing {},
        }
    }
}
