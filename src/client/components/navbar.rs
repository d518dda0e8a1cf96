use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRightFromBracket;
use dioxus_free_icons::Icon;
use khademni::service::Services;

use crate::client::{components::KhademniTitleButton, router::Route, store::SessionState};

#[component]
pub fn Navbar() -> Element {
    let services = use_context::<Services>();
    let mut session = use_context::<SessionState>();
    let navigator = use_navigator();

    let role = *session.role.read();

    let logout = move |_| {
        // In the browser logout reloads the landing page; elsewhere route there ourselves
        if !services.auth.logout() {
            session.role.set(None);
            navigator.replace(Route::Landing {});
        }
    };

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                KhademniTitleButton {}
            }
            div {
                class: "navbar-end",
                ul { class: "flex gap-2",
                    if let Some(role) = role {
                        li {
                            Link {
                                to: Route::dashboard(role),
                                class: "btn btn-ghost",
                                "Dashboard"
                            }
                        }
                        li {
                            button {
                                class: "btn btn-outline flex gap-2",
                                onclick: logout,
                                Icon {
                                    width: 16,
                                    height: 16,
                                    icon: FaRightFromBracket
                                }
                                "Logout"
                            }
                        }
                    } else {
                        li {
                            Link {
                                to: Route::Login {},
                                class: "btn btn-ghost",
                                "Login"
                            }
                        }
                        li {
                            Link {
                                to: Route::Signup {},
                                class: "btn btn-primary",
                                "Sign up"
                            }
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
