use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route, store::SessionState};

#[component]
pub fn Landing() -> Element {
    let session = use_context::<SessionState>();
    let role = *session.role.read();

    rsx!(
        Title { "Khademni" }
        Meta {
            name: "description",
            content: "Khademni connects workers looking for jobs with employers looking for help."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 max-w-xl text-center",
                p { class: "text-3xl font-bold",
                    "Khademni"
                }
                p {
                    "Browse open jobs and apply in one click, or post a job and review who applied."
                }
                ul { class: "flex gap-2",
                    if let Some(role) = role {
                        li {
                            Link {
                                to: Route::dashboard(role),
                                class: "btn btn-primary w-44",
                                "Go to dashboard"
                            }
                        }
                    } else {
                        li {
                            Link {
                                to: Route::Signup {},
                                class: "btn btn-primary w-32",
                                "Sign up"
                            }
                        }
                        li {
                            Link {
                                to: Route::Login {},
                                class: "btn btn-outline w-32",
                                "Login"
                            }
                        }
                    }
                }
            }
        }
    )
}
