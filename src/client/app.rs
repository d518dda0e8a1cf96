use dioxus::prelude::*;
use dioxus_logger::tracing;
use khademni::{config::Config, service::Services};

use crate::client::{components::Page, router::Route, store::SessionState};

#[component]
pub fn App() -> Element {
    let config = use_hook(|| {
        Config::from_env().inspect_err(|err| tracing::error!("Configuration error: {}", err))
    });

    match config {
        Ok(config) => rsx!(AppShell { config }),
        Err(err) => rsx!(
            Page { class: "flex items-center justify-center",
                div { role: "alert", class: "alert alert-error max-w-xl",
                    span { "Khademni is misconfigured: {err}" }
                }
            }
        ),
    }
}

/// Builds the services once and provides them, with the reactive session state, to every route.
#[component]
fn AppShell(config: Config) -> Element {
    let services = use_context_provider(|| Services::from_config(&config));
    use_context_provider(|| SessionState::new(services.session.role()));

    rsx!(Router::<Route> {})
}
