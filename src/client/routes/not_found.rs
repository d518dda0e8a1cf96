use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::router::Route;

/// Unknown paths go back to the landing page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();

    use_effect(move || {
        tracing::debug!("Unknown path /{}, redirecting to landing", segments.join("/"));
        navigator.replace(Route::Landing {});
    });

    rsx!()
}
