use dioxus::prelude::*;

/// Full-height page body, offset below the fixed navbar.
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or("");

    rsx!(
        div {
            class: "min-h-screen pt-[72px] px-4 pb-8 {class}",
            {children}
        }
    )
}
