use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaBriefcase;
use dioxus_free_icons::Icon;

use crate::client::router::Route;

#[component]
pub fn KhademniTitleButton() -> Element {
    rsx!(
        Link {
            to: Route::Landing {},
            div { class: "flex items-center gap-2",
                Icon {
                    width: 20,
                    height: 20,
                    icon: FaBriefcase
                }
                p { class: "text-xl",
                    "Khademni"
                }
            }
        }
    )
}
