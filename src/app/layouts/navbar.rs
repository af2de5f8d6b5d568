use dioxus::prelude::*;

use crate::app::pages::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "c-navbar",
            Link {
                to: Route::Browser {},
                class: "c-navbar__logo",
                "🧬 Dataset Lineage"
            }
        }
    }
}
