use dioxus::prelude::*;
use dioxus::document;

use crate::app::components::DatasetBrowser;
use crate::app::layouts::Navbar;
use crate::config::BrowserConfig;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Browser {},
}

/// Configuration for this build target
fn load_config() -> BrowserConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        BrowserConfig::from_env().unwrap_or_else(|e| {
            tracing::warn!("Ignoring invalid browser configuration: {}", e);
            BrowserConfig::default()
        })
    }
    #[cfg(target_arch = "wasm32")]
    {
        BrowserConfig::default()
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(load_config);

    use_effect(|| {
        tracing::info!("Dataset browser initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            Navbar {}
            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Browser() -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "Datasets" }
            DatasetBrowser {}
        }
    }
}
