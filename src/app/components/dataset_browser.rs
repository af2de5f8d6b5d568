//! Dataset browser component
//!
//! Search form plus an infinite-scrolling list of lineage descriptors.
//! Scrolling the list container to its bottom requests the next page.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::app::components::{DescriptorItem, EmptyState, ErrorMessage, LoadingText};
use crate::config::BrowserConfig;
use crate::domain::models::ScrollMetrics;
use crate::domain::services::DescriptorSource;
use crate::shared::constants::LIST_CONTAINER_ID;
use crate::shared::hooks::use_dataset_browser;
use crate::shared::services::ApiService;
use crate::shared::utils::to_date_string;

/// Read scroll geometry of the element with `id` (WASM only)
#[cfg(target_arch = "wasm32")]
fn read_scroll_metrics(id: &str) -> Option<ScrollMetrics> {
    let element = web_sys::window()?.document()?.get_element_by_id(id)?;
    Some(ScrollMetrics {
        scroll_top: element.scroll_top() as f64,
        scroll_height: element.scroll_height() as f64,
        client_height: element.client_height() as f64,
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn read_scroll_metrics(_id: &str) -> Option<ScrollMetrics> {
    // SSR: no DOM, WASM will hydrate with real metrics
    None
}

#[component]
pub fn DatasetBrowser() -> Element {
    let config = try_use_context::<BrowserConfig>().unwrap_or_default();
    let source = use_hook(|| Rc::new(ApiService::from_config(&config)) as Rc<dyn DescriptorSource>);
    let mut browser = use_dataset_browser(source, config);

    let (form, descriptors, is_loading, last_error, form_error) = {
        let state = browser.state.read();
        (
            state.form().clone(),
            state.descriptors().to_vec(),
            state.is_loading(),
            state.last_error().map(str::to_string),
            state.form_error().map(str::to_string),
        )
    };
    let as_at = browser
        .current_request
        .read()
        .as_ref()
        .map(|request| to_date_string(request.as_at_timestamp));
    let timestamp_class = if form.has_valid_timestamp_shape() {
        "c-dataset-browser__input"
    } else {
        "c-dataset-browser__input c-dataset-browser__input--invalid"
    };

    rsx! {
        div { class: "c-dataset-browser",
            form {
                class: "c-dataset-browser__form",
                onsubmit: move |evt| evt.prevent_default(),

                input {
                    r#type: "search",
                    class: "c-dataset-browser__input",
                    placeholder: "Search datasets by name or path...",
                    value: "{form.text}",
                    oninput: move |evt| browser.set_text(evt.value()),
                }

                input {
                    r#type: "text",
                    class: "{timestamp_class}",
                    placeholder: "YYYY-MM-DD HH:mm",
                    title: "Show lineage as it was at this time",
                    value: "{form.timestamp}",
                    oninput: move |evt| browser.set_timestamp(evt.value()),
                }

                button {
                    r#type: "button",
                    class: "c-btn c-btn--secondary c-btn--sm",
                    onclick: move |_| browser.reset(),
                    "Reset"
                }
            }

            if let Some(message) = form_error {
                ErrorMessage { message }
            }

            if let Some(as_at) = as_at {
                p { class: "c-dataset-browser__as-at", "As at {as_at}" }
            }

            div {
                id: LIST_CONTAINER_ID,
                class: "c-dataset-browser__list",
                onscroll: move |_| {
                    if let Some(metrics) = read_scroll_metrics(LIST_CONTAINER_ID) {
                        browser.on_scroll_metrics(metrics);
                    }
                },

                if descriptors.is_empty() && !is_loading {
                    EmptyState { message: "No datasets match this search" }
                } else {
                    ul { class: "c-descriptor-list",
                        for descriptor in descriptors {
                            DescriptorItem { key: "{descriptor.dataset_id}", descriptor }
                        }
                    }
                }

                if is_loading {
                    LoadingText { message: "Loading datasets..." }
                }
            }

            if let Some(message) = last_error {
                ErrorMessage { message }
            }
        }
    }
}
