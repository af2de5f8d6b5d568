use dioxus::prelude::*;

use crate::domain::models::PersistedDatasetDescriptor;

// Single row of the descriptor list (BEM: c-descriptor)
#[component]
pub fn DescriptorItem(descriptor: PersistedDatasetDescriptor) -> Element {
    let name = descriptor.short_name().to_string();
    let written_at = descriptor.display_timestamp();

    rsx! {
        li { class: "c-descriptor",
            div { class: "c-descriptor__header",
                span { class: "c-descriptor__name", "{name}" }
                span { class: "c-descriptor__time", "{written_at}" }
            }
            div { class: "c-descriptor__path", title: "{descriptor.path}", "{descriptor.path}" }
            div { class: "c-descriptor__app",
                span { class: "c-descriptor__app-name", "{descriptor.app_name}" }
                span { class: "c-descriptor__app-id", "{descriptor.app_id}" }
            }
        }
    }
}
