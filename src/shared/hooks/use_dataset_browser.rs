use std::rc::Rc;
use std::time::Duration;

use chrono::Utc;
use dioxus::prelude::*;

use crate::config::BrowserConfig;
use crate::domain::models::{ScrollEvent, ScrollMetrics, SearchForm, SearchRequest};
use crate::domain::services::{fetch_page, BrowserState, Debouncer, DescriptorSource};
use crate::shared::logging::log_form_change;

/// Dataset browser state management hook
#[derive(Clone, Copy)]
pub struct UseDatasetBrowserReturn {
    pub state: Signal<BrowserState>,
    /// Mirrors the request cell for the view
    pub current_request: Signal<Option<SearchRequest>>,
    debouncer: Signal<Debouncer>,
    source: Signal<Rc<dyn DescriptorSource>>,
    scroll_offset_px: f64,
}

impl UseDatasetBrowserReturn {
    pub fn form(&self) -> SearchForm {
        self.state.read().form().clone()
    }

    pub fn set_text(&mut self, text: String) {
        let form = self.form().with_text(text);
        self.on_form_change(form);
    }

    pub fn set_timestamp(&mut self, timestamp: String) {
        let form = self.form().with_timestamp(timestamp);
        self.on_form_change(form);
    }

    /// Store the edited form and schedule a debounced search for it
    pub fn on_form_change(&mut self, form: SearchForm) {
        let delay = self.state.write().edit_form(form.clone());
        self.schedule_search(form, delay);
    }

    fn schedule_search(&mut self, form: SearchForm, delay: Duration) {
        log_form_change(&form.text, delay.as_millis() as u64);

        let mut browser = *self;
        let pending = self
            .debouncer
            .write()
            .schedule(delay, async move { browser.new_search(&form) });
        spawn(async move {
            pending.await;
        });
    }

    /// Issue a first-page search for `form`, fetching when the request is new
    pub fn new_search(&mut self, form: &SearchForm) {
        // Invalid timestamps are already logged and surfaced through `form_error`
        let accepted = self.state.write().new_search(form);
        if let Ok(Some(request)) = accepted {
            self.dispatch(request);
        }
    }

    pub fn on_scroll(&mut self, event: ScrollEvent) {
        let next = self.state.write().on_scroll(&event);
        if let Some(request) = next {
            self.dispatch(request);
        }
    }

    /// Scroll of the inner list container
    pub fn on_scroll_metrics(&mut self, metrics: ScrollMetrics) {
        self.on_scroll(metrics.to_event(false, self.scroll_offset_px));
    }

    /// Reset the form to empty text and the current time, searching immediately
    pub fn reset(&mut self) {
        let form = self.state.write().reset(Utc::now());
        self.schedule_search(form, Duration::ZERO);
    }

    fn dispatch(&mut self, request: SearchRequest) {
        let ticket = self.state.write().begin_fetch(request);
        let source = self.source.read().clone();
        let mut state = self.state;
        spawn(async move {
            let result = fetch_page(source.as_ref(), &ticket).await;
            state.write().complete_fetch(&ticket, result);
        });
    }
}

/// Hook to manage a dataset browser backed by `source`
pub fn use_dataset_browser(source: Rc<dyn DescriptorSource>, config: BrowserConfig) -> UseDatasetBrowserReturn {
    let state = use_signal(|| BrowserState::new(&config));
    let current_request = use_signal(|| None::<SearchRequest>);
    let debouncer = use_signal(Debouncer::new);
    let source = use_signal(move || source);

    let browser = UseDatasetBrowserReturn {
        state,
        current_request,
        debouncer,
        source,
        scroll_offset_px: config.scroll_offset_px,
    };

    // Mount: observe the request cell, then issue the initial search
    use_hook(move || {
        let mut browser = browser;
        spawn(async move {
            let mut current_request = browser.current_request;
            browser
                .state
                .write()
                .subscribe(move |request| current_request.set(Some(request.clone())));
            browser.reset();
        })
    });

    browser
}
