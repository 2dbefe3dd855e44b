//! Browser location as a signal, kept in step with the History API.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

fn current_path() -> String {
    let Some(window) = web_sys::window() else {
        return "/".to_string();
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    format!("{}{}", path, search)
}

#[derive(Clone, Copy)]
pub struct Location {
    path: RwSignal<String>,
}

impl Location {
    /// Reads the current URL and follows back/forward navigation.
    pub fn new() -> Self {
        let path = RwSignal::new(current_path());
        let _ = window_event_listener(leptos::ev::popstate, move |_| {
            path.set(current_path());
        });
        Self { path }
    }

    /// Path plus query string, e.g. `/billing?tab=unpaid`
    pub fn path(&self) -> Signal<String> {
        self.path.read_only().into()
    }

    /// New history entry
    pub fn navigate(&self, to: &str) {
        self.change(to, false);
    }

    /// Replace the current history entry
    pub fn replace(&self, to: &str) {
        self.change(to, true);
    }

    fn change(&self, to: &str, replace: bool) {
        if self.path.with_untracked(|p| p == to) {
            return;
        }
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let result = if replace {
                history.replace_state_with_url(&JsValue::NULL, "", Some(to))
            } else {
                history.push_state_with_url(&JsValue::NULL, "", Some(to))
            };
            if let Err(e) = result {
                log::warn!("History update to {} failed: {:?}", to, e);
            }
        }
        self.path.set(to.to_string());
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_location() -> Location {
    use_context::<Location>().expect("Location not provided in context")
}
