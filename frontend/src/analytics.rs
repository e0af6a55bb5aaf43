//! Click tracking. Events only reach the developer console for now; a real
//! analytics transport would hook in at [`track`].

use chrono::{DateTime, Utc};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::dom;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Cta { text: String, href: String },
    Nav { text: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackedEvent {
    pub name: &'static str,
    pub payload: Payload,
    pub recorded_at: DateTime<Utc>,
}

impl TrackedEvent {
    pub fn cta_click(text: String, href: Option<String>) -> Self {
        Self::new("cta_click", Payload::Cta { text, href: href.unwrap_or_default() })
    }

    pub fn nav_click(text: String) -> Self {
        Self::new("nav_click", Payload::Nav { text })
    }

    fn new(name: &'static str, payload: Payload) -> Self {
        Self { name, payload, recorded_at: Utc::now() }
    }
}

pub fn track(event: &TrackedEvent) {
    match serde_wasm_bindgen::to_value(event) {
        Ok(data) => gloo_console::log!("Track Event:", event.name, data),
        Err(err) => log::warn!("Could not encode {} event: {}", event.name, err),
    }
}

pub fn init(document: &Document) -> Result<(), JsValue> {
    for button in dom::query_all(document, ".btn-primary, .btn-secondary") {
        let source = button.clone();
        dom::listen(&button, "click", move |_| {
            track(&TrackedEvent::cta_click(
                dom::trimmed_text(&source),
                source.get_attribute("href"),
            ));
        })?;
    }

    for link in dom::query_all(document, ".nav-link") {
        let source = link.clone();
        dom::listen(&link, "click", move |_| {
            track(&TrackedEvent::nav_click(dom::trimmed_text(&source)));
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cta_payload_defaults_missing_href() {
        let event = TrackedEvent::cta_click("立即合作".into(), None);
        assert_eq!(event.name, "cta_click");
        assert_eq!(
            serde_json::to_value(&event.payload).unwrap(),
            json!({ "text": "立即合作", "href": "" })
        );
    }

    #[test]
    fn nav_payload_carries_text_only() {
        let event = TrackedEvent::nav_click("关于我们".into());
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["name"], "nav_click");
        assert_eq!(value["payload"], json!({ "text": "关于我们" }));
        assert!(value["recorded_at"].is_string());
    }
}
