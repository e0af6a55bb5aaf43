use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::Document;

mod analytics;
mod config;
mod contact;
mod dom;
mod images;
mod nav;
mod reveal;
mod components {
    pub mod lightbox;
    pub mod notification;
    pub mod single_flight;
}

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Wires every behaviour onto the page. Each one is independent, so a failure
/// in one only gets logged.
fn boot(document: &Document) {
    let setups: [(&str, fn(&Document) -> Result<(), JsValue>); 7] = [
        ("navigation", nav::init),
        ("stagger delays", reveal::init_stagger),
        ("fade-in", reveal::init_fade_in),
        ("contact form", contact::init),
        ("lightbox", components::lightbox::init),
        ("lazy images", images::init_lazy),
        ("analytics", analytics::init),
    ];
    for (name, setup) in setups {
        if let Err(err) = setup(document) {
            warn!("Failed to set up {}: {:?}", name, err);
        }
    }
    info!("Landing page ready");
}

fn welcome_banner() {
    gloo_console::log!("%c《马戏团的幽魂》", "color: #C9A227; font-size: 24px; font-weight: bold;");
    gloo_console::log!("%cGhost of the Circus - Partnership Landing", "color: #666; font-size: 14px;");
    gloo_console::log!("%c上海浸门文化传媒有限公司", "color: #999; font-size: 12px;");
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let Some(document) = dom::document() else {
        warn!("No document available, nothing to attach to");
        return;
    };

    if document.ready_state() == "loading" {
        let ready = document.clone();
        let attached = dom::listen(&document, "DOMContentLoaded", move |_| {
            boot(&ready);
            images::preload_critical();
        });
        if let Err(err) = attached {
            warn!("Could not wait for DOMContentLoaded: {:?}", err);
        }
    } else {
        boot(&document);
        images::preload_critical();
    }
    welcome_banner();
}
