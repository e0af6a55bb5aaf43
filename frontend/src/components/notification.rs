//! Toast messages pinned to the top-right corner. Only one is shown at a time.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::single_flight::SingleFlight;
use crate::config::{NOTIFICATION_EXIT_MS, NOTIFICATION_LIFETIME_MS};
use crate::dom::{self, Listener};

const STYLE_ID: &str = "notification-styles";
const LEAVING_CLASS: &str = "notification-leaving";

const STYLES: &str = r#"
    @keyframes slideIn {
        from { transform: translateX(100%); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
    @keyframes slideOut {
        from { transform: translateX(0); opacity: 1; }
        to { transform: translateX(100%); opacity: 0; }
    }
    .notification-close {
        background: none;
        border: none;
        color: white;
        font-size: 24px;
        cursor: pointer;
        padding: 0;
        line-height: 1;
    }
"#;

/// A toast on screen together with its close-button listener.
struct Toast {
    element: Element,
    _on_close: Listener,
}

impl Toast {
    fn discard(self) {
        self.element.remove();
    }
}

thread_local! {
    static ACTIVE: RefCell<SingleFlight<Toast>> = const { RefCell::new(SingleFlight::new()) };
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Info,
    Success,
    Error,
}

impl Variant {
    pub fn class_suffix(self) -> &'static str {
        match self {
            Variant::Info => "info",
            Variant::Success => "success",
            Variant::Error => "error",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Variant::Success => "rgba(39, 174, 96, 0.95)",
            Variant::Error => "rgba(231, 76, 60, 0.95)",
            Variant::Info => "rgba(201, 162, 39, 0.95)",
        }
    }

    pub fn inline_style(self) -> String {
        format!(
            "position: fixed; top: 100px; right: 20px; padding: 16px 24px; \
             background: {}; color: white; border-radius: 12px; \
             box-shadow: 0 4px 20px rgba(0,0,0,0.3); display: flex; align-items: center; \
             gap: 16px; z-index: 10000; animation: slideIn 0.3s ease; max-width: 400px;",
            self.background()
        )
    }
}

/// Shows `message`, replacing whatever toast is currently on screen.
pub fn show(message: &str, variant: Variant) {
    if let Err(err) = try_show(message, variant) {
        warn!("Failed to show notification: {:?}", err);
    }
}

fn try_show(message: &str, variant: Variant) -> Result<(), JsValue> {
    let Some(document) = dom::document() else {
        return Ok(());
    };
    let Some(body) = document.body() else {
        return Ok(());
    };
    ensure_styles(&document)?;

    let toast = document.create_element("div")?;
    toast.set_class_name(&format!("notification notification-{}", variant.class_suffix()));
    toast.set_attribute("style", &variant.inline_style())?;

    let text = document.create_element("span")?;
    text.set_class_name("notification-message");
    text.set_text_content(Some(message));
    let close = document.create_element("button")?;
    close.set_class_name("notification-close");
    close.set_text_content(Some("\u{00d7}"));
    toast.append_child(&text)?;
    toast.append_child(&close)?;

    let closing = toast.clone();
    let on_close = Listener::new(&close, "click", move |_| dismiss(&closing))?;

    let previous = ACTIVE.with(|slot| {
        slot.borrow_mut().replace(Toast {
            element: toast.clone(),
            _on_close: on_close,
        })
    });
    if let Some(previous) = previous {
        previous.discard();
    }
    body.append_child(&toast)?;

    let expiring = toast;
    Timeout::new(NOTIFICATION_LIFETIME_MS, move || {
        if expiring.parent_node().is_some() {
            dismiss(&expiring);
        }
    })
    .forget();
    Ok(())
}

/// Plays the exit slide, then drops the toast from the page.
fn dismiss(toast: &Element) {
    let class_list = toast.class_list();
    if class_list.contains(LEAVING_CLASS) {
        return;
    }
    let _ = class_list.add_1(LEAVING_CLASS);
    if let Some(el) = toast.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property("animation", "slideOut 0.3s ease forwards");
    }

    let toast = toast.clone();
    Timeout::new(NOTIFICATION_EXIT_MS, move || {
        let finished = ACTIVE.with(|slot| slot.borrow_mut().take_if(|active| active.element == toast));
        match finished {
            Some(finished) => finished.discard(),
            None => toast.remove(),
        }
    })
    .forget();
}

fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let Some(head) = document.head() else {
        return Ok(());
    };
    let style = document.create_element("style")?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(STYLES));
    head.append_child(&style)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_pick_their_tint() {
        assert_eq!(Variant::Success.background(), "rgba(39, 174, 96, 0.95)");
        assert_eq!(Variant::Error.background(), "rgba(231, 76, 60, 0.95)");
        assert_eq!(Variant::default().background(), "rgba(201, 162, 39, 0.95)");
    }

    #[test]
    fn inline_style_carries_tint_and_entrance() {
        let style = Variant::Error.inline_style();
        assert!(style.contains("background: rgba(231, 76, 60, 0.95);"));
        assert!(style.contains("animation: slideIn 0.3s ease;"));
    }

    #[test]
    fn class_suffixes() {
        let suffixes: Vec<_> = [Variant::Info, Variant::Success, Variant::Error]
            .into_iter()
            .map(Variant::class_suffix)
            .collect();
        assert_eq!(suffixes, ["info", "success", "error"]);
    }
}
