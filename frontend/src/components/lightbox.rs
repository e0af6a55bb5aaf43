//! Full-viewport image viewer opened from gallery thumbnails.

use std::cell::RefCell;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement, KeyboardEvent};

use super::single_flight::SingleFlight;
use crate::dom::{self, Listener};

const STYLE_ID: &str = "lightbox-styles";

const STYLES: &str = r#"
    .lightbox {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        bottom: 0;
        z-index: 10000;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .lightbox-overlay {
        position: absolute;
        top: 0;
        left: 0;
        right: 0;
        bottom: 0;
        background: rgba(0,0,0,0.95);
    }
    .lightbox-content {
        position: relative;
        z-index: 1;
        max-width: 90vw;
        max-height: 90vh;
    }
    .lightbox-content img {
        max-width: 100%;
        max-height: 80vh;
        object-fit: contain;
        border-radius: 8px;
    }
    .lightbox-caption {
        text-align: center;
        color: white;
        margin-top: 16px;
        font-size: 14px;
    }
    .lightbox-close {
        position: absolute;
        top: -40px;
        right: 0;
        background: none;
        border: none;
        color: white;
        font-size: 36px;
        cursor: pointer;
    }
"#;

/// An open viewer together with every listener it registered, the
/// document-level Escape listener included.
struct Lightbox {
    document: Document,
    root: Element,
    listeners: Vec<Listener>,
}

impl Lightbox {
    fn teardown(self) {
        self.root.remove();
        if let Some(body) = self.document.body() {
            let _ = body.style().remove_property("overflow");
        }
        dom::release_later(self.listeners);
    }
}

thread_local! {
    static OPEN: RefCell<SingleFlight<Lightbox>> = const { RefCell::new(SingleFlight::new()) };
}

pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

/// Caption text worth showing, `None` when absent or blank.
pub fn caption_text(raw: Option<String>) -> Option<String> {
    raw.map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

pub fn init(document: &Document) -> Result<(), JsValue> {
    let items = dom::query_all(document, ".gallery-item");
    debug!("Lightbox wired to {} gallery items", items.len());
    for item in items {
        let document = document.clone();
        let thumbnail = item.clone();
        dom::listen(&item, "click", move |_| {
            if let Err(err) = open(&document, &thumbnail) {
                warn!("Failed to open lightbox: {:?}", err);
            }
        })?;
    }
    Ok(())
}

/// Closes the open lightbox, if any. Every dismiss path ends up here.
pub fn close() {
    let open = OPEN.with(|slot| slot.borrow_mut().take());
    if let Some(lightbox) = open {
        lightbox.teardown();
    }
}

fn open(document: &Document, item: &Element) -> Result<(), JsValue> {
    let Some(thumbnail) = item
        .query_selector("img")?
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
    else {
        return Ok(());
    };
    let caption = caption_text(
        item.query_selector(".gallery-caption")
            .ok()
            .flatten()
            .and_then(|el| el.text_content()),
    );
    let Some(body) = document.body() else {
        return Ok(());
    };
    ensure_styles(document)?;

    let root = document.create_element("div")?;
    root.set_class_name("lightbox");
    let overlay = document.create_element("div")?;
    overlay.set_class_name("lightbox-overlay");
    let content = document.create_element("div")?;
    content.set_class_name("lightbox-content");

    let image = document.create_element("img")?.dyn_into::<HtmlImageElement>()?;
    image.set_src(&thumbnail.src());
    image.set_alt(&thumbnail.alt());
    content.append_child(&image)?;
    if let Some(caption) = caption {
        let text = document.create_element("p")?;
        text.set_class_name("lightbox-caption");
        text.set_text_content(Some(&caption));
        content.append_child(&text)?;
    }
    let close_button = document.create_element("button")?;
    close_button.set_class_name("lightbox-close");
    close_button.set_text_content(Some("\u{00d7}"));
    content.append_child(&close_button)?;

    root.append_child(&overlay)?;
    root.append_child(&content)?;

    let listeners = vec![
        Listener::new(document, "keydown", |event| {
            let pressed = event
                .dyn_ref::<KeyboardEvent>()
                .map(|key| is_dismiss_key(&key.key()))
                .unwrap_or(false);
            if pressed {
                close();
            }
        })?,
        Listener::new(&close_button, "click", |_| close())?,
        Listener::new(&overlay, "click", |_| close())?,
    ];

    let previous = OPEN.with(|slot| {
        slot.borrow_mut().replace(Lightbox {
            document: document.clone(),
            root: root.clone(),
            listeners,
        })
    });
    if let Some(previous) = previous {
        previous.teardown();
    }

    body.append_child(&root)?;
    body.style().set_property("overflow", "hidden")?;
    Ok(())
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
