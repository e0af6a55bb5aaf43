use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement, IntersectionObserverInit};

use crate::config::{CRITICAL_IMAGES, LAZY_ROOT_MARGIN};
use crate::dom;
use crate::reveal::one_shot_observer;

/// Source to load once the image is near the viewport.
pub fn resolve_source(staged: Option<String>, current: String) -> String {
    staged.filter(|src| !src.is_empty()).unwrap_or(current)
}

pub fn init_lazy(document: &Document) -> Result<(), JsValue> {
    if !dom::supports_intersection_observer() {
        debug!("IntersectionObserver unavailable, images load eagerly");
        return Ok(());
    }

    let options = IntersectionObserverInit::new();
    options.set_root_margin(LAZY_ROOT_MARGIN);
    let observer = one_shot_observer(&options, |target| {
        let Some(image) = target.dyn_ref::<HtmlImageElement>() else {
            return;
        };
        image.set_src(&resolve_source(image.get_attribute("data-src"), image.src()));
        let _ = image.class_list().add_1("loaded");
    })?;

    let images = dom::query_all(document, "img[loading=\"lazy\"]");
    for image in &images {
        observer.observe(image);
    }
    debug!("Lazy loading {} images", images.len());
    Ok(())
}

/// Warms the browser cache for images needed right after first paint.
pub fn preload_critical() {
    for src in CRITICAL_IMAGES {
        match HtmlImageElement::new() {
            Ok(image) => image.set_src(src),
            Err(err) => log::warn!("Could not preload {}: {:?}", src, err),
        }
    }
}
