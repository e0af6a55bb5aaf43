//! Scroll-driven reveal: cards fade in the first time they become visible,
//! and grid siblings get cascading animation delays.

use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::{FADE_IN_SELECTORS, FADE_IN_THRESHOLD, STAGGER_GROUPS, STAGGER_STEP_MS};
use crate::dom;

pub const FADE_IN_CLASS: &str = "fade-in";

pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    format!("{}ms", index as u64 * u64::from(step_ms))
}

/// Builds an observer that calls `on_enter` the first time an observed
/// element intersects, then stops watching that element.
pub fn one_shot_observer(
    options: &IntersectionObserverInit,
    mut on_enter: impl FnMut(&Element) + 'static,
) -> Result<IntersectionObserver, JsValue> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let target = entry.target();
                observer.unobserve(&target);
                on_enter(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)?;
    // Observers live as long as the page.
    callback.forget();
    Ok(observer)
}

/// Hides content cards and fades each one in once. Cards are only hidden
/// after the observer exists, so they never get stuck invisible.
pub fn init_fade_in(document: &Document) -> Result<(), JsValue> {
    if !dom::supports_intersection_observer() {
        debug!("IntersectionObserver unavailable, cards stay visible");
        return Ok(());
    }

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(FADE_IN_THRESHOLD));
    let observer = one_shot_observer(&options, |target| {
        let _ = target.class_list().add_1(FADE_IN_CLASS);
    })?;

    let targets = dom::query_all(document, FADE_IN_SELECTORS);
    for target in &targets {
        observer.observe(target);
        if let Some(el) = target.dyn_ref::<HtmlElement>() {
            el.style().set_property("opacity", "0")?;
        }
    }
    debug!("Fade-in armed for {} elements", targets.len());
    Ok(())
}

pub fn init_stagger(document: &Document) -> Result<(), JsValue> {
    for (container_selector, item_selector) in STAGGER_GROUPS {
        for container in dom::query_all(document, container_selector) {
            let items = dom::query_within(&container, item_selector);
            for (index, item) in items.iter().enumerate() {
                if let Some(el) = item.dyn_ref::<HtmlElement>() {
                    el.style()
                        .set_property("animation-delay", &stagger_delay(index, STAGGER_STEP_MS))?;
                }
            }
        }
    }
    Ok(())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    /// A small box pinned to the top-left corner, so it starts in view.
    fn pinned(document: &Document, class: &str) -> HtmlElement {
        let el = document
            .create_element("div")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        el.set_class_name(class);
        el.set_attribute("style", "position: fixed; top: 0; left: 0; width: 20px; height: 20px;")
            .unwrap();
        document.body().unwrap().append_child(&el).unwrap();
        el
    }

    #[wasm_bindgen_test]
    async fn element_is_reported_once_across_reentries() {
        let document = dom::document().unwrap();
        let card = pinned(&document, "watched-card");
        let hits = Rc::new(Cell::new(0));

        let counter = hits.clone();
        let observer = one_shot_observer(&IntersectionObserverInit::new(), move |_| {
            counter.set(counter.get() + 1)
        })
        .unwrap();
        observer.observe(&card);
        TimeoutFuture::new(200).await;
        assert_eq!(hits.get(), 1);

        // scroll it out of view and back in
        card.style().set_property("top", "-1000px").unwrap();
        TimeoutFuture::new(200).await;
        card.style().set_property("top", "0").unwrap();
        TimeoutFuture::new(200).await;
        assert_eq!(hits.get(), 1);

        observer.disconnect();
        card.remove();
    }

    #[wasm_bindgen_test]
    async fn visible_card_is_hidden_then_faded_in() {
        let document = dom::document().unwrap();
        let card = pinned(&document, "stat-card");

        init_fade_in(&document).unwrap();
        assert_eq!(card.style().get_property_value("opacity").unwrap(), "0");

        TimeoutFuture::new(200).await;
        assert!(card.class_list().contains(FADE_IN_CLASS));
        card.remove();
    }

    #[wasm_bindgen_test]
    fn grid_items_cascade() {
        let document = dom::document().unwrap();
        let grid = document.create_element("div").unwrap();
        grid.set_class_name("team-grid");
        grid.set_inner_html(
            r#"<div class="team-card"></div><div class="team-card"></div><div class="team-card"></div>"#,
        );
        document.body().unwrap().append_child(&grid).unwrap();

        init_stagger(&document).unwrap();

        let delays: Vec<String> = dom::query_within(&grid, ".team-card")
            .iter()
            .map(|card| {
                card.dyn_ref::<HtmlElement>()
                    .unwrap()
                    .style()
                    .get_property_value("animation-delay")
                    .unwrap()
            })
            .collect();
        assert_eq!(delays, ["0ms", "100ms", "200ms"]);
        grid.remove();
    }
}
