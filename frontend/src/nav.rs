use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config::{ANCHOR_MARGIN_PX, SCROLLED_THRESHOLD_PX};
use crate::dom;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLLED_THRESHOLD_PX
}

/// Scroll position that lands `target_top` just below a navbar of `navbar_height`.
pub fn anchor_scroll_top(target_top: f64, navbar_height: f64) -> f64 {
    target_top - navbar_height - ANCHOR_MARGIN_PX
}

/// Target id of a same-page link, `None` for a bare `#` or anything off-page.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn init(document: &Document) -> Result<(), JsValue> {
    let navbar: Option<HtmlElement> = dom::by_id(document, "navbar");
    init_scroll_state(navbar.clone())?;
    init_mobile_menu(document)?;
    init_smooth_scroll(document, navbar)
}

fn init_scroll_state(navbar: Option<HtmlElement>) -> Result<(), JsValue> {
    let (Some(window), Some(navbar)) = (web_sys::window(), navbar) else {
        return Ok(());
    };
    let reader = window.clone();
    dom::listen_passive(&window, "scroll", move |_| {
        let offset = reader.scroll_y().unwrap_or(0.0);
        let _ = dom::set_class(&navbar, "scrolled", is_scrolled(offset));
    })
}

/// Open/closed flags on the toggle button, the menu panel and the page body.
/// Each flag flips on its own, so a missing element never blocks the others.
#[derive(Clone)]
struct MobileMenu {
    toggle: Option<Element>,
    panel: Option<Element>,
    body: Option<Element>,
}

impl MobileMenu {
    fn flags(&self) -> impl Iterator<Item = (&Element, &'static str)> + '_ {
        [
            (&self.toggle, "active"),
            (&self.panel, "active"),
            (&self.body, "menu-open"),
        ]
        .into_iter()
        .filter_map(|(element, class)| element.as_ref().map(|element| (element, class)))
    }

    fn toggle(&self) {
        for (element, class) in self.flags() {
            let _ = element.class_list().toggle(class);
        }
    }

    fn close(&self) {
        for (element, class) in self.flags() {
            let _ = dom::set_class(element, class, false);
        }
    }
}

fn init_mobile_menu(document: &Document) -> Result<(), JsValue> {
    let menu = MobileMenu {
        toggle: document.get_element_by_id("navToggle"),
        panel: document.get_element_by_id("navMenu"),
        body: document.body().map(Element::from),
    };

    if let Some(toggle) = menu.toggle.clone() {
        let menu = menu.clone();
        dom::listen(&toggle, "click", move |_| {
            menu.toggle();
        })?;
    }

    let links = dom::query_all(document, ".nav-link");
    debug!("Mobile menu closes on {} nav links", links.len());
    for link in links {
        let menu = menu.clone();
        dom::listen(&link, "click", move |_| menu.close())?;
    }
    Ok(())
}

fn init_smooth_scroll(document: &Document, navbar: Option<HtmlElement>) -> Result<(), JsValue> {
    for anchor in dom::query_all(document, "a[href^=\"#\"]") {
        let document = document.clone();
        let navbar = navbar.clone();
        let source = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = source.get_attribute("href") else {
                return;
            };
            let Some(target) = fragment_id(&href)
                .and_then(|id| dom::by_id::<HtmlElement>(&document, id))
            else {
                return;
            };
            let navbar_height = navbar.as_ref().map(|n| n.offset_height()).unwrap_or(0);
            let options = ScrollToOptions::new();
            options.set_top(anchor_scroll_top(
                f64::from(target.offset_top()),
                f64::from(navbar_height),
            ));
            options.set_behavior(ScrollBehavior::Smooth);
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_scroll_to_options(&options);
            }
        })?;
    }
    Ok(())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn flag(document: &Document) -> Element {
        document.create_element("button").unwrap()
    }

    #[wasm_bindgen_test]
    fn toggle_flips_back_without_a_menu_panel() {
        let document = dom::document().unwrap();
        let menu = MobileMenu {
            toggle: Some(flag(&document)),
            panel: None,
            body: None,
        };
        let toggle = menu.toggle.clone().unwrap();

        menu.toggle();
        assert!(toggle.class_list().contains("active"));
        menu.toggle();
        assert!(!toggle.class_list().contains("active"));
    }

    #[wasm_bindgen_test]
    fn link_click_closes_every_flag() {
        let document = dom::document().unwrap();
        let menu = MobileMenu {
            toggle: Some(flag(&document)),
            panel: Some(flag(&document)),
            body: Some(flag(&document)),
        };

        menu.toggle();
        menu.close();
        menu.close();

        for (element, class) in menu.flags() {
            assert!(!element.class_list().contains(class), "{class}");
        }
    }
}
