//! Navigation chrome: smooth anchor scrolling, navbar scroll styling and the
//! mobile menu toggle.

use crate::app::AppContext;
use crate::config::{classes, selectors};
use crate::core::{DomError, NavbarStyle, nav};
use crate::utils::{dom, log};

pub fn init(ctx: &AppContext) -> Result<usize, DomError> {
    let mut bound = bind_anchor_links()?;
    bound += bind_navbar_scroll(ctx.config.navbar_scroll_threshold)?;
    bound += bind_mobile_menu()?;
    Ok(bound)
}

/// In-page links scroll smoothly instead of jumping.
fn bind_anchor_links() -> Result<usize, DomError> {
    let mut bound = 0;
    for anchor in dom::query_all(selectors::ANCHOR_LINKS)? {
        let href = anchor.get_attribute("href").unwrap_or_default();
        let Some(target) = nav::anchor_target(&href).map(str::to_string) else {
            continue;
        };

        dom::listen(&anchor, "click", move |ev| {
            ev.prevent_default();
            match dom::query(&target) {
                Ok(Some(section)) => dom::smooth_scroll_to(&section),
                Ok(None) => {}
                Err(e) => log::warn(&e.to_string()),
            }
        })?;
        bound += 1;
    }
    Ok(bound)
}

/// Restyle the navbar once the page scrolls past `threshold`.
fn bind_navbar_scroll(threshold: f64) -> Result<usize, DomError> {
    let Some(navbar) = dom::query(selectors::NAVBAR)? else {
        return Ok(0);
    };

    let apply = move || {
        let style = NavbarStyle::for_scroll(dom::scroll_y(), threshold);
        dom::set_style(&navbar, "background", style.background());
        dom::set_style(&navbar, "box-shadow", style.box_shadow());
        if style.is_scrolled() {
            dom::add_class(&navbar, classes::SCROLLED);
        } else {
            dom::remove_class(&navbar, classes::SCROLLED);
        }
    };

    apply();
    let window = dom::window()?;
    dom::listen(&window, "scroll", move |_| apply())?;
    Ok(1)
}

/// Toggle the collapsed menu, and close it when a link is chosen.
fn bind_mobile_menu() -> Result<usize, DomError> {
    let (Some(toggler), Some(collapse)) = (
        dom::query(selectors::NAVBAR_TOGGLER)?,
        dom::query(selectors::NAVBAR_COLLAPSE)?,
    ) else {
        return Ok(0);
    };

    let menu = collapse.clone();
    dom::listen(&toggler, "click", move |_| {
        dom::toggle_class(&menu, classes::SHOW);
    })?;

    let links = dom::query_all(selectors::NAV_LINKS)?;
    for link in &links {
        let menu = collapse.clone();
        dom::listen(link, "click", move |_| {
            if dom::has_class(&menu, classes::SHOW) {
                dom::remove_class(&menu, classes::SHOW);
            }
        })?;
    }
    Ok(1 + links.len())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, Event, HtmlElement};

    use super::*;
    use crate::config::navbar;

    fn fixture(html: &str) -> Element {
        let document = dom::document().unwrap();
        let wrapper = document.create_element("div").unwrap();
        wrapper.set_inner_html(html);
        document.body().unwrap().append_child(&wrapper).unwrap();
        wrapper
    }

    fn click(element: &Element) {
        element.dyn_ref::<HtmlElement>().unwrap().click();
    }

    #[wasm_bindgen_test]
    fn test_navbar_follows_scroll_threshold() {
        let wrapper = fixture(r#"<nav class="navbar"></nav>"#);
        let navbar_el = dom::query(selectors::NAVBAR).unwrap().unwrap();

        // any offset is past a negative threshold
        assert_eq!(bind_navbar_scroll(-1.0).unwrap(), 1);
        assert!(dom::has_class(&navbar_el, classes::SCROLLED));
        let style = navbar_el.dyn_ref::<HtmlElement>().unwrap().style();
        assert_eq!(
            style.get_property_value("background-color").unwrap(),
            navbar::SCROLLED_BACKGROUND
        );

        // the scroll listener re-applies the style
        dom::window()
            .unwrap()
            .dispatch_event(&Event::new("scroll").unwrap())
            .unwrap();
        assert!(dom::has_class(&navbar_el, classes::SCROLLED));

        wrapper.remove();
    }

    #[wasm_bindgen_test]
    fn test_mobile_menu_toggles_and_closes() {
        let wrapper = fixture(
            r##"<button class="navbar-toggler"></button>
                <div class="navbar-collapse">
                  <a class="nav-link" href="#about">About</a>
                </div>"##,
        );
        let toggler = dom::query(selectors::NAVBAR_TOGGLER).unwrap().unwrap();
        let collapse = dom::query(selectors::NAVBAR_COLLAPSE).unwrap().unwrap();
        let link = dom::query(selectors::NAV_LINKS).unwrap().unwrap();

        assert_eq!(bind_mobile_menu().unwrap(), 2);
        click(&toggler);
        assert!(dom::has_class(&collapse, classes::SHOW));
        click(&link);
        assert!(!dom::has_class(&collapse, classes::SHOW));

        wrapper.remove();
    }
}
