//! Scroll reveal: `.animate-on-scroll` elements get the `animated` class when
//! they enter the viewport, staggered by their position among siblings.

use js_sys::Array;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::app::AppContext;
use crate::config::{classes, reveal, selectors};
use crate::core::{DomError, TaskKey, nav};
use crate::utils::dom;

pub fn init(ctx: &AppContext) -> Result<usize, DomError> {
    let elements = dom::query_all(selectors::ANIMATE_ON_SCROLL)?;
    if elements.is_empty() {
        return Ok(0);
    }

    let observed = elements.clone();
    let ctx = ctx.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);

                // Only elements bound at startup own a reveal key
                let Some(key) = reveal_key(&observed, &target) else {
                    continue;
                };
                let delay =
                    nav::stagger_delay_ms(sibling_index(&target), ctx.config.reveal_stagger_ms);
                reveal_after(&ctx, key, target, delay);
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(reveal::THRESHOLD));
    options.set_root_margin(reveal::ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    // Keep the callback alive for the lifetime of the page
    callback.forget();

    for element in &elements {
        observer.observe(element);
    }
    Ok(elements.len())
}

/// Task key for an observed element, by its position in `observed`.
fn reveal_key(observed: &[Element], target: &Element) -> Option<TaskKey> {
    observed
        .iter()
        .position(|el| el == target)
        .map(TaskKey::Reveal)
}

/// Position of `element` among the animated elements under its parent.
fn sibling_index(element: &Element) -> usize {
    element
        .parent_element()
        .map(|parent| dom::query_all_in(&parent, selectors::ANIMATE_ON_SCROLL))
        .and_then(|siblings| siblings.iter().position(|el| el == element))
        .unwrap_or(0)
}

fn reveal_after(ctx: &AppContext, key: TaskKey, element: Element, delay_ms: u32) {
    if delay_ms == 0 {
        dom::add_class(&element, classes::ANIMATED);
        return;
    }
    ctx.schedule(key, delay_ms, move || {
        dom::add_class(&element, classes::ANIMATED);
    });
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;

    #[wasm_bindgen_test]
    fn test_reveal_key_skips_unknown_elements() {
        let document = dom::document().unwrap();
        let make = || document.create_element("div").unwrap();
        let observed = vec![make(), make()];

        assert_eq!(reveal_key(&observed, &observed[1]), Some(TaskKey::Reveal(1)));
        assert_eq!(reveal_key(&observed, &make()), None);
        assert_eq!(reveal_key(&[], &observed[0]), None);
    }

    #[wasm_bindgen_test]
    fn test_sibling_index_counts_animated_siblings() {
        let document = dom::document().unwrap();
        let parent = document.create_element("section").unwrap();
        parent.set_inner_html(
            r#"<div class="animate-on-scroll"></div>
               <p>static</p>
               <div class="animate-on-scroll"></div>"#,
        );
        let animated = dom::query_all_in(&parent, selectors::ANIMATE_ON_SCROLL);

        assert_eq!(sibling_index(&animated[0]), 0);
        assert_eq!(sibling_index(&animated[1]), 1);
        assert_eq!(sibling_index(&document.create_element("div").unwrap()), 0);
    }
}
