//! Blog page: search box, category buttons and "load more".

use web_sys::Element;

use crate::app::AppContext;
use crate::config::{attrs, classes, messages, selectors};
use crate::core::{DomError, FilterOutcome, TaskKey, filter_by_tag, filter_by_text};
use crate::models::{ALL_TAGS, DisplayItem, NotificationKind};
use crate::utils::{dom, log};

pub fn init(ctx: &AppContext) -> Result<usize, DomError> {
    let mut bound = 0;

    if let Some(search) = dom::element_by_id(selectors::BLOG_SEARCH_ID) {
        dom::listen(&search, "input", |ev| {
            if let Err(e) = search_posts(&dom::event_value(&ev)) {
                log::warn(&format!("blog search: {}", e));
            }
        })?;
        bound += 1;
    }

    bound += bind_category_buttons()?;

    if let Some(button) = dom::element_by_id(selectors::LOAD_MORE_ID) {
        bind_load_more(ctx, button)?;
        bound += 1;
    }
    Ok(bound)
}

/// Read every post's title, excerpt and category from the document.
fn read_posts() -> Result<(Vec<Element>, Vec<DisplayItem>), DomError> {
    let elements = dom::query_all(selectors::BLOG_ITEMS)?;
    let items = elements
        .iter()
        .map(|el| {
            let item = DisplayItem::new(
                dom::text_in(el, selectors::BLOG_CAPTION),
                dom::text_in(el, selectors::BLOG_BODY),
            );
            match el.get_attribute(attrs::CATEGORY) {
                Some(tag) => item.with_tag(tag),
                None => item,
            }
        })
        .collect();
    Ok((elements, items))
}

fn apply(elements: &[Element], outcome: &FilterOutcome) {
    for (element, visible) in elements.iter().zip(&outcome.visible) {
        dom::set_visible(element, *visible);
        if *visible {
            dom::add_class(element, classes::ANIMATED);
        }
    }
}

/// Show posts whose title or excerpt contains `term`.
pub fn search_posts(term: &str) -> Result<FilterOutcome, DomError> {
    let (elements, items) = read_posts()?;
    let outcome = filter_by_text(&items, term);
    apply(&elements, &outcome);
    log::debug(&format!(
        "blog search {:?}: {}/{} shown",
        term,
        outcome.visible_count(),
        items.len()
    ));
    Ok(outcome)
}

/// Show posts in `category` (or all of them for `"all"`).
pub fn filter_category(category: &str) -> Result<FilterOutcome, DomError> {
    let (elements, items) = read_posts()?;
    let outcome = filter_by_tag(&items, category);
    apply(&elements, &outcome);
    log::debug(&format!(
        "blog category {:?}: {}/{} shown",
        category,
        outcome.visible_count(),
        items.len()
    ));
    Ok(outcome)
}

fn bind_category_buttons() -> Result<usize, DomError> {
    let buttons = dom::query_all(selectors::FILTER_BUTTONS)?;
    for button in &buttons {
        let group = buttons.clone();
        let this = button.clone();
        dom::listen(button, "click", move |_| {
            for other in &group {
                dom::remove_class(other, classes::ACTIVE);
            }
            dom::add_class(&this, classes::ACTIVE);

            let category = this
                .get_attribute(attrs::CATEGORY)
                .unwrap_or_else(|| ALL_TAGS.to_string());
            if let Err(e) = filter_category(&category) {
                log::warn(&format!("blog filter: {}", e));
            }
        })?;
    }
    Ok(buttons.len())
}

/// Simulate loading further posts, then retire the button.
fn bind_load_more(ctx: &AppContext, button: Element) -> Result<(), DomError> {
    let ctx = ctx.clone();
    let target = button.clone();

    dom::listen(&target, "click", move |_| {
        if ctx.scheduler.is_pending(TaskKey::LoadMore) {
            return;
        }
        button.set_text_content(Some(messages::LOADING));
        dom::set_disabled(&button, true);

        let button = button.clone();
        let done_ctx = ctx.clone();
        ctx.schedule(TaskKey::LoadMore, ctx.config.load_more_delay_ms, move || {
            done_ctx.notify(NotificationKind::Info, messages::ALL_LOADED);
            dom::set_visible(&button, false);
        });
    })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use gloo_timers::future::TimeoutFuture;
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    use super::*;
    use crate::config::SiteConfig;

    fn fixture() -> Element {
        let document = dom::document().unwrap();
        let wrapper = document.create_element("div").unwrap();
        wrapper.set_inner_html(
            r#"<div class="blog-item" data-category="tech">
                 <h4>Edge vision</h4><p>Models on cameras</p>
               </div>
               <div class="blog-item" data-category="food">
                 <h4>Office kitchen</h4><p>Recipes for the team</p>
               </div>
               <div class="blog-item">
                 <h4>Company news</h4><p>New vision statement</p>
               </div>"#,
        );
        document.body().unwrap().append_child(&wrapper).unwrap();
        wrapper
    }

    fn displays(wrapper: &Element) -> Vec<String> {
        dom::query_all_in(wrapper, selectors::BLOG_ITEMS)
            .iter()
            .map(|el| {
                el.dyn_ref::<HtmlElement>()
                    .unwrap()
                    .style()
                    .get_property_value("display")
                    .unwrap()
            })
            .collect()
    }

    #[wasm_bindgen_test]
    fn test_search_toggles_display() {
        let wrapper = fixture();

        let outcome = search_posts("VISION").unwrap();
        assert_eq!(outcome.visible, vec![true, false, true]);
        assert_eq!(displays(&wrapper), vec!["block", "none", "block"]);
        let items = dom::query_all_in(&wrapper, selectors::BLOG_ITEMS);
        assert!(dom::has_class(&items[0], classes::ANIMATED));
        assert!(!dom::has_class(&items[1], classes::ANIMATED));

        search_posts("").unwrap();
        assert_eq!(displays(&wrapper), vec!["block", "block", "block"]);

        wrapper.remove();
    }

    #[wasm_bindgen_test]
    fn test_category_filter_replaces_search() {
        let wrapper = fixture();

        search_posts("kitchen").unwrap();
        filter_category("tech").unwrap();
        assert_eq!(displays(&wrapper), vec!["block", "none", "none"]);

        filter_category(ALL_TAGS).unwrap();
        assert_eq!(displays(&wrapper), vec!["block", "block", "block"]);

        wrapper.remove();
    }

    #[wasm_bindgen_test]
    async fn test_load_more_retires_button() {
        let document = dom::document().unwrap();
        let button = document.create_element("button").unwrap();
        button.set_text_content(Some("Load more"));
        document.body().unwrap().append_child(&button).unwrap();

        let ctx = AppContext::new(SiteConfig {
            load_more_delay_ms: 20,
            ..SiteConfig::default()
        });
        bind_load_more(&ctx, button.clone()).unwrap();

        button.dyn_ref::<HtmlElement>().unwrap().click();
        assert_eq!(button.text_content().unwrap(), messages::LOADING);
        assert!(ctx.scheduler.is_pending(TaskKey::LoadMore));

        TimeoutFuture::new(60).await;
        let style = button.dyn_ref::<HtmlElement>().unwrap().style();
        assert_eq!(style.get_property_value("display").unwrap(), "none");
        let shown = ctx.notifications.with(|queue| queue.to_vec());
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].kind, NotificationKind::Info);
        assert_eq!(shown[0].message, messages::ALL_LOADED);

        button.remove();
    }
}
