//! FAQ page: search with highlighting, no-results message, category links.

use web_sys::Element;

use crate::app::AppContext;
use crate::config::{attrs, classes, messages, selectors};
use crate::core::{DomError, FilterOutcome, Highlighter, filter_by_text};
use crate::models::DisplayItem;
use crate::utils::{dom, log};

pub fn init(_ctx: &AppContext) -> Result<usize, DomError> {
    let mut bound = 0;

    if let Some(search) = dom::element_by_id(selectors::FAQ_SEARCH_ID) {
        dom::listen(&search, "input", |ev| {
            if let Err(e) = search_faqs(&dom::event_value(&ev)) {
                log::warn(&format!("faq search: {}", e));
            }
        })?;
        bound += 1;
    }

    bound += bind_category_links()?;
    Ok(bound)
}

/// Filter FAQ entries by `term` and highlight it in the visible ones.
pub fn search_faqs(term: &str) -> Result<FilterOutcome, DomError> {
    let elements = dom::query_all(selectors::FAQ_ITEMS)?;
    let items: Vec<DisplayItem> = elements
        .iter()
        .map(|el| {
            DisplayItem::new(
                dom::query_in(el, selectors::FAQ_CAPTION)
                    .map(|c| original_text(&c))
                    .unwrap_or_default(),
                dom::query_in(el, selectors::FAQ_BODY)
                    .map(|b| original_text(&b))
                    .unwrap_or_default(),
            )
        })
        .collect();

    let outcome = filter_by_text(&items, term);
    let highlighter = Highlighter::new(term);
    let text_parts = format!("{}, {}", selectors::FAQ_CAPTION, selectors::FAQ_BODY);

    for (element, visible) in elements.iter().zip(&outcome.visible) {
        dom::set_visible(element, *visible);
        for part in dom::query_all_in(element, &text_parts) {
            match &highlighter {
                Some(highlighter) if *visible => highlight(&part, highlighter),
                _ => restore(&part),
            }
        }
    }

    show_no_results(!term.is_empty() && !outcome.any_visible())?;
    log::debug(&format!(
        "faq search {:?}: {}/{} shown",
        term,
        outcome.visible_count(),
        items.len()
    ));
    Ok(outcome)
}

/// Text of `element` before any highlighting.
fn original_text(element: &Element) -> String {
    element
        .get_attribute(attrs::ORIGINAL_TEXT)
        .or_else(|| element.text_content())
        .unwrap_or_default()
}

/// Re-render `element` from its cached original text with matches marked.
///
/// The first call caches both the text (matched against) and the markup
/// (restored later), so links and lists inside an answer survive a search.
pub fn highlight(element: &Element, highlighter: &Highlighter) {
    let original = original_text(element);
    if element.get_attribute(attrs::ORIGINAL_TEXT).is_none() {
        let _ = element.set_attribute(attrs::ORIGINAL_HTML, &element.inner_html());
        let _ = element.set_attribute(attrs::ORIGINAL_TEXT, &original);
    }
    element.set_inner_html(&highlighter.to_html(&original));
}

/// Put back the original markup and drop the cache.
pub fn restore(element: &Element) {
    if let Some(html) = element.get_attribute(attrs::ORIGINAL_HTML) {
        element.set_inner_html(&html);
    }
    let _ = element.remove_attribute(attrs::ORIGINAL_HTML);
    let _ = element.remove_attribute(attrs::ORIGINAL_TEXT);
}

fn show_no_results(show: bool) -> Result<(), DomError> {
    let existing = dom::element_by_id(selectors::FAQ_NO_RESULTS_ID);
    match (show, existing) {
        (true, None) => {
            let Some(container) = dom::element_by_id(selectors::FAQ_CONTAINER_ID) else {
                return Ok(());
            };
            let document = dom::document()?;
            let message = document.create_element("div")?;
            message.set_id(selectors::FAQ_NO_RESULTS_ID);
            message.set_class_name(classes::NO_RESULTS);
            let text = document.create_element("p")?;
            text.set_text_content(Some(messages::FAQ_NO_RESULTS));
            message.append_child(&text)?;
            container.append_child(&message)?;
        }
        (false, Some(message)) => message.remove(),
        _ => {}
    }
    Ok(())
}

/// Category links: exclusive `active` marker and smooth scroll to the section.
fn bind_category_links() -> Result<usize, DomError> {
    let links = dom::query_all(selectors::FAQ_CATEGORY_LINKS)?;
    for link in &links {
        let group = links.clone();
        let this = link.clone();
        dom::listen(link, "click", move |ev| {
            ev.prevent_default();
            for other in &group {
                dom::remove_class(other, classes::ACTIVE);
            }
            dom::add_class(&this, classes::ACTIVE);

            let href = this.get_attribute("href").unwrap_or_default();
            if let Some(selector) = crate::core::nav::anchor_target(&href)
                && let Ok(Some(section)) = dom::query(selector)
            {
                dom::smooth_scroll_to(&section);
            }
        })?;
    }
    Ok(links.len())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    use super::*;

    fn paragraph(text: &str) -> Element {
        let document = dom::document().unwrap();
        let el = document.create_element("p").unwrap();
        el.set_text_content(Some(text));
        el
    }

    #[wasm_bindgen_test]
    fn test_repeated_highlight_does_not_nest() {
        let el = paragraph("Pricing plans and pricing tiers");
        let highlighter = Highlighter::new("pricing").unwrap();

        highlight(&el, &highlighter);
        highlight(&el, &highlighter);

        assert_eq!(el.query_selector_all("mark").unwrap().length(), 2);
        assert_eq!(el.query_selector_all("mark mark").unwrap().length(), 0);
        assert_eq!(
            el.text_content().unwrap(),
            "Pricing plans and pricing tiers"
        );
    }

    #[wasm_bindgen_test]
    fn test_restore_returns_original_text() {
        let el = paragraph("Is <script> safe?");
        highlight(&el, &Highlighter::new("safe").unwrap());
        assert_eq!(el.query_selector_all("script").unwrap().length(), 0);

        restore(&el);
        assert_eq!(el.text_content().unwrap(), "Is <script> safe?");
        assert!(el.get_attribute(attrs::ORIGINAL_TEXT).is_none());
        assert_eq!(el.query_selector_all("mark").unwrap().length(), 0);
    }

    #[wasm_bindgen_test]
    fn test_highlight_switches_terms() {
        let el = paragraph("Refunds and returns");
        highlight(&el, &Highlighter::new("refund").unwrap());
        highlight(&el, &Highlighter::new("returns").unwrap());

        let marks = el.query_selector_all("mark").unwrap();
        assert_eq!(marks.length(), 1);
        assert_eq!(marks.item(0).unwrap().text_content().unwrap(), "returns");
    }

    #[wasm_bindgen_test]
    fn test_restore_keeps_inline_markup() {
        let el = dom::document().unwrap().create_element("div").unwrap();
        el.set_inner_html(r#"See <a href="/pricing">the docs</a> for details"#);

        highlight(&el, &Highlighter::new("docs").unwrap());
        assert_eq!(el.query_selector_all("mark").unwrap().length(), 1);

        restore(&el);
        let link = el.query_selector("a").unwrap().unwrap();
        assert_eq!(link.get_attribute("href").unwrap(), "/pricing");
        assert_eq!(el.text_content().unwrap(), "See the docs for details");
        assert!(el.get_attribute(attrs::ORIGINAL_HTML).is_none());
        assert_eq!(el.query_selector_all("mark").unwrap().length(), 0);
    }

    fn faq_fixture() -> Element {
        let document = dom::document().unwrap();
        let container = document.create_element("div").unwrap();
        container.set_id(selectors::FAQ_CONTAINER_ID);
        container.set_inner_html(
            r#"<div class="faq-item">
                 <button class="accordion-button">How do refunds work?</button>
                 <div class="accordion-body">Refunds take <b>5 days</b>.</div>
               </div>
               <div class="faq-item">
                 <button class="accordion-button">Do you ship abroad?</button>
                 <div class="accordion-body">We ship worldwide.</div>
               </div>"#,
        );
        document.body().unwrap().append_child(&container).unwrap();
        container
    }

    #[wasm_bindgen_test]
    fn test_search_without_matches_shows_no_results() {
        let container = faq_fixture();

        let outcome = search_faqs("zzz").unwrap();
        assert!(!outcome.any_visible());
        let message = dom::element_by_id(selectors::FAQ_NO_RESULTS_ID).unwrap();
        assert_eq!(message.parent_element().unwrap(), container);
        assert_eq!(message.text_content().unwrap(), messages::FAQ_NO_RESULTS);

        // a second miss does not stack messages
        search_faqs("zzzz").unwrap();
        assert_eq!(
            container
                .query_selector_all(&format!("#{}", selectors::FAQ_NO_RESULTS_ID))
                .unwrap()
                .length(),
            1
        );

        let outcome = search_faqs("").unwrap();
        assert_eq!(outcome.visible_count(), 2);
        assert!(dom::element_by_id(selectors::FAQ_NO_RESULTS_ID).is_none());

        container.remove();
    }

    #[wasm_bindgen_test]
    fn test_search_hides_misses_and_restores_markup() {
        let container = faq_fixture();
        let items = dom::query_all_in(&container, selectors::FAQ_ITEMS);

        let outcome = search_faqs("refund").unwrap();
        assert_eq!(outcome.visible, vec![true, false]);
        assert!(dom::element_by_id(selectors::FAQ_NO_RESULTS_ID).is_none());
        let display = |el: &Element| {
            el.dyn_ref::<web_sys::HtmlElement>()
                .unwrap()
                .style()
                .get_property_value("display")
                .unwrap()
        };
        assert_eq!(display(&items[0]), "block");
        assert_eq!(display(&items[1]), "none");
        assert_eq!(items[0].query_selector_all("mark").unwrap().length(), 2);

        search_faqs("").unwrap();
        assert_eq!(display(&items[1]), "block");
        assert_eq!(items[0].query_selector_all("mark").unwrap().length(), 0);
        assert_eq!(items[0].query_selector_all("b").unwrap().length(), 1);

        container.remove();
    }
}
