//! DOM and Web API utility functions.
//!
//! Provides consistent access to browser APIs. Lookups that may legitimately
//! find nothing return `Option`; failures of the browser itself return
//! [`DomError`].

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlButtonElement, HtmlElement, HtmlFormElement,
    HtmlInputElement, NodeList, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};

use crate::core::DomError;

/// Get the browser window object.
#[inline]
pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// Get the current document.
#[inline]
pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Find an element by id.
pub fn element_by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

/// Find the first element matching `selector` in the document.
pub fn query(selector: &str) -> Result<Option<Element>, DomError> {
    document()?
        .query_selector(selector)
        .map_err(|_| DomError::InvalidSelector(selector.to_string()))
}

/// Find every element matching `selector` in the document.
pub fn query_all(selector: &str) -> Result<Vec<Element>, DomError> {
    let list = document()?
        .query_selector_all(selector)
        .map_err(|_| DomError::InvalidSelector(selector.to_string()))?;
    Ok(elements(&list))
}

/// Find the first descendant of `parent` matching `selector`.
pub fn query_in(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok().flatten()
}

/// Find every descendant of `parent` matching `selector`.
pub fn query_all_in(parent: &Element, selector: &str) -> Vec<Element> {
    parent
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Text content of the first descendant matching `selector`, or "".
pub fn text_in(parent: &Element, selector: &str) -> String {
    query_in(parent, selector)
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

// =============================================================================
// Classes and Visibility
// =============================================================================

pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Toggle `class`; returns whether it is now present.
pub fn toggle_class(element: &Element, class: &str) -> bool {
    element.class_list().toggle(class).unwrap_or(false)
}

/// Show (`display: block`) or hide (`display: none`) an element.
pub fn set_visible(element: &Element, visible: bool) {
    set_style(element, "display", if visible { "block" } else { "none" });
}

/// Set an inline style property on an element.
pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

// =============================================================================
// Form Controls
// =============================================================================

/// Enable or disable a button. Other elements are left alone.
pub fn set_disabled(element: &Element, disabled: bool) {
    if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
    }
}

/// Reset a `<form>` to its initial values.
pub fn reset_form(element: &Element) {
    if let Some(form) = element.dyn_ref::<HtmlFormElement>() {
        form.reset();
    }
}

/// Current value of the input that fired `event`.
pub fn event_value(event: &Event) -> String {
    event
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

// =============================================================================
// Scrolling
// =============================================================================

/// Smoothly scroll `element` into view, aligned to the top.
pub fn smooth_scroll_to(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Current vertical scroll offset in pixels.
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().map_err(DomError::from)).unwrap_or(0.0)
}

// =============================================================================
// Events
// =============================================================================

/// Attach an event listener that lives for the rest of the page view.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;

    // Keep the closure alive for the lifetime of the page
    closure.forget();
    Ok(())
}
