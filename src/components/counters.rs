//! Statistic counters that count up from zero on page load.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::app::AppContext;
use crate::config::{attrs, selectors};
use crate::core::{CounterSequence, DomError, TaskKey, counter};
use crate::utils::dom;

pub fn init(ctx: &AppContext) -> Result<usize, DomError> {
    let mut started = 0;
    for (index, element) in dom::query_all(selectors::COUNTERS)?.into_iter().enumerate() {
        if animate(ctx, index, element) {
            started += 1;
        }
    }
    Ok(started)
}

/// Count `element` up to the number in its text.
///
/// Restarting a counter cancels the run already in progress. Returns `false`
/// (and leaves the element alone) when the text holds no positive number.
pub fn animate(ctx: &AppContext, index: usize, element: Element) -> bool {
    let text = original_text(&element);
    let Some(target) = counter::parse_target(&text).filter(|target| *target > 0) else {
        return false;
    };

    let ticket = ctx.scheduler.begin(TaskKey::Counter(index));
    let scheduler = ctx.scheduler.clone();
    let tick_ms = ctx.config.counter_tick_ms;
    let steps = ctx.config.counter_steps;

    spawn_local(async move {
        for value in CounterSequence::with_steps(target, steps) {
            if !scheduler.is_current(&ticket) {
                return;
            }
            element.set_text_content(Some(&counter::render(&text, value)));
            if value == target {
                break;
            }
            TimeoutFuture::new(tick_ms).await;
        }
        scheduler.finish(ticket);
    });
    true
}

/// Caption text as authored, before any animation rewrote it.
fn original_text(element: &Element) -> String {
    if let Some(text) = element.get_attribute(attrs::ORIGINAL_TEXT) {
        return text;
    }
    let text = element.text_content().unwrap_or_default();
    let _ = element.set_attribute(attrs::ORIGINAL_TEXT, &text);
    text
}
