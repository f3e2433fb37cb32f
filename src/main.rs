mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use utils::{dom, log};

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    console_error_panic_hook::set_once();

    let Ok(document) = dom::document() else {
        log::warn("no document; site behaviors not started");
        return;
    };

    // The module may load before the markup is parsed
    if document.ready_state() == "loading" {
        let started = dom::listen(&document, "DOMContentLoaded", |_| app::start());
        if let Err(e) = started {
            log::warn(&format!("failed to wait for DOMContentLoaded: {}", e));
        }
    } else {
        app::start();
    }
}
