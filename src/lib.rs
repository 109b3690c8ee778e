//! # darkmode-toggle
//!
//! Dark/light theme toggle for server-rendered pages, compiled to WASM.
//!
//! The toggle flips a marker class on `<body>`, swaps the sun/moon icon, and
//! remembers the choice: anonymous viewers in `localStorage`, signed-in
//! viewers through a `POST` to the server. Browser access is confined to the
//! `hydrate` feature; everything else runs on the host and is unit tested
//! against in-memory page doubles.

pub mod components;
pub mod config;
pub mod controller;
pub mod identity;
pub mod page;
pub mod store;
pub mod surface;
pub mod theme;

#[cfg(test)]
mod testing;


#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "hydrate")]
fn init_logging() {
    console_error_panic_hook::set_once();
    // A second module instance on the page already owns the logger.
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Body attribute holding an optional JSON override of the page contract.
#[cfg(any(test, feature = "hydrate"))]
const CONFIG_ATTRIBUTE: &str = "data-theme-config";

/// Resolve the page contract from the raw `data-theme-config` value.
#[cfg(any(test, feature = "hydrate"))]
fn config_from_attribute(raw: Option<&str>) -> config::ThemeConfig {
    let Some(raw) = raw else {
        return config::ThemeConfig::default();
    };
    config::ThemeConfig::from_json(raw).unwrap_or_else(|e| {
        log::error!("ignoring {CONFIG_ATTRIBUTE}: {e}");
        config::ThemeConfig::default()
    })
}

/// `document.readyState` values past `"loading"` mean the DOM is parsed.
#[cfg(any(test, feature = "hydrate"))]
fn installs_immediately(ready_state: &str) -> bool {
    ready_state != "loading"
}

#[cfg(feature = "hydrate")]
fn page_config(document: &web_sys::Document) -> config::ThemeConfig {
    let raw = document
        .body()
        .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));
    config_from_attribute(raw.as_deref())
}

#[cfg(feature = "hydrate")]
fn install_now() {
    let Some(dom) = page::DomPage::current() else {
        return;
    };
    let config = page_config(dom.document());
    let transport = std::rc::Rc::new(store::remote::GlooTransport);
    if page::install(&dom, transport, &config).is_none() {
        log::debug!("no #{} on page; theme toggle inactive", config.toggle_id);
    }
}

/// WASM entry point. Installs the toggle once the document is parsed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    init_logging();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if installs_immediately(&document.ready_state()) {
        install_now();
        return;
    }

    let cb = Closure::once(install_now);
    if let Err(e) = document
        .add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())
    {
        log::error!("failed to wait for DOMContentLoaded: {e:?}");
        return;
    }
    cb.forget();
}
