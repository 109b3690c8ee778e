//! Leptos components for server-rendered theme markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Markup is rendered with the ids and classes from `ThemeConfig`; behavior is
//! attached afterwards by `page::install`.

pub mod dark_mode_toggle;
