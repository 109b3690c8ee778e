//! Toggle button with its icon, rendered in the requested initial state.

#[cfg(test)]
#[path = "dark_mode_toggle_test.rs"]
mod dark_mode_toggle_test;

use leptos::prelude::*;

use crate::config::ThemeConfig;
use crate::theme::ThemeMode;

fn icon_class(config: &ThemeConfig, dark: bool) -> String {
    config.icon_class(ThemeMode::from_dark(dark).glyph()).to_owned()
}

fn toggle_title(dark: bool) -> &'static str {
    if dark {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    }
}

/// Dark mode toggle button.
///
/// `dark` is the state the server already applied to `<body>`. Reads an
/// optional `ThemeConfig` from context.
#[component]
pub fn DarkModeToggle(#[prop(optional)] dark: bool) -> impl IntoView {
    let config = use_context::<ThemeConfig>().unwrap_or_default();
    let icon = icon_class(&config, dark);

    view! {
        <button
            id=config.toggle_id
            type="button"
            class="btn dark-mode-toggle"
            title=toggle_title(dark)
            aria-label=toggle_title(dark)
        >
            <i id=config.icon_id class=icon></i>
        </button>
    }
}
