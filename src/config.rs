//! Page contract constants for the theme toggle.
//!
//! DESIGN
//! ======
//! Every id, class, selector, key and endpoint the controller touches lives
//! here so a host page with different markup can override them with a JSON
//! object. Fields missing from the override keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::theme::IconGlyph;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid theme config: {0}")]
    Json(#[from] serde_json::Error),
}

/// DOM, storage and network names used by the toggle.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub toggle_id: String,
    pub icon_id: String,
    pub theme_class: String,
    pub storage_key: String,
    pub endpoint: String,
    pub navigation_selector: String,
    pub logout_link_selector: String,
    pub sun_icon_class: String,
    pub moon_icon_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle_id: "darkModeToggle".to_owned(),
            icon_id: "darkModeIcon".to_owned(),
            theme_class: "dark-mode".to_owned(),
            storage_key: "darkMode".to_owned(),
            endpoint: "/toggle_dark_mode".to_owned(),
            navigation_selector: ".navbar".to_owned(),
            logout_link_selector: ".nav-link[href*=\"logout\"]".to_owned(),
            sun_icon_class: "fa-solid fa-sun".to_owned(),
            moon_icon_class: "fa-solid fa-moon".to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse a (possibly partial) JSON override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the input is not a JSON object with
    /// string fields.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    #[must_use]
    pub fn icon_class(&self, glyph: IconGlyph) -> &str {
        match glyph {
            IconGlyph::Sun => &self.sun_icon_class,
            IconGlyph::Moon => &self.moon_icon_class,
        }
    }
}
