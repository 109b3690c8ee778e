//! Visual surface the toggle mutates: the theme class and the icon.
//!
//! Requires a browser environment for [`DomSurface`]; host builds use the
//! trait with in-memory implementations.

use crate::theme::IconGlyph;

#[cfg(feature = "hydrate")]
use crate::config::ThemeConfig;

/// The two mutable pieces of page state the toggle owns.
pub trait ThemeSurface {
    fn has_theme_class(&self) -> bool;

    /// Flip the theme class and return whether it is now present.
    fn toggle_theme_class(&self) -> bool;

    fn add_theme_class(&self);

    /// Show `glyph` on the icon. Does nothing when the page has no icon.
    fn set_icon(&self, glyph: IconGlyph);
}

/// Body element plus optional icon element of the live document.
#[cfg(feature = "hydrate")]
pub struct DomSurface {
    body: web_sys::HtmlElement,
    icon: Option<web_sys::Element>,
    config: ThemeConfig,
}

#[cfg(feature = "hydrate")]
impl DomSurface {
    pub fn new(
        body: web_sys::HtmlElement,
        icon: Option<web_sys::Element>,
        config: &ThemeConfig,
    ) -> Self {
        Self {
            body,
            icon,
            config: config.clone(),
        }
    }
}

#[cfg(feature = "hydrate")]
impl ThemeSurface for DomSurface {
    fn has_theme_class(&self) -> bool {
        self.body.class_list().contains(&self.config.theme_class)
    }

    fn toggle_theme_class(&self) -> bool {
        match self.body.class_list().toggle(&self.config.theme_class) {
            Ok(present) => present,
            Err(e) => {
                log::error!("failed to toggle {} class: {e:?}", self.config.theme_class);
                self.has_theme_class()
            }
        }
    }

    fn add_theme_class(&self) {
        if let Err(e) = self.body.class_list().add_1(&self.config.theme_class) {
            log::error!("failed to add {} class: {e:?}", self.config.theme_class);
        }
    }

    fn set_icon(&self, glyph: IconGlyph) {
        let Some(icon) = &self.icon else {
            return;
        };
        icon.set_class_name(self.config.icon_class(glyph));
    }
}
