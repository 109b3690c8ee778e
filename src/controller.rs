//! Theme toggle controller.
//!
//! Owns the two-state Light/Dark machine for one page. The initial state is
//! derived once at load; afterwards the only transition is [`toggle`], driven
//! by clicks on the toggle control. The visual change is applied before the
//! new value is handed to the store.
//!
//! [`toggle`]: ThemeToggleController::toggle

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::identity::ViewerIdentity;
use crate::store::ThemeStore;
use crate::surface::ThemeSurface;
use crate::theme::ThemeMode;

pub struct ThemeToggleController<S: ThemeSurface> {
    surface: S,
    identity: ViewerIdentity,
    store: Box<dyn ThemeStore>,
}

impl<S: ThemeSurface> ThemeToggleController<S> {
    pub fn new(surface: S, identity: ViewerIdentity, store: Box<dyn ThemeStore>) -> Self {
        Self {
            surface,
            identity,
            store,
        }
    }

    /// Apply load-time state.
    ///
    /// Anonymous viewers get their locally saved preference. For signed-in
    /// viewers the server already rendered the class, so only the icon needs
    /// syncing.
    pub fn initialize(&self, saved: ThemeMode) {
        if !self.identity.is_authenticated() && saved.is_dark() {
            self.surface.add_theme_class();
            self.surface.set_icon(ThemeMode::Dark.glyph());
        }
        if self.surface.has_theme_class() {
            self.surface.set_icon(ThemeMode::Dark.glyph());
        }
    }

    /// Flip the theme, update the icon, then persist. Returns the new mode.
    pub fn toggle(&self) -> ThemeMode {
        let mode = ThemeMode::from_dark(self.surface.toggle_theme_class());
        self.surface.set_icon(mode.glyph());
        self.store.persist(mode);
        mode
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from_dark(self.surface.has_theme_class())
    }

    #[must_use]
    pub fn identity(&self) -> ViewerIdentity {
        self.identity
    }

    #[must_use]
    pub fn store(&self) -> &dyn ThemeStore {
        self.store.as_ref()
    }
}
