//! Viewer identity as seen from rendered page markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page script has no session API. It guesses whether the viewer is
//! signed in from what the server rendered: a body that already carries the
//! theme class, or a navigation bar with a logout link. The guess only picks
//! the persistence channel; it grants nothing.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

/// Whether the current visitor is signed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerIdentity {
    Authenticated,
    Anonymous,
}

/// Observations about the rendered page used to infer identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageSignals {
    pub body_has_theme_class: bool,
    pub navigation_present: bool,
    pub logout_link_present: bool,
}

impl ViewerIdentity {
    /// Authenticated when the body already has the theme class, or a
    /// navigation element and a logout link are both present.
    #[must_use]
    pub fn infer(signals: &PageSignals) -> Self {
        let logged_in_nav = signals.navigation_present && signals.logout_link_present;
        if signals.body_has_theme_class || logged_in_nav {
            Self::Authenticated
        } else {
            Self::Anonymous
        }
    }

    #[must_use]
    pub fn is_authenticated(self) -> bool {
        self == Self::Authenticated
    }
}
