//! Theme preference value and its icon affordance.
//!
//! The preference is a plain two-state value. Its stored form is the string
//! `"true"` (dark) or `"false"` (light).

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual theme currently shown on the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Icon glyph shown on the toggle control.
///
/// The glyph advertises the state the next click switches to, so a dark page
/// shows the sun.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconGlyph {
    Sun,
    Moon,
}

impl ThemeMode {
    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn glyph(self) -> IconGlyph {
        match self {
            Self::Dark => IconGlyph::Sun,
            Self::Light => IconGlyph::Moon,
        }
    }

    /// Parse a stored value. Only the exact string `"true"` means dark.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        Self::from_dark(value == Some("true"))
    }

    #[must_use]
    pub fn as_stored(self) -> &'static str {
        if self.is_dark() { "true" } else { "false" }
    }
}
