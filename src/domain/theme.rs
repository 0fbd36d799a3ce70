//! Site theme marker, persisted as a cookie.

use serde::{Deserialize, Serialize};

/// Name of the cookie carrying the theme marker.
pub const THEME_COOKIE: &str = "theme";

/// Visual theme selected by the visitor.
///
/// The marker alone decides the rendered theme; no system preference is
/// consulted once a cookie is present, and absent any marker the site renders
/// light.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parses the cookie value; anything other than `dark` renders light.
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_marker_renders_dark() {
        assert_eq!(Theme::from_marker(Some("dark")), Theme::Dark);
    }

    #[test]
    fn missing_or_unknown_marker_renders_light() {
        assert_eq!(Theme::from_marker(None), Theme::Light);
        assert_eq!(Theme::from_marker(Some("light")), Theme::Light);
        assert_eq!(Theme::from_marker(Some("solarized")), Theme::Light);
    }

    #[test]
    fn toggle_alternates() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
