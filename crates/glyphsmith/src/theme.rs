//! Terminal themes for previews and listings.
//!
//! A [`Theme`] is a set of named `console` styles. The built-in themes
//! ([`Theme::light`], [`Theme::dark`]) define the names the preview
//! templates use; [`Theme::adaptive`] picks one based on the OS color mode.

use std::collections::HashMap;
use std::sync::Mutex;

use console::Style;
use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

/// A named collection of terminal styles.
///
/// # Example
///
/// ```rust
/// use glyphsmith::Theme;
/// use console::Style;
///
/// let theme = Theme::new().add("heading", Style::new().bold());
/// assert!(theme.has("heading"));
/// assert_eq!(theme.apply("heading", "Fonts", false), "Fonts");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, returning the updated theme for chaining.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Styles `text` with the named style.
    ///
    /// Unknown names and disabled color both return the text unchanged.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            _ => text.to_string(),
        }
    }

    /// Wraps `text` in `[name]...[/name]` markers instead of styling it.
    pub fn apply_debug(&self, name: &str, text: &str) -> String {
        format!("[{}]{}[/{}]", name, text, name)
    }

    /// Theme tuned for light terminal backgrounds.
    pub fn light() -> Self {
        Self::new()
            .add("title", Style::new().bold())
            .add("heading", Style::new().blue().bold())
            .add("name", Style::new().blue())
            .add("meta", Style::new().dim())
            .add("sample", Style::new())
            .add("hint", Style::new().italic().dim())
    }

    /// Theme tuned for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self::new()
            .add("title", Style::new().bold())
            .add("heading", Style::new().cyan().bold())
            .add("name", Style::new().cyan())
            .add("meta", Style::new().dim())
            .add("sample", Style::new().white())
            .add("hint", Style::new().italic().dim())
    }

    /// Picks [`Theme::light`] or [`Theme::dark`] for the current color mode.
    pub fn adaptive() -> Self {
        match detect_color_mode() {
            ColorMode::Light => Self::light(),
            ColorMode::Dark => Self::dark(),
        }
    }
}

type ThemeDetector = fn() -> ColorMode;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides how the preferred color mode is detected.
///
/// Useful in tests, or to force a mode regardless of OS settings.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

pub(crate) fn detect_color_mode() -> ColorMode {
    let detector = THEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    (*detector)()
}

fn os_theme_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_apply_without_color() {
        let theme = Theme::light();
        assert_eq!(theme.apply("name", "Bold", false), "Bold");
    }

    #[test]
    fn test_apply_with_color() {
        let theme = Theme::new().add("red", Style::new().red());
        let out = theme.apply("red", "hi", true);
        assert!(out.contains("\x1b[31m"));
        assert!(out.contains("hi"));
    }

    #[test]
    fn test_apply_unknown_name_is_plain() {
        let theme = Theme::new();
        assert_eq!(theme.apply("missing", "hi", true), "hi");
    }

    #[test]
    fn test_apply_debug() {
        let theme = Theme::new();
        assert_eq!(theme.apply_debug("name", "Bold"), "[name]Bold[/name]");
    }

    #[test]
    fn test_builtin_themes_share_names() {
        let light = Theme::light();
        let dark = Theme::dark();
        for name in ["title", "heading", "name", "meta", "sample", "hint"] {
            assert!(light.has(name), "light theme misses {}", name);
            assert!(dark.has(name), "dark theme misses {}", name);
        }
    }

    #[test]
    #[serial]
    fn test_adaptive_uses_detector() {
        set_theme_detector(|| ColorMode::Dark);
        let dark = Theme::adaptive();
        assert!(dark.apply("name", "x", true).contains("\x1b[36m"));

        set_theme_detector(|| ColorMode::Light);
        let light = Theme::adaptive();
        assert!(light.apply("name", "x", true).contains("\x1b[34m"));
    }
}
