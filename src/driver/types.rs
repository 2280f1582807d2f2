//! Shared driver-facing types
//!
//! Geometry, color, and resolution options exchanged between the control
//! layer and the automation driver.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Element bounding box
///
/// `Rect::EMPTY` (all fields zero) is the designated sentinel for a missing
/// or non-visible element on the read path.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// The empty-rectangle sentinel
    pub const EMPTY: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Create a new rectangle
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether this is the empty sentinel
    pub fn is_empty(&self) -> bool {
        *self == Rect::EMPTY
    }
}

/// RGB color parsed from a computed style value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new color
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a CSS `rgb(r, g, b)` or `rgba(r, g, b, a)` string.
    ///
    /// The alpha channel of `rgba()` is ignored. Returns `None` for any
    /// other syntax.
    pub fn parse_css(value: &str) -> Option<Rgb> {
        let value = value.trim();

        let inner = value
            .strip_prefix("rgba(")
            .or_else(|| value.strip_prefix("rgb("))?
            .strip_suffix(')')?;

        let mut channels = inner.split(',').map(str::trim);
        let r = channels.next()?.parse::<u8>().ok()?;
        let g = channels.next()?.parse::<u8>().ok()?;
        let b = channels.next()?.parse::<u8>().ok()?;

        // rgb() must have exactly three channels, rgba() a fourth alpha
        match channels.next() {
            None if value.starts_with("rgb(") => Some(Rgb::new(r, g, b)),
            Some(alpha) if value.starts_with("rgba(") => {
                alpha.parse::<f64>().ok()?;
                if channels.next().is_some() {
                    return None;
                }
                Some(Rgb::new(r, g, b))
            }
            _ => None,
        }
    }
}

/// Wait state an element must reach before resolution succeeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaitState {
    /// Element exists in the document
    #[default]
    Attached,
    /// Element exists and is visible
    Visible,
}

/// Options for selector resolution
#[derive(Debug, Clone, Copy)]
pub struct ResolveOptions {
    /// Required wait state
    pub state: WaitState,
    /// Resolution bound
    pub timeout: Duration,
    /// Polling interval while waiting
    pub poll: Duration,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            state: WaitState::Attached,
            timeout: Duration::from_millis(30000),
            poll: Duration::from_millis(50),
        }
    }
}

/// Keys the control layer can press on a focused element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Tab,
}

impl Key {
    /// DOM key value for this key
    pub fn as_str(&self) -> &'static str {
        match self {
            Key::Enter => "Enter",
            Key::Tab => "Tab",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rect_sentinel() {
        assert!(Rect::EMPTY.is_empty());
        assert!(Rect::default().is_empty());
        assert!(!Rect::new(1.0, 2.0, 30.0, 40.0).is_empty());
    }

    #[test]
    fn test_parse_rgb() {
        assert_eq!(Rgb::parse_css("rgb(255, 0, 0)"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(Rgb::parse_css("rgb(12,34,56)"), Some(Rgb::new(12, 34, 56)));
        assert_eq!(Rgb::parse_css("  rgb(0, 0, 0)  "), Some(Rgb::new(0, 0, 0)));
    }

    #[test]
    fn test_parse_rgba_ignores_alpha() {
        assert_eq!(
            Rgb::parse_css("rgba(12, 34, 56, 0.5)"),
            Some(Rgb::new(12, 34, 56))
        );
        assert_eq!(
            Rgb::parse_css("rgba(1, 2, 3, 1)"),
            Some(Rgb::new(1, 2, 3))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Rgb::parse_css(""), None);
        assert_eq!(Rgb::parse_css("red"), None);
        assert_eq!(Rgb::parse_css("#ff0000"), None);
        assert_eq!(Rgb::parse_css("rgb(256, 0, 0)"), None);
        assert_eq!(Rgb::parse_css("rgb(1, 2)"), None);
        assert_eq!(Rgb::parse_css("rgb(1, 2, 3, 4)"), None);
        assert_eq!(Rgb::parse_css("rgba(1, 2, 3)"), None);
    }

    #[test]
    fn test_key_values() {
        assert_eq!(Key::Enter.as_str(), "Enter");
        assert_eq!(Key::Tab.as_str(), "Tab");
    }
}
