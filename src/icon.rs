//! Named glyphs for the widget chrome.
//!
//! A tiny icon provider: fixed glyph constants plus a by-name lookup for
//! callers that address icons as strings. Pure data, no state.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Control glyph shown while the countdown is paused.
pub const PLAY: &str = "▶";

/// Control glyph shown while the countdown is running.
pub const PAUSE: &str = "⏸";

/// Glyph for the repository link in the footer.
pub const GITHUB: &str = "\u{f09b}";

static REGISTRY: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([("play", PLAY), ("pause", PAUSE), ("github", GITHUB)])
});

/// Looks up a glyph by icon name.
///
/// ```rust
/// use bubbletea_countdown::icon;
///
/// assert_eq!(icon::named("play"), Some(icon::PLAY));
/// assert_eq!(icon::named("wat"), None);
/// ```
pub fn named(name: &str) -> Option<&'static str> {
    REGISTRY.get(name).copied()
}
