//! Type-safe key bindings with help metadata.
//!
//! A [`Binding`] couples one action with the key presses that trigger it and
//! the short help text shown in the widget's hint line. Bindings are matched
//! against [`bubbletea_rs::KeyMsg`] values in `update` loops:
//!
//! ```rust
//! use bubbletea_countdown::key::Binding;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let toggle = Binding::new(vec![KeyCode::Char(' '), KeyCode::Char('p')])
//!     .with_help("space", "pause/resume");
//!
//! let pressed = KeyMsg { key: KeyCode::Char('p'), modifiers: KeyModifiers::NONE };
//! assert!(toggle.matches(&pressed));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// Help metadata for a binding: the key label and what it does.
#[derive(Debug, Clone, Default)]
pub struct Help {
    /// Short label for the key itself, e.g. `"space"` or `"ctrl+c"`.
    pub key: String,
    /// What pressing the key does, e.g. `"pause/resume"`.
    pub desc: String,
}

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code of the press.
    pub code: KeyCode,
    /// Modifier keys held during the press.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// A set of key presses that trigger one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from key codes or `(code, modifiers)` pairs.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Attaches the help text shown for this binding.
    pub fn with_help(mut self, key: &str, desc: &str) -> Self {
        self.help = Help {
            key: key.to_string(),
            desc: desc.to_string(),
        };
        self
    }

    /// Returns the binding's help metadata.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns whether the binding is currently active.
    pub fn enabled(&self) -> bool {
        !self.disabled
    }

    /// Enables or disables the binding. Disabled bindings never match and
    /// are skipped by help rendering.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Reports whether the key message triggers this binding.
    ///
    /// Shift is ignored for character keys since the case is already encoded
    /// in the character itself.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.disabled {
            return false;
        }
        self.keys.iter().any(|press| {
            if press.code != msg.key {
                return false;
            }
            let mut got = msg.modifiers;
            let mut want = press.modifiers;
            if matches!(press.code, KeyCode::Char(_)) {
                got.remove(KeyModifiers::SHIFT);
                want.remove(KeyModifiers::SHIFT);
            }
            got == want
        })
    }
}

/// The key bindings a model exposes for help rendering.
///
/// `short_help` feeds the single-line hint under the widget; `full_help`
/// groups every binding into columns for expanded help displays.
pub trait KeyMap {
    /// The most important bindings, rendered as a single hint line.
    fn short_help(&self) -> Vec<&Binding>;
    /// All bindings, grouped into columns of related actions.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_matches_any_of_the_keys() {
        let b = Binding::new(vec![KeyCode::Char(' '), KeyCode::Char('p')]);
        assert!(b.matches(&key(KeyCode::Char(' '))));
        assert!(b.matches(&key(KeyCode::Char('p'))));
        assert!(!b.matches(&key(KeyCode::Char('x'))));
    }

    #[test]
    fn test_modifiers_must_match() {
        let b = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)]);
        assert!(b.matches(&KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        }));
        assert!(!b.matches(&key(KeyCode::Char('c'))));
    }

    #[test]
    fn test_shift_ignored_for_characters() {
        // Terminals report 'R' as Char('R') plus SHIFT; the character alone
        // is what the binding cares about.
        let b = Binding::new(vec![KeyCode::Char('R')]);
        assert!(b.matches(&KeyMsg {
            key: KeyCode::Char('R'),
            modifiers: KeyModifiers::SHIFT,
        }));
    }

    #[test]
    fn test_disabled_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Enter]);
        assert!(b.matches(&key(KeyCode::Enter)));
        b.set_enabled(false);
        assert!(!b.matches(&key(KeyCode::Enter)));
        assert!(!b.enabled());
    }

    #[test]
    fn test_help_metadata() {
        let b = Binding::new(vec![KeyCode::Enter]).with_help("enter", "start");
        assert_eq!(b.help().key, "enter");
        assert_eq!(b.help().desc, "start");
    }
}
