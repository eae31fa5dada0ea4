//! Transient, auto-dismissing notifications.
//!
//! The widget surfaces validation feedback as a short-lived message line, a
//! terminal stand-in for a toast. [`Model::show`] replaces whatever is
//! currently displayed and returns a command that schedules the dismissal;
//! the dismissal carries the id and stamp of the notice it was scheduled
//! for, so an old timer can never clear a newer message.
//!
//! ```rust
//! use bubbletea_countdown::notification::{Level, Model};
//!
//! let mut notice = Model::new();
//! let _dismiss = notice.show(Level::Warning, "Please set a number");
//! assert!(notice.visible());
//! ```

use bubbletea_rs::{tick, Cmd, Msg};
use lipgloss_extras::lipgloss::AdaptiveColor;
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed) + 1
}

/// How long a notice stays on screen.
const DEFAULT_TTL: Duration = Duration::from_secs(3);

/// Severity of a notice, controlling its label and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Neutral information.
    Info,
    /// Something was off, but nothing broke.
    Warning,
    /// Something failed.
    Error,
}

impl Level {
    /// The label rendered in front of the message.
    pub fn label(self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }
}

/// Message that clears a displayed notice once its time is up.
#[derive(Debug, Clone)]
pub struct DismissMsg {
    /// Id of the notification component this dismissal targets.
    pub id: usize,
    tag: usize,
}

/// Styles for the notification line.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Label style for [`Level::Info`].
    pub info: Style,
    /// Label style for [`Level::Warning`].
    pub warning: Style,
    /// Label style for [`Level::Error`].
    pub error: Style,
    /// Style for the message text after the label.
    pub text: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            info: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#005FAF",
                    Dark: "#5FAFFF",
                })
                .bold(true),
            warning: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#AF8700",
                    Dark: "#FFAF00",
                })
                .bold(true),
            error: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#D70000",
                    Dark: "#FF5F5F",
                })
                .bold(true),
            text: Style::new(),
        }
    }
}

/// A single transient notice slot.
///
/// Holds at most one message at a time; showing a new one replaces the old
/// and restarts the clock.
#[derive(Debug, Clone)]
pub struct Model {
    /// How long a shown notice lives before its dismissal fires.
    pub ttl: Duration,
    /// Visual styles for the line.
    pub styles: Styles,
    current: Option<(Level, String)>,
    id: usize,
    tag: usize,
}

impl Model {
    /// Creates an empty notification slot with the default lifetime.
    pub fn new() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            styles: Styles::default(),
            current: None,
            id: next_id(),
            tag: 0,
        }
    }

    /// Displays a message and returns the command scheduling its dismissal.
    ///
    /// Fire-and-forget for the caller: hand the command to the runtime and
    /// the notice takes care of going away.
    pub fn show(&mut self, level: Level, text: impl Into<String>) -> Cmd {
        self.current = Some((level, text.into()));
        self.tag += 1;

        let id = self.id;
        let tag = self.tag;
        tick(self.ttl, move |_| Box::new(DismissMsg { id, tag }) as Msg)
    }

    /// Clears the notice immediately.
    pub fn dismiss(&mut self) {
        self.current = None;
        self.tag += 1;
    }

    /// Returns whether a notice is currently displayed.
    pub fn visible(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the displayed message text, if any.
    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|(_, text)| text.as_str())
    }

    /// Returns the severity of the displayed notice, if any.
    pub fn level(&self) -> Option<Level> {
        self.current.as_ref().map(|(level, _)| *level)
    }

    /// Processes dismissal messages.
    ///
    /// A dismissal whose stamp does not match the currently shown notice is
    /// ignored; it belongs to a message that has already been replaced.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let dismiss = msg.downcast_ref::<DismissMsg>()?;
        if dismiss.id != self.id || dismiss.tag != self.tag {
            return None;
        }
        self.current = None;
        None
    }

    /// Renders the notice line, or an empty string when nothing is shown.
    pub fn view(&self) -> String {
        match &self.current {
            None => String::new(),
            Some((level, text)) => {
                let label_style = match level {
                    Level::Info => &self.styles.info,
                    Level::Warning => &self.styles.warning,
                    Level::Error => &self.styles.error,
                };
                format!(
                    "{} {}",
                    label_style.render(level.label()),
                    self.styles.text.render(text)
                )
            }
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}
