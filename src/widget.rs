//! The countdown timer widget.
//!
//! Ties the pieces together: a minutes entry form, the countdown clock with
//! play/pause and reset controls, and a transient notification line for bad
//! input. The widget moves between three phases:
//!
//! - [`Phase::Idle`]: the entry form is visible, nothing is counting.
//! - [`Phase::Paused`]: the clock is visible, ticking is suspended.
//! - [`Phase::Running`]: the clock is visible and ticking.
//!
//! Submitting a valid duration goes Idle to Paused; the toggle key flips
//! Paused and Running; reaching zero drops back to Paused; reset returns to
//! Idle from anywhere.
//!
//! The widget implements [`bubbletea_rs::Model`], so it runs standalone:
//!
//! ```rust
//! use bubbletea_countdown::TimerWidget;
//! use bubbletea_rs::Model as BubbleTeaModel;
//!
//! let (widget, cmd) = TimerWidget::init();
//! assert!(cmd.is_some()); // cursor blink for the entry field
//! assert!(widget.view().contains("Timer"));
//! ```
//!
//! Embedded in a larger model, construct it with [`Model::new`], forward
//! messages to [`Model::update`], and splice [`Model::view`] into your own.

use crate::countdown;
use crate::duration;
use crate::icon;
use crate::input;
use crate::key::{self, Binding};
use crate::notification::{self, Level};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss::AdaptiveColor;
use lipgloss_extras::prelude::*;

/// Where the widget currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Entry form visible, no countdown loaded.
    Idle,
    /// Clock visible, ticking suspended.
    Paused,
    /// Clock visible, ticking.
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Entry,
    Clock,
}

/// Key bindings for the widget.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Submit the typed duration (entry screen).
    pub submit: Binding,
    /// Pause or resume the countdown (clock screen).
    pub toggle: Binding,
    /// Discard the countdown and return to the entry form (clock screen).
    pub reset: Binding,
    /// Quit (clock screen only, so typing is never hijacked).
    pub quit: Binding,
    /// Quit from anywhere.
    pub force_quit: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            submit: Binding::new(vec![KeyCode::Enter]).with_help("enter", "start"),
            toggle: Binding::new(vec![KeyCode::Char(' '), KeyCode::Char('p')])
                .with_help("space", "pause/resume"),
            reset: Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reset"),
            quit: Binding::new(vec![KeyCode::Char('q'), KeyCode::Esc]).with_help("q", "quit"),
            force_quit: Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)])
                .with_help("ctrl+c", "quit"),
        }
    }
}

/// Styles for the widget's chrome.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for the title line.
    pub title: Style,
    /// Style for the `MM:SS` clock.
    pub clock: Style,
    /// Style for the play/pause control glyph.
    pub control: Style,
    /// Style for key names in the hint line.
    pub hint_key: Style,
    /// Style for descriptions in the hint line.
    pub hint_desc: Style,
    /// Style for separators in the hint line.
    pub hint_separator: Style,
    /// Style for the footer link.
    pub link: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let key_style = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc_style = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let sep_style = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });

        Self {
            title: Style::new().bold(true),
            clock: Style::new().bold(true).foreground(Color::from("205")),
            control: Style::new().foreground(Color::from("205")),
            hint_key: key_style,
            hint_desc: desc_style.clone(),
            hint_separator: sep_style,
            link: desc_style,
        }
    }
}

/// The countdown timer widget model.
pub struct Model {
    /// Key bindings. Replace to rebind controls.
    pub keymap: KeyMap,
    /// Visual styles.
    pub styles: Styles,
    /// Footer link text, rendered with the github glyph. Empty hides it.
    pub footer_link: String,

    input: input::Model,
    countdown: countdown::Model,
    notice: notification::Model,
    screen: Screen,
}

impl Model {
    /// Creates a widget on the entry form, nothing counting.
    ///
    /// The entry field is not focused yet; [`BubbleTeaModel::init`] focuses
    /// it and returns the blink command, and embedding applications should
    /// do the same via [`focus_input`](Self::focus_input).
    pub fn new() -> Self {
        let mut input = input::new();
        input.placeholder = "Enter number of minutes:".to_string();
        Self {
            keymap: KeyMap::default(),
            styles: Styles::default(),
            footer_link: "github.com/whit3rabbit/bubbletea-countdown".to_string(),
            input,
            countdown: countdown::Model::new(),
            notice: notification::Model::new(),
            screen: Screen::Entry,
        }
    }

    /// Focuses the entry field and returns the cursor blink command.
    pub fn focus_input(&mut self) -> Cmd {
        self.input.focus()
    }

    /// Returns the widget's current phase.
    pub fn phase(&self) -> Phase {
        match self.screen {
            Screen::Entry => Phase::Idle,
            Screen::Clock if self.countdown.running() => Phase::Running,
            Screen::Clock => Phase::Paused,
        }
    }

    /// Returns the remaining whole seconds.
    pub fn remaining_seconds(&self) -> u64 {
        self.countdown.remaining_seconds()
    }

    /// Returns the text currently typed into the entry field.
    pub fn input_value(&self) -> String {
        self.input.value()
    }

    /// Returns the displayed notification text, if one is showing.
    pub fn notice_message(&self) -> Option<&str> {
        self.notice.message()
    }

    /// Submits a duration typed as minutes.
    ///
    /// On success the countdown is armed paused, the clock replaces the
    /// form, and the field is cleared. On rejection nothing changes and the
    /// returned command drives a warning notification.
    pub fn submit_duration(&mut self, raw: &str) -> Option<Cmd> {
        match duration::parse_minutes(raw) {
            Ok(seconds) => {
                self.countdown.arm(seconds);
                self.screen = Screen::Clock;
                self.input.reset();
                self.input.blur();
                None
            }
            Err(err) => Some(self.notice.show(Level::Warning, err.to_string())),
        }
    }

    /// Pauses or resumes the countdown. A no-op on the entry form or at zero.
    pub fn toggle(&mut self) -> Option<Cmd> {
        if self.screen != Screen::Clock {
            return None;
        }
        self.countdown.toggle()
    }

    /// Stops and clears the countdown and brings the entry form back.
    ///
    /// The returned command restarts the entry cursor's blinking.
    pub fn reset(&mut self) -> Option<Cmd> {
        self.countdown.reset();
        self.screen = Screen::Entry;
        Some(self.input.focus())
    }

    /// Processes one message: key presses for the active screen, then tick,
    /// blink, and dismiss traffic for the subcomponents.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.force_quit.matches(key_msg) {
                return Some(bubbletea_rs::quit());
            }
            match self.screen {
                Screen::Entry => {
                    if self.keymap.submit.matches(key_msg) {
                        let raw = self.input.value();
                        return self.submit_duration(&raw);
                    }
                    return self.input.update(&msg);
                }
                Screen::Clock => {
                    if self.keymap.toggle.matches(key_msg) {
                        return self.toggle();
                    }
                    if self.keymap.reset.matches(key_msg) {
                        return self.reset();
                    }
                    if self.keymap.quit.matches(key_msg) {
                        return Some(bubbletea_rs::quit());
                    }
                    return None;
                }
            }
        }

        // Scheduled traffic: countdown ticks, cursor blinks, notice
        // dismissals. Each component ignores messages that are not its own.
        self.countdown
            .update(&msg)
            .or_else(|| self.input.update(&msg))
            .or_else(|| self.notice.update(&msg))
    }

    fn hint_line(&self) -> String {
        let bindings = key::KeyMap::short_help(self);
        let sep = self.styles.hint_separator.render(" • ");
        bindings
            .iter()
            .filter(|b| b.enabled())
            .map(|b| {
                format!(
                    "{} {}",
                    self.styles.hint_key.render(&b.help().key),
                    self.styles.hint_desc.render(&b.help().desc)
                )
            })
            .collect::<Vec<_>>()
            .join(&sep)
    }

    /// Renders the widget.
    pub fn view(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        lines.push(self.styles.title.render("Timer"));
        lines.push(String::new());

        match self.screen {
            Screen::Entry => {
                lines.push(self.input.view());
            }
            Screen::Clock => {
                lines.push(self.styles.clock.render(&self.countdown.view()));
                let glyph = if self.countdown.running() {
                    icon::PAUSE
                } else {
                    icon::PLAY
                };
                lines.push(self.styles.control.render(glyph));
            }
        }

        if self.notice.visible() {
            lines.push(String::new());
            lines.push(self.notice.view());
        }

        lines.push(String::new());
        lines.push(self.hint_line());

        if !self.footer_link.is_empty() {
            lines.push(String::new());
            lines.push(
                self.styles
                    .link
                    .render(&format!("{} {}", icon::GITHUB, self.footer_link)),
            );
        }

        lines.join("\n")
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl key::KeyMap for Model {
    /// The hint line for the current screen: submitting while on the form,
    /// clock controls while counting.
    fn short_help(&self) -> Vec<&Binding> {
        match self.screen {
            Screen::Entry => vec![&self.keymap.submit, &self.keymap.force_quit],
            Screen::Clock => vec![
                &self.keymap.toggle,
                &self.keymap.reset,
                &self.keymap.quit,
            ],
        }
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.keymap.submit, &self.keymap.toggle, &self.keymap.reset],
            vec![&self.keymap.quit, &self.keymap.force_quit],
        ]
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Model::new();
        let cmd = model.focus_input();
        (model, Some(cmd))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countdown::TickMsg;

    fn press(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn unstamped_tick() -> Msg {
        Box::new(TickMsg { id: 0, tag: 0 })
    }

    fn widget() -> Model {
        let mut w = Model::new();
        let _ = w.focus_input();
        w
    }

    #[test]
    fn test_starts_idle() {
        let w = widget();
        assert_eq!(w.phase(), Phase::Idle);
        assert_eq!(w.remaining_seconds(), 0);
        assert!(w.view().contains("nter number of minutes:"));
    }

    #[test]
    fn test_valid_submit_arms_paused() {
        let mut w = widget();
        let cmd = w.submit_duration("5");

        assert!(cmd.is_none());
        assert_eq!(w.phase(), Phase::Paused);
        assert_eq!(w.remaining_seconds(), 300);
        assert_eq!(w.input_value(), "");
        assert!(w.view().contains("05:00"));
        assert!(!w.view().contains("minutes:"));
    }

    #[test]
    fn test_invalid_submit_changes_nothing_but_warns() {
        let mut w = widget();
        let cmd = w.submit_duration("abc");

        assert!(cmd.is_some());
        assert_eq!(w.phase(), Phase::Idle);
        assert_eq!(w.remaining_seconds(), 0);
        assert_eq!(w.notice_message(), Some("Please set a number"));
        assert!(w.view().contains("warning"));
        // The form stays up.
        assert!(w.view().contains("nter number of minutes:"));
    }

    #[test]
    fn test_overlong_submit_is_rejected_with_feedback() {
        let mut w = widget();
        let cmd = w.submit_duration("70");

        assert!(cmd.is_some());
        assert_eq!(w.phase(), Phase::Idle);
        assert!(w.notice_message().unwrap_or_default().contains("60"));
    }

    #[test]
    fn test_submit_via_enter_key() {
        let mut w = widget();
        for ch in "2".chars() {
            w.update(press(KeyCode::Char(ch)));
        }
        let cmd = w.update(press(KeyCode::Enter));

        assert!(cmd.is_none());
        assert_eq!(w.phase(), Phase::Paused);
        assert_eq!(w.remaining_seconds(), 120);
    }

    #[test]
    fn test_toggle_runs_and_freezes() {
        let mut w = widget();
        let _ = w.submit_duration("5");

        let cmd = w.toggle();
        assert!(cmd.is_some());
        assert_eq!(w.phase(), Phase::Running);

        // Freezing keeps the remaining value where it is.
        w.update(unstamped_tick());
        assert_eq!(w.remaining_seconds(), 299);
        let _ = w.toggle();
        assert_eq!(w.phase(), Phase::Paused);
        assert_eq!(w.remaining_seconds(), 299);
    }

    #[test]
    fn test_toggle_key_on_clock_screen() {
        let mut w = widget();
        let _ = w.submit_duration("1");

        let cmd = w.update(press(KeyCode::Char(' ')));
        assert!(cmd.is_some());
        assert_eq!(w.phase(), Phase::Running);

        let _ = w.update(press(KeyCode::Char('p')));
        assert_eq!(w.phase(), Phase::Paused);
    }

    #[test]
    fn test_toggle_ignored_on_entry_screen() {
        let mut w = widget();
        assert!(w.toggle().is_none());
        assert_eq!(w.phase(), Phase::Idle);
    }

    #[test]
    fn test_countdown_scenario_five_minutes() {
        // "5" shows 05:00; after 65 ticks the clock reads 03:55 and is
        // still running.
        let mut w = widget();
        let _ = w.submit_duration("5");
        assert!(w.view().contains("05:00"));

        let _ = w.toggle();
        for _ in 0..65 {
            w.update(unstamped_tick());
        }
        assert_eq!(w.remaining_seconds(), 235);
        assert_eq!(w.phase(), Phase::Running);
        assert!(w.view().contains("03:55"));
    }

    #[test]
    fn test_reaching_zero_stops() {
        let mut w = widget();
        let _ = w.submit_duration("0.05"); // three seconds
        assert_eq!(w.remaining_seconds(), 3);

        let _ = w.toggle();
        for _ in 0..5 {
            w.update(unstamped_tick());
        }
        assert_eq!(w.remaining_seconds(), 0);
        assert_eq!(w.phase(), Phase::Paused);
        assert!(w.view().contains("00:00"));

        // Toggling at zero restarts nothing.
        assert!(w.toggle().is_none());
        assert_eq!(w.phase(), Phase::Paused);
    }

    #[test]
    fn test_play_pause_glyph_follows_state() {
        let mut w = widget();
        let _ = w.submit_duration("5");
        assert!(w.view().contains(icon::PLAY));

        let _ = w.toggle();
        assert!(w.view().contains(icon::PAUSE));
        assert!(!w.view().contains(icon::PLAY));
    }

    #[test]
    fn test_reset_returns_to_entry_form() {
        let mut w = widget();
        let _ = w.submit_duration("5");
        let _ = w.toggle();
        assert_eq!(w.phase(), Phase::Running);

        let cmd = w.update(press(KeyCode::Char('r')));
        assert!(cmd.is_some()); // blink restart for the entry cursor
        assert_eq!(w.phase(), Phase::Idle);
        assert_eq!(w.remaining_seconds(), 0);
        assert!(w.view().contains("nter number of minutes:"));
    }

    #[test]
    fn test_stale_tick_after_reset_is_dropped() {
        let mut w = widget();
        let _ = w.submit_duration("5");
        let _ = w.toggle();
        w.update(unstamped_tick());
        assert_eq!(w.remaining_seconds(), 299);

        let _ = w.reset();
        let _ = w.submit_duration("2");
        // The unstamped tick would pass the filters, but the countdown is
        // paused after a fresh submit, so nothing moves.
        w.update(unstamped_tick());
        assert_eq!(w.remaining_seconds(), 120);
    }

    #[test]
    fn test_typing_q_on_entry_screen_is_text_not_quit() {
        let mut w = widget();
        let cmd = w.update(press(KeyCode::Char('q')));
        assert!(cmd.is_none());
        assert_eq!(w.input_value(), "q");
    }

    #[test]
    fn test_quit_keys_on_clock_screen() {
        let mut w = widget();
        let _ = w.submit_duration("5");
        assert!(w.update(press(KeyCode::Char('q'))).is_some());
    }

    #[test]
    fn test_hint_line_follows_screen() {
        let mut w = widget();
        assert!(w.view().contains("enter"));
        assert!(w.view().contains("start"));

        let _ = w.submit_duration("5");
        let view = w.view();
        assert!(view.contains("space"));
        assert!(view.contains("pause/resume"));
        assert!(view.contains("reset"));
    }

    #[test]
    fn test_footer_link_rendered() {
        let mut w = widget();
        assert!(w.view().contains("github.com"));

        w.footer_link.clear();
        assert!(!w.view().contains("github.com"));
    }

    #[test]
    fn test_init_focuses_input() {
        let (w, cmd) = <Model as BubbleTeaModel>::init();
        assert!(cmd.is_some());
        assert_eq!(w.phase(), Phase::Idle);
    }
}
