#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-countdown/")]

//! # bubbletea-countdown
//!
//! A minutes-to-zero countdown widget for terminal applications built with
//! [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs).
//!
//! The widget is a single screen: type a duration in minutes, press enter,
//! and a `MM:SS` clock counts down once per second. Space pauses and
//! resumes, `r` resets back to the entry form, and bad input produces a
//! transient warning line instead of a state change.
//!
//! ## Quick start
//!
//! Run the widget as a standalone program:
//!
//! ```rust,ignore
//! use bubbletea_countdown::TimerWidget;
//! use bubbletea_rs::Program;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let program = Program::<TimerWidget>::builder().build()?;
//!     program.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Embedding
//!
//! The widget is an ordinary Elm-architecture component: construct it, feed
//! it messages, splice its view into your own.
//!
//! ```rust
//! use bubbletea_countdown::{Phase, TimerWidget};
//!
//! let mut timer = TimerWidget::new();
//! assert_eq!(timer.phase(), Phase::Idle);
//!
//! // Drive it programmatically instead of through key events.
//! let cmd = timer.submit_duration("5");
//! assert!(cmd.is_none());
//! assert_eq!(timer.phase(), Phase::Paused);
//! assert!(timer.view().contains("05:00"));
//! ```
//!
//! ## Pieces
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`widget`] | The composed timer widget and its state machine |
//! | [`countdown`] | Whole-second countdown engine with pause/resume |
//! | [`input`] | Single-line duration entry field |
//! | [`duration`] | Minutes parsing and validation |
//! | [`notification`] | Transient, auto-dismissing message line |
//! | [`icon`] | Named glyphs for the widget chrome |
//! | [`key`] | Type-safe key bindings with help metadata |

pub mod countdown;
pub mod duration;
pub mod icon;
pub mod input;
pub mod key;
pub mod notification;
pub mod widget;

pub use countdown::{
    format_clock, FinishedMsg as CountdownFinishedMsg, Model as Countdown,
    TickMsg as CountdownTickMsg,
};
pub use duration::{parse_minutes, InvalidDuration};
pub use input::{BlinkMsg as InputBlinkMsg, Model as DurationInput};
pub use key::{Binding, Help as KeyHelp, KeyMap, KeyPress};
pub use notification::{DismissMsg as NoticeDismissMsg, Level as NoticeLevel, Model as Notification};
pub use widget::{KeyMap as TimerKeyMap, Model as TimerWidget, Phase, Styles as TimerStyles};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_countdown::prelude::*;
///
/// let timer = TimerWidget::new();
/// assert_eq!(timer.phase(), Phase::Idle);
/// ```
pub mod prelude {
    pub use crate::countdown::Model as Countdown;
    pub use crate::duration::{parse_minutes, InvalidDuration};
    pub use crate::input::Model as DurationInput;
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::notification::{Level as NoticeLevel, Model as Notification};
    pub use crate::widget::{Model as TimerWidget, Phase};
}
