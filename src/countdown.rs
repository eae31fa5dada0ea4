//! Whole-second countdown engine.
//!
//! This is the stateful core of the widget: a number of remaining seconds
//! counting down to zero, once per wall-clock second, with pause and resume.
//! Ticks arrive as [`TickMsg`] values scheduled through the runtime, so all
//! mutation stays on the single event loop.
//!
//! There is no way to cancel a command once it has been handed to the
//! runtime. Instead every state change stamps the countdown with a fresh
//! `tag`; a tick scheduled before the change carries the old stamp and is
//! dropped on arrival. That makes stop, reset, and re-arm deterministic even
//! with a tick already in flight.
//!
//! # Basic usage
//!
//! ```rust
//! use bubbletea_countdown::countdown;
//!
//! let mut timer = countdown::Model::new();
//! timer.arm(300);
//! assert_eq!(timer.view(), "05:00");
//!
//! // Returns the command that schedules the first tick.
//! let cmd = timer.toggle();
//! assert!(cmd.is_some());
//! assert!(timer.running());
//! ```

use bubbletea_rs::{tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Instance ids keep several countdowns in one program from stealing each
// other's ticks.
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// One displayed second per real second.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Message delivered once per second while a countdown is running.
///
/// An `id` or `tag` of zero matches any countdown; nonzero values must match
/// the instance and its current schedule stamp or the message is ignored.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Id of the countdown this tick belongs to.
    pub id: i64,
    /// Schedule stamp the tick was created under. Zero means unstamped.
    pub tag: i64,
}

/// Message delivered shortly after a countdown reaches zero.
///
/// The countdown has already stopped itself by the time this arrives; the
/// message exists so embedding applications can react to completion.
#[derive(Debug, Clone)]
pub struct FinishedMsg {
    /// Id of the countdown that finished.
    pub id: i64,
}

/// Countdown state: remaining whole seconds plus the live tick schedule.
#[derive(Debug, Clone)]
pub struct Model {
    remaining: u64,
    running: bool,
    id: i64,
    tag: i64,
}

impl Model {
    /// Creates a disarmed countdown: zero remaining, not running.
    pub fn new() -> Self {
        Self {
            remaining: 0,
            running: false,
            id: next_id(),
            tag: 0,
        }
    }

    /// Returns the unique id of this countdown instance.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the remaining whole seconds.
    pub fn remaining_seconds(&self) -> u64 {
        self.remaining
    }

    /// Returns whether the countdown is actively ticking.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Loads a new duration, stopping any active countdown first.
    ///
    /// The countdown is left paused; call [`toggle`](Self::toggle) or
    /// [`start`](Self::start) to begin ticking.
    pub fn arm(&mut self, seconds: u64) {
        self.stop();
        self.remaining = seconds;
    }

    /// Starts ticking and returns the command that schedules the first tick.
    ///
    /// A no-op returning `None` when already running or when there is
    /// nothing left to count down.
    pub fn start(&mut self) -> Option<Cmd> {
        if self.running || self.remaining == 0 {
            return None;
        }
        self.running = true;
        self.tag += 1;
        Some(self.tick_cmd())
    }

    /// Stops ticking, keeping the remaining time.
    ///
    /// Also invalidates any tick already in flight, so nothing fires after a
    /// logical stop.
    pub fn stop(&mut self) {
        self.running = false;
        self.tag += 1;
    }

    /// Starts when stopped, stops when running.
    pub fn toggle(&mut self) -> Option<Cmd> {
        if self.running {
            self.stop();
            None
        } else {
            self.start()
        }
    }

    /// Stops any active countdown and clears the remaining time to zero.
    pub fn reset(&mut self) {
        self.stop();
        self.remaining = 0;
    }

    fn tick_cmd(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        tick(TICK_INTERVAL, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    fn finished_cmd(&self) -> Cmd {
        let id = self.id;
        tick(Duration::from_nanos(1), move |_| {
            Box::new(FinishedMsg { id }) as Msg
        })
    }

    /// Processes tick messages, advancing the countdown.
    ///
    /// Stale ticks are rejected without touching state: wrong instance,
    /// outdated schedule stamp, or arriving while stopped. A surviving tick
    /// decrements the remaining time and schedules the next one; the tick
    /// that lands on zero stops the countdown and emits [`FinishedMsg`]
    /// instead.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let tick_msg = msg.downcast_ref::<TickMsg>()?;
        if !self.running {
            return None;
        }
        if tick_msg.id != 0 && tick_msg.id != self.id {
            return None;
        }
        if tick_msg.tag != 0 && tick_msg.tag != self.tag {
            return None;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.stop();
            return Some(self.finished_cmd());
        }
        Some(self.tick_cmd())
    }

    /// Renders the remaining time as a zero-padded `MM:SS` clock.
    pub fn view(&self) -> String {
        format_clock(self.remaining)
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats whole seconds as `MM:SS`, both fields zero-padded.
pub fn format_clock(total_seconds: u64) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}
