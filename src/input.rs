//! Single-line entry field for the duration form.
//!
//! A deliberately small text field: prompt, placeholder, blinking block
//! cursor, and the basic editing keys. It holds whatever the user types;
//! deciding whether that text is a usable duration is the submit boundary's
//! job, not the field's.

use crate::key::{Binding, KeyPress};
use bubbletea_rs::{tick, Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

// Ids keep blink frames from one field out of another field's update.
static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed) + 1
}

const BLINK_SPEED: Duration = Duration::from_millis(530);

/// Message that flips the cursor's blink phase.
#[derive(Debug, Clone)]
pub struct BlinkMsg {
    /// Id of the field this blink frame targets.
    pub id: usize,
    tag: usize,
}

/// Key bindings for editing within the field.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move the cursor one character left.
    pub character_backward: Binding,
    /// Move the cursor one character right.
    pub character_forward: Binding,
    /// Delete the character before the cursor.
    pub delete_character_backward: Binding,
    /// Delete everything before the cursor.
    pub delete_before_cursor: Binding,
    /// Jump to the start of the line.
    pub line_start: Binding,
    /// Jump to the end of the line.
    pub line_end: Binding,
}

/// The default editing keys, a subset of the usual readline set.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        character_backward: Binding::new(vec![
            KeyPress::from(KeyCode::Left),
            KeyPress::from((KeyCode::Char('b'), KeyModifiers::CONTROL)),
        ]),
        character_forward: Binding::new(vec![
            KeyPress::from(KeyCode::Right),
            KeyPress::from((KeyCode::Char('f'), KeyModifiers::CONTROL)),
        ]),
        delete_character_backward: Binding::new(vec![KeyPress::from(KeyCode::Backspace)]),
        delete_before_cursor: Binding::new(vec![KeyPress::from((
            KeyCode::Char('u'),
            KeyModifiers::CONTROL,
        ))]),
        line_start: Binding::new(vec![
            KeyPress::from(KeyCode::Home),
            KeyPress::from((KeyCode::Char('a'), KeyModifiers::CONTROL)),
        ]),
        line_end: Binding::new(vec![
            KeyPress::from(KeyCode::End),
            KeyPress::from((KeyCode::Char('e'), KeyModifiers::CONTROL)),
        ]),
    }
}

/// A single-line text entry field with a blinking cursor.
pub struct Model {
    /// Prompt rendered before the text.
    pub prompt: String,
    /// Text shown while the field is empty.
    pub placeholder: String,
    /// Maximum number of characters accepted. Zero means no limit.
    pub char_limit: usize,
    /// Style for the prompt prefix.
    pub prompt_style: Style,
    /// Style for the typed text.
    pub text_style: Style,
    /// Style for the placeholder text.
    pub placeholder_style: Style,
    /// Style for the cursor block when visible.
    pub cursor_style: Style,
    /// Editing key bindings.
    pub key_map: KeyMap,

    value: Vec<char>,
    pos: usize,
    focus: bool,
    // Inverted: when `blink` is true the block is not showing.
    blink: bool,
    blink_tag: usize,
    id: usize,
}

/// Creates a field with default settings, unfocused and empty.
pub fn new() -> Model {
    Model {
        prompt: "> ".to_string(),
        placeholder: String::new(),
        char_limit: 0,
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        cursor_style: Style::new(),
        key_map: default_key_map(),
        value: Vec::new(),
        pos: 0,
        focus: false,
        blink: true,
        blink_tag: 0,
        id: next_id(),
    }
}

impl Model {
    /// Returns the current text.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replaces the text, clamping to the character limit, cursor at the end.
    pub fn set_value(&mut self, s: &str) {
        self.value = s.chars().collect();
        if self.char_limit > 0 && self.value.len() > self.char_limit {
            self.value.truncate(self.char_limit);
        }
        self.pos = self.value.len();
    }

    /// Clears the text and returns the cursor to the start.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
    }

    /// Returns the cursor position as a character index.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns whether the field receives key events.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Focuses the field and returns the command that starts cursor blinking.
    pub fn focus(&mut self) -> Cmd {
        self.focus = true;
        self.blink = false;
        self.blink_cmd()
    }

    /// Blurs the field; key events are ignored until focused again.
    pub fn blur(&mut self) {
        self.focus = false;
        self.blink = true;
    }

    fn blink_cmd(&mut self) -> Cmd {
        self.blink_tag += 1;
        let id = self.id;
        let tag = self.blink_tag;
        tick(BLINK_SPEED, move |_| Box::new(BlinkMsg { id, tag }) as Msg)
    }

    /// Processes key and blink messages.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(blink) = msg.downcast_ref::<BlinkMsg>() {
            if !self.focus || blink.id != self.id || blink.tag != self.blink_tag {
                return None;
            }
            self.blink = !self.blink;
            return Some(self.blink_cmd());
        }

        if !self.focus {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            self.handle_key(key_msg);
        }
        None
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) {
        if self.key_map.delete_character_backward.matches(key_msg) {
            if self.pos > 0 {
                self.pos -= 1;
                self.value.remove(self.pos);
            }
        } else if self.key_map.delete_before_cursor.matches(key_msg) {
            self.value.drain(..self.pos);
            self.pos = 0;
        } else if self.key_map.character_backward.matches(key_msg) {
            self.pos = self.pos.saturating_sub(1);
        } else if self.key_map.character_forward.matches(key_msg) {
            if self.pos < self.value.len() {
                self.pos += 1;
            }
        } else if self.key_map.line_start.matches(key_msg) {
            self.pos = 0;
        } else if self.key_map.line_end.matches(key_msg) {
            self.pos = self.value.len();
        } else if let KeyCode::Char(ch) = key_msg.key {
            // Plain character input; control chords are someone else's keys.
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                self.insert(ch);
            }
        }
    }

    fn insert(&mut self, ch: char) {
        if self.char_limit > 0 && self.value.len() >= self.char_limit {
            return;
        }
        self.value.insert(self.pos, ch);
        self.pos += 1;
    }

    fn render_cursor(&self, ch: &str) -> String {
        if self.focus && !self.blink {
            self.cursor_style.clone().reverse(true).render(ch)
        } else {
            self.text_style.render(ch)
        }
    }

    /// Renders the field: prompt, text, cursor block, or the placeholder.
    pub fn view(&self) -> String {
        if self.value.is_empty() && !self.placeholder.is_empty() {
            return self.placeholder_view();
        }

        let mut v = String::new();
        let before: String = self.value[..self.pos].iter().collect();
        v.push_str(&self.text_style.render(&before));

        if self.pos < self.value.len() {
            v.push_str(&self.render_cursor(&self.value[self.pos].to_string()));
            let after: String = self.value[self.pos + 1..].iter().collect();
            v.push_str(&self.text_style.render(&after));
        } else {
            v.push_str(&self.render_cursor(" "));
        }

        format!("{}{}", self.prompt_style.render(&self.prompt), v)
    }

    fn placeholder_view(&self) -> String {
        let chars: Vec<char> = self.placeholder.chars().collect();
        let mut v = self.render_cursor(&chars[0].to_string());
        let rest: String = chars[1..].iter().collect();
        v.push_str(&self.placeholder_style.render(&rest));
        format!("{}{}", self.prompt_style.render(&self.prompt), v)
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}
