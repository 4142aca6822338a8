//! Keyboard input
//!
//! Terminals differ in what they report. Terminals with keyboard enhancement
//! send press, repeat and release events; classic terminals only send
//! presses, with OS key repeat showing up as more presses. Both are handled by
//! remembering the frame each key was last seen: a key counts as held until
//! it is released or goes quiet for `HOLD_WINDOW` frames.

use std::collections::HashMap;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sim::TickInput;

/// Frames a key stays held after its last press or repeat (500 ms at 60 Hz).
/// Covers the usual OS delay before key repeat starts.
pub const HOLD_WINDOW: u64 = 30;

/// Keyboard state accumulated across frames
#[derive(Debug, Default)]
pub struct InputState {
    /// Last frame each key was seen pressed or repeating
    key_frame: HashMap<KeyCode, u64>,
    frame: u64,
    toggle_pressed: bool,
    quit: bool,
    resized: Option<(u16, u16)>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame: one-shot inputs from the previous frame are dropped
    pub fn begin_frame(&mut self) {
        self.frame += 1;
        self.toggle_pressed = false;
        self.resized = None;
    }

    /// Drain every pending terminal event without blocking
    pub fn poll(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            self.handle_event(event::read()?);
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(cols, rows) => self.resized = Some((cols, rows)),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let code = normalize(key.code);
        match key.kind {
            KeyEventKind::Press => {
                match code {
                    KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        self.quit = true
                    }
                    KeyCode::Char(' ') => self.toggle_pressed = true,
                    _ => {}
                }
                self.key_frame.insert(code, self.frame);
            }
            // Repeats keep movement going but never toggle
            KeyEventKind::Repeat => {
                self.key_frame.insert(code, self.frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&code);
            }
        }
    }

    fn is_held(&self, key: &KeyCode) -> bool {
        self.key_frame
            .get(key)
            .map(|&last| self.frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    /// Movement and toggle for this frame's simulation tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            move_left: self.is_held(&KeyCode::Left) || self.is_held(&KeyCode::Char('a')),
            move_right: self.is_held(&KeyCode::Right) || self.is_held(&KeyCode::Char('d')),
            toggle: self.toggle_pressed,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// New terminal size, if the terminal was resized this frame
    pub fn resized(&self) -> Option<(u16, u16)> {
        self.resized
    }
}

/// Fold letter case so `A` and `a` are the same key
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn press(code: KeyCode) -> Event {
        key(code, KeyEventKind::Press)
    }

    #[test]
    fn test_toggle_is_one_shot() {
        let mut input = InputState::new();
        input.begin_frame();
        input.handle_event(press(KeyCode::Char(' ')));
        assert!(input.tick_input().toggle);

        input.begin_frame();
        assert!(!input.tick_input().toggle);
    }

    #[test]
    fn test_repeat_events_do_not_toggle() {
        let mut input = InputState::new();
        input.begin_frame();
        input.handle_event(press(KeyCode::Char(' ')));

        input.begin_frame();
        input.handle_event(key(KeyCode::Char(' '), KeyEventKind::Repeat));
        assert!(!input.tick_input().toggle);
    }

    #[test]
    fn test_quick_taps_each_toggle() {
        let mut input = InputState::new();
        input.begin_frame();
        input.handle_event(press(KeyCode::Char(' ')));
        assert!(input.tick_input().toggle);

        // Second tap two frames later, well inside the hold window
        input.begin_frame();
        input.begin_frame();
        input.handle_event(press(KeyCode::Char(' ')));
        assert!(input.tick_input().toggle);
    }

    #[test]
    fn test_movement_survives_repeat_delay() {
        let mut input = InputState::new();
        input.begin_frame();
        input.handle_event(press(KeyCode::Right));

        // Classic terminal: no events until OS repeat kicks in ~400 ms later
        for _ in 0..24 {
            input.begin_frame();
            assert!(input.tick_input().move_right);
        }
        input.handle_event(press(KeyCode::Right));
        input.begin_frame();
        assert!(input.tick_input().move_right);
    }

    #[test]
    fn test_held_keys_expire_without_release() {
        let mut input = InputState::new();
        input.begin_frame();
        input.handle_event(press(KeyCode::Left));
        assert!(input.tick_input().move_left);

        for _ in 0..HOLD_WINDOW {
            input.begin_frame();
        }
        assert!(input.tick_input().move_left);

        input.begin_frame();
        assert!(!input.tick_input().move_left);
    }

    #[test]
    fn test_release_stops_movement() {
        let mut input = InputState::new();
        input.begin_frame();
        input.handle_event(press(KeyCode::Char('D')));
        assert!(input.tick_input().move_right);

        input.handle_event(key(KeyCode::Char('d'), KeyEventKind::Release));
        assert!(!input.tick_input().move_right);
    }

    #[test]
    fn test_both_directions_reported() {
        let mut input = InputState::new();
        input.begin_frame();
        input.handle_event(press(KeyCode::Char('a')));
        input.handle_event(press(KeyCode::Right));
        let tick = input.tick_input();
        assert!(tick.move_left && tick.move_right);
    }

    #[test]
    fn test_quit_keys() {
        for event in [
            press(KeyCode::Esc),
            press(KeyCode::Char('Q')),
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        ] {
            let mut input = InputState::new();
            input.begin_frame();
            input.handle_event(event);
            assert!(input.quit_requested());
        }
    }

    #[test]
    fn test_resize_is_reported_once() {
        let mut input = InputState::new();
        input.begin_frame();
        input.handle_event(Event::Resize(100, 40));
        assert_eq!(input.resized(), Some((100, 40)));
        input.begin_frame();
        assert_eq!(input.resized(), None);
    }
}
