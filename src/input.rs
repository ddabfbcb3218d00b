/// Held-key tracking for the terminal front-end.
///
/// Instead of acting on each key event individually, `KeyTracker` records
/// the frame number of the last press/repeat event for every key.  Each
/// frame the game asks which keys are still "fresh" (within `HOLD_WINDOW`
/// frames) and applies all their effects together, so Space and the arrow
/// keys can be held at the same time.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (kitty protocol and friends): proper
///   `Press` / `Repeat` / `Release` events, keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows up as
///   repeated `Press`).  Keys expire after `HOLD_WINDOW` frames of silence.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::compute::Controls;

/// A key is held if its last press/repeat arrived within this many frames.
pub const HOLD_WINDOW: u64 = 4;

/// One-shot actions decoded from a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    Restart,
}

#[derive(Debug, Default)]
pub struct KeyTracker {
    key_frame: HashMap<KeyCode, u64>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one key event seen during `frame`.  Returns the discrete
    /// action it triggers, if any.
    pub fn handle(&mut self, event: &KeyEvent, frame: u64) -> Option<Action> {
        match event.kind {
            KeyEventKind::Press => {
                self.key_frame.insert(event.code, frame);
                action_for(event)
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(event.code, frame);
                None
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&event.code);
                None
            }
        }
    }

    pub fn is_held(&self, key: &KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    fn any_held(&self, keys: &[KeyCode], frame: u64) -> bool {
        keys.iter().any(|k| self.is_held(k, frame))
    }

    /// Movement and fire state for this frame.
    pub fn controls(&self, frame: u64) -> Controls {
        Controls {
            left: self.any_held(&[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')], frame),
            right: self.any_held(&[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')], frame),
            up: self.any_held(&[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')], frame),
            down: self.any_held(&[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')], frame),
            fire: self.is_held(&KeyCode::Char(' '), frame),
        }
    }
}

fn action_for(event: &KeyEvent) -> Option<Action> {
    match event.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::Quit)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        _ => None,
    }
}
