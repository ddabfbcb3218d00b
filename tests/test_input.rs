use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use shooter2d::compute::Controls;
use shooter2d::input::*;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn with_kind(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
}

#[test]
fn pressed_key_held_within_window() {
    let mut keys = KeyTracker::new();
    keys.handle(&press(KeyCode::Left), 10);
    assert!(keys.is_held(&KeyCode::Left, 10));
    assert!(keys.is_held(&KeyCode::Left, 10 + HOLD_WINDOW));
    assert!(!keys.is_held(&KeyCode::Left, 11 + HOLD_WINDOW));
}

#[test]
fn repeat_refreshes_hold() {
    let mut keys = KeyTracker::new();
    keys.handle(&press(KeyCode::Char(' ')), 1);
    keys.handle(&with_kind(KeyCode::Char(' '), KeyEventKind::Repeat), 4);
    assert!(keys.is_held(&KeyCode::Char(' '), 4 + HOLD_WINDOW));
}

#[test]
fn release_drops_key_immediately() {
    let mut keys = KeyTracker::new();
    keys.handle(&press(KeyCode::Right), 1);
    keys.handle(&with_kind(KeyCode::Right, KeyEventKind::Release), 2);
    assert!(!keys.is_held(&KeyCode::Right, 2));
}

#[test]
fn unknown_key_not_held() {
    let keys = KeyTracker::new();
    assert!(!keys.is_held(&KeyCode::Up, 0));
    assert_eq!(keys.controls(0), Controls::default());
}

#[test]
fn arrows_and_wasd_map_to_controls() {
    let mut keys = KeyTracker::new();
    keys.handle(&press(KeyCode::Char('a')), 1);
    keys.handle(&press(KeyCode::Up), 1);
    keys.handle(&press(KeyCode::Char(' ')), 1);
    assert_eq!(
        keys.controls(2),
        Controls { left: true, right: false, up: true, down: false, fire: true }
    );

    let mut keys = KeyTracker::new();
    keys.handle(&press(KeyCode::Right), 1);
    keys.handle(&press(KeyCode::Char('S')), 1);
    assert_eq!(
        keys.controls(1),
        Controls { left: false, right: true, up: false, down: true, fire: false }
    );
}

#[test]
fn simultaneous_fire_and_move() {
    let mut keys = KeyTracker::new();
    keys.handle(&press(KeyCode::Char('d')), 3);
    keys.handle(&press(KeyCode::Char(' ')), 3);
    let c = keys.controls(5);
    assert!(c.right && c.fire);
}

#[test]
fn quit_keys() {
    let mut keys = KeyTracker::new();
    assert_eq!(keys.handle(&press(KeyCode::Esc), 1), Some(Action::Quit));
    assert_eq!(keys.handle(&press(KeyCode::Char('q')), 1), Some(Action::Quit));
    assert_eq!(keys.handle(&press(KeyCode::Char('Q')), 1), Some(Action::Quit));
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(keys.handle(&ctrl_c, 1), Some(Action::Quit));
    assert_eq!(keys.handle(&press(KeyCode::Char('c')), 1), None);
}

#[test]
fn restart_key() {
    let mut keys = KeyTracker::new();
    assert_eq!(keys.handle(&press(KeyCode::Char('r')), 1), Some(Action::Restart));
    assert_eq!(keys.handle(&press(KeyCode::Char('R')), 1), Some(Action::Restart));
}

#[test]
fn actions_only_on_press() {
    let mut keys = KeyTracker::new();
    let repeat = with_kind(KeyCode::Esc, KeyEventKind::Repeat);
    let release = with_kind(KeyCode::Char('r'), KeyEventKind::Release);
    assert_eq!(keys.handle(&repeat, 1), None);
    assert_eq!(keys.handle(&release, 1), None);
}
