//! winit → platform-independent input translation.

use snakeview_input::{Key, MouseButton};
use winit::event::MouseButton as WinitButton;
use winit::keyboard::KeyCode;

/// Physical key to viewer key. `=` and keypad `+` both step forward so the
/// frame keys work without Shift.
pub fn map_key(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::KeyW => Key::W,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyD => Key::D,
        KeyCode::Space => Key::Space,
        KeyCode::ShiftLeft => Key::LShift,
        KeyCode::Escape => Key::Escape,
        KeyCode::Equal | KeyCode::NumpadAdd => Key::Plus,
        KeyCode::Minus | KeyCode::NumpadSubtract => Key::Minus,
        KeyCode::Digit1 => Key::Digit1,
        KeyCode::Digit2 => Key::Digit2,
        KeyCode::Digit3 => Key::Digit3,
        KeyCode::Digit4 => Key::Digit4,
        KeyCode::Digit5 => Key::Digit5,
        KeyCode::Digit6 => Key::Digit6,
        KeyCode::Digit7 => Key::Digit7,
        KeyCode::Digit8 => Key::Digit8,
        KeyCode::F1 => Key::F1,
        _ => return None,
    };
    Some(key)
}

pub fn map_button(button: WinitButton) -> Option<MouseButton> {
    match button {
        WinitButton::Left => Some(MouseButton::Left),
        WinitButton::Right => Some(MouseButton::Right),
        WinitButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}
