use crate::action::{Action, Key, Movement};
use snakeview_common::{BlockKind, Layer};
use std::collections::HashMap;

/// Mouse buttons the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// What a key does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Held: active from press until release.
    Move(Movement),
    /// Fired once on press.
    Trigger(Action),
}

/// Key → binding table.
///
/// Digits 1-4 toggle the fences/food/snakes/enemies layers and digits 5-8
/// select the snake/enemy/sand/food block kind for placement.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    keys: HashMap<Key, Binding>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = HashMap::new();
        keys.insert(Key::W, Binding::Move(Movement::Forward));
        keys.insert(Key::S, Binding::Move(Movement::Backward));
        keys.insert(Key::A, Binding::Move(Movement::Left));
        keys.insert(Key::D, Binding::Move(Movement::Right));
        keys.insert(Key::Space, Binding::Move(Movement::Up));
        keys.insert(Key::LShift, Binding::Move(Movement::Down));

        keys.insert(Key::Escape, Binding::Trigger(Action::ReleaseMouse));
        keys.insert(Key::Plus, Binding::Trigger(Action::NextFrame));
        keys.insert(Key::Minus, Binding::Trigger(Action::PreviousFrame));
        keys.insert(Key::F1, Binding::Trigger(Action::ToggleHud));

        let layer_keys = [Key::Digit1, Key::Digit2, Key::Digit3, Key::Digit4];
        for (key, layer) in layer_keys.into_iter().zip(Layer::ALL) {
            keys.insert(key, Binding::Trigger(Action::ToggleLayer(layer)));
        }
        let block_keys = [Key::Digit5, Key::Digit6, Key::Digit7, Key::Digit8];
        for (key, kind) in block_keys.into_iter().zip(BlockKind::ALL) {
            keys.insert(key, Binding::Trigger(Action::SelectBlock(kind)));
        }

        Self { keys }
    }
}

impl KeyBindings {
    pub fn binding(&self, key: Key) -> Option<Binding> {
        self.keys.get(&key).copied()
    }

    /// Rebind a key, replacing whatever it did before.
    pub fn bind(&mut self, key: Key, binding: Binding) {
        if let Some(old) = self.keys.insert(key, binding) {
            tracing::debug!(?key, ?old, new = ?binding, "key rebound");
        }
    }

    pub fn movement_for(&self, key: Key) -> Option<Movement> {
        match self.binding(key)? {
            Binding::Move(m) => Some(m),
            Binding::Trigger(_) => None,
        }
    }

    pub fn action_for(&self, key: Key) -> Option<Action> {
        match self.binding(key)? {
            Binding::Trigger(a) => Some(a),
            Binding::Move(_) => None,
        }
    }

    /// Actions fired by a mouse button press, in order.
    pub fn mouse_actions(&self, button: MouseButton) -> &'static [Action] {
        match button {
            MouseButton::Left => &[Action::CaptureMouse, Action::RemoveBlock],
            MouseButton::Right => &[Action::PlaceBlock],
            MouseButton::Middle => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_space_shift_move() {
        let b = KeyBindings::default();
        assert_eq!(b.movement_for(Key::W), Some(Movement::Forward));
        assert_eq!(b.movement_for(Key::S), Some(Movement::Backward));
        assert_eq!(b.movement_for(Key::A), Some(Movement::Left));
        assert_eq!(b.movement_for(Key::D), Some(Movement::Right));
        assert_eq!(b.movement_for(Key::Space), Some(Movement::Up));
        assert_eq!(b.movement_for(Key::LShift), Some(Movement::Down));
        assert_eq!(b.action_for(Key::W), None);
    }

    #[test]
    fn plus_minus_step_frames() {
        let b = KeyBindings::default();
        assert_eq!(b.action_for(Key::Plus), Some(Action::NextFrame));
        assert_eq!(b.action_for(Key::Minus), Some(Action::PreviousFrame));
    }

    #[test]
    fn digits_toggle_layers_then_select_blocks() {
        let b = KeyBindings::default();
        assert_eq!(
            b.action_for(Key::Digit1),
            Some(Action::ToggleLayer(Layer::Fences))
        );
        assert_eq!(
            b.action_for(Key::Digit4),
            Some(Action::ToggleLayer(Layer::Enemies))
        );
        assert_eq!(
            b.action_for(Key::Digit5),
            Some(Action::SelectBlock(BlockKind::Snake))
        );
        assert_eq!(
            b.action_for(Key::Digit7),
            Some(Action::SelectBlock(BlockKind::Sand))
        );
    }

    #[test]
    fn left_click_captures_then_removes() {
        let b = KeyBindings::default();
        assert_eq!(
            b.mouse_actions(MouseButton::Left),
            &[Action::CaptureMouse, Action::RemoveBlock]
        );
        assert_eq!(b.mouse_actions(MouseButton::Right), &[Action::PlaceBlock]);
        assert!(b.mouse_actions(MouseButton::Middle).is_empty());
    }

    #[test]
    fn rebinding_replaces_previous_binding() {
        let mut b = KeyBindings::default();
        b.bind(Key::F1, Binding::Trigger(Action::NextFrame));
        assert_eq!(b.action_for(Key::F1), Some(Action::NextFrame));
    }
}
