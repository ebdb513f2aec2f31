use snakeview_common::{BlockKind, Layer};

/// Keys the viewer reacts to, independent of the windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Space,
    LShift,
    Escape,
    Plus,
    Minus,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    F1,
}

/// A discrete viewer command produced by a key press or mouse click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Step to the next snapshot file.
    NextFrame,
    /// Step to the previous snapshot file.
    PreviousFrame,
    /// Show or hide one snapshot category and rebuild the scene.
    ToggleLayer(Layer),
    /// Choose the kind used for placed blocks.
    SelectBlock(BlockKind),
    /// Hide the cursor and start mouse look.
    CaptureMouse,
    /// Show the cursor and stop mouse look.
    ReleaseMouse,
    /// Remove the block under the crosshair.
    RemoveBlock,
    /// Place the selected kind against the block under the crosshair.
    PlaceBlock,
    /// Show or hide the overlay panel.
    ToggleHud,
    /// No-op (used for input mapping that hasn't been bound yet).
    Noop,
}

/// Directions that stay active while their key is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl Movement {
    pub const ALL: [Movement; 6] = [
        Movement::Forward,
        Movement::Backward,
        Movement::Left,
        Movement::Right,
        Movement::Up,
        Movement::Down,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Which movement keys are currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementState {
    held: [bool; 6],
}

impl MovementState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, movement: Movement, held: bool) {
        self.held[movement.index()] = held;
    }

    pub fn is_held(&self, movement: Movement) -> bool {
        self.held[movement.index()]
    }

    /// Release everything, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.held = [false; 6];
    }

    pub fn any(&self) -> bool {
        self.held.iter().any(|h| *h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_state_tracks_press_and_release() {
        let mut state = MovementState::new();
        assert!(!state.any());
        state.set(Movement::Forward, true);
        state.set(Movement::Up, true);
        assert!(state.is_held(Movement::Forward));
        assert!(state.is_held(Movement::Up));
        assert!(!state.is_held(Movement::Backward));
        state.set(Movement::Forward, false);
        assert!(!state.is_held(Movement::Forward));
    }

    #[test]
    fn clear_releases_all() {
        let mut state = MovementState::new();
        for m in Movement::ALL {
            state.set(m, true);
        }
        state.clear();
        assert!(!state.any());
    }

    #[test]
    fn action_toggle_layer_carries_layer() {
        let a = Action::ToggleLayer(Layer::Food);
        assert!(matches!(a, Action::ToggleLayer(Layer::Food)));
    }
}
