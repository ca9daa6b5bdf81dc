use crate::input::queue::{ControlButton, InputEvent, InputQueue, KeyCode};

/// Directional intent for one frame: the union of keyboard held-state and
/// touch-button held-state. Both flags can be set at once; precedence is
/// the movement system's concern, not the aggregator's.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub left: bool,
    pub right: bool,
}

/// Tracks which direction sources are currently held.
///
/// Key and button events carry only edges (down/up); this folds them into
/// level state so the game can ask "is left held right now" every tick.
/// There is no memory beyond the current press state.
#[derive(Debug, Default)]
pub struct IntentState {
    key_left: bool,
    key_right: bool,
    touch_left: bool,
    touch_right: bool,
}

impl IntentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the held-state.
    pub fn apply(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { key } => self.set_key(*key, true),
            InputEvent::KeyUp { key } => self.set_key(*key, false),
            InputEvent::ButtonDown { button } => self.set_button(*button, true),
            InputEvent::ButtonUp { button } => self.set_button(*button, false),
        }
    }

    /// Fold every pending event into the held-state.
    pub fn observe(&mut self, queue: &InputQueue) {
        for event in queue.iter() {
            self.apply(event);
        }
    }

    /// The combined directional intent for this frame.
    pub fn current(&self) -> MoveIntent {
        MoveIntent {
            left: self.key_left || self.touch_left,
            right: self.key_right || self.touch_right,
        }
    }

    fn set_key(&mut self, key: KeyCode, down: bool) {
        match key {
            KeyCode::ArrowLeft => self.key_left = down,
            KeyCode::ArrowRight => self.key_right = down,
        }
    }

    fn set_button(&mut self, button: ControlButton, down: bool) {
        match button {
            ControlButton::Left => self.touch_left = down,
            ControlButton::Right => self.touch_right = down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_state_has_no_intent() {
        let state = IntentState::new();
        assert_eq!(state.current(), MoveIntent::default());
    }

    #[test]
    fn key_press_and_release() {
        let mut state = IntentState::new();
        state.apply(&InputEvent::KeyDown {
            key: KeyCode::ArrowLeft,
        });
        assert!(state.current().left);

        state.apply(&InputEvent::KeyUp {
            key: KeyCode::ArrowLeft,
        });
        assert!(!state.current().left);
    }

    #[test]
    fn touch_and_keyboard_union() {
        let mut state = IntentState::new();
        state.apply(&InputEvent::ButtonDown {
            button: ControlButton::Left,
        });
        state.apply(&InputEvent::KeyDown {
            key: KeyCode::ArrowRight,
        });

        let intent = state.current();
        assert!(intent.left);
        assert!(intent.right);
    }

    #[test]
    fn releasing_touch_keeps_key_intent() {
        let mut state = IntentState::new();
        state.apply(&InputEvent::ButtonDown {
            button: ControlButton::Right,
        });
        state.apply(&InputEvent::KeyDown {
            key: KeyCode::ArrowRight,
        });
        state.apply(&InputEvent::ButtonUp {
            button: ControlButton::Right,
        });
        assert!(state.current().right);
    }

    #[test]
    fn observe_folds_whole_queue() {
        let mut q = InputQueue::new();
        q.push(InputEvent::ButtonDown {
            button: ControlButton::Left,
        });
        q.push(InputEvent::ButtonUp {
            button: ControlButton::Left,
        });

        let mut state = IntentState::new();
        state.observe(&q);
        assert!(!state.current().left);
    }
}
