/// Keyboard keys the scene reacts to. The host bridge filters everything
/// else before it reaches the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    ArrowLeft,
    ArrowRight,
}

/// On-screen touch buttons (DOM elements with ids `left` and `right`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlButton {
    Left,
    Right,
}

/// Input event types the scene understands.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// A key was pressed.
    KeyDown { key: KeyCode },
    /// A key was released.
    KeyUp { key: KeyCode },
    /// A touch button was pressed.
    ButtonDown { button: ControlButton },
    /// A touch button was released.
    ButtonUp { button: ControlButton },
}

/// A queue of input events.
/// The host writes events in as they arrive; the game reads them each frame
/// and the runner drains the queue afterwards.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    /// Push a new input event (called from the browser bridge).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events, clearing the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
