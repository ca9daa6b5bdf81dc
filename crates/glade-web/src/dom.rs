//! DOM input wiring: keyboard listeners on the window and the two
//! on-screen touch buttons.
//!
//! The touch buttons are optional page furniture; when an element is
//! missing the scene simply stays keyboard-only.

use glade_scene::{ControlButton, InputEvent, KeyCode};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Window};

/// DOM ids of the touch buttons.
const TOUCH_BUTTONS: [(&str, ControlButton); 2] =
    [("left", ControlButton::Left), ("right", ControlButton::Right)];

type PushFn = fn(InputEvent);

/// Attach all input listeners. The push function forwards events into the
/// runner's input queue.
pub fn wire_controls(window: &Window, push: PushFn) -> Result<(), JsValue> {
    wire_keyboard(window, push)?;
    wire_touch_buttons(window, push);
    Ok(())
}

fn key_from_event(event: &KeyboardEvent) -> Option<KeyCode> {
    match event.key().as_str() {
        "ArrowLeft" | "a" | "A" => Some(KeyCode::ArrowLeft),
        "ArrowRight" | "d" | "D" => Some(KeyCode::ArrowRight),
        _ => None,
    }
}

fn wire_keyboard(window: &Window, push: PushFn) -> Result<(), JsValue> {
    let down = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if let Some(key) = key_from_event(&event) {
            push(InputEvent::KeyDown { key });
        }
    });
    window.add_event_listener_with_callback("keydown", down.as_ref().unchecked_ref())?;
    down.forget();

    let up = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if let Some(key) = key_from_event(&event) {
            push(InputEvent::KeyUp { key });
        }
    });
    window.add_event_listener_with_callback("keyup", up.as_ref().unchecked_ref())?;
    up.forget();

    Ok(())
}

fn wire_touch_buttons(window: &Window, push: PushFn) {
    let Some(document) = window.document() else {
        return;
    };

    for (id, button) in TOUCH_BUTTONS {
        let Some(element) = document.get_element_by_id(id) else {
            log::debug!("touch control '{id}' not present; skipping");
            continue;
        };

        let start = Closure::<dyn FnMut()>::new(move || push(InputEvent::ButtonDown { button }));
        let end = Closure::<dyn FnMut()>::new(move || push(InputEvent::ButtonUp { button }));

        if element
            .add_event_listener_with_callback("touchstart", start.as_ref().unchecked_ref())
            .is_ok()
        {
            start.forget();
        }
        if element
            .add_event_listener_with_callback("touchend", end.as_ref().unchecked_ref())
            .is_ok()
        {
            end.forget();
        }
    }
}
