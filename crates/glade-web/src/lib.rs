mod dom;
mod runner;
mod speech;

pub use runner::SceneRunner;
pub use speech::SpeechBridge;

use std::cell::RefCell;

use glade_scene::{CozyGlade, InputEvent};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<SceneRunner<CozyGlade>>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut SceneRunner<CozyGlade>) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Scene not initialized. Call start() first.");
        f(runner)
    })
}

fn push_event(event: InputEvent) {
    with_runner(|r| r.push_input(event));
}

/// Boot the scene for a viewport of the given size. The host calls this
/// once, then drives `game_tick` from its animation loop and reads the
/// render buffers after each tick.
#[wasm_bindgen]
pub fn start(width: f32, height: f32) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().expect("no global `window` exists");
    let speech = SpeechBridge::new(&window);

    let game = CozyGlade::new(width, height);
    let runner = SceneRunner::new(game, speech);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    with_runner(|r| r.init());

    if let Err(err) = dom::wire_controls(&window, push_event) {
        log::warn!("input wiring failed: {err:?}");
    }

    log::info!("cozy-glade: initialized");
}

#[wasm_bindgen]
pub fn game_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn game_load_manifest(json: &str) {
    with_runner(|r| r.load_manifest(json));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_font_split() -> u32 {
    with_runner(|r| r.font_split())
}

#[cfg(feature = "vectors")]
#[wasm_bindgen]
pub fn get_vector_vertices_ptr() -> *const f32 {
    with_runner(|r| r.vector_vertices_ptr())
}

#[cfg(feature = "vectors")]
#[wasm_bindgen]
pub fn get_vector_vertex_count() -> u32 {
    with_runner(|r| r.vector_vertex_count())
}

#[wasm_bindgen]
pub fn get_game_events_ptr() -> *const f32 {
    with_runner(|r| r.game_events_ptr())
}

#[wasm_bindgen]
pub fn get_game_events_len() -> u32 {
    with_runner(|r| r.game_events_len())
}

#[wasm_bindgen]
pub fn get_world_width() -> f32 {
    with_runner(|r| r.world_width())
}

#[wasm_bindgen]
pub fn get_world_height() -> f32 {
    with_runner(|r| r.world_height())
}

// ---- Capacity accessors ----

#[wasm_bindgen]
pub fn get_max_instances() -> u32 {
    with_runner(|r| r.max_instances())
}

#[wasm_bindgen]
pub fn get_max_vector_vertices() -> u32 {
    with_runner(|r| r.max_vector_vertices())
}

#[wasm_bindgen]
pub fn get_max_events() -> u32 {
    with_runner(|r| r.max_events())
}

#[wasm_bindgen]
pub fn get_buffer_total_floats() -> u32 {
    with_runner(|r| r.buffer_total_floats())
}
