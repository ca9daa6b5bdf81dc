use glade_scene::systems::render::build_render_buffer;
use glade_scene::{
    AssetManifest, FixedTimestep, Game, InputEvent, InputQueue, ProtocolLayout, RenderBuffer,
    SceneConfig, SceneContext,
};

use crate::speech::SpeechBridge;

/// Generic scene runner that wires up the engine loop.
///
/// The concrete game lives in a `thread_local!` runner and is driven
/// through free functions exported via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
pub struct SceneRunner<G: Game> {
    game: G,
    ctx: SceneContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    config: SceneConfig,
    layout: ProtocolLayout,
    speech: SpeechBridge,
    manifest: Option<AssetManifest>,
    initialized: bool,
}

impl<G: Game> SceneRunner<G> {
    pub fn new(game: G, speech: SpeechBridge) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);
        let ctx = SceneContext::new(config.rng_seed);

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            render_buffer: RenderBuffer::new(),
            timestep,
            config,
            layout,
            speech,
            manifest: None,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// The asset manifest, if the host has loaded one.
    pub fn manifest(&self) -> Option<&AssetManifest> {
        self.manifest.as_ref()
    }

    /// Parse and keep the asset manifest the host loaded.
    pub fn load_manifest(&mut self, json: &str) {
        match AssetManifest::from_json(json) {
            Ok(manifest) => {
                log::info!("manifest loaded: {} atlases", manifest.atlases.len());
                self.manifest = Some(manifest);
            }
            Err(err) => log::error!("manifest parse failed: {err}"),
        }
    }

    /// Run one frame: fixed-step updates, rebuild buffers, hand queued
    /// speech to the synthesis bridge.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();
        #[cfg(feature = "vectors")]
        self.ctx.vectors.clear();

        // Fixed timestep accumulation
        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.game.update(&mut self.ctx, &self.input);
        }

        // Drain input after update
        self.input.drain();

        // Build render buffer from entities
        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);

        // Fire-and-forget speech; cancel-then-speak lives in the bridge
        for request in self.ctx.speech.drain(..) {
            self.speech.speak(&request);
        }
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn font_split(&self) -> u32 {
        self.render_buffer.font_split
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.ctx.vectors.buffer_ptr()
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertex_count(&self) -> u32 {
        self.ctx.vectors.vertex_count() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    // ---- Capacity accessors (read by the host via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_vector_vertices(&self) -> u32 {
        self.layout.max_vector_vertices as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
