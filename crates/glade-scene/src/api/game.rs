use crate::api::types::{EntityId, GameEvent};
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::speech::SpeechRequest;
#[cfg(feature = "vectors")]
use crate::systems::vector::VectorState;

/// Configuration for the scene runtime, provided by the game.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// World width in game units. Derived from the viewport at startup.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Maximum number of render instances (default: 128).
    pub max_instances: usize,
    /// Maximum number of vector vertices per frame (default: 4096).
    pub max_vector_vertices: usize,
    /// Maximum number of game events per frame (default: 16).
    pub max_events: usize,
    /// Seed for the scene's deterministic RNG.
    pub rng_seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 600.0,
            max_instances: 128,
            max_vector_vertices: 4096,
            max_events: 16,
            rng_seed: 42,
        }
    }
}

/// The core contract the game fulfills.
pub trait Game {
    /// Return scene configuration. Called once before init.
    fn config(&self) -> SceneConfig {
        SceneConfig::default()
    }

    /// Setup initial state and spawn the starting entities.
    fn init(&mut self, ctx: &mut SceneContext);

    /// One fixed-timestep tick. Drives timers, input, movement and overlap.
    fn update(&mut self, ctx: &mut SceneContext, input: &InputQueue);
}

/// Mutable access to shared scene state, passed to Game::init and Game::update.
///
/// This is the one owner of everything the systems mutate — there is no
/// module-level mutable state anywhere in the crate.
pub struct SceneContext {
    pub scene: Scene,
    /// Vector draw commands for the current frame (bubble background).
    #[cfg(feature = "vectors")]
    pub vectors: VectorState,
    /// Speech requests queued this frame, drained by the host bridge.
    pub speech: Vec<SpeechRequest>,
    /// Game events queued this frame, forwarded to the UI layer.
    pub events: Vec<GameEvent>,
    pub rng: Rng,
    next_id: u32,
}

impl SceneContext {
    pub fn new(seed: u64) -> Self {
        Self {
            scene: Scene::new(),
            #[cfg(feature = "vectors")]
            vectors: VectorState::new(),
            speech: Vec::new(),
            events: Vec::new(),
            rng: Rng::new(seed),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Queue a speech request for the host's synthesis bridge.
    pub fn request_speech(&mut self, request: SpeechRequest) {
        self.speech.push(request);
    }

    /// Emit a game event to be forwarded to the UI layer.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (speech requests, events).
    pub fn clear_frame_data(&mut self) {
        self.speech.clear();
        self.events.clear();
    }
}

impl Default for SceneContext {
    fn default() -> Self {
        Self::new(SceneConfig::default().rng_seed)
    }
}
