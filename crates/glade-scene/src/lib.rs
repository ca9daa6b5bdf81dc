pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod extensions;
pub mod speech;
pub mod game;

// Re-export key types at crate root for convenience
pub use api::game::{Game, SceneConfig, SceneContext};
pub use api::types::{EntityId, GameEvent};
pub use components::entity::Entity;
pub use components::layer::RenderLayer;
pub use components::sprite::{AtlasId, SpriteComponent};
pub use crate::core::collision::aabb_overlap;
pub use crate::core::rng::Rng;
pub use crate::core::scene::Scene;
pub use crate::core::time::FixedTimestep;
pub use crate::core::timer::{TimerId, TimerQueue};
pub use input::queue::{ControlButton, InputEvent, InputQueue, KeyCode};
pub use input::intent::{IntentState, MoveIntent};
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use bridge::protocol::ProtocolLayout;
pub use assets::manifest::AssetManifest;
pub use systems::text::FontConfig;
pub use speech::SpeechRequest;
pub use extensions::{ease, ease_vec2, lerp, lerp_vec2, Easing, Tween, TweenId, TweenState, TweenTarget};
#[cfg(feature = "vectors")]
pub use systems::vector::{VectorColor, VectorState, VectorVertex};
pub use game::CozyGlade;
