// Optional animation helpers, decoupled from core Entity/Scene internals.
// The game opts in by owning a TweenState and ticking it.

pub mod easing;
pub mod tween;

pub use easing::{ease, ease_vec2, lerp, lerp_vec2, Easing};
pub use tween::{Tween, TweenId, TweenState, TweenTarget};
