//! Horizontal steering for the player.
//!
//! Velocity is not persistent state: it is rebuilt from the frame's intent
//! on every tick, so a released key stops the player on the next frame.

use glam::Vec2;

use crate::components::entity::Entity;
use crate::input::intent::MoveIntent;

/// Movement speed as a fraction of the viewport width.
const SPEED_VIEWPORT_FRACTION: f32 = 0.2;
/// Lower bound so narrow viewports still move at a playable pace.
const MIN_SPEED: f32 = 250.0;

/// Derive the horizontal speed constant from the initial viewport width.
/// Computed once at startup; there is no resize-driven recalculation.
pub fn derive_speed(viewport_width: f32) -> f32 {
    (viewport_width * SPEED_VIEWPORT_FRACTION).max(MIN_SPEED)
}

/// Rebuild the entity's horizontal velocity from this frame's intent.
/// Left is evaluated first and right unconditionally overwrites, so
/// simultaneous left+right resolves to +speed.
pub fn steer(entity: &mut Entity, intent: MoveIntent, speed: f32) {
    entity.vel.x = 0.0;
    if intent.left {
        entity.vel.x = -speed;
    }
    if intent.right {
        entity.vel.x = speed;
    }
}

/// Integrate velocity and clamp the entity inside the world horizontally.
/// The clamp keeps the entity's full extent on screen, matching
/// collide-with-world-bounds behavior.
pub fn integrate(entity: &mut Entity, dt: f32, world_width: f32) {
    entity.pos += entity.vel * dt;
    let half = entity.scale.x * 0.5;
    entity.pos.x = entity.pos.x.clamp(half, world_width - half);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;

    fn player() -> Entity {
        Entity::new(EntityId(1))
            .with_pos(Vec2::new(400.0, 300.0))
            .with_scale(Vec2::splat(64.0))
    }

    #[test]
    fn speed_scales_with_viewport() {
        assert_eq!(derive_speed(2000.0), 400.0);
    }

    #[test]
    fn speed_is_floored_for_narrow_viewports() {
        assert_eq!(derive_speed(320.0), 250.0);
    }

    #[test]
    fn idle_intent_means_zero_velocity() {
        let mut e = player();
        e.vel.x = 123.0;
        steer(&mut e, MoveIntent::default(), 300.0);
        assert_eq!(e.vel.x, 0.0);
    }

    #[test]
    fn left_intent_moves_left() {
        let mut e = player();
        steer(
            &mut e,
            MoveIntent {
                left: true,
                right: false,
            },
            300.0,
        );
        assert_eq!(e.vel.x, -300.0);
    }

    #[test]
    fn right_takes_precedence_over_left() {
        let mut e = player();
        steer(
            &mut e,
            MoveIntent {
                left: true,
                right: true,
            },
            300.0,
        );
        assert_eq!(e.vel.x, 300.0);
    }

    #[test]
    fn integrate_moves_and_clamps() {
        let mut e = player();
        e.vel.x = -300.0;
        integrate(&mut e, 1.0 / 60.0, 800.0);
        assert!((e.pos.x - 395.0).abs() < 0.01);

        // Run into the left wall
        e.pos.x = 33.0;
        for _ in 0..60 {
            integrate(&mut e, 1.0 / 60.0, 800.0);
        }
        assert_eq!(e.pos.x, 32.0, "clamped at half the entity extent");
    }
}
