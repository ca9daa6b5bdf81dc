// Tween system — animated value transitions keyed by EntityId.
//
// Usage:
//   let mut tweens = TweenState::new();
//   tweens.add(heart_id, Tween::position_y(from, to, 0.8, Easing::SineOut));
//   tweens.tick(dt, &mut scene);  // advances all tweens, updates entities

use std::collections::HashMap;

use glam::Vec2;

use crate::api::types::EntityId;
use crate::core::scene::Scene;
use super::easing::{ease, ease_vec2, Easing};

/// What property a tween animates.
#[derive(Debug, Clone, Copy)]
pub enum TweenTarget {
    /// Animate Entity.pos
    Position { from: Vec2, to: Vec2 },
    /// Animate Entity.pos.y only
    PositionY { from: f32, to: f32 },
    /// Animate Entity.scale
    Scale { from: Vec2, to: Vec2 },
    /// Animate sprite alpha (if a sprite exists)
    Alpha { from: f32, to: f32 },
}

/// A single one-shot tween animation.
#[derive(Debug, Clone)]
pub struct Tween {
    /// What to animate.
    pub target: TweenTarget,
    /// Duration in seconds.
    pub duration: f32,
    /// Elapsed time.
    pub elapsed: f32,
    /// Easing function.
    pub easing: Easing,
    /// Despawn the entity from the scene when this tween completes.
    /// Ephemeral effects (the heart pop) ride on this.
    pub despawn_on_complete: bool,
}

impl Tween {
    fn new(target: TweenTarget, duration: f32, easing: Easing) -> Self {
        Self {
            target,
            duration,
            elapsed: 0.0,
            easing,
            despawn_on_complete: false,
        }
    }

    /// Create a position tween.
    pub fn position(from: Vec2, to: Vec2, duration: f32, easing: Easing) -> Self {
        Self::new(TweenTarget::Position { from, to }, duration, easing)
    }

    /// Create a position Y tween.
    pub fn position_y(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self::new(TweenTarget::PositionY { from, to }, duration, easing)
    }

    /// Create a scale tween.
    pub fn scale(from: Vec2, to: Vec2, duration: f32, easing: Easing) -> Self {
        Self::new(TweenTarget::Scale { from, to }, duration, easing)
    }

    /// Create an alpha (fade) tween.
    pub fn alpha(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self::new(TweenTarget::Alpha { from, to }, duration, easing)
    }

    /// Fade out to transparent.
    pub fn fade_out(duration: f32, easing: Easing) -> Self {
        Self::alpha(1.0, 0.0, duration, easing)
    }

    /// Remove the animated entity from the scene once complete.
    pub fn with_despawn(mut self) -> Self {
        self.despawn_on_complete = true;
        self
    }

    /// Normalized progress [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }
}

/// Handle to a tween for later reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenId(pub u32);

/// Manages all active tweens.
#[derive(Debug, Default)]
pub struct TweenState {
    tweens: HashMap<TweenId, (EntityId, Tween)>,
    next_id: u32,
}

impl TweenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tween for an entity. Returns a handle for later control.
    pub fn add(&mut self, entity: EntityId, tween: Tween) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.tweens.insert(id, (entity, tween));
        id
    }

    /// Remove a tween by handle.
    pub fn remove(&mut self, id: TweenId) -> bool {
        self.tweens.remove(&id).is_some()
    }

    /// Remove all tweens for an entity.
    pub fn remove_entity(&mut self, entity: EntityId) {
        self.tweens.retain(|_, (e, _)| *e != entity);
    }

    /// Number of active tweens.
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Advance all tweens and apply them to entities in the scene.
    /// Completed tweens are removed; entities whose completed tween asked
    /// for it are despawned. Returns the number of tweens that completed.
    pub fn tick(&mut self, dt: f32, scene: &mut Scene) -> usize {
        let mut completed: Vec<TweenId> = Vec::new();
        let mut despawn: Vec<EntityId> = Vec::new();

        for (&id, (entity_id, tween)) in self.tweens.iter_mut() {
            tween.elapsed += dt;
            let t = tween.progress();

            if let Some(entity) = scene.get_mut(*entity_id) {
                match tween.target {
                    TweenTarget::Position { from, to } => {
                        entity.pos = ease_vec2(from, to, t, tween.easing);
                    }
                    TweenTarget::PositionY { from, to } => {
                        entity.pos.y = ease(from, to, t, tween.easing);
                    }
                    TweenTarget::Scale { from, to } => {
                        entity.scale = ease_vec2(from, to, t, tween.easing);
                    }
                    TweenTarget::Alpha { from, to } => {
                        if let Some(sprite) = &mut entity.sprite {
                            sprite.alpha = ease(from, to, t, tween.easing);
                        }
                    }
                }
            }

            if tween.elapsed >= tween.duration {
                completed.push(id);
                if tween.despawn_on_complete {
                    despawn.push(*entity_id);
                }
            }
        }

        let count = completed.len();
        for id in completed {
            self.tweens.remove(&id);
        }
        for entity_id in despawn {
            self.remove_entity(entity_id);
            scene.despawn(entity_id);
        }

        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Entity;
    use crate::components::sprite::SpriteComponent;

    #[test]
    fn tween_position_y() {
        let mut tweens = TweenState::new();
        let mut scene = Scene::new();
        let id = EntityId(1);

        scene.spawn(Entity::new(id).with_pos(Vec2::new(0.0, 100.0)));
        tweens.add(id, Tween::position_y(100.0, 60.0, 1.0, Easing::Linear));

        tweens.tick(0.5, &mut scene);
        let e = scene.get(id).unwrap();
        assert!((e.pos.y - 80.0).abs() < 0.01);

        tweens.tick(0.5, &mut scene);
        let e = scene.get(id).unwrap();
        assert!((e.pos.y - 60.0).abs() < 0.01);
        assert!(tweens.is_empty());
    }

    #[test]
    fn alpha_tween_needs_sprite() {
        let mut tweens = TweenState::new();
        let mut scene = Scene::new();
        let id = EntityId(1);

        scene.spawn(Entity::new(id).with_sprite(SpriteComponent::default()));
        tweens.add(id, Tween::fade_out(1.0, Easing::Linear));

        tweens.tick(0.25, &mut scene);
        let sprite = scene.get(id).unwrap().sprite.as_ref().unwrap();
        assert!((sprite.alpha - 0.75).abs() < 0.01);
    }

    #[test]
    fn despawn_on_complete_removes_entity() {
        let mut tweens = TweenState::new();
        let mut scene = Scene::new();
        let id = EntityId(1);

        scene.spawn(Entity::new(id).with_sprite(SpriteComponent::default()));
        // Two tweens on the same entity, only one carries the despawn flag,
        // like the heart's rise + fade pair.
        tweens.add(id, Tween::position_y(100.0, 60.0, 0.8, Easing::SineOut));
        tweens.add(id, Tween::fade_out(0.8, Easing::SineOut).with_despawn());

        tweens.tick(0.4, &mut scene);
        assert!(scene.get(id).is_some());

        tweens.tick(0.4, &mut scene);
        assert!(scene.get(id).is_none(), "entity should self-destroy");
        assert!(tweens.is_empty(), "no orphaned tweens may remain");
    }

    #[test]
    fn remove_entity_tweens() {
        let mut tweens = TweenState::new();
        let id = EntityId(1);

        tweens.add(id, Tween::position(Vec2::ZERO, Vec2::ONE, 1.0, Easing::Linear));
        tweens.add(id, Tween::fade_out(1.0, Easing::Linear));

        assert_eq!(tweens.len(), 2);
        tweens.remove_entity(id);
        assert!(tweens.is_empty());
    }
}
