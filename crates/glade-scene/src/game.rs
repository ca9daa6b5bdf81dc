//! The glade scene: a player, a chest, and a little encouragement.
//!
//! The player walks left and right; touching the chest shows a speech
//! bubble, speaks the message, pops a heart, and after a short cooldown
//! the chest slips away to a new spot.

use glam::Vec2;

use crate::api::game::{Game, SceneConfig, SceneContext};
use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::components::layer::RenderLayer;
use crate::components::sprite::SpriteComponent;
use crate::core::collision::aabb_overlap;
use crate::core::timer::TimerQueue;
use crate::extensions::tween::TweenState;
use crate::input::intent::IntentState;
use crate::input::queue::InputQueue;
use crate::systems::bubble::BubblePresenter;
use crate::systems::interaction::{ChestInteraction, ScheduledAction};
use crate::systems::movement;

/// The encouragement shown and spoken on every chest touch.
const MESSAGE: &str = "You're doing amazing 💙";

const FIXED_DT: f32 = 1.0 / 60.0;

const PLAYER_START_X: f32 = 80.0;
const CHEST_START_MARGIN_X: f32 = 100.0;
const PLAYER_SIZE: f32 = 64.0;
const CHEST_SIZE: f32 = 48.0;

/// Calm night tone over the background, 0x8899cc.
const BG_TINT: [f32; 3] = [0.533, 0.6, 0.8];

/// Atlas 0 cells.
const BG_CELL: (f32, f32) = (0.0, 0.0);
const PLAYER_CELL: (f32, f32) = (1.0, 0.0);
const CHEST_CELL: (f32, f32) = (0.0, 1.0);

pub struct CozyGlade {
    world: Vec2,
    speed: f32,
    player: Option<EntityId>,
    chest: Option<EntityId>,
    intent: IntentState,
    interaction: ChestInteraction,
    bubble: BubblePresenter,
    tweens: TweenState,
    timers: TimerQueue<ScheduledAction>,
}

impl CozyGlade {
    /// Build the scene for the given viewport. The movement speed is
    /// derived here, once; later resizes do not change it.
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            world: Vec2::new(viewport_width, viewport_height),
            speed: movement::derive_speed(viewport_width),
            player: None,
            chest: None,
            intent: IntentState::new(),
            interaction: ChestInteraction::new(MESSAGE),
            bubble: BubblePresenter::new(),
            tweens: TweenState::new(),
            timers: TimerQueue::new(),
        }
    }
}

impl Game for CozyGlade {
    fn config(&self) -> SceneConfig {
        SceneConfig {
            world_width: self.world.x,
            world_height: self.world.y,
            ..SceneConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut SceneContext) {
        let center_y = self.world.y / 2.0;

        let bg_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(bg_id)
                .with_tag("bg")
                .with_pos(self.world / 2.0)
                .with_scale(self.world)
                .with_layer(RenderLayer::Background)
                .with_sprite(SpriteComponent::cell(BG_CELL.0, BG_CELL.1).with_tint(BG_TINT)),
        );

        let player_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(player_id)
                .with_tag("player")
                .with_pos(Vec2::new(PLAYER_START_X, center_y))
                .with_scale(Vec2::splat(PLAYER_SIZE))
                .with_layer(RenderLayer::Objects)
                .with_sprite(SpriteComponent::cell(PLAYER_CELL.0, PLAYER_CELL.1)),
        );
        self.player = Some(player_id);

        let chest_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(chest_id)
                .with_tag("chest")
                .with_pos(Vec2::new(self.world.x - CHEST_START_MARGIN_X, center_y))
                .with_scale(Vec2::splat(CHEST_SIZE))
                .with_layer(RenderLayer::Objects)
                .with_sprite(SpriteComponent::cell(CHEST_CELL.0, CHEST_CELL.1)),
        );
        self.chest = Some(chest_id);

        log::info!(
            "glade ready: {}x{} world, speed {:.0}",
            self.world.x,
            self.world.y,
            self.speed
        );
    }

    fn update(&mut self, ctx: &mut SceneContext, input: &InputQueue) {
        let dt = FIXED_DT;
        let (Some(player_id), Some(chest_id)) = (self.player, self.chest) else {
            return;
        };

        // Scheduled work first: these deadlines belong to earlier ticks.
        for action in self.timers.advance(dt) {
            match action {
                ScheduledAction::RelocateChest => {
                    self.interaction.relocate_chest(ctx, chest_id, self.world);
                }
                ScheduledAction::HideBubble => self.bubble.hide(),
            }
        }

        // Input and movement.
        self.intent.observe(input);
        let intent = self.intent.current();
        if let Some(player) = ctx.scene.get_mut(player_id) {
            movement::steer(player, intent, self.speed);
            movement::integrate(player, dt, self.world.x);
        }

        // Player/chest overlap feeds the interaction state machine.
        let player_box = ctx.scene.get(player_id).map(|e| (e.pos, e.scale));
        let chest_box = ctx.scene.get(chest_id).map(|e| (e.pos, e.scale));
        if let (Some((p_pos, p_size)), Some((c_pos, c_size))) = (player_box, chest_box) {
            if aabb_overlap(p_pos, p_size, c_pos, c_size) {
                self.interaction.on_overlap(
                    ctx,
                    &mut self.tweens,
                    &mut self.timers,
                    &mut self.bubble,
                    p_pos,
                );
            }
        }

        // Animations, then the bubble follows the player's new position.
        self.tweens.tick(dt, &mut ctx.scene);
        if let Some(p_pos) = ctx.scene.get(player_id).map(|e| e.pos) {
            self.bubble.sync(ctx, p_pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::queue::{ControlButton, InputEvent, KeyCode};
    use crate::systems::bubble::GLYPH_TAG;
    use crate::systems::interaction::{ChestPhase, HEART_TAG, RELOCATE_MARGIN};

    const W: f32 = 800.0;
    const H: f32 = 600.0;

    fn new_game() -> (CozyGlade, SceneContext) {
        let mut game = CozyGlade::new(W, H);
        let mut ctx = SceneContext::new(game.config().rng_seed);
        game.init(&mut ctx);
        (game, ctx)
    }

    fn idle_ticks(game: &mut CozyGlade, ctx: &mut SceneContext, n: usize) {
        let input = InputQueue::new();
        for _ in 0..n {
            game.update(ctx, &input);
        }
    }

    fn player_entity<'a>(game: &CozyGlade, ctx: &'a SceneContext) -> &'a Entity {
        ctx.scene.get(game.player.unwrap()).unwrap()
    }

    fn teleport_player(game: &CozyGlade, ctx: &mut SceneContext, pos: Vec2) {
        ctx.scene.get_mut(game.player.unwrap()).unwrap().pos = pos;
    }

    #[test]
    fn init_spawns_background_player_chest() {
        let (game, ctx) = new_game();
        assert_eq!(ctx.scene.len(), 3);

        let player = player_entity(&game, &ctx);
        assert_eq!(player.pos, Vec2::new(80.0, 300.0));

        let chest = ctx.scene.get(game.chest.unwrap()).unwrap();
        assert_eq!(chest.pos, Vec2::new(700.0, 300.0));

        let bg = ctx.scene.find_by_tag("bg").unwrap();
        assert_eq!(bg.scale, Vec2::new(W, H));
        assert_eq!(bg.layer, RenderLayer::Background);
    }

    #[test]
    fn idle_player_has_zero_velocity() {
        let (mut game, mut ctx) = new_game();
        idle_ticks(&mut game, &mut ctx, 5);
        assert_eq!(player_entity(&game, &ctx).vel.x, 0.0);
    }

    #[test]
    fn key_held_moves_then_release_stops() {
        let (mut game, mut ctx) = new_game();
        let speed = movement::derive_speed(W);

        let mut input = InputQueue::new();
        input.push(InputEvent::KeyDown {
            key: KeyCode::ArrowRight,
        });
        game.update(&mut ctx, &input);
        assert_eq!(player_entity(&game, &ctx).vel.x, speed);

        // Held key: no further events, intent persists
        idle_ticks(&mut game, &mut ctx, 3);
        assert_eq!(player_entity(&game, &ctx).vel.x, speed);

        let mut input = InputQueue::new();
        input.push(InputEvent::KeyUp {
            key: KeyCode::ArrowRight,
        });
        game.update(&mut ctx, &input);
        assert_eq!(player_entity(&game, &ctx).vel.x, 0.0, "no residual motion");
    }

    #[test]
    fn touch_button_drives_movement() {
        let (mut game, mut ctx) = new_game();
        let speed = movement::derive_speed(W);
        // Start away from the left wall so the clamp stays out of the way
        teleport_player(&game, &mut ctx, Vec2::new(400.0, 300.0));

        let mut input = InputQueue::new();
        input.push(InputEvent::ButtonDown {
            button: ControlButton::Left,
        });
        game.update(&mut ctx, &input);

        let player = player_entity(&game, &ctx);
        assert_eq!(player.vel.x, -speed);
        assert!(player.pos.x < 400.0);

        let mut input = InputQueue::new();
        input.push(InputEvent::ButtonUp {
            button: ControlButton::Left,
        });
        game.update(&mut ctx, &input);
        assert_eq!(player_entity(&game, &ctx).vel.x, 0.0, "no residual motion");
    }

    #[test]
    fn right_wins_when_both_directions_held() {
        let (mut game, mut ctx) = new_game();
        let speed = movement::derive_speed(W);

        let mut input = InputQueue::new();
        input.push(InputEvent::ButtonDown {
            button: ControlButton::Left,
        });
        input.push(InputEvent::KeyDown {
            key: KeyCode::ArrowRight,
        });
        game.update(&mut ctx, &input);
        assert_eq!(player_entity(&game, &ctx).vel.x, speed);
    }

    #[test]
    fn full_interaction_scenario() {
        let (mut game, mut ctx) = new_game();

        // t=0: walk the player onto the chest
        let chest_pos = ctx.scene.get(game.chest.unwrap()).unwrap().pos;
        teleport_player(&game, &mut ctx, chest_pos);
        idle_ticks(&mut game, &mut ctx, 1);

        assert!(game.bubble.is_visible());
        assert_eq!(game.bubble.text(), MESSAGE);
        assert_eq!(game.interaction.phase(), ChestPhase::CoolingDown);
        assert_eq!(ctx.scene.count_tagged(HEART_TAG), 1);
        assert!(ctx.scene.count_tagged(GLYPH_TAG) > 0);
        assert_eq!(ctx.speech.len(), 1);
        assert_eq!(ctx.speech[0].text, "You're doing amazing");

        // Step aside so the relocated chest cannot land on the player
        teleport_player(&game, &mut ctx, Vec2::new(100.0, -500.0));

        // t=600ms: the chest has moved inside the margins and re-armed
        idle_ticks(&mut game, &mut ctx, 40);
        assert_eq!(game.interaction.phase(), ChestPhase::Active);
        let chest = ctx.scene.get(game.chest.unwrap()).unwrap();
        assert!(chest.pos.x >= RELOCATE_MARGIN);
        assert!(chest.pos.x <= W - RELOCATE_MARGIN);
        assert_eq!(chest.pos.y, H / 2.0);

        // t=2500ms: the bubble has auto-hidden and everything ephemeral
        // is gone
        idle_ticks(&mut game, &mut ctx, 120);
        assert!(!game.bubble.is_visible());
        assert_eq!(ctx.scene.count_tagged(GLYPH_TAG), 0);
        assert_eq!(ctx.scene.count_tagged(HEART_TAG), 0);
        assert_eq!(ctx.scene.len(), 3, "no leaked entities");
    }

    #[test]
    fn continuous_overlap_triggers_once() {
        let (mut game, mut ctx) = new_game();

        let chest_pos = ctx.scene.get(game.chest.unwrap()).unwrap().pos;
        teleport_player(&game, &mut ctx, chest_pos);

        // Stand on the chest for 30 frames (under the 600ms cooldown)
        idle_ticks(&mut game, &mut ctx, 30);

        assert_eq!(ctx.speech.len(), 1, "one trigger, one utterance");
        assert_eq!(ctx.scene.count_tagged(HEART_TAG), 1);
    }
}
