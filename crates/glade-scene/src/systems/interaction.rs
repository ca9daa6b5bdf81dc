//! Chest interaction state machine.
//!
//! Two phases, cycling forever:
//!
//! * `Active` — an overlap with the player fires the trigger sequence:
//!   show the message, queue speech, pop a heart, schedule the relocate.
//! * `CoolingDown` — overlap reports are ignored. Physics-style overlap
//!   callbacks fire on every frame two bodies intersect; this phase is what
//!   keeps the sequence from re-firing dozens of times per touch.
//!
//! The scheduled relocate moves the chest to a fresh random column and
//! flips the phase back to `Active`.

use glam::Vec2;

use crate::api::game::SceneContext;
use crate::api::types::{EntityId, GameEvent};
use crate::components::entity::Entity;
use crate::components::layer::RenderLayer;
use crate::components::sprite::SpriteComponent;
use crate::core::timer::TimerQueue;
use crate::extensions::easing::Easing;
use crate::extensions::tween::{Tween, TweenState};
use crate::speech::SpeechRequest;
use crate::systems::bubble::BubblePresenter;

/// Delay between a trigger and the chest relocating, in milliseconds.
pub const COOLDOWN_MS: f64 = 600.0;
/// Horizontal margin the relocated chest keeps from the world edges.
pub const RELOCATE_MARGIN: f32 = 80.0;

/// Heart pop: spawn offset above the player, rise distance, lifetime.
const HEART_OFFSET_Y: f32 = 20.0;
const HEART_RISE: f32 = 40.0;
const HEART_DURATION: f32 = 0.8;
const HEART_SIZE: f32 = 24.0;
/// Atlas 0 cell of the heart sprite.
const HEART_CELL: (f32, f32) = (1.0, 1.0);

/// Tag carried by heart effect entities.
pub const HEART_TAG: &str = "heart";

/// Event kinds forwarded to the UI layer.
pub const EVENT_CHEST_OPENED: f32 = 1.0;
pub const EVENT_CHEST_MOVED: f32 = 2.0;

/// Actions the game schedules on its timer queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledAction {
    RelocateChest,
    HideBubble,
}

/// The interaction phase. `Active` can trigger; `CoolingDown` ignores
/// overlaps until the scheduled relocate has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChestPhase {
    Active,
    CoolingDown,
}

pub struct ChestInteraction {
    phase: ChestPhase,
    message: String,
}

impl ChestInteraction {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            phase: ChestPhase::Active,
            message: message.into(),
        }
    }

    pub fn phase(&self) -> ChestPhase {
        self.phase
    }

    /// Report a player/chest overlap for this frame.
    ///
    /// In `Active`, runs the trigger sequence in order: bubble message,
    /// speech request, heart pop, scheduled relocate. In `CoolingDown`
    /// this is a no-op, which makes repeated per-frame overlap reports
    /// harmless.
    pub fn on_overlap(
        &mut self,
        ctx: &mut SceneContext,
        tweens: &mut TweenState,
        timers: &mut TimerQueue<ScheduledAction>,
        bubble: &mut BubblePresenter,
        player_pos: Vec2,
    ) {
        if self.phase != ChestPhase::Active {
            return;
        }
        self.phase = ChestPhase::CoolingDown;
        log::debug!("chest triggered at player x={:.0}", player_pos.x);

        bubble.show(&self.message, timers, ScheduledAction::HideBubble);
        ctx.request_speech(SpeechRequest::say(&self.message));
        spawn_heart(ctx, tweens, player_pos);
        timers.schedule_ms(COOLDOWN_MS, ScheduledAction::RelocateChest);

        ctx.emit_event(GameEvent {
            kind: EVENT_CHEST_OPENED,
            a: player_pos.x,
            b: player_pos.y,
            c: 0.0,
        });
    }

    /// Scheduled follow-up to a trigger: move the chest to a random
    /// horizontal position inside the margins, at the vertical center,
    /// and accept triggers again.
    pub fn relocate_chest(&mut self, ctx: &mut SceneContext, chest: EntityId, world: Vec2) {
        let x = ctx.rng.range_f32(RELOCATE_MARGIN, world.x - RELOCATE_MARGIN);
        let pos = Vec2::new(x, world.y / 2.0);
        if let Some(entity) = ctx.scene.get_mut(chest) {
            entity.pos = pos;
        }
        self.phase = ChestPhase::Active;
        log::debug!("chest relocated to x={x:.0}");

        ctx.emit_event(GameEvent {
            kind: EVENT_CHEST_MOVED,
            a: pos.x,
            b: pos.y,
            c: 0.0,
        });
    }
}

/// Spawn the ephemeral heart above the player: rises, fades, despawns
/// itself when the fade completes.
fn spawn_heart(ctx: &mut SceneContext, tweens: &mut TweenState, player_pos: Vec2) {
    let id = ctx.next_id();
    let start_y = player_pos.y - HEART_OFFSET_Y;

    ctx.scene.spawn(
        Entity::new(id)
            .with_tag(HEART_TAG)
            .with_pos(Vec2::new(player_pos.x, start_y))
            .with_scale(Vec2::splat(HEART_SIZE))
            .with_layer(RenderLayer::Vfx)
            .with_sprite(SpriteComponent::cell(HEART_CELL.0, HEART_CELL.1)),
    );

    tweens.add(
        id,
        Tween::position_y(start_y, start_y - HEART_RISE, HEART_DURATION, Easing::SineOut),
    );
    tweens.add(
        id,
        Tween::fade_out(HEART_DURATION, Easing::SineOut).with_despawn(),
    );
}
