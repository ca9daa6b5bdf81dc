//! Speech bubble presenter.
//!
//! The bubble tracks the player: while visible, the wrapped glyph block and
//! the rounded background are recomputed every frame from the player's
//! current position. Hidden bubbles do no per-frame work beyond tearing
//! down their glyphs once.
//!
//! Showing a message while a previous hide timer is pending cancels that
//! timer and schedules a fresh one, so the newest message always gets the
//! full display duration.

use glam::Vec2;

use crate::api::game::SceneContext;
use crate::core::timer::{TimerId, TimerQueue};
#[cfg(feature = "vectors")]
use crate::systems::text::measure_block;
use crate::systems::text::{build_text_block, wrap_text, FontConfig};
#[cfg(feature = "vectors")]
use crate::systems::vector::VectorColor;

/// How long a message stays up before auto-hiding, in milliseconds.
pub const DISPLAY_MS: f64 = 2500.0;
/// Vertical offset of the bubble center above the player center.
const OFFSET_Y: f32 = 70.0;
/// Wrap width for the text block.
const WRAP_WIDTH: f32 = 220.0;
/// Glyph size in world units.
const FONT_SIZE: f32 = 14.0;
/// Horizontal and vertical padding between text bounds and background.
#[cfg(feature = "vectors")]
const PAD_X: f32 = 10.0;
#[cfg(feature = "vectors")]
const PAD_Y: f32 = 8.0;
/// Corner radius of the background.
#[cfg(feature = "vectors")]
const CORNER_RADIUS: f32 = 12.0;
/// Background opacity.
#[cfg(feature = "vectors")]
const BG_ALPHA: f32 = 0.95;

/// Tag carried by every glyph entity the presenter spawns.
pub const GLYPH_TAG: &str = "bubble-text";

pub struct BubblePresenter {
    visible: bool,
    text: String,
    lines: Vec<String>,
    hide_timer: Option<TimerId>,
    has_glyphs: bool,
    font: FontConfig,
}

impl BubblePresenter {
    pub fn new() -> Self {
        Self {
            visible: false,
            text: String::new(),
            lines: Vec::new(),
            hide_timer: None,
            has_glyphs: false,
            font: FontConfig::default(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Show `text` and (re)schedule the auto-hide. A pending hide timer is
    /// cancelled first so re-triggering restarts the full duration.
    pub fn show<A>(&mut self, text: &str, timers: &mut TimerQueue<A>, hide_action: A) {
        if let Some(id) = self.hide_timer.take() {
            timers.cancel(id);
        }
        self.text = text.to_string();
        self.lines = wrap_text(text, FONT_SIZE, WRAP_WIDTH, &self.font);
        self.visible = true;
        self.hide_timer = Some(timers.schedule_ms(DISPLAY_MS, hide_action));
    }

    /// Hide the bubble. Called when the scheduled hide action fires.
    pub fn hide(&mut self) {
        self.visible = false;
        self.hide_timer = None;
    }

    /// Per-frame pass: rebuild glyphs and background at the player's
    /// current position, or tear the glyphs down after hiding.
    pub fn sync(&mut self, ctx: &mut SceneContext, player_pos: Vec2) {
        if !self.visible {
            if self.has_glyphs {
                ctx.scene.despawn_tagged(GLYPH_TAG);
                self.has_glyphs = false;
            }
            return;
        }

        let center = Vec2::new(player_pos.x, player_pos.y - OFFSET_Y);

        ctx.scene.despawn_tagged(GLYPH_TAG);
        let glyphs = build_text_block(&self.lines, center, FONT_SIZE, &self.font, GLYPH_TAG, &mut || {
            ctx_next_id(ctx)
        });
        for glyph in glyphs {
            ctx.scene.spawn(glyph);
        }
        self.has_glyphs = true;

        #[cfg(feature = "vectors")]
        {
            let bounds = measure_block(&self.lines, FONT_SIZE, &self.font);
            ctx.vectors.fill_rounded_rect(
                Vec2::new(
                    center.x - bounds.x / 2.0 - PAD_X,
                    center.y - bounds.y / 2.0 - PAD_Y,
                ),
                bounds.x + 2.0 * PAD_X,
                bounds.y + 2.0 * PAD_Y,
                CORNER_RADIUS,
                VectorColor::WHITE.with_alpha(BG_ALPHA),
            );
        }
    }
}

impl Default for BubblePresenter {
    fn default() -> Self {
        Self::new()
    }
}

// Free function so the glyph builder closure does not borrow all of ctx.
fn ctx_next_id(ctx: &mut SceneContext) -> crate::api::types::EntityId {
    ctx.next_id()
}
