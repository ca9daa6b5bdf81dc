//! Bitmap font text layout and rendering.
//!
//! Text renders through the existing sprite pipeline — each character
//! becomes an Entity with a SpriteComponent pointing at the matching glyph
//! cell in a font atlas (ASCII order, 16 columns x 6 rows by default).
//! On top of the glyph mapping this module wraps text into lines at a
//! maximum pixel width and lays the lines out as a centered block, which
//! is what the speech bubble needs.

use glam::Vec2;

use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::components::layer::RenderLayer;
use crate::components::sprite::{AtlasId, SpriteComponent};

/// Configuration for a bitmap font atlas.
#[derive(Debug, Clone)]
pub struct FontConfig {
    /// Which atlas contains the font glyphs.
    pub atlas: AtlasId,
    /// Number of columns in the font atlas grid.
    pub cols: u32,
    /// Number of rows in the font atlas grid.
    pub rows: u32,
    /// First ASCII code in the atlas (typically 32 = space).
    pub start_char: u8,
    /// Horizontal advance as a fraction of character size.
    pub spacing: f32,
    /// Line height as a fraction of character size.
    pub line_height: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            atlas: AtlasId(1), // Convention: atlas 0 = scene sprites, atlas 1 = font
            cols: 16,
            rows: 6,
            start_char: 32,
            spacing: 0.55,
            line_height: 1.2,
        }
    }
}

impl FontConfig {
    /// Width of one character's advance at the given size.
    pub fn advance(&self, size: f32) -> f32 {
        size * self.spacing
    }

    /// Pixel width of a single line of text at the given size.
    pub fn line_width(&self, line: &str, size: f32) -> f32 {
        line.chars().count() as f32 * self.advance(size)
    }
}

/// Convert an ASCII character to grid coordinates (col, row) in the atlas.
/// Returns `None` for characters outside the font's range.
pub fn char_to_grid(c: char, font: &FontConfig) -> Option<(f32, f32)> {
    let ascii = c as u32;
    let start = font.start_char as u32;

    if ascii < start || ascii - start >= font.cols * font.rows {
        return None;
    }

    let index = ascii - start;
    Some(((index % font.cols) as f32, (index / font.cols) as f32))
}

/// Greedy word wrap at `max_width` pixels.
/// A word longer than the whole line is placed on its own line rather
/// than split.
pub fn wrap_text(text: &str, size: f32, max_width: f32, font: &FontConfig) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if font.line_width(&candidate, size) <= max_width || current.is_empty() {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Bounding size of a wrapped block of lines.
pub fn measure_block(lines: &[String], size: f32, font: &FontConfig) -> Vec2 {
    let width = lines
        .iter()
        .map(|l| font.line_width(l, size))
        .fold(0.0, f32::max);
    let height = lines.len() as f32 * size * font.line_height;
    Vec2::new(width, height)
}

/// Build glyph entities for a wrapped, horizontally centered text block.
///
/// `center` is the center of the whole block. Characters without a glyph
/// in the atlas still advance the cursor so spacing is preserved.
pub fn build_text_block<F>(
    lines: &[String],
    center: Vec2,
    size: f32,
    font: &FontConfig,
    tag: &str,
    id_gen: &mut F,
) -> Vec<Entity>
where
    F: FnMut() -> EntityId,
{
    let mut entities = Vec::new();
    let block = measure_block(lines, size, font);
    let line_step = size * font.line_height;
    let mut line_y = center.y - block.y / 2.0 + line_step / 2.0;

    for line in lines {
        let line_w = font.line_width(line, size);
        let mut cursor_x = center.x - line_w / 2.0;

        for c in line.chars() {
            if let Some((col, row)) = char_to_grid(c, font) {
                let id = id_gen();
                entities.push(
                    Entity::new(id)
                        .with_tag(tag)
                        .with_pos(Vec2::new(cursor_x + font.advance(size) / 2.0, line_y))
                        .with_scale(Vec2::splat(size))
                        .with_layer(RenderLayer::Ui)
                        .with_sprite(SpriteComponent {
                            atlas: font.atlas,
                            col,
                            row,
                            alpha: 1.0,
                            tint: [0.0, 0.0, 0.0],
                        }),
                );
            }
            cursor_x += font.advance(size);
        }
        line_y += line_step;
    }

    entities
}
