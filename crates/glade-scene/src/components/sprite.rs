/// Identifies which texture atlas a sprite belongs to.
/// Index into the AssetManifest's atlas list. By convention atlas 0 holds
/// the scene sprites and atlas 1 holds the bitmap font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AtlasId(pub u32);

/// Sprite component — defines how an entity appears visually.
#[derive(Debug, Clone)]
pub struct SpriteComponent {
    /// Which atlas this sprite belongs to.
    pub atlas: AtlasId,
    /// Column in the atlas grid.
    pub col: f32,
    /// Row in the atlas grid.
    pub row: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    /// RGB multiply tint, 1.0 per channel for untinted.
    pub tint: [f32; 3],
}

impl SpriteComponent {
    /// A sprite from atlas 0 at the given cell, untinted and opaque.
    pub fn cell(col: f32, row: f32) -> Self {
        Self {
            col,
            row,
            ..Default::default()
        }
    }

    pub fn with_atlas(mut self, atlas: AtlasId) -> Self {
        self.atlas = atlas;
        self
    }

    pub fn with_tint(mut self, tint: [f32; 3]) -> Self {
        self.tint = tint;
        self
    }
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self {
            atlas: AtlasId(0),
            col: 0.0,
            row: 0.0,
            alpha: 1.0,
            tint: [1.0, 1.0, 1.0],
        }
    }
}
