use bytemuck::{Pod, Zeroable};

/// Per-instance render data written to SharedArrayBuffer for the host
/// renderer. Must match the TypeScript protocol: 10 floats = 40 bytes
/// stride.
///
/// `scale_x`/`scale_y` are the world-space rendered size in game units;
/// the background covers the whole world, so the size is not uniform.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RenderInstance {
    /// X position in world space (center-anchored).
    pub x: f32,
    /// Y position in world space.
    pub y: f32,
    /// World-space rendered width in game units.
    pub scale_x: f32,
    /// World-space rendered height in game units.
    pub scale_y: f32,
    /// Atlas column.
    pub sprite_col: f32,
    /// Atlas row.
    pub sprite_row: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    /// RGB multiply tint.
    pub tint_r: f32,
    pub tint_g: f32,
    pub tint_b: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 10;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer containing all sprite instances and metadata.
pub struct RenderBuffer {
    /// Sprite instances ordered back-to-front by layer, scene atlas first:
    /// instances [0..font_split) use atlas 0, instances [font_split..] use
    /// the font atlas.
    pub instances: Vec<RenderInstance>,
    /// Index where the scene-atlas/font-atlas split occurs.
    pub font_split: u32,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(128),
            font_split: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.font_split = 0;
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
