use crate::components::entity::Entity;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from the scene's entities.
///
/// Instances are grouped by atlas — scene sprites (atlas 0) first, font
/// glyphs after — and within each group ordered back-to-front by layer.
/// `font_split` marks the group boundary so the host renderer can bind
/// the two textures in order.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    let mut scene_instances: Vec<(u8, RenderInstance)> = Vec::new();
    let mut glyph_instances: Vec<(u8, RenderInstance)> = Vec::new();

    for entity in entities {
        if !entity.active {
            continue;
        }

        let sprite = match &entity.sprite {
            Some(s) => s,
            None => continue,
        };

        let instance = RenderInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            scale_x: entity.scale.x,
            scale_y: entity.scale.y,
            sprite_col: sprite.col,
            sprite_row: sprite.row,
            alpha: sprite.alpha,
            tint_r: sprite.tint[0],
            tint_g: sprite.tint[1],
            tint_b: sprite.tint[2],
        };

        if sprite.atlas.0 == 0 {
            scene_instances.push((entity.layer.as_u8(), instance));
        } else {
            glyph_instances.push((entity.layer.as_u8(), instance));
        }
    }

    scene_instances.sort_by_key(|(layer, _)| *layer);
    glyph_instances.sort_by_key(|(layer, _)| *layer);

    buffer.font_split = scene_instances.len() as u32;
    for (_, inst) in scene_instances.into_iter().chain(glyph_instances) {
        buffer.push(inst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::layer::RenderLayer;
    use crate::components::sprite::{AtlasId, SpriteComponent};
    use glam::Vec2;

    #[test]
    fn groups_scene_sprites_before_glyphs() {
        let entities = vec![
            Entity::new(EntityId(1))
                .with_pos(Vec2::new(10.0, 20.0))
                .with_scale(Vec2::splat(64.0))
                .with_sprite(SpriteComponent::cell(1.0, 0.0).with_atlas(AtlasId(1))),
            Entity::new(EntityId(2))
                .with_pos(Vec2::new(30.0, 40.0))
                .with_scale(Vec2::splat(48.0))
                .with_sprite(SpriteComponent::cell(0.0, 1.0)),
        ];

        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);

        assert_eq!(buffer.instance_count(), 2);
        assert_eq!(buffer.font_split, 1);
        // The atlas-0 chest comes first despite spawn order
        assert_eq!(buffer.instances[0].x, 30.0);
    }

    #[test]
    fn layers_order_back_to_front() {
        let entities = vec![
            Entity::new(EntityId(1))
                .with_layer(RenderLayer::Vfx)
                .with_pos(Vec2::new(1.0, 0.0))
                .with_sprite(SpriteComponent::default()),
            Entity::new(EntityId(2))
                .with_layer(RenderLayer::Background)
                .with_pos(Vec2::new(2.0, 0.0))
                .with_sprite(SpriteComponent::default()),
            Entity::new(EntityId(3))
                .with_layer(RenderLayer::Objects)
                .with_pos(Vec2::new(3.0, 0.0))
                .with_sprite(SpriteComponent::default()),
        ];

        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);

        let xs: Vec<f32> = buffer.instances.iter().map(|i| i.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 1.0]);
    }

    #[test]
    fn inactive_and_spriteless_entities_are_skipped() {
        let mut hidden = Entity::new(EntityId(1)).with_sprite(SpriteComponent::default());
        hidden.active = false;
        let invisible = Entity::new(EntityId(2));

        let entities = vec![hidden, invisible];
        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 0);
    }

    #[test]
    fn tint_reaches_the_instance() {
        let entities = vec![Entity::new(EntityId(1)).with_sprite(
            SpriteComponent::default().with_tint([0.533, 0.6, 0.8]),
        )];

        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);
        assert!((buffer.instances[0].tint_r - 0.533).abs() < 0.001);
        assert!((buffer.instances[0].tint_b - 0.8).abs() < 0.001);
    }
}
