use glam::Vec2;

/// Axis-aligned overlap test between two center-anchored boxes.
/// `a_size` and `b_size` are full extents (the entity's world-space scale).
/// Touching edges do not count as overlap.
pub fn aabb_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    let half = (a_size + b_size) * 0.5;
    let delta = (a_pos - b_pos).abs();
    delta.x < half.x && delta.y < half.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_boxes() {
        assert!(aabb_overlap(
            Vec2::new(0.0, 0.0),
            Vec2::splat(64.0),
            Vec2::new(40.0, 10.0),
            Vec2::splat(48.0),
        ));
    }

    #[test]
    fn separated_boxes() {
        assert!(!aabb_overlap(
            Vec2::new(0.0, 0.0),
            Vec2::splat(64.0),
            Vec2::new(200.0, 0.0),
            Vec2::splat(48.0),
        ));
    }

    #[test]
    fn edge_contact_is_not_overlap() {
        assert!(!aabb_overlap(
            Vec2::new(0.0, 0.0),
            Vec2::splat(64.0),
            Vec2::new(56.0, 0.0),
            Vec2::splat(48.0),
        ));
    }
}
