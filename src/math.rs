use crate::{vec3, Num, Vec3};

/// Distance between two points projected onto the horizontal (x/z) plane.
pub fn planar_distance(a: Vec3, b: Vec3) -> Num {
    ((b.x - a.x).powi(2) + (b.z - a.z).powi(2)).sqrt()
}

/// Projects `point` onto the horizontal plane through `origin`.
pub fn project_onto_plane(point: Vec3, origin: Vec3) -> Vec3 {
    vec3(point.x, origin.y, point.z)
}

/// Position on a ring of radius `distance` for a ring rotated by `phase`.
///
/// # Arguments
/// distance - Ring radius in model units.
/// phase - Rotation of the ring about its vertical axis, in radians.
///
/// # Returns
/// The position relative to the ring center.
pub fn ring_position(distance: Num, phase: Num) -> Vec3 {
    vec3(distance * -phase.cos(), 0.0, distance * -phase.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PI;

    #[test]
    fn planar_distance_ignores_height() {
        let d = planar_distance(vec3(0.0, 5.0, 0.0), vec3(3.0, -2.0, 4.0));

        assert_eq!(d, 5.0);
    }

    #[test]
    fn ring_position_keeps_radius() {
        for phase in [0.0, 0.3, PI / 2.0, 2.5] {
            let p = ring_position(0.7, phase);
            assert!((p.length() - 0.7).abs() < 1e-12);
            assert_eq!(p.y, 0.0);
        }
    }
}
