//! Sphere overlap test shared by every collision pass.

use glam::Vec3;

/// Euclidean distance between two points.
#[inline]
pub fn dist(a: Vec3, b: Vec3) -> f32 {
    a.distance(b)
}

/// True iff two spheres touch or overlap: center distance is at most the sum
/// of the radii. Total over all finite inputs.
#[inline]
pub fn sphere_overlap(pos_a: Vec3, radius_a: f32, pos_b: Vec3, radius_b: f32) -> bool {
    dist(pos_a, pos_b) <= radius_a + radius_b
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn overlap_at_exact_touch() {
        // Distance 3.0 equals 1.0 + 2.0
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 0.0, 0.0);
        assert!(sphere_overlap(a, 1.0, b, 2.0));
    }

    #[test]
    fn no_overlap_when_separated() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.01, 0.0, 0.0);
        assert!(!sphere_overlap(a, 1.0, b, 2.0));
    }

    #[test]
    fn coincident_centers_always_overlap() {
        let p = Vec3::new(-4.0, 2.0, -88.0);
        assert!(sphere_overlap(p, 0.0, p, 0.0));
    }

    fn arb_vec3() -> impl Strategy<Value = Vec3> {
        (-500.0f32..500.0, -500.0f32..500.0, -500.0f32..500.0)
            .prop_map(|(x, y, z)| Vec3::new(x, y, z))
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in arb_vec3(), b in arb_vec3(),
                                ra in 0.0f32..50.0, rb in 0.0f32..50.0) {
            prop_assert_eq!(sphere_overlap(a, ra, b, rb), sphere_overlap(b, rb, a, ra));
        }

        #[test]
        fn growing_radii_never_breaks_overlap(a in arb_vec3(), b in arb_vec3(),
                                              ra in 0.0f32..50.0, rb in 0.0f32..50.0) {
            if sphere_overlap(a, ra, b, rb) {
                prop_assert!(sphere_overlap(a, ra + 1.0, b, rb));
            }
        }
    }
}
