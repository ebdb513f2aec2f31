use crate::BlockId;
use glam::Vec3;
use snakeview_common::BLOCK_SIZE;

/// Result of a successful pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub id: BlockId,
    /// Center of the hit block.
    pub position: Vec3,
    /// Distance along the ray to the entry point.
    pub distance: f32,
    /// Outward normal of the face the ray entered through.
    pub normal: Vec3,
}

/// A ray with a normalized direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Returns `None` for a zero or non-finite direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    /// Slab test against the cube of a block centered at `center`.
    ///
    /// Returns the entry distance and entry face normal. A cube that
    /// contains the origin, or lies behind it, is not hit.
    pub fn intersect_block(&self, center: Vec3) -> Option<(f32, Vec3)> {
        let half = BLOCK_SIZE * 0.5;
        let min = center - Vec3::splat(half);
        let max = center + Vec3::splat(half);

        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;
        let mut enter_axis = 0;

        for axis in 0..3 {
            let o = self.origin[axis];
            let d = self.direction[axis];
            if d == 0.0 {
                // Parallel to this slab: inside it or never.
                if o < min[axis] || o > max[axis] {
                    return None;
                }
                continue;
            }
            let t1 = (min[axis] - o) / d;
            let t2 = (max[axis] - o) / d;
            let (near, far) = if t1 < t2 { (t1, t2) } else { (t2, t1) };
            if near > t_enter {
                t_enter = near;
                enter_axis = axis;
            }
            t_exit = t_exit.min(far);
            if t_enter > t_exit {
                return None;
            }
        }

        if t_enter < 0.0 {
            return None;
        }

        let mut normal = Vec3::ZERO;
        normal[enter_axis] = -self.direction[enter_axis].signum();
        Some((t_enter, normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_direction_is_rejected() {
        assert!(Ray::new(Vec3::ZERO, Vec3::ZERO).is_none());
    }

    #[test]
    fn hit_from_above_reports_top_face() {
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y).unwrap();
        let (t, n) = ray.intersect_block(Vec3::ZERO).unwrap();
        assert!((t - 9.0).abs() < 1e-5);
        assert_eq!(n, Vec3::Y);
    }

    #[test]
    fn oblique_hit_reports_entered_face() {
        // Enters through the +X face: x reaches 1 before z leaves [-1, 1].
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.5), Vec3::new(-1.0, 0.0, -0.1)).unwrap();
        let (_, n) = ray.intersect_block(Vec3::ZERO).unwrap();
        assert_eq!(n, Vec3::X);
    }

    #[test]
    fn parallel_ray_outside_slab_misses() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 10.0), Vec3::NEG_Z).unwrap();
        assert!(ray.intersect_block(Vec3::ZERO).is_none());
    }

    #[test]
    fn block_behind_origin_is_not_hit() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z).unwrap();
        assert!(ray.intersect_block(Vec3::ZERO).is_none());
    }

    #[test]
    fn block_containing_origin_is_not_hit() {
        let ray = Ray::new(Vec3::new(0.2, 0.0, 0.0), Vec3::X).unwrap();
        assert!(ray.intersect_block(Vec3::ZERO).is_none());
    }
}
