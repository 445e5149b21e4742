// Axis-aligned boxes used for every collision test in the simulation.

use glam::Vec3;

/// Axis-aligned bounding box stored as a center and half-extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl Aabb {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Builds a box from a full size (width, height, depth) the way level authors describe it.
    pub fn from_size(center: Vec3, size: Vec3) -> Self {
        Self::new(center, size * 0.5)
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }

    pub fn top(&self) -> f32 {
        self.center.y + self.half_extents.y
    }

    pub fn bottom(&self) -> f32 {
        self.center.y - self.half_extents.y
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.half_extents.x
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.half_extents.x
    }

    /// Inclusive overlap test: boxes that only touch on a face still count as overlapping.
    ///
    /// Resting contact depends on this, since a grounded avatar sits exactly on the
    /// platform top and must keep registering the contact every tick.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());

        a_min.x <= b_max.x
            && a_max.x >= b_min.x
            && a_min.y <= b_max.y
            && a_max.y >= b_min.y
            && a_min.z <= b_max.z
            && a_max.z >= b_min.z
    }

    /// True when every extent is finite and strictly positive.
    pub fn is_well_formed(&self) -> bool {
        self.center.is_finite()
            && self.half_extents.is_finite()
            && self.half_extents.cmpgt(Vec3::ZERO).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_at(x: f32, y: f32, z: f32) -> Aabb {
        Aabb::new(Vec3::new(x, y, z), Vec3::splat(0.5))
    }

    #[test]
    fn when_boxes_share_a_face_then_they_overlap() {
        let a = unit_at(0.0, 0.0, 0.0);
        let b = unit_at(1.0, 0.0, 0.0);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn when_boxes_are_separated_on_one_axis_then_they_do_not_overlap() {
        let a = unit_at(0.0, 0.0, 0.0);

        assert!(!a.overlaps(&unit_at(1.01, 0.0, 0.0)));
        assert!(!a.overlaps(&unit_at(0.0, -1.01, 0.0)));
        assert!(!a.overlaps(&unit_at(0.0, 0.0, 1.01)));
    }

    #[test]
    fn when_built_from_size_then_edges_are_half_the_size_from_center() {
        let platform = Aabb::from_size(Vec3::new(12.0, 0.0, 0.0), Vec3::new(10.0, 1.0, 10.0));

        assert_eq!(platform.top(), 0.5);
        assert_eq!(platform.bottom(), -0.5);
        assert_eq!(platform.left(), 7.0);
        assert_eq!(platform.right(), 17.0);
    }

    #[test]
    fn when_an_extent_is_zero_or_nan_then_box_is_not_well_formed() {
        assert!(unit_at(0.0, 0.0, 0.0).is_well_formed());
        assert!(!Aabb::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0)).is_well_formed());
        assert!(!Aabb::new(Vec3::ZERO, Vec3::new(1.0, -2.0, 1.0)).is_well_formed());
        assert!(!Aabb::new(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::ONE).is_well_formed());
    }
}
