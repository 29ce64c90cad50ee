use crate::math::{Quaternion, Ray, Rotation, Vector3};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A box with an arbitrary 3D rotation, defined by its center, half-extents
/// and orientation quaternion
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct OrientedBox {
    /// Center of the box in world space
    pub center: Vector3,

    /// Half-width, half-height and half-depth of the box
    pub half_extents: Vector3,

    /// Rotation of the box
    pub orientation: Quaternion,
}

impl OrientedBox {
    /// Creates a new oriented box with the given center, half-extents and orientation
    pub fn new(center: Vector3, half_extents: Vector3, orientation: Quaternion) -> Self {
        Self {
            center,
            half_extents: Vector3::new(
                half_extents.x.max(0.0),
                half_extents.y.max(0.0),
                half_extents.z.max(0.0),
            ),
            orientation,
        }
    }

    /// Creates an axis-aligned box from its center and full dimensions
    pub fn from_center_size(center: Vector3, size: Vector3) -> Self {
        Self::new(center, size * 0.5, Quaternion::identity())
    }

    /// Moves the box so its center is at the given position
    #[inline]
    pub fn set_center(&mut self, center: Vector3) {
        self.center = center;
    }

    /// Returns the box's local axis directions in world space
    pub fn axes(&self) -> [Vector3; 3] {
        [
            self.orientation.rotate_vector(Vector3::unit_x()),
            self.orientation.rotate_vector(Vector3::unit_y()),
            self.orientation.rotate_vector(Vector3::unit_z()),
        ]
    }

    /// Returns the 8 corners of the box in world space.
    ///
    /// The enumeration order is fixed: the face classifier's corner-index
    /// tables depend on it. Indices `{0,1,2,3}` span the local -Z face,
    /// `{4,5,6,7}` +Z, `{0,4,2,6}` -X, `{1,5,3,7}` +X, `{2,3,6,7}` -Y and
    /// `{0,1,4,5}` +Y.
    pub fn corners(&self) -> [Vector3; 8] {
        let h = self.half_extents;
        let local = [
            Vector3::new(-h.x, h.y, -h.z),
            Vector3::new(h.x, h.y, -h.z),
            Vector3::new(-h.x, -h.y, -h.z),
            Vector3::new(h.x, -h.y, -h.z),
            Vector3::new(-h.x, h.y, h.z),
            Vector3::new(h.x, h.y, h.z),
            Vector3::new(-h.x, -h.y, h.z),
            Vector3::new(h.x, -h.y, h.z),
        ];

        local.map(|v| self.center + self.orientation.rotate_vector(v))
    }

    /// Returns true if this box overlaps another oriented box.
    ///
    /// Separating-axis test over the 15 candidate axes: the 3 face axes of
    /// each box and the 9 pairwise edge cross products.
    pub fn intersects(&self, other: &OrientedBox) -> bool {
        let axes_a = self.axes();
        let axes_b = other.axes();
        let t = other.center - self.center;

        for axis in axes_a {
            if self.separated_on(axis, t, other, &axes_a, &axes_b) {
                return false;
            }
        }
        for axis in axes_b {
            if self.separated_on(axis, t, other, &axes_a, &axes_b) {
                return false;
            }
        }
        for a in &axes_a {
            for b in &axes_b {
                if self.separated_on(a.cross(b), t, other, &axes_a, &axes_b) {
                    return false;
                }
            }
        }

        true
    }

    /// Tests one candidate separating axis. Near-zero axes come from cross
    /// products of parallel edges and cannot separate, so they are skipped.
    fn separated_on(
        &self,
        axis: Vector3,
        t: Vector3,
        other: &OrientedBox,
        axes_a: &[Vector3; 3],
        axes_b: &[Vector3; 3],
    ) -> bool {
        if axis.length_squared() < crate::math::EPSILON {
            return false;
        }

        let ra = self.half_extents.x * axes_a[0].dot(&axis).abs()
            + self.half_extents.y * axes_a[1].dot(&axis).abs()
            + self.half_extents.z * axes_a[2].dot(&axis).abs();
        let rb = other.half_extents.x * axes_b[0].dot(&axis).abs()
            + other.half_extents.y * axes_b[1].dot(&axis).abs()
            + other.half_extents.z * axes_b[2].dot(&axis).abs();

        t.dot(&axis).abs() > ra + rb
    }

    /// Intersects a ray with this box using the slab method in the box's
    /// local frame.
    ///
    /// Returns the entry distance along the ray, or the exit distance when
    /// the ray starts inside the box, or `None` when the ray misses or the
    /// box lies entirely behind it. The ray direction is expected to be
    /// normalized so that the returned value is a distance.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f64> {
        let inv_rot = self.orientation.conjugate();
        let origin = inv_rot.rotate_vector(ray.origin - self.center);
        let direction = inv_rot.rotate_vector(ray.direction);

        let origin: [f64; 3] = origin.into();
        let direction: [f64; 3] = direction.into();
        let h: [f64; 3] = self.half_extents.into();

        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;

        for i in 0..3 {
            if direction[i].abs() < crate::math::EPSILON {
                // Ray is parallel to this slab, check if origin is between slabs
                if origin[i] < -h[i] || origin[i] > h[i] {
                    return None;
                }
            } else {
                let inv_d = 1.0 / direction[i];
                let mut t1 = (-h[i] - origin[i]) * inv_d;
                let mut t2 = (h[i] - origin[i]) * inv_d;

                if t1 > t2 {
                    std::mem::swap(&mut t1, &mut t2);
                }

                t_min = t_min.max(t1);
                t_max = t_max.min(t2);

                if t_min > t_max {
                    return None;
                }
            }
        }

        if t_min >= 0.0 {
            Some(t_min)
        } else if t_max >= 0.0 {
            Some(t_max)
        } else {
            None
        }
    }
}
