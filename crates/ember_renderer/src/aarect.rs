//! Axis-aligned rectangle primitives.
//!
//! Three variants, one per axis pair, each sitting in the plane where the
//! remaining (fixed) axis equals `k`. Intersection is a closed-form plane
//! solve followed by an in-plane extent check; UV coordinates are the linear
//! normalization of the in-plane coordinates against the extents.

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use ember_math::{Aabb, Interval, Ray, Vec3};

/// Padding applied to the fixed axis of a rectangle's bounding box so the
/// slab test never sees a zero-extent dimension.
const RECT_PAD: f32 = 0.0001;

/// Rectangle in the z = k plane, spanning [x0, x1] x [y0, y1].
pub struct XyRect<M: Material> {
    x0: f32,
    x1: f32,
    y0: f32,
    y1: f32,
    k: f32,
    material: M,
}

impl<M: Material> XyRect<M> {
    pub fn new(x0: f32, x1: f32, y0: f32, y1: f32, k: f32, material: M) -> Self {
        Self {
            x0,
            x1,
            y0,
            y1,
            k,
            material,
        }
    }
}

impl<M: Material + 'static> Hittable for XyRect<M> {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        // A ray parallel to the plane never intersects it. Dividing anyway
        // would produce an Inf/NaN t, so this must be an explicit guard.
        if ray.direction.z == 0.0 {
            return false;
        }

        let t = (self.k - ray.origin.z) / ray.direction.z;
        if !ray_t.contains(t) {
            return false;
        }

        let x = ray.origin.x + t * ray.direction.x;
        let y = ray.origin.y + t * ray.direction.y;
        if x < self.x0 || x > self.x1 || y < self.y0 || y > self.y1 {
            return false;
        }

        rec.u = (x - self.x0) / (self.x1 - self.x0);
        rec.v = (y - self.y0) / (self.y1 - self.y0);
        rec.t = t;
        rec.p = ray.at(t);
        rec.set_face_normal(ray, Vec3::Z);
        rec.material = &self.material;

        true
    }

    fn bounding_box(&self, _time0: f32, _time1: f32) -> Aabb {
        Aabb::from_points(
            Vec3::new(self.x0, self.y0, self.k - RECT_PAD),
            Vec3::new(self.x1, self.y1, self.k + RECT_PAD),
        )
    }
}

/// Rectangle in the y = k plane, spanning [x0, x1] x [z0, z1].
pub struct XzRect<M: Material> {
    x0: f32,
    x1: f32,
    z0: f32,
    z1: f32,
    k: f32,
    material: M,
}

impl<M: Material> XzRect<M> {
    pub fn new(x0: f32, x1: f32, z0: f32, z1: f32, k: f32, material: M) -> Self {
        Self {
            x0,
            x1,
            z0,
            z1,
            k,
            material,
        }
    }
}

impl<M: Material + 'static> Hittable for XzRect<M> {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        if ray.direction.y == 0.0 {
            return false;
        }

        let t = (self.k - ray.origin.y) / ray.direction.y;
        if !ray_t.contains(t) {
            return false;
        }

        let x = ray.origin.x + t * ray.direction.x;
        let z = ray.origin.z + t * ray.direction.z;
        if x < self.x0 || x > self.x1 || z < self.z0 || z > self.z1 {
            return false;
        }

        rec.u = (x - self.x0) / (self.x1 - self.x0);
        rec.v = (z - self.z0) / (self.z1 - self.z0);
        rec.t = t;
        rec.p = ray.at(t);
        rec.set_face_normal(ray, Vec3::Y);
        rec.material = &self.material;

        true
    }

    fn bounding_box(&self, _time0: f32, _time1: f32) -> Aabb {
        Aabb::from_points(
            Vec3::new(self.x0, self.k - RECT_PAD, self.z0),
            Vec3::new(self.x1, self.k + RECT_PAD, self.z1),
        )
    }
}

/// Rectangle in the x = k plane, spanning [y0, y1] x [z0, z1].
pub struct YzRect<M: Material> {
    y0: f32,
    y1: f32,
    z0: f32,
    z1: f32,
    k: f32,
    material: M,
}

impl<M: Material> YzRect<M> {
    pub fn new(y0: f32, y1: f32, z0: f32, z1: f32, k: f32, material: M) -> Self {
        Self {
            y0,
            y1,
            z0,
            z1,
            k,
            material,
        }
    }
}

impl<M: Material + 'static> Hittable for YzRect<M> {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        if ray.direction.x == 0.0 {
            return false;
        }

        let t = (self.k - ray.origin.x) / ray.direction.x;
        if !ray_t.contains(t) {
            return false;
        }

        let y = ray.origin.y + t * ray.direction.y;
        let z = ray.origin.z + t * ray.direction.z;
        if y < self.y0 || y > self.y1 || z < self.z0 || z > self.z1 {
            return false;
        }

        rec.u = (y - self.y0) / (self.y1 - self.y0);
        rec.v = (z - self.z0) / (self.z1 - self.z0);
        rec.t = t;
        rec.p = ray.at(t);
        rec.set_face_normal(ray, Vec3::X);
        rec.material = &self.material;

        true
    }

    fn bounding_box(&self, _time0: f32, _time1: f32) -> Aabb {
        Aabb::from_points(
            Vec3::new(self.k - RECT_PAD, self.y0, self.z0),
            Vec3::new(self.k + RECT_PAD, self.y1, self.z1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Lambertian;

    fn white() -> Lambertian {
        Lambertian::new(Vec3::splat(0.73))
    }

    fn unit_interval() -> Interval {
        Interval::new(0.001, f32::INFINITY)
    }

    #[test]
    fn test_xy_rect_uv_mapping() {
        // Extents x in [3,5], y in [1,3], plane z = -2.
        let rect = XyRect::new(3.0, 5.0, 1.0, 3.0, -2.0, white());

        // Center of the rectangle: (4, 2, -2) -> u = v = 0.5
        let ray = Ray::new_simple(Vec3::new(4.0, 2.0, 0.0), -Vec3::Z);
        let mut rec = HitRecord::default();
        assert!(rect.hit(&ray, unit_interval(), &mut rec));
        assert_eq!(rec.u, 0.5);
        assert_eq!(rec.v, 0.5);
        assert_eq!(rec.t, 2.0);

        // Low corner (3, 1, -2) -> (0, 0)
        let ray = Ray::new_simple(Vec3::new(3.0, 1.0, 0.0), -Vec3::Z);
        let mut rec = HitRecord::default();
        assert!(rect.hit(&ray, unit_interval(), &mut rec));
        assert_eq!(rec.u, 0.0);
        assert_eq!(rec.v, 0.0);

        // High corner (5, 3, -2) -> (1, 1)
        let ray = Ray::new_simple(Vec3::new(5.0, 3.0, 0.0), -Vec3::Z);
        let mut rec = HitRecord::default();
        assert!(rect.hit(&ray, unit_interval(), &mut rec));
        assert_eq!(rec.u, 1.0);
        assert_eq!(rec.v, 1.0);
    }

    #[test]
    fn test_parallel_ray_misses() {
        let rect = XyRect::new(3.0, 5.0, 1.0, 3.0, -2.0, white());

        // Direction has a zero z component: parallel to the plane, no hit,
        // even when the ray origin lies exactly in the plane.
        let mut rec = HitRecord::default();
        let skimming = Ray::new_simple(Vec3::new(0.0, 2.0, -2.0), Vec3::X);
        assert!(!rect.hit(&skimming, unit_interval(), &mut rec));

        let offset = Ray::new_simple(Vec3::new(4.0, 2.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
        assert!(!rect.hit(&offset, unit_interval(), &mut rec));

        let xz = XzRect::new(0.0, 5.0, 0.0, 5.0, 1.0, white());
        let flat = Ray::new_simple(Vec3::new(2.0, 1.0, 2.0), Vec3::new(1.0, 0.0, 1.0));
        assert!(!xz.hit(&flat, unit_interval(), &mut rec));

        let yz = YzRect::new(0.0, 5.0, 0.0, 5.0, 1.0, white());
        let vertical = Ray::new_simple(Vec3::new(1.0, 2.0, 2.0), Vec3::new(0.0, 1.0, 0.0));
        assert!(!yz.hit(&vertical, unit_interval(), &mut rec));
    }

    #[test]
    fn test_rect_outside_extent_misses() {
        let rect = XyRect::new(3.0, 5.0, 1.0, 3.0, -2.0, white());

        let ray = Ray::new_simple(Vec3::new(6.0, 2.0, 0.0), -Vec3::Z);
        let mut rec = HitRecord::default();
        assert!(!rect.hit(&ray, unit_interval(), &mut rec));
    }

    #[test]
    fn test_rect_face_orientation() {
        let rect = XyRect::new(-1.0, 1.0, -1.0, 1.0, 0.0, white());

        // Approaching from +Z against the +Z outward normal: front face.
        let ray = Ray::new_simple(Vec3::new(0.0, 0.0, 2.0), -Vec3::Z);
        let mut rec = HitRecord::default();
        assert!(rect.hit(&ray, unit_interval(), &mut rec));
        assert!(rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);

        // Approaching from -Z: back face, stored normal flipped.
        let ray = Ray::new_simple(Vec3::new(0.0, 0.0, -2.0), Vec3::Z);
        let mut rec = HitRecord::default();
        assert!(rect.hit(&ray, unit_interval(), &mut rec));
        assert!(!rec.front_face);
        assert_eq!(rec.normal, -Vec3::Z);
    }

    #[test]
    fn test_xz_and_yz_rect_hit() {
        let xz = XzRect::new(0.0, 4.0, 0.0, 4.0, 2.0, white());
        let ray = Ray::new_simple(Vec3::new(1.0, 0.0, 3.0), Vec3::Y);
        let mut rec = HitRecord::default();
        assert!(xz.hit(&ray, unit_interval(), &mut rec));
        assert_eq!(rec.t, 2.0);
        assert_eq!(rec.u, 0.25);
        assert_eq!(rec.v, 0.75);

        let yz = YzRect::new(0.0, 4.0, 0.0, 4.0, -1.0, white());
        let ray = Ray::new_simple(Vec3::new(1.0, 2.0, 2.0), -Vec3::X);
        let mut rec = HitRecord::default();
        assert!(yz.hit(&ray, unit_interval(), &mut rec));
        assert_eq!(rec.t, 2.0);
        assert_eq!(rec.u, 0.5);
        assert_eq!(rec.v, 0.5);
    }

    #[test]
    fn test_rect_bounding_boxes_padded() {
        let rect = XyRect::new(3.0, 5.0, 1.0, 3.0, -2.0, white());
        let bbox = rect.bounding_box(0.0, 1.0);
        assert_eq!(bbox.x.min, 3.0);
        assert_eq!(bbox.x.max, 5.0);
        assert_eq!(bbox.y.min, 1.0);
        assert_eq!(bbox.y.max, 3.0);
        assert!(bbox.z.size() > 0.0);
        assert!(bbox.z.contains(-2.0));
    }
}
