//! Axis-aligned rectangular prism built from six rectangle faces.

use crate::{
    aarect::{XyRect, XzRect, YzRect},
    hittable::{HitRecord, Hittable, HittableList},
    Material,
};
use ember_math::{Aabb, Interval, Ray, Vec3};
use std::sync::Arc;

/// An axis-aligned box defined by two opposite corners.
///
/// Decomposes into six rectangle faces (one pair per axis) stored in a
/// HittableList; intersection delegates to the nearest-hit scan over them.
pub struct Cuboid {
    box_min: Vec3,
    box_max: Vec3,
    sides: HittableList,
}

impl Cuboid {
    pub fn new(p0: Vec3, p1: Vec3, material: Arc<dyn Material>) -> Self {
        let mut sides = HittableList::new();

        sides.add(Box::new(XyRect::new(
            p0.x,
            p1.x,
            p0.y,
            p1.y,
            p1.z,
            material.clone(),
        )));
        sides.add(Box::new(XyRect::new(
            p0.x,
            p1.x,
            p0.y,
            p1.y,
            p0.z,
            material.clone(),
        )));

        sides.add(Box::new(XzRect::new(
            p0.x,
            p1.x,
            p0.z,
            p1.z,
            p1.y,
            material.clone(),
        )));
        sides.add(Box::new(XzRect::new(
            p0.x,
            p1.x,
            p0.z,
            p1.z,
            p0.y,
            material.clone(),
        )));

        sides.add(Box::new(YzRect::new(
            p0.y,
            p1.y,
            p0.z,
            p1.z,
            p1.x,
            material.clone(),
        )));
        sides.add(Box::new(YzRect::new(
            p0.y, p1.y, p0.z, p1.z, p0.x, material,
        )));

        Self {
            box_min: p0,
            box_max: p1,
            sides,
        }
    }
}

impl Hittable for Cuboid {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        self.sides.hit(ray, ray_t, rec)
    }

    fn bounding_box(&self, _time0: f32, _time1: f32) -> Aabb {
        // The corners are exact: a box already has nonzero extent on every
        // axis, so no padding applies.
        Aabb::from_points(self.box_min, self.box_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Lambertian;

    fn cornell_cuboid() -> Cuboid {
        Cuboid::new(
            Vec3::new(130.0, 0.0, 65.0),
            Vec3::new(295.0, 165.0, 230.0),
            Arc::new(Lambertian::new(Vec3::new(0.65, 0.05, 0.05))),
        )
    }

    #[test]
    fn test_cuboid_has_six_faces() {
        assert_eq!(cornell_cuboid().sides.len(), 6);
    }

    #[test]
    fn test_cuboid_bounding_box_is_exact() {
        let cuboid = cornell_cuboid();
        let bbox = cuboid.bounding_box(0.0, 1.0);
        assert_eq!(bbox.x.min, 130.0);
        assert_eq!(bbox.x.max, 295.0);
        assert_eq!(bbox.y.min, 0.0);
        assert_eq!(bbox.y.max, 165.0);
        assert_eq!(bbox.z.min, 65.0);
        assert_eq!(bbox.z.max, 230.0);

        // And the union of the face boxes stays within pad distance of it.
        let faces = cuboid.sides.bounding_box(0.0, 1.0);
        assert!((faces.x.min - bbox.x.min).abs() <= 1e-3);
        assert!((faces.x.max - bbox.x.max).abs() <= 1e-3);
        assert!((faces.y.min - bbox.y.min).abs() <= 1e-3);
        assert!((faces.z.max - bbox.z.max).abs() <= 1e-3);
    }

    #[test]
    fn test_cuboid_nearest_face_wins() {
        let cuboid = Cuboid::new(
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Arc::new(Lambertian::new(Vec3::splat(0.5))),
        );

        // Ray along -Z hits the near (z = 1) face first at t = 1, not the
        // far face at t = 3.
        let ray = Ray::new_simple(Vec3::new(0.0, 0.0, 2.0), -Vec3::Z);
        let mut rec = HitRecord::default();
        assert!(cuboid.hit(&ray, Interval::new(0.001, f32::INFINITY), &mut rec));
        assert!((rec.t - 1.0).abs() < 1e-5);
        assert!(rec.front_face);

        // From inside, the stored normal still opposes the ray.
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::X);
        let mut rec = HitRecord::default();
        assert!(cuboid.hit(&ray, Interval::new(0.001, f32::INFINITY), &mut rec));
        assert!((rec.t - 1.0).abs() < 1e-5);
        assert_eq!(rec.normal, -Vec3::X);
    }

    #[test]
    fn test_cuboid_miss() {
        let cuboid = cornell_cuboid();
        let ray = Ray::new_simple(Vec3::new(0.0, 500.0, 0.0), Vec3::Y);
        let mut rec = HitRecord::default();
        assert!(!cuboid.hit(&ray, Interval::new(0.001, f32::INFINITY), &mut rec));
    }
}
