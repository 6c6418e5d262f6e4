//! Instance transforms: wrappers that move or rotate another hittable
//! without touching its geometry. Rays are transformed into object space,
//! hit results transformed back out.

use crate::hittable::{HitRecord, Hittable};
use ember_math::{Aabb, Interval, Ray, Vec3};

/// Translates a wrapped hittable by a fixed offset.
pub struct Translate {
    object: Box<dyn Hittable>,
    offset: Vec3,
}

impl Translate {
    pub fn new(object: Box<dyn Hittable>, offset: Vec3) -> Self {
        Self { object, offset }
    }
}

impl Hittable for Translate {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        // Move the ray backwards instead of the object forwards.
        let moved = Ray::new(ray.origin - self.offset, ray.direction, ray.time);

        if !self.object.hit(&moved, ray_t, rec) {
            return false;
        }

        rec.p += self.offset;
        true
    }

    fn bounding_box(&self, time0: f32, time1: f32) -> Aabb {
        self.object.bounding_box(time0, time1).translate(self.offset)
    }
}

/// Rotates a wrapped hittable about the Y axis by a fixed angle.
pub struct RotateY {
    object: Box<dyn Hittable>,
    sin_theta: f32,
    cos_theta: f32,
}

impl RotateY {
    pub fn new(object: Box<dyn Hittable>, angle_degrees: f32) -> Self {
        let radians = angle_degrees.to_radians();
        Self {
            object,
            sin_theta: radians.sin(),
            cos_theta: radians.cos(),
        }
    }

    fn to_world(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            self.cos_theta * p.x + self.sin_theta * p.z,
            p.y,
            -self.sin_theta * p.x + self.cos_theta * p.z,
        )
    }

    fn to_object(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            self.cos_theta * p.x - self.sin_theta * p.z,
            p.y,
            self.sin_theta * p.x + self.cos_theta * p.z,
        )
    }
}

impl Hittable for RotateY {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let rotated = Ray::new(
            self.to_object(ray.origin),
            self.to_object(ray.direction),
            ray.time,
        );

        if !self.object.hit(&rotated, ray_t, rec) {
            return false;
        }

        rec.p = self.to_world(rec.p);
        rec.normal = self.to_world(rec.normal);
        true
    }

    fn bounding_box(&self, time0: f32, time1: f32) -> Aabb {
        rotated_bounds(&self.object.bounding_box(time0, time1), |p| {
            self.to_world(p)
        })
    }
}

/// Rotates a wrapped hittable about the Z axis by a fixed angle.
pub struct RotateZ {
    object: Box<dyn Hittable>,
    sin_theta: f32,
    cos_theta: f32,
}

impl RotateZ {
    pub fn new(object: Box<dyn Hittable>, angle_degrees: f32) -> Self {
        let radians = angle_degrees.to_radians();
        Self {
            object,
            sin_theta: radians.sin(),
            cos_theta: radians.cos(),
        }
    }

    fn to_world(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            self.cos_theta * p.x + self.sin_theta * p.y,
            -self.sin_theta * p.x + self.cos_theta * p.y,
            p.z,
        )
    }

    fn to_object(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            self.cos_theta * p.x - self.sin_theta * p.y,
            self.sin_theta * p.x + self.cos_theta * p.y,
            p.z,
        )
    }
}

impl Hittable for RotateZ {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let rotated = Ray::new(
            self.to_object(ray.origin),
            self.to_object(ray.direction),
            ray.time,
        );

        if !self.object.hit(&rotated, ray_t, rec) {
            return false;
        }

        rec.p = self.to_world(rec.p);
        rec.normal = self.to_world(rec.normal);
        true
    }

    fn bounding_box(&self, time0: f32, time1: f32) -> Aabb {
        rotated_bounds(&self.object.bounding_box(time0, time1), |p| {
            self.to_world(p)
        })
    }
}

/// Conservative box over all eight rotated corners of the input box.
fn rotated_bounds(bbox: &Aabb, rotate: impl Fn(Vec3) -> Vec3) -> Aabb {
    let mut min = Vec3::splat(f32::INFINITY);
    let mut max = Vec3::splat(f32::NEG_INFINITY);

    for i in 0..2 {
        for j in 0..2 {
            for k in 0..2 {
                let corner = Vec3::new(
                    if i == 0 { bbox.x.min } else { bbox.x.max },
                    if j == 0 { bbox.y.min } else { bbox.y.max },
                    if k == 0 { bbox.z.min } else { bbox.z.max },
                );
                let rotated = rotate(corner);
                min = min.min(rotated);
                max = max.max(rotated);
            }
        }
    }

    Aabb::from_points(min, max)
}
