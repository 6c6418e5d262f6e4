//! Sphere with linear motion over a time interval (motion blur).

use crate::{
    hittable::{HitRecord, Hittable},
    sphere::Sphere,
    Material,
};
use ember_math::{Aabb, Interval, Ray, Vec3};

/// A sphere whose center moves linearly from `center0` at `time0` to
/// `center1` at `time1`. Each ray intersects the sphere where it was at the
/// ray's own time.
pub struct MovingSphere<M: Material> {
    center0: Vec3,
    center1: Vec3,
    time0: f32,
    time1: f32,
    radius: f32,
    material: M,
}

impl<M: Material> MovingSphere<M> {
    pub fn new(
        center0: Vec3,
        center1: Vec3,
        time0: f32,
        time1: f32,
        radius: f32,
        material: M,
    ) -> Self {
        Self {
            center0,
            center1,
            time0,
            time1,
            radius: radius.max(0.0),
            material,
        }
    }

    /// Center position at the given time (linear interpolation).
    pub fn center(&self, time: f32) -> Vec3 {
        self.center0
            + ((time - self.time0) / (self.time1 - self.time0)) * (self.center1 - self.center0)
    }
}

impl<M: Material + 'static> Hittable for MovingSphere<M> {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let center = self.center(ray.time());
        let oc = center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return false;
        }

        let sqrtd = discriminant.sqrt();

        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return false;
            }
        }

        rec.t = root;
        rec.p = ray.at(rec.t);
        let outward_normal = (rec.p - center) / self.radius;
        rec.set_face_normal(ray, outward_normal);
        (rec.u, rec.v) = Sphere::<M>::get_sphere_uv(outward_normal);
        rec.material = &self.material;

        true
    }

    fn bounding_box(&self, time0: f32, time1: f32) -> Aabb {
        // Union of the boxes at both ends of the query span encloses the
        // whole linear sweep.
        let rvec = Vec3::splat(self.radius);
        let c0 = self.center(time0);
        let c1 = self.center(time1);
        let box0 = Aabb::from_points(c0 - rvec, c0 + rvec);
        let box1 = Aabb::from_points(c1 - rvec, c1 + rvec);
        Aabb::surrounding(&box0, &box1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Lambertian;

    fn test_sphere() -> MovingSphere<Lambertian> {
        MovingSphere::new(
            Vec3::new(0.0, 0.0, -2.0),
            Vec3::new(2.0, 0.0, -2.0),
            0.0,
            1.0,
            0.5,
            Lambertian::new(Vec3::splat(0.5)),
        )
    }

    #[test]
    fn test_center_interpolation() {
        let sphere = test_sphere();
        assert_eq!(sphere.center(0.0), Vec3::new(0.0, 0.0, -2.0));
        assert_eq!(sphere.center(0.5), Vec3::new(1.0, 0.0, -2.0));
        assert_eq!(sphere.center(1.0), Vec3::new(2.0, 0.0, -2.0));
    }

    #[test]
    fn test_hit_respects_ray_time() {
        let sphere = test_sphere();
        let interval = Interval::new(0.001, f32::INFINITY);

        // At time 0 the sphere sits at the origin of the ray's aim.
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z, 0.0);
        let mut rec = HitRecord::default();
        assert!(sphere.hit(&ray, interval, &mut rec));

        // At time 1 it has moved out of the way.
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z, 1.0);
        let mut rec = HitRecord::default();
        assert!(!sphere.hit(&ray, interval, &mut rec));
    }

    #[test]
    fn test_bounding_box_covers_sweep() {
        let sphere = test_sphere();
        let bbox = sphere.bounding_box(0.0, 1.0);
        assert_eq!(bbox.x.min, -0.5);
        assert_eq!(bbox.x.max, 2.5);
        assert_eq!(bbox.y.min, -0.5);
        assert_eq!(bbox.y.max, 0.5);
    }
}
