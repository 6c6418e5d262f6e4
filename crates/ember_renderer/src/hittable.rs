//! Hittable trait and HitRecord for ray-object intersection.

use crate::{Material, ScatterResult};
use ember_math::{Aabb, Interval, Ray, Vec3};
use rand::RngCore;

/// A dummy material used for HitRecord::default().
/// Always absorbs light (returns None from scatter).
struct DummyMaterial;

impl Material for DummyMaterial {
    fn scatter(
        &self,
        _ray_in: &Ray,
        _rec: &HitRecord,
        _rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        None
    }
}

/// Static dummy material instance for Default impl.
static DUMMY_MATERIAL: DummyMaterial = DummyMaterial;

/// Record of a ray-object intersection.
///
/// Transient: created per intersection test, overwritten only when a strictly
/// closer valid hit is found, and never outlives a single `hit` call chain.
#[derive(Clone)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Vec3,
    /// Surface normal at intersection (unit length, always points against the ray)
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a dyn Material,
    /// UV texture coordinates in [0,1]x[0,1]
    pub u: f32,
    pub v: f32,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl<'a> Default for HitRecord<'a> {
    fn default() -> Self {
        Self {
            p: Vec3::ZERO,
            normal: Vec3::ZERO,
            material: &DUMMY_MATERIAL,
            u: 0.0,
            v: 0.0,
            t: 0.0,
            front_face: false,
        }
    }
}

impl<'a> HitRecord<'a> {
    /// Set the face normal based on ray direction and outward normal.
    ///
    /// The normal is always stored pointing against the ray direction, so the
    /// front_face flag records which side was struck. `outward_normal` must be
    /// unit length.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        self.front_face = ray.direction().dot(outward_normal) < 0.0;

        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object within the given interval.
    ///
    /// Returns true if hit, and fills in the hit record. Must not mutate any
    /// shared state; the scene is read-only during rendering.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool;

    /// Get the axis-aligned bounding box enclosing this object at every
    /// instant in [time0, time1]. Pure function of the object's parameters;
    /// non-moving objects ignore the time arguments.
    fn bounding_box(&self, time0: f32, time1: f32) -> Aabb;
}

/// An unordered aggregate of hittable objects.
///
/// Linear-scan fallback for intersection and the leaf-level container built
/// by scene assembly. Append-only; immutable during rendering.
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Consume the list, yielding its objects (for BVH construction).
    pub fn into_objects(self) -> Vec<Box<dyn Hittable>> {
        self.objects
    }
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for HittableList {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let mut hit_anything = false;
        let mut closest_so_far = ray_t.max;

        // Shrink the upper bound on each hit so later members are tested
        // against a tighter interval: nearest-hit semantics plus a little
        // free pruning.
        for object in &self.objects {
            let interval = Interval::new(ray_t.min, closest_so_far);
            if object.hit(ray, interval, rec) {
                hit_anything = true;
                closest_so_far = rec.t;
            }
        }

        hit_anything
    }

    fn bounding_box(&self, time0: f32, time1: f32) -> Aabb {
        // Union over all members; EMPTY for an empty list. Callers asking for
        // the box of an empty scene must special-case it.
        self.objects.iter().fold(Aabb::EMPTY, |acc, object| {
            Aabb::surrounding(&acc, &object.bounding_box(time0, time1))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lambertian, Sphere};

    type Color = Vec3;

    #[test]
    fn test_set_face_normal_orientation() {
        let mut rec = HitRecord::default();

        // Ray traveling -Z against a +Z outward normal: front face.
        let ray = Ray::new_simple(Vec3::ZERO, -Vec3::Z);
        rec.set_face_normal(&ray, Vec3::Z);
        assert!(rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);

        // Same normal struck from behind: flag flips and normal is negated,
        // keeping the pair internally consistent.
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::Z);
        rec.set_face_normal(&ray, Vec3::Z);
        assert!(!rec.front_face);
        assert_eq!(rec.normal, -Vec3::Z);
    }

    #[test]
    fn test_list_nearest_hit() {
        let mut list = HittableList::new();
        // Two spheres along -Z; the nearer one must win regardless of
        // insertion order.
        list.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -10.0),
            1.0,
            Lambertian::new(Color::splat(0.5)),
        )));
        list.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -3.0),
            1.0,
            Lambertian::new(Color::splat(0.5)),
        )));

        let ray = Ray::new_simple(Vec3::ZERO, -Vec3::Z);
        let mut rec = HitRecord::default();
        assert!(list.hit(&ray, Interval::new(0.001, f32::INFINITY), &mut rec));
        assert!((rec.t - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_empty_list_never_hits() {
        let list = HittableList::new();
        let ray = Ray::new_simple(Vec3::ZERO, -Vec3::Z);
        let mut rec = HitRecord::default();
        assert!(!list.hit(&ray, Interval::new(0.001, f32::INFINITY), &mut rec));
        assert_eq!(list.bounding_box(0.0, 1.0), Aabb::EMPTY);
    }
}
