//! Camera for ray generation.

use crate::gen_f32;
use ember_math::{Ray, Vec3};
use rand::RngCore;

/// Camera generating rays into the scene from normalized viewport
/// coordinates, with an optional thin-lens defocus disk and a shutter
/// interval for motion blur.
#[derive(Clone)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    lens_radius: f32,
    time0: f32,
    time1: f32,
}

impl Camera {
    /// Create a camera.
    ///
    /// - `look_from` / `look_at` / `vup`: position and orientation
    /// - `vfov`: vertical field of view in degrees
    /// - `aspect_ratio`: viewport width over height
    /// - `aperture`: lens diameter (0 disables defocus blur)
    /// - `focus_dist`: distance to the plane of perfect focus
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        look_from: Vec3,
        look_at: Vec3,
        vup: Vec3,
        vfov: f32,
        aspect_ratio: f32,
        aperture: f32,
        focus_dist: f32,
    ) -> Self {
        let theta = vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = aspect_ratio * viewport_height;

        let w = (look_from - look_at).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        let origin = look_from;
        let horizontal = focus_dist * viewport_width * u;
        let vertical = focus_dist * viewport_height * v;
        let lower_left_corner = origin - horizontal / 2.0 - vertical / 2.0 - focus_dist * w;

        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            lens_radius: aperture / 2.0,
            time0: 0.0,
            time1: 0.0,
        }
    }

    /// Set the shutter interval rays are stamped with (motion blur).
    pub fn with_shutter(mut self, time0: f32, time1: f32) -> Self {
        self.time0 = time0;
        self.time1 = time1;
        self
    }

    /// Generate a ray through viewport coordinates (s, t) in [0,1] x [0,1],
    /// t = 0 at the bottom of the image.
    pub fn get_ray(&self, s: f32, t: f32, rng: &mut dyn RngCore) -> Ray {
        let rd = self.lens_radius * random_in_unit_disk(rng);
        let offset = self.u * rd.x + self.v * rd.y;

        let time = self.time0 + gen_f32(rng) * (self.time1 - self.time0);

        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical
                - self.origin
                - offset,
            time,
        )
    }
}

/// Sample a random point in the unit disk.
fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(gen_f32(rng) * 2.0 - 1.0, gen_f32(rng) * 2.0 - 1.0, 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}
