//! Ember - CPU Monte Carlo path tracer.
//!
//! Estimates the radiance arriving at a virtual camera by recursively
//! tracing light paths through an immutable scene of geometric primitives
//! and averaging stochastic samples into pixel colors.

use rand::{Rng, RngCore};

mod aarect;
mod bvh;
mod camera;
mod cuboid;
mod hittable;
mod material;
mod moving_sphere;
mod perlin;
mod ppm;
mod renderer;
mod sphere;
mod texture;
mod transform;

pub use aarect::{XyRect, XzRect, YzRect};
pub use bvh::{BvhNode, SplitHeuristic};
pub use camera::Camera;
pub use cuboid::Cuboid;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Color, Dielectric, DiffuseLight, Lambertian, Material, Metal, ScatterResult};
pub use moving_sphere::MovingSphere;
pub use perlin::Perlin;
pub use ppm::{linear_to_gamma, write_color, write_ppm};
pub use renderer::{ray_color, render, ImageBuffer, RenderConfig};
pub use sphere::Sphere;
pub use texture::{CheckerTexture, ImageTexture, NoiseTexture, SolidColor, Texture, TextureError};
pub use transform::{RotateY, RotateZ, Translate};

/// Re-export common math types from ember_math.
pub use ember_math::{Aabb, Interval, Ray, Vec3};

/// Uniform random f32 in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen()
}
