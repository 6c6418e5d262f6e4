//! Recursive Monte Carlo radiance estimation and the sequential render loop.

use crate::{gen_f32, Camera, Color, HitRecord, Hittable};
use ember_math::{Interval, Ray};
use rand::RngCore;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Background radiance when a ray escapes the scene
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 100,
            max_depth: 50,
            background: Color::ZERO,
        }
    }
}

/// Estimate the radiance arriving along a ray.
///
/// The core path tracing recursion: emission at the struck surface plus the
/// recursively estimated incoming light, attenuated per channel by the
/// surface's response. Recursion depth is the only termination guarantee
/// against unbounded bounce chains; paths longer than `depth` bounces are
/// dropped, an accepted truncation bias.
pub fn ray_color(
    ray: &Ray,
    background: Color,
    world: &dyn Hittable,
    depth: u32,
    rng: &mut dyn RngCore,
) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    let mut rec = HitRecord::default();

    // The epsilon lower bound avoids self-intersection at the ray origin.
    if !world.hit(ray, Interval::new(0.001, f32::INFINITY), &mut rec) {
        return background;
    }

    let emitted = rec.material.emitted(rec.u, rec.v, rec.p);

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => {
            let incoming = ray_color(&result.scattered, background, world, depth - 1, rng);
            emitted + result.attenuation * incoming
        }
        // Absorbed: the surface contributes only its own emission.
        None => emitted,
    }
}

/// Image buffer of linear (pre-gamma) colors, row 0 at the top.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }
}

/// Render the scene to an image buffer, sequentially, top row first.
///
/// Each pixel is the arithmetic mean of `samples_per_pixel` independent
/// estimates with jittered sub-pixel offsets.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    width: u32,
    height: u32,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(width, height);

    for row in 0..height {
        let j = height - 1 - row;
        log::debug!("scanlines remaining: {}", j + 1);

        for i in 0..width {
            let mut pixel_color = Color::ZERO;
            for _ in 0..config.samples_per_pixel {
                let s = (i as f32 + gen_f32(rng)) / (width - 1) as f32;
                let t = (j as f32 + gen_f32(rng)) / (height - 1) as f32;
                let ray = camera.get_ray(s, t, rng);
                pixel_color += ray_color(&ray, config.background, world, config.max_depth, rng);
            }
            image.set(i, row, pixel_color / config.samples_per_pixel as f32);
        }
    }

    log::info!("render finished: {width}x{height}, {} spp", config.samples_per_pixel);
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Lambertian;
    use crate::{DiffuseLight, HittableList, Sphere, XzRect};
    use ember_math::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_depth_zero_is_black() {
        // Even an emissive scene contributes nothing at depth 0.
        let mut world = HittableList::new();
        world.add(Box::new(XzRect::new(
            -5.0,
            5.0,
            -5.0,
            5.0,
            1.0,
            DiffuseLight::new(Color::splat(15.0)),
        )));

        let ray = Ray::new_simple(Vec3::ZERO, Vec3::Y);
        let mut rng = StdRng::seed_from_u64(1);
        let color = ray_color(&ray, Color::splat(0.7), &world, 0, &mut rng);
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_empty_scene_returns_background() {
        let world = HittableList::new();
        let background = Color::new(0.1, 0.2, 0.3);
        let mut rng = StdRng::seed_from_u64(2);

        for depth in 1..8 {
            let ray = Ray::new_simple(Vec3::ZERO, Vec3::new(0.3, -0.9, 0.2));
            assert_eq!(
                ray_color(&ray, background, &world, depth, &mut rng),
                background
            );
        }
    }

    #[test]
    fn test_emissive_rect_is_exact() {
        // One emissive rectangle over black background: a primary ray that
        // strikes it picks up exactly the emission, with zero variance.
        let mut world = HittableList::new();
        world.add(Box::new(XzRect::new(
            213.0,
            343.0,
            227.0,
            332.0,
            554.0,
            DiffuseLight::new(Color::splat(15.0)),
        )));

        let ray = Ray::new_simple(Vec3::new(278.0, 0.0, 280.0), Vec3::Y);
        let mut rng = StdRng::seed_from_u64(3);
        let color = ray_color(&ray, Color::ZERO, &world, 50, &mut rng);
        assert_eq!(color, Color::splat(15.0));
    }

    #[test]
    fn test_depth_one_diffuse_bounce_is_black() {
        // depth 1: the diffuse hit scatters, but its recursion bottoms out
        // immediately, so the surface contributes nothing.
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -2.0),
            1.0,
            Lambertian::new(Color::splat(0.8)),
        )));

        let ray = Ray::new_simple(Vec3::ZERO, -Vec3::Z);
        let mut rng = StdRng::seed_from_u64(4);
        let color = ray_color(&ray, Color::ONE, &world, 1, &mut rng);
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_render_dimensions_and_hit() {
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            Lambertian::new(Color::splat(0.5)),
        )));

        let camera = Camera::new(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::Y,
            90.0,
            1.0,
            0.0,
            1.0,
        );
        let config = RenderConfig {
            samples_per_pixel: 4,
            max_depth: 5,
            background: Color::new(0.5, 0.7, 1.0),
        };

        let mut rng = StdRng::seed_from_u64(5);
        let image = render(&camera, &world, &config, 11, 11, &mut rng);

        assert_eq!(image.width, 11);
        assert_eq!(image.height, 11);
        assert_eq!(image.pixels.len(), 121);

        // The center pixel sees the sphere, not the sky.
        let center = image.get(5, 5);
        assert_ne!(center, config.background);

        // A corner pixel escapes to the background.
        let corner = image.get(0, 0);
        assert!((corner - config.background).length() < 0.2);
    }
}
