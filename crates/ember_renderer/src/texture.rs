//! Texture trait and implementations sampled by materials.

use crate::material::Color;
use crate::perlin::Perlin;
use ember_math::{Interval, Vec3};
use image::RgbImage;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while loading textures from disk.
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Trait for textures: a color as a function of surface coordinates.
pub trait Texture: Send + Sync {
    /// Sample the texture at UV coordinates (u, v) and world point p.
    fn value(&self, u: f32, v: f32, p: Vec3) -> Color;
}

/// A uniform color, everywhere.
pub struct SolidColor {
    color_value: Color,
}

impl SolidColor {
    pub fn new(color_value: Color) -> Self {
        Self { color_value }
    }
}

impl Texture for SolidColor {
    fn value(&self, _u: f32, _v: f32, _p: Vec3) -> Color {
        self.color_value
    }
}

/// Two alternating sub-textures in a 3D checker pattern.
pub struct CheckerTexture {
    even: Arc<dyn Texture>,
    odd: Arc<dyn Texture>,
}

impl CheckerTexture {
    pub fn new(even: Arc<dyn Texture>, odd: Arc<dyn Texture>) -> Self {
        Self { even, odd }
    }

    /// Checker between two solid colors.
    pub fn from_colors(c1: Color, c2: Color) -> Self {
        Self {
            even: Arc::new(SolidColor::new(c1)),
            odd: Arc::new(SolidColor::new(c2)),
        }
    }
}

impl Texture for CheckerTexture {
    fn value(&self, u: f32, v: f32, p: Vec3) -> Color {
        let sines = (10.0 * p.x).sin() * (10.0 * p.y).sin() * (10.0 * p.z).sin();
        if sines < 0.0 {
            self.odd.value(u, v, p)
        } else {
            self.even.value(u, v, p)
        }
    }
}

/// Marble-like procedural texture driven by Perlin turbulence.
pub struct NoiseTexture {
    noise: Perlin,
    scale: f32,
}

impl NoiseTexture {
    pub fn new(scale: f32, rng: &mut dyn rand::RngCore) -> Self {
        Self {
            noise: Perlin::new(rng),
            scale,
        }
    }
}

impl Texture for NoiseTexture {
    fn value(&self, _u: f32, _v: f32, p: Vec3) -> Color {
        Color::ONE * 0.5 * (1.0 + (self.scale * p.z + 10.0 * self.noise.turb(p, 7)).sin())
    }
}

/// Sentinel color returned when image data is unavailable: solid cyan makes
/// the failure visible in the render without aborting it.
const MISSING_TEXTURE_COLOR: Color = Color::new(0.0, 1.0, 1.0);

/// A texture backed by an image file.
pub struct ImageTexture {
    image: Option<RgbImage>,
}

impl ImageTexture {
    /// Load an image texture, failing on IO or decode errors.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TextureError> {
        let image = image::open(path.as_ref())?.to_rgb8();
        Ok(Self { image: Some(image) })
    }

    /// Load an image texture, degrading to the sentinel color if the file is
    /// missing or unreadable. The render proceeds either way.
    pub fn open(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(texture) => texture,
            Err(err) => {
                log::warn!(
                    "failed to load texture {}: {err}; using sentinel color",
                    path.as_ref().display()
                );
                Self { image: None }
            }
        }
    }
}

impl Texture for ImageTexture {
    fn value(&self, u: f32, v: f32, _p: Vec3) -> Color {
        let Some(image) = &self.image else {
            return MISSING_TEXTURE_COLOR;
        };

        // Clamp input coordinates to [0,1] x [1,0]
        let unit = Interval::new(0.0, 1.0);
        let u = unit.clamp(u);
        let v = 1.0 - unit.clamp(v); // Flip V to image coordinates

        let i = ((u * image.width() as f32) as u32).min(image.width() - 1);
        let j = ((v * image.height() as f32) as u32).min(image.height() - 1);
        let pixel = image.get_pixel(i, j);

        let color_scale = 1.0 / 255.0;
        Color::new(
            color_scale * pixel[0] as f32,
            color_scale * pixel[1] as f32,
            color_scale * pixel[2] as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_solid_color() {
        let tex = SolidColor::new(Color::new(0.1, 0.2, 0.3));
        assert_eq!(tex.value(0.0, 0.0, Vec3::ZERO), Color::new(0.1, 0.2, 0.3));
        assert_eq!(
            tex.value(0.9, 0.4, Vec3::new(5.0, -2.0, 1.0)),
            Color::new(0.1, 0.2, 0.3)
        );
    }

    #[test]
    fn test_checker_alternates() {
        let tex = CheckerTexture::from_colors(Color::ZERO, Color::ONE);
        // sin(10 * 0.157) ~ sin(pi/2) > 0 on each axis: even cell
        let even = tex.value(0.0, 0.0, Vec3::splat(0.157));
        // Flipping one axis flips the sine product: odd cell
        let odd = tex.value(0.0, 0.0, Vec3::new(0.157, 0.157, -0.157));
        assert_eq!(even, Color::ZERO);
        assert_eq!(odd, Color::ONE);
    }

    #[test]
    fn test_noise_texture_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let tex = NoiseTexture::new(4.0, &mut rng);
        for i in 0..50 {
            let p = Vec3::new(i as f32 * 0.37, i as f32 * 0.11, i as f32 * 0.73);
            let c = tex.value(0.0, 0.0, p);
            // 0.5 * (1 + sin) stays in [0, 1] per channel
            assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0);
        }
    }

    #[test]
    fn test_missing_image_degrades_to_sentinel() {
        let tex = ImageTexture::open("definitely/not/a/real/file.png");
        assert_eq!(tex.value(0.5, 0.5, Vec3::ZERO), MISSING_TEXTURE_COLOR);
    }

    #[test]
    fn test_load_missing_image_errors() {
        assert!(ImageTexture::load("definitely/not/a/real/file.png").is_err());
    }
}
