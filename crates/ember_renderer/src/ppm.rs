//! Plain-text PPM (P3) image output.

use crate::renderer::ImageBuffer;
use crate::Color;
use ember_math::Interval;
use std::io::{self, Write};

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Write one pixel as three space-separated integers in [0, 255].
pub fn write_color<W: Write>(out: &mut W, pixel: Color) -> io::Result<()> {
    let intensity = Interval::new(0.000, 0.999);
    let r = (256.0 * intensity.clamp(linear_to_gamma(pixel.x))) as i32;
    let g = (256.0 * intensity.clamp(linear_to_gamma(pixel.y))) as i32;
    let b = (256.0 * intensity.clamp(linear_to_gamma(pixel.z))) as i32;

    writeln!(out, "{r} {g} {b}")
}

/// Write the whole image as an ASCII P3 stream, rows top to bottom.
pub fn write_ppm<W: Write>(out: &mut W, image: &ImageBuffer) -> io::Result<()> {
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", image.width, image.height)?;
    writeln!(out, "255")?;

    for y in 0..image.height {
        for x in 0..image.width {
            write_color(out, image.get(x, y))?;
        }
    }

    Ok(())
}
