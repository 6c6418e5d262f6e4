//! Lattice gradient noise for procedural textures.

use crate::gen_f32;
use ember_math::Vec3;
use rand::{Rng, RngCore};

const POINT_COUNT: usize = 256;

/// Perlin noise over a 256-entry lattice of random unit gradients.
///
/// Built once per texture from a caller-supplied RNG; sampling is pure.
pub struct Perlin {
    ranvec: Vec<Vec3>,
    perm_x: Vec<usize>,
    perm_y: Vec<usize>,
    perm_z: Vec<usize>,
}

impl Perlin {
    pub fn new(rng: &mut dyn RngCore) -> Self {
        let ranvec = (0..POINT_COUNT)
            .map(|_| {
                Vec3::new(
                    gen_f32(rng) * 2.0 - 1.0,
                    gen_f32(rng) * 2.0 - 1.0,
                    gen_f32(rng) * 2.0 - 1.0,
                )
                .normalize()
            })
            .collect();

        Self {
            ranvec,
            perm_x: Self::generate_perm(rng),
            perm_y: Self::generate_perm(rng),
            perm_z: Self::generate_perm(rng),
        }
    }

    /// Gradient noise at p, in [-1, 1].
    pub fn noise(&self, p: Vec3) -> f32 {
        let u = p.x - p.x.floor();
        let v = p.y - p.y.floor();
        let w = p.z - p.z.floor();

        let i = p.x.floor() as i32;
        let j = p.y.floor() as i32;
        let k = p.z.floor() as i32;

        let mut c = [[[Vec3::ZERO; 2]; 2]; 2];
        for (di, plane) in c.iter_mut().enumerate() {
            for (dj, row) in plane.iter_mut().enumerate() {
                for (dk, cell) in row.iter_mut().enumerate() {
                    let idx = self.perm_x[((i + di as i32) & 255) as usize]
                        ^ self.perm_y[((j + dj as i32) & 255) as usize]
                        ^ self.perm_z[((k + dk as i32) & 255) as usize];
                    *cell = self.ranvec[idx];
                }
            }
        }

        Self::trilinear_interp(&c, u, v, w)
    }

    /// Turbulence: sum of `depth` octaves of absolute noise.
    pub fn turb(&self, p: Vec3, depth: u32) -> f32 {
        let mut accum = 0.0;
        let mut temp_p = p;
        let mut weight = 1.0;

        for _ in 0..depth {
            accum += weight * self.noise(temp_p);
            weight *= 0.5;
            temp_p *= 2.0;
        }

        accum.abs()
    }

    fn trilinear_interp(c: &[[[Vec3; 2]; 2]; 2], u: f32, v: f32, w: f32) -> f32 {
        // Hermitian smoothing removes the grid-aligned banding of plain
        // linear weights.
        let uu = u * u * (3.0 - 2.0 * u);
        let vv = v * v * (3.0 - 2.0 * v);
        let ww = w * w * (3.0 - 2.0 * w);

        let mut accum = 0.0;
        for (i, plane) in c.iter().enumerate() {
            for (j, row) in plane.iter().enumerate() {
                for (k, cell) in row.iter().enumerate() {
                    let (fi, fj, fk) = (i as f32, j as f32, k as f32);
                    let weight_v = Vec3::new(u - fi, v - fj, w - fk);
                    accum += (fi * uu + (1.0 - fi) * (1.0 - uu))
                        * (fj * vv + (1.0 - fj) * (1.0 - vv))
                        * (fk * ww + (1.0 - fk) * (1.0 - ww))
                        * cell.dot(weight_v);
                }
            }
        }

        accum
    }

    fn generate_perm(rng: &mut dyn RngCore) -> Vec<usize> {
        let mut p: Vec<usize> = (0..POINT_COUNT).collect();
        // Fisher-Yates
        for i in (1..POINT_COUNT).rev() {
            let target = rng.gen_range(0..=i);
            p.swap(i, target);
        }
        p
    }
}
