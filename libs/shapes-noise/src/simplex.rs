//! # 2D Simplex Noise
//!
//! OpenSimplex-style noise evaluated on a skewed triangular lattice.
//! Each lattice corner contributes a gradient dot product weighted by a
//! quartic falloff of its squared distance.

use config::constants::NOISE_NORM_2D;

/// Skew factor taking input space onto the simplex lattice.
const STRETCH_2D: f64 = -0.211_324_865_405_187;

/// Inverse skew factor taking lattice coordinates back to input space.
const SQUISH_2D: f64 = 0.366_025_403_784_439;

/// LCG multiplier and increment used to shuffle the permutation table.
const LCG_MULTIPLIER: i64 = 6_364_136_223_846_793_005;
const LCG_INCREMENT: i64 = 1_442_695_040_888_963_407;

/// Gradients approximating the directions to the vertices of an octagon.
const GRADIENTS_2D: [i8; 16] = [5, 2, 2, 5, -5, 2, -2, 5, 5, -2, 2, -5, -5, -2, -2, -5];

/// Per-seed noise state.
///
/// Holds the 256-entry permutation table generated for one seed. The table
/// is never shared; clone the context to hand a copy to another thread.
///
/// # Example
///
/// ```rust
/// use shapes_noise::NoiseContext;
///
/// let a = NoiseContext::new(7);
/// let b = NoiseContext::new(7);
/// assert_eq!(a.noise2(3.0, 4.0), b.noise2(3.0, 4.0));
/// ```
#[derive(Debug, Clone)]
pub struct NoiseContext {
    seed: i64,
    perm: [u8; 256],
}

impl NoiseContext {
    /// Builds the permutation table for `seed` with a linear-congruential
    /// Fisher-Yates shuffle.
    pub fn new(seed: i64) -> Self {
        let mut source: [u8; 256] = std::array::from_fn(|i| i as u8);
        let mut perm = [0u8; 256];

        let mut state = seed;
        for _ in 0..3 {
            state = lcg_step(state);
        }
        for i in (0..256i64).rev() {
            state = lcg_step(state);
            let mut r = state.wrapping_add(31) % (i + 1);
            if r < 0 {
                r += i + 1;
            }
            let r = r as usize;
            let i = i as usize;
            perm[i] = source[r];
            source[r] = source[i];
        }

        log::trace!("built simplex permutation for seed {seed}");
        Self { seed, perm }
    }

    /// Returns the seed this context was built from.
    #[inline]
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Returns the permutation table.
    #[inline]
    pub fn permutation(&self) -> &[u8; 256] {
        &self.perm
    }

    /// Evaluates 2D noise at `(x, y)`.
    ///
    /// The result lies roughly within `[-1, 1]` and varies smoothly with the
    /// input.
    ///
    /// # Algorithm
    ///
    /// 1. Skew the point onto the lattice and find the rhombus super-cell.
    /// 2. Decide which of the two triangles of the cell contains the point.
    /// 3. Sum the contributions of the (1,0), (0,1), the containing
    ///    triangle's base corner and one extra nearby corner.
    pub fn noise2(&self, x: f64, y: f64) -> f64 {
        // Place input coordinates onto grid.
        let stretch_offset = (x + y) * STRETCH_2D;
        let xs = x + stretch_offset;
        let ys = y + stretch_offset;

        let mut xsb = xs.floor() as i32;
        let mut ysb = ys.floor() as i32;

        // Skew back out to get the rhombus origin in input space.
        let squish_offset = f64::from(xsb + ysb) * SQUISH_2D;
        let xb = f64::from(xsb) + squish_offset;
        let yb = f64::from(ysb) + squish_offset;

        let xins = xs - f64::from(xsb);
        let yins = ys - f64::from(ysb);
        let in_sum = xins + yins;

        let mut dx0 = x - xb;
        let mut dy0 = y - yb;

        let mut value = 0.0;

        // Contribution (1,0)
        let dx1 = dx0 - 1.0 - SQUISH_2D;
        let dy1 = dy0 - SQUISH_2D;
        value += self.contribution(xsb + 1, ysb, dx1, dy1);

        // Contribution (0,1)
        let dx2 = dx0 - SQUISH_2D;
        let dy2 = dy0 - 1.0 - SQUISH_2D;
        value += self.contribution(xsb, ysb + 1, dx2, dy2);

        let (xsv_ext, ysv_ext, dx_ext, dy_ext);
        if in_sum <= 1.0 {
            // Inside the triangle at (0,0).
            let zins = 1.0 - in_sum;
            if zins > xins || zins > yins {
                if xins > yins {
                    xsv_ext = xsb + 1;
                    ysv_ext = ysb - 1;
                    dx_ext = dx0 - 1.0;
                    dy_ext = dy0 + 1.0;
                } else {
                    xsv_ext = xsb - 1;
                    ysv_ext = ysb + 1;
                    dx_ext = dx0 + 1.0;
                    dy_ext = dy0 - 1.0;
                }
            } else {
                xsv_ext = xsb + 1;
                ysv_ext = ysb + 1;
                dx_ext = dx0 - 1.0 - 2.0 * SQUISH_2D;
                dy_ext = dy0 - 1.0 - 2.0 * SQUISH_2D;
            }
        } else {
            // Inside the triangle at (1,1).
            let zins = 2.0 - in_sum;
            if zins < xins || zins < yins {
                if xins > yins {
                    xsv_ext = xsb + 2;
                    ysv_ext = ysb;
                    dx_ext = dx0 - 2.0 - 2.0 * SQUISH_2D;
                    dy_ext = dy0 - 2.0 * SQUISH_2D;
                } else {
                    xsv_ext = xsb;
                    ysv_ext = ysb + 2;
                    dx_ext = dx0 - 2.0 * SQUISH_2D;
                    dy_ext = dy0 - 2.0 - 2.0 * SQUISH_2D;
                }
            } else {
                xsv_ext = xsb;
                ysv_ext = ysb;
                dx_ext = dx0;
                dy_ext = dy0;
            }
            xsb += 1;
            ysb += 1;
            dx0 = dx0 - 1.0 - 2.0 * SQUISH_2D;
            dy0 = dy0 - 1.0 - 2.0 * SQUISH_2D;
        }

        // Contribution (0,0) or (1,1)
        value += self.contribution(xsb, ysb, dx0, dy0);

        // Extra vertex
        value += self.contribution(xsv_ext, ysv_ext, dx_ext, dy_ext);

        value / NOISE_NORM_2D
    }

    /// Quartic-falloff contribution of one lattice corner.
    #[inline]
    fn contribution(&self, xsv: i32, ysv: i32, dx: f64, dy: f64) -> f64 {
        let attn = 2.0 - dx * dx - dy * dy;
        if attn <= 0.0 {
            return 0.0;
        }
        let attn = attn * attn;
        attn * attn * self.extrapolate(xsv, ysv, dx, dy)
    }

    #[inline]
    fn extrapolate(&self, xsv: i32, ysv: i32, dx: f64, dy: f64) -> f64 {
        let first = usize::from(self.perm[(xsv & 0xFF) as usize]);
        let index = usize::from(self.perm[(first + (ysv & 0xFF) as usize) & 0xFF]) & 0x0E;
        f64::from(GRADIENTS_2D[index]) * dx + f64::from(GRADIENTS_2D[index + 1]) * dy
    }
}

#[inline]
fn lcg_step(state: i64) -> i64 {
    state.wrapping_mul(LCG_MULTIPLIER).wrapping_add(LCG_INCREMENT)
}
