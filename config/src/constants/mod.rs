//! Centralized configuration values shared across the shapes crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// WELDING CONSTANTS
// =============================================================================

/// Resolution of the welding lattice along each axis.
///
/// The bounding box of a mesh is mapped onto a `WELD_GRID_SIZE³` integer
/// lattice before spatial sorting. Twenty cells per axis is tuned for the
/// point densities produced by the built-in generators.
///
/// # Examples
/// ```
/// use config::constants::WELD_GRID_SIZE;
/// let bins = WELD_GRID_SIZE * WELD_GRID_SIZE * WELD_GRID_SIZE;
/// assert_eq!(bins, 8000);
/// ```
pub const WELD_GRID_SIZE: usize = 20;

/// Number of occupied bins an epsilon cube normally touches.
///
/// Queries that visit more bins than this are still answered exactly; the
/// value only marks where a trace message is emitted.
///
/// # Examples
/// ```
/// use config::constants::WELD_NEIGHBOR_BIN_HINT;
/// assert_eq!(WELD_NEIGHBOR_BIN_HINT, 8);
/// ```
pub const WELD_NEIGHBOR_BIN_HINT: usize = 8;

/// Weld tolerance used when deriving seam-smooth normals.
///
/// # Examples
/// ```
/// use config::constants::SEAM_WELD_EPSILON;
/// assert!(SEAM_WELD_EPSILON > 0.0);
/// ```
pub const SEAM_WELD_EPSILON: f32 = 0.01;

/// Weld tolerance used to re-index a subdivided icosahedron.
///
/// # Examples
/// ```
/// use config::constants::SUBDIVISION_WELD_EPSILON;
/// assert!(SUBDIVISION_WELD_EPSILON < 0.1);
/// ```
pub const SUBDIVISION_WELD_EPSILON: f32 = 0.01;

/// Minimum triangle area kept at the poles of spheres and hemispheres.
pub const POLE_DEGENERATE_AREA: f32 = 0.0001;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Minimum slice count for closed parametric surfaces.
///
/// # Examples
/// ```
/// use config::constants::MIN_SLICES;
/// assert_eq!(MIN_SLICES, 3);
/// ```
pub const MIN_SLICES: u32 = 3;

/// Minimum stack count for closed parametric surfaces.
pub const MIN_STACKS: u32 = 3;

/// Minimum stack count for open tubes (cylinders).
pub const MIN_TUBE_STACKS: u32 = 1;

/// Minimum slice count for planar surfaces.
pub const MIN_PLANAR_SLICES: u32 = 1;

/// Minimum stack count for planar surfaces.
pub const MIN_PLANAR_STACKS: u32 = 1;

/// Smallest torus minor radius that avoids a degenerate tube.
pub const TORUS_MIN_RADIUS: f32 = 0.1;

/// Largest torus minor radius that avoids self-intersection.
pub const TORUS_MAX_RADIUS: f32 = 1.0;

/// Smallest trefoil tube radius.
pub const TREFOIL_MIN_RADIUS: f32 = 0.5;

/// Largest trefoil tube radius that avoids self-intersection.
pub const TREFOIL_MAX_RADIUS: f32 = 3.0;

/// Deepest icosahedron subdivision accepted by the generators.
///
/// Each level multiplies the triangle count by four; level 6 already yields
/// 81 920 triangles.
///
/// # Examples
/// ```
/// use config::constants::MAX_SUBDIVISIONS;
/// assert_eq!(20 * 4usize.pow(MAX_SUBDIVISIONS), 81_920);
/// ```
pub const MAX_SUBDIVISIONS: u32 = 6;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of points addressable by a 16-bit triangle index buffer.
///
/// # Examples
/// ```
/// use config::constants::MAX_POINTS;
/// assert_eq!(MAX_POINTS, u16::MAX as usize + 1);
/// ```
pub const MAX_POINTS: usize = 65_536;

/// Seed used for weighted rule selection when the caller does not supply one.
pub const DEFAULT_LSYSTEM_SEED: u64 = 1;

/// Normalization divisor applied to the summed 2D simplex contributions.
pub const NOISE_NORM_2D: f64 = 47.0;

// =============================================================================
// WELD CONFIG
// =============================================================================

/// Validated snapshot of the welding engine's tunables.
///
/// # Examples
/// ```
/// use config::constants::WeldConfig;
/// let config = WeldConfig::default();
/// assert_eq!(config.grid_size, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeldConfig {
    /// Lattice cells per axis.
    pub grid_size: usize,
    /// Tolerance used when welding for seam-smooth normals.
    pub seam_epsilon: f32,
}

impl WeldConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// grid size and seam epsilon.
    ///
    /// # Examples
    /// ```
    /// use config::constants::WeldConfig;
    /// let cfg = WeldConfig::new(32, 0.001).expect("valid config");
    /// assert_eq!(cfg.grid_size, 32);
    /// ```
    pub fn new(grid_size: usize, seam_epsilon: f32) -> Result<Self, ConfigError> {
        if grid_size < 2 {
            return Err(ConfigError::InvalidGridSize(grid_size));
        }
        if !(seam_epsilon > 0.0) {
            return Err(ConfigError::InvalidEpsilon(seam_epsilon));
        }
        Ok(Self {
            grid_size,
            seam_epsilon,
        })
    }
}

impl Default for WeldConfig {
    fn default() -> Self {
        Self {
            grid_size: WELD_GRID_SIZE,
            seam_epsilon: SEAM_WELD_EPSILON,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the lattice has fewer than two cells per axis.
    InvalidGridSize(usize),
    /// Raised when the epsilon is zero, negative or NaN.
    InvalidEpsilon(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidGridSize(value) => {
                write!(f, "grid_size must be >= 2: {value}")
            }
            ConfigError::InvalidEpsilon(value) => {
                write!(f, "seam_epsilon must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
