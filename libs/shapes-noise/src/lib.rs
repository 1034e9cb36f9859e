//! # Shapes Noise
//!
//! Seeded coherent noise for procedural geometry.
//!
//! ## Architecture
//!
//! ```text
//! seed → NoiseContext (permutation table) → noise2(x, y)
//! ```
//!
//! Each [`NoiseContext`] owns its own permutation table, so contexts built
//! from different seeds can be used from different threads without any
//! synchronization.
//!
//! ## Example
//!
//! ```rust
//! use shapes_noise::NoiseContext;
//!
//! let ctx = NoiseContext::new(42);
//! let value = ctx.noise2(0.5, 1.25);
//! assert!(value.abs() <= 1.0);
//! ```

pub mod simplex;

pub use simplex::NoiseContext;
