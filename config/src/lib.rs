//! # Config Crate
//!
//! Centralized configuration constants for the shapes mesh engine.
//! All tuned values (weld lattice resolution, seam tolerances, minimum
//! tessellations, index limits) are defined here so the generator, welding
//! and L-system crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MIN_SLICES, WELD_GRID_SIZE};
//!
//! let slices = 2u32;
//! assert!(slices < MIN_SLICES);
//! assert_eq!(WELD_GRID_SIZE, 20);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Index-Width Aware**: Limits follow the 16-bit triangle index buffer
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
