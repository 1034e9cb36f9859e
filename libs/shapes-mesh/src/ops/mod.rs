//! # Mesh Operations
//!
//! In-place transforms, composition and index-buffer clean-up.
//!
//! - [`transform`]: translate, scale, axis-angle rotation
//! - [`compose`]: merge meshes, unioning their optional buffers
//! - [`cleanup`]: winding inversion, degenerate removal, unwelding

pub mod cleanup;
pub mod compose;
pub mod transform;
