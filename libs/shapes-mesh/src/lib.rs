//! # Shapes Mesh
//!
//! Procedural triangle meshes with 16-bit indices.
//!
//! ## Architecture
//!
//! ```text
//! primitives (generators) → Mesh → ops / weld / normals → export
//! ```
//!
//! ## Modules
//!
//! - **Mesh**: point, triangle, normal and texcoord buffers
//! - **Weld**: grid-hash deduplication with a per-point [`WeldMap`]
//! - **Normals**: area-weighted and seam-smooth vertex normals
//! - **Primitives**: parametric surfaces, platonic solids, disks, spheres
//! - **Ops**: transforms, merging and index-buffer clean-up
//! - **Export**: plain-text vertex/face listing
//!
//! ## Usage
//!
//! ```rust
//! use shapes_mesh::primitives::{create_parametric_sphere, create_cylinder};
//! use glam::Vec3;
//!
//! let mut scene = create_parametric_sphere(16, 8).unwrap();
//! let mut stem = create_cylinder(12, 1).unwrap();
//! stem.translate(Vec3::new(0.0, 0.0, -1.5));
//! scene.merge(&stem).unwrap();
//! assert!(scene.validate().is_ok());
//! ```

pub mod error;
pub mod export;
pub mod mesh;
pub mod normals;
pub mod ops;
pub mod primitives;
pub mod weld;

pub use error::{MeshError, MeshResult};
pub use mesh::{Aabb, Index, Mesh, Triangle};
pub use weld::{weld_points, weld_triangle_soup, WeldMap};
