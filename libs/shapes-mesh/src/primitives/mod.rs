//! # Primitives
//!
//! Mesh generators: the parametric driver and its surfaces, fixed platonic
//! tables, disks, and subdivided spheres.

pub mod disk;
pub mod parametric;
pub mod platonic;
pub mod subdivided;
pub mod surfaces;

pub use disk::create_disk;
pub use parametric::create_parametric;
pub use platonic::{
    create_cube, create_dodecahedron, create_icosahedron, create_octahedron, create_tetrahedron,
};
pub use subdivided::{create_rock, create_subdivided_sphere, subdivide};
pub use surfaces::{
    create_cylinder, create_hemisphere, create_klein_bottle, create_parametric_sphere,
    create_plane, create_surface, create_torus, create_trefoil_knot, Surface,
};
