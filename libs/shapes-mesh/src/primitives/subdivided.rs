//! # Subdivided Spheres
//!
//! Icosahedron subdivision onto the unit sphere, and noise-displaced rocks
//! built on top of it.

use super::platonic::create_icosahedron;
use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use crate::weld::weld_triangle_soup;
use config::constants::{WeldConfig, MAX_SUBDIVISIONS, SUBDIVISION_WELD_EPSILON};
use glam::Vec3;
use log::debug;
use shapes_noise::NoiseContext;

/// Splits every triangle of an unindexed soup into four.
///
/// Corner `k` of triangle `t` is `soup[3t + k]`. Each triangle `abc` yields
/// its midpoint triangle followed by the three corner triangles, all with
/// the parent's winding.
///
/// # Errors
///
/// Returns `InvalidParameter` if `soup.len()` is not a multiple of 3.
pub fn subdivide(soup: &[Vec3]) -> MeshResult<Vec<Vec3>> {
    if soup.len() % 3 != 0 {
        return Err(MeshError::invalid_parameter(format!(
            "Subdivision needs whole triangles, got {} points",
            soup.len()
        )));
    }

    let mut out = Vec::with_capacity(soup.len() * 4);
    for tri in soup.chunks_exact(3) {
        let (a, b, c) = (tri[0], tri[1], tri[2]);
        let ab = a.lerp(b, 0.5);
        let bc = b.lerp(c, 0.5);
        let ac = a.lerp(c, 0.5);
        out.extend_from_slice(&[ab, bc, ac, a, ab, ac, ab, b, bc, ac, bc, c]);
    }
    Ok(out)
}

/// Creates a unit sphere by repeatedly subdividing an icosahedron.
///
/// # Arguments
///
/// * `level` - Number of subdivision passes; each multiplies the triangle
///   count by 4
///
/// # Returns
///
/// A welded mesh with `20·4^level` triangles and per-point normals.
///
/// # Errors
///
/// Returns `InvalidParameter` above [`MAX_SUBDIVISIONS`].
///
/// # Example
///
/// ```rust
/// use shapes_mesh::primitives::create_subdivided_sphere;
///
/// let sphere = create_subdivided_sphere(2).unwrap();
/// assert_eq!(sphere.triangle_count(), 320);
/// assert_eq!(sphere.point_count(), 162);
/// ```
pub fn create_subdivided_sphere(level: u32) -> MeshResult<Mesh> {
    if level > MAX_SUBDIVISIONS {
        return Err(MeshError::invalid_parameter(format!(
            "Subdivision level must be at most {MAX_SUBDIVISIONS}: {level}"
        )));
    }

    let mut icosahedron = create_icosahedron();
    icosahedron.unweld(false)?;
    let mut soup = icosahedron.points;
    for _ in 0..level {
        soup = subdivide(&soup)?;
    }
    for p in &mut soup {
        *p = p.normalize();
    }

    let (mut mesh, _) =
        weld_triangle_soup(&soup, SUBDIVISION_WELD_EPSILON, &WeldConfig::default())?;
    mesh.compute_normals();

    debug!(
        "subdivided sphere level {}: {} points, {} triangles",
        level,
        mesh.point_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Creates a rock-like blob by displacing a subdivided sphere with noise.
///
/// Two octaves of noise sampled at each point's `(x, z)` stretch the
/// sphere; the lower half is flattened.
///
/// # Arguments
///
/// * `seed` - Noise seed; equal seeds give identical rocks
/// * `level` - Subdivision level of the underlying sphere
pub fn create_rock(seed: i64, level: u32) -> MeshResult<Mesh> {
    let mut mesh = create_subdivided_sphere(level)?;
    let noise = NoiseContext::new(seed);

    for p in &mut mesh.points {
        let (x, z) = (f64::from(p.x), f64::from(p.z));
        let n = 0.25 * noise.noise2(x, z) + 0.125 * noise.noise2(2.0 * x, 2.0 * z);
        let n = n as f32;

        p.x *= 1.0 + 2.0 * n;
        p.y *= 1.0 + n;
        p.z *= 1.0 + 2.0 * n;
        if p.y < 0.0 {
            p.y = -(-p.y).sqrt() / 2.0;
        }
    }

    mesh.compute_normals();
    Ok(mesh)
}
