//! # Parametric Driver
//!
//! Samples a function over the unit square and stitches the samples into a
//! grid of triangles.

use crate::error::{MeshError, MeshResult};
use crate::mesh::{ensure_indexable, Index, Mesh};
use glam::{Vec2, Vec3};

/// Creates a mesh by sampling `f` over `[0,1]²`.
///
/// # Arguments
///
/// * `f` - Maps a parameter `uv` to a position
/// * `slices` - Subdivisions along `v`
/// * `stacks` - Subdivisions along `u`
///
/// # Returns
///
/// A mesh with `(slices+1)·(stacks+1)` points, texture coordinates equal to
/// the sampled `uv`, `2·slices·stacks` triangles and smooth normals. Seam
/// points are shared for normal computation but kept as separate points.
///
/// # Example
///
/// ```rust
/// use shapes_mesh::primitives::create_parametric;
/// use glam::Vec3;
///
/// let mesh = create_parametric(|uv| Vec3::new(uv.x, uv.y, uv.x * uv.y), 4, 2).unwrap();
/// assert_eq!(mesh.triangle_count(), 16);
/// ```
pub fn create_parametric<F>(f: F, slices: u32, stacks: u32) -> MeshResult<Mesh>
where
    F: Fn(Vec2) -> Vec3,
{
    if slices == 0 || stacks == 0 {
        return Err(MeshError::invalid_parameter(format!(
            "Parametric surface needs at least one slice and stack: {slices}x{stacks}"
        )));
    }

    let columns = slices as usize + 1;
    let rows = stacks as usize + 1;
    ensure_indexable(columns * rows)?;

    let mut points = Vec::with_capacity(columns * rows);
    let mut texcoords = Vec::with_capacity(columns * rows);
    for stack in 0..rows {
        let u = stack as f32 / stacks as f32;
        for slice in 0..columns {
            let uv = Vec2::new(u, slice as f32 / slices as f32);
            points.push(f(uv));
            texcoords.push(uv);
        }
    }

    let mut triangles = Vec::with_capacity(2 * slices as usize * stacks as usize);
    for stack in 0..stacks as usize {
        let row = stack * columns;
        for slice in 0..slices as usize {
            let here = (row + slice) as Index;
            let next = (row + slice + 1) as Index;
            let above = (row + slice + columns) as Index;
            let above_next = (row + slice + 1 + columns) as Index;
            triangles.push([above, next, here]);
            triangles.push([above, above_next, next]);
        }
    }

    let mut mesh = Mesh {
        points,
        triangles,
        normals: None,
        texcoords: Some(texcoords),
    };
    mesh.compute_smooth_normals()?;
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(uv: Vec2) -> Vec3 {
        Vec3::new(uv.x, uv.y, 0.0)
    }

    #[test]
    fn test_grid_counts() {
        let mesh = create_parametric(flat, 5, 3).unwrap();
        assert_eq!(mesh.point_count(), 6 * 4);
        assert_eq!(mesh.triangle_count(), 2 * 5 * 3);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_texcoords_follow_samples() {
        let mesh = create_parametric(flat, 2, 4).unwrap();
        let texcoords = mesh.texcoords().unwrap();
        for (p, uv) in mesh.points().iter().zip(texcoords) {
            assert_eq!(p.truncate(), *uv);
        }
        assert_eq!(texcoords[0], Vec2::ZERO);
        assert_eq!(*texcoords.last().unwrap(), Vec2::ONE);
    }

    #[test]
    fn test_consistent_winding() {
        let mesh = create_parametric(flat, 3, 3).unwrap();
        for tri in mesh.triangles() {
            let [a, b, c] = mesh.corners(tri);
            assert!((b - a).cross(c - a).z > 0.0);
        }
        assert!(mesh.normals().unwrap().iter().all(|n| n.z > 0.99));
    }

    #[test]
    fn test_zero_resolution_rejected() {
        assert!(create_parametric(flat, 0, 3).is_err());
        assert!(create_parametric(flat, 3, 0).is_err());
    }

    #[test]
    fn test_too_many_points_rejected() {
        let err = create_parametric(flat, 300, 300).unwrap_err();
        assert!(matches!(err, MeshError::TooManyVertices { .. }));
    }
}
