//! # Disk
//!
//! Triangle fan around a center point, oriented onto an arbitrary normal.

use crate::error::{MeshError, MeshResult};
use crate::mesh::{Index, Mesh};
use config::constants::MIN_SLICES;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Creates a flat disk.
///
/// # Arguments
///
/// * `radius` - Distance from the center to each rim point
/// * `slices` - Number of rim points (and triangles)
/// * `center` - Position of the center point
/// * `normal` - Facing direction; need not be normalized
///
/// # Returns
///
/// A mesh with `slices + 1` points and `slices` triangles. Point 0 is the
/// center. Every point carries the normalized `normal`.
///
/// # Example
///
/// ```rust
/// use shapes_mesh::primitives::create_disk;
/// use glam::Vec3;
///
/// let disk = create_disk(2.0, 16, Vec3::ZERO, Vec3::Y).unwrap();
/// assert_eq!(disk.triangle_count(), 16);
/// ```
pub fn create_disk(radius: f32, slices: u32, center: Vec3, normal: Vec3) -> MeshResult<Mesh> {
    if slices < MIN_SLICES {
        return Err(MeshError::invalid_parameter(format!(
            "Disk needs at least {MIN_SLICES} slices: {slices}"
        )));
    }
    if radius <= 0.0 || !radius.is_finite() {
        return Err(MeshError::invalid_parameter(format!(
            "Disk radius must be positive: {radius}"
        )));
    }
    let normal = normal.normalize_or_zero();
    if normal == Vec3::ZERO {
        return Err(MeshError::invalid_parameter("Disk normal must be non-zero"));
    }

    let mut mesh = Mesh::with_capacity(slices as usize + 1, slices as usize);
    mesh.add_point(Vec3::ZERO)?;
    for i in 0..slices {
        let theta = i as f32 * TAU / slices as f32;
        mesh.add_point(Vec3::new(radius * theta.cos(), radius * theta.sin(), 0.0))?;
    }
    for i in 0..slices {
        mesh.add_triangle(0, (1 + i) as Index, (1 + (i + 1) % slices) as Index);
    }

    // The fan faces +Z; turn it onto the requested normal.
    let axis = normal.cross(Vec3::NEG_Z);
    if axis.length_squared() > f32::EPSILON * f32::EPSILON {
        mesh.rotate(normal.z.clamp(-1.0, 1.0).acos(), axis);
    } else if normal.z < 0.0 {
        mesh.rotate(PI, Vec3::X);
    }
    mesh.set_normals(vec![normal; slices as usize + 1])?;
    mesh.translate(center);

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn face_normal(mesh: &Mesh, index: usize) -> Vec3 {
        let [a, b, c] = mesh.corners(&mesh.triangle(index));
        (b - a).cross(c - a).normalize()
    }

    #[test]
    fn test_disk_counts() {
        let disk = create_disk(1.0, 8, Vec3::ZERO, Vec3::Z).unwrap();
        assert_eq!(disk.point_count(), 9);
        assert_eq!(disk.triangle_count(), 8);
        assert_eq!(disk.triangle(7), [0, 8, 1]);
        assert!(disk.validate().is_ok());
    }

    #[test]
    fn test_disk_faces_requested_normal() {
        let normals = [
            Vec3::Z,
            Vec3::NEG_Z,
            Vec3::X,
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(1.0, 2.0, -3.0),
        ];
        for requested in normals {
            let disk = create_disk(1.5, 12, Vec3::ZERO, requested).unwrap();
            let expected = requested.normalize();
            for i in 0..disk.triangle_count() {
                let n = face_normal(&disk, i);
                assert_relative_eq!(n.dot(expected), 1.0, epsilon = 1e-4);
            }
            for n in disk.normals().unwrap() {
                assert_relative_eq!(n.dot(expected), 1.0, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_disk_radius_and_center() {
        let center = Vec3::new(3.0, -2.0, 1.0);
        let disk = create_disk(2.0, 6, center, Vec3::new(1.0, 1.0, 0.0)).unwrap();
        assert_relative_eq!(disk.point(0).distance(center), 0.0, epsilon = 1e-5);
        for &p in &disk.points()[1..] {
            assert_relative_eq!(p.distance(center), 2.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_disk_rejects_bad_input() {
        assert!(create_disk(1.0, 2, Vec3::ZERO, Vec3::Z).is_err());
        assert!(create_disk(0.0, 8, Vec3::ZERO, Vec3::Z).is_err());
        assert!(create_disk(1.0, 8, Vec3::ZERO, Vec3::ZERO).is_err());
    }
}
