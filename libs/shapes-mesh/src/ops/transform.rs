//! # Transforms
//!
//! Applies translation, scaling and rotation to a mesh in place.

use crate::mesh::Mesh;
use glam::{Mat3, Vec3};

impl Mesh {
    /// Translates every point by `offset`.
    ///
    /// Normals are unaffected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapes_mesh::primitives::create_cube;
    /// use glam::Vec3;
    ///
    /// let mut mesh = create_cube();
    /// mesh.translate(Vec3::new(10.0, 0.0, 0.0));
    /// assert!(mesh.compute_aabb().unwrap().min.x >= 10.0);
    /// ```
    pub fn translate(&mut self, offset: Vec3) {
        for p in &mut self.points {
            *p += offset;
        }
    }

    /// Multiplies every point component-wise by `factor`.
    ///
    /// Normals are not touched.
    pub fn scale(&mut self, factor: Vec3) {
        for p in &mut self.points {
            *p *= factor;
        }
    }

    /// Rotates points and normals by `radians` about `axis`.
    ///
    /// The axis is normalized first; a zero axis leaves the mesh unchanged.
    pub fn rotate(&mut self, radians: f32, axis: Vec3) {
        let axis = axis.normalize_or_zero();
        if axis == Vec3::ZERO {
            return;
        }
        let rotation = Mat3::from_axis_angle(axis, radians);

        for p in &mut self.points {
            *p = rotation * *p;
        }

        if let Some(normals) = &mut self.normals {
            for n in normals {
                *n = rotation * *n;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn sample() -> Mesh {
        let points = vec![
            Vec3::new(0.1, 0.2, 0.3),
            Vec3::new(-1.7, 3.3, 0.01),
            Vec3::new(12.5, -0.4, 7.75),
        ];
        Mesh::from_parts(points, vec![[0, 1, 2]]).unwrap()
    }

    #[test]
    fn test_translate_moves_points() {
        let mut mesh = sample();
        mesh.translate(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(mesh.point(1), Vec3::new(-1.7, 3.3, 0.01) + Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_translate_round_trips_exactly() {
        let points = vec![
            Vec3::new(0.25, -1.5, 2.0),
            Vec3::new(3.75, 0.5, -0.125),
            Vec3::new(-2.0, 4.0, 1.0),
        ];
        let original = Mesh::from_parts(points, vec![[0, 1, 2]]).unwrap();
        let mut mesh = original.clone();
        let offset = Vec3::new(3.0, -4.0, 8.0);
        mesh.translate(offset);
        mesh.translate(-offset);
        assert_eq!(mesh.points(), original.points());
    }

    #[test]
    fn test_scale_leaves_normals() {
        let mut mesh = sample();
        mesh.set_normals(vec![Vec3::Y; 3]).unwrap();
        mesh.scale(Vec3::new(2.0, 3.0, 4.0));
        let p = mesh.point(0);
        assert_relative_eq!(p.x, 0.2, epsilon = 1e-6);
        assert_relative_eq!(p.y, 0.6, epsilon = 1e-6);
        assert_relative_eq!(p.z, 1.2, epsilon = 1e-6);
        assert_eq!(mesh.normals().unwrap()[0], Vec3::Y);
    }

    #[test]
    fn test_rotate_quarter_turn_about_z() {
        let mut mesh = Mesh::from_parts(vec![Vec3::X, Vec3::Y, Vec3::Z], vec![[0, 1, 2]]).unwrap();
        mesh.set_normals(vec![Vec3::X; 3]).unwrap();
        mesh.rotate(FRAC_PI_2, Vec3::Z);

        let p = mesh.point(0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(mesh.point(2).z, 1.0, epsilon = 1e-6);

        let n = mesh.normals().unwrap()[0];
        assert_relative_eq!(n.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rotate_normalizes_axis() {
        let mut a = sample();
        let mut b = sample();
        a.rotate(0.7, Vec3::new(0.0, 0.0, 5.0));
        b.rotate(0.7, Vec3::Z);
        for (pa, pb) in a.points().iter().zip(b.points()) {
            assert_relative_eq!(pa.x, pb.x, epsilon = 1e-5);
            assert_relative_eq!(pa.y, pb.y, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_rotate_zero_axis_is_noop() {
        let mut mesh = sample();
        mesh.rotate(1.0, Vec3::ZERO);
        assert_eq!(mesh, sample());
    }
}
