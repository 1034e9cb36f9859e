//! # Composition
//!
//! Appends one mesh onto another.

use crate::error::MeshResult;
use crate::mesh::{ensure_indexable, Index, Mesh};
use glam::{Vec2, Vec3};

/// Concatenates two optional attribute buffers.
///
/// The result is present if either side is; the missing side is zero-filled.
fn union_buffer<T: Copy + Default>(
    dst: Option<Vec<T>>,
    dst_len: usize,
    src: Option<&[T]>,
    src_len: usize,
) -> Option<Vec<T>> {
    match (dst, src) {
        (None, None) => None,
        (dst, src) => {
            let mut out = dst.unwrap_or_else(|| vec![T::default(); dst_len]);
            match src {
                Some(values) => out.extend_from_slice(values),
                None => out.resize(dst_len + src_len, T::default()),
            }
            Some(out)
        }
    }
}

impl Mesh {
    /// Appends `src` to this mesh.
    ///
    /// Source indices are offset by this mesh's point count. Normals and
    /// texcoords survive if either mesh has them.
    ///
    /// # Errors
    ///
    /// Returns `TooManyVertices` if the combined point count would not fit
    /// a 16-bit index; the mesh is left unchanged.
    pub fn merge(&mut self, src: &Mesh) -> MeshResult<()> {
        let dst_len = self.points.len();
        let src_len = src.points.len();
        ensure_indexable(dst_len + src_len)?;

        self.normals = union_buffer::<Vec3>(self.normals.take(), dst_len, src.normals(), src_len);
        self.texcoords = union_buffer::<Vec2>(self.texcoords.take(), dst_len, src.texcoords(), src_len);

        self.points.extend_from_slice(&src.points);
        if src.triangles.is_empty() {
            return Ok(());
        }
        // Any source index implies dst_len + index < MAX_POINTS.
        let offset = dst_len as Index;
        self.triangles.extend(
            src.triangles
                .iter()
                .map(|t| [t[0] + offset, t[1] + offset, t[2] + offset]),
        );
        Ok(())
    }

    /// Appends `src` and consumes it.
    pub fn merge_and_free(&mut self, src: Mesh) -> MeshResult<()> {
        self.merge(&src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use config::constants::MAX_POINTS;

    fn triangle(offset: f32) -> Mesh {
        Mesh::from_parts(
            vec![
                Vec3::new(offset, 0.0, 0.0),
                Vec3::new(offset + 1.0, 0.0, 0.0),
                Vec3::new(offset, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        )
        .unwrap()
    }

    #[test]
    fn test_merge_offsets_indices() {
        let mut dst = triangle(0.0);
        dst.merge(&triangle(5.0)).unwrap();

        assert_eq!(dst.point_count(), 6);
        assert_eq!(dst.triangles(), &[[0, 1, 2], [3, 4, 5]]);
        assert_eq!(dst.point(3).x, 5.0);
        assert!(dst.validate().is_ok());
    }

    #[test]
    fn test_merge_into_empty() {
        let mut dst = Mesh::new();
        dst.merge(&triangle(0.0)).unwrap();
        assert_eq!(dst, triangle(0.0));
    }

    #[test]
    fn test_merge_unions_normals() {
        let mut dst = triangle(0.0);
        let mut src = triangle(1.0);
        src.set_normals(vec![Vec3::Z; 3]).unwrap();

        dst.merge(&src).unwrap();

        let normals = dst.normals().unwrap();
        assert_eq!(normals.len(), 6);
        assert_eq!(normals[0], Vec3::ZERO);
        assert_eq!(normals[5], Vec3::Z);
        assert!(dst.texcoords().is_none());
    }

    #[test]
    fn test_merge_keeps_destination_texcoords() {
        let mut dst = triangle(0.0);
        dst.set_texcoords(vec![Vec2::ONE; 3]).unwrap();
        dst.merge(&triangle(1.0)).unwrap();

        let texcoords = dst.texcoords().unwrap();
        assert_eq!(texcoords.len(), 6);
        assert_eq!(texcoords[2], Vec2::ONE);
        assert_eq!(texcoords[3], Vec2::ZERO);
    }

    #[test]
    fn test_merge_overflow_leaves_mesh_unchanged() {
        let mut dst = Mesh::new();
        for i in 0..MAX_POINTS - 1 {
            dst.add_point(Vec3::splat(i as f32)).unwrap();
        }
        let before = dst.clone();

        let err = dst.merge(&triangle(0.0)).unwrap_err();
        assert!(matches!(err, MeshError::TooManyVertices { .. }));
        assert_eq!(dst, before);
    }

    #[test]
    fn test_merge_and_free() {
        let mut dst = triangle(0.0);
        dst.merge_and_free(triangle(2.0)).unwrap();
        assert_eq!(dst.triangle_count(), 2);
    }
}
