//! # Mesh Data Structure
//!
//! Core mesh representation: flat points and 16-bit triangle indices with
//! optional per-point normals and texture coordinates.

use crate::error::{MeshError, MeshResult};
use config::constants::MAX_POINTS;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Index type of the triangle buffer, matching GPU index-buffer conventions.
pub type Index = u16;

/// Three point indices, counter-clockwise when seen from the front face.
pub type Triangle = [Index; 3];

/// A triangle mesh with points, indices and optional normals/texcoords.
///
/// Every buffer is owned by exactly one mesh; [`Clone`] and
/// [`Mesh::clone_into`] make deep copies.
///
/// # Invariants
///
/// - every index in `triangles` is `< point_count()`
/// - `normals` and `texcoords`, when present, have one entry per point
///
/// # Example
///
/// ```rust
/// use shapes_mesh::Mesh;
/// use glam::Vec3;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_point(Vec3::new(0.0, 0.0, 0.0)).unwrap();
/// let b = mesh.add_point(Vec3::new(1.0, 0.0, 0.0)).unwrap();
/// let c = mesh.add_point(Vec3::new(0.0, 1.0, 0.0)).unwrap();
/// mesh.add_triangle(a, b, c);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MeshBuffers")]
pub struct Mesh {
    /// Point positions
    pub(crate) points: Vec<Vec3>,
    /// Triangle indices (3 indices per triangle)
    pub(crate) triangles: Vec<Triangle>,
    /// Optional per-point normals
    pub(crate) normals: Option<Vec<Vec3>>,
    /// Optional per-point texture coordinates
    pub(crate) texcoords: Option<Vec<Vec2>>,
}

/// Unchecked serialized form of [`Mesh`]; converted through [`Mesh::validate`].
#[derive(Deserialize)]
struct MeshBuffers {
    points: Vec<Vec3>,
    triangles: Vec<Triangle>,
    #[serde(default)]
    normals: Option<Vec<Vec3>>,
    #[serde(default)]
    texcoords: Option<Vec<Vec2>>,
}

impl TryFrom<MeshBuffers> for Mesh {
    type Error = MeshError;

    fn try_from(buffers: MeshBuffers) -> MeshResult<Self> {
        let mesh = Self {
            points: buffers.points,
            triangles: buffers.triangles,
            normals: buffers.normals,
            texcoords: buffers.texcoords,
        };
        mesh.validate()?;
        Ok(mesh)
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

/// Axis-aligned bounding box of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Computes the box of a point slice, `None` when it is empty.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min = *first;
        let mut max = *first;
        for p in rest {
            min = min.min(*p);
            max = max.max(*p);
        }
        Some(Self { min, max })
    }

    /// Returns the size of the box along each axis.
    #[inline]
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Fails when `count` points could not be addressed by [`Index`].
pub(crate) fn ensure_indexable(count: usize) -> MeshResult<()> {
    if count > MAX_POINTS {
        return Err(MeshError::TooManyVertices {
            count,
            max: MAX_POINTS,
        });
    }
    Ok(())
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            triangles: Vec::new(),
            normals: None,
            texcoords: None,
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(point_count: usize, triangle_count: usize) -> Self {
        Self {
            points: Vec::with_capacity(point_count),
            triangles: Vec::with_capacity(triangle_count),
            normals: None,
            texcoords: None,
        }
    }

    /// Builds a mesh from existing buffers, checking the index invariants.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapes_mesh::Mesh;
    /// use glam::Vec3;
    ///
    /// let mesh = Mesh::from_parts(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![[0, 1, 2]]).unwrap();
    /// assert_eq!(mesh.point_count(), 3);
    /// assert!(Mesh::from_parts(vec![Vec3::ZERO], vec![[0, 1, 2]]).is_err());
    /// ```
    pub fn from_parts(points: Vec<Vec3>, triangles: Vec<Triangle>) -> MeshResult<Self> {
        let mesh = Self {
            points,
            triangles,
            normals: None,
            texcoords: None,
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Returns the number of points.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Adds a point and returns its index.
    ///
    /// Fails once the mesh already holds [`MAX_POINTS`] points. Optional
    /// buffers that are present grow with a zero entry.
    pub fn add_point(&mut self, position: Vec3) -> MeshResult<Index> {
        ensure_indexable(self.points.len() + 1)?;
        let index = self.points.len() as Index;
        self.points.push(position);
        if let Some(normals) = &mut self.normals {
            normals.push(Vec3::ZERO);
        }
        if let Some(texcoords) = &mut self.texcoords {
            texcoords.push(Vec2::ZERO);
        }
        Ok(index)
    }

    /// Adds a triangle by point indices.
    pub fn add_triangle(&mut self, a: Index, b: Index, c: Index) {
        self.triangles.push([a, b, c]);
    }

    /// Returns a reference to the points.
    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Returns a mutable reference to the points.
    #[inline]
    pub fn points_mut(&mut self) -> &mut [Vec3] {
        &mut self.points
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Returns the point at the given index.
    #[inline]
    pub fn point(&self, index: Index) -> Vec3 {
        self.points[usize::from(index)]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> Triangle {
        self.triangles[index]
    }

    /// Returns the three corner positions of a triangle.
    #[inline]
    pub(crate) fn corners(&self, tri: &Triangle) -> [Vec3; 3] {
        [
            self.points[usize::from(tri[0])],
            self.points[usize::from(tri[1])],
            self.points[usize::from(tri[2])],
        ]
    }

    /// Returns the per-point normals.
    pub fn normals(&self) -> Option<&[Vec3]> {
        self.normals.as_deref()
    }

    /// Returns the per-point texture coordinates.
    pub fn texcoords(&self) -> Option<&[Vec2]> {
        self.texcoords.as_deref()
    }

    /// Sets per-point normals; the buffer must have one entry per point.
    pub fn set_normals(&mut self, normals: Vec<Vec3>) -> MeshResult<()> {
        if normals.len() != self.points.len() {
            return Err(MeshError::invalid_parameter(format!(
                "expected {} normals, got {}",
                self.points.len(),
                normals.len()
            )));
        }
        self.normals = Some(normals);
        Ok(())
    }

    /// Sets per-point texture coordinates; one entry per point.
    pub fn set_texcoords(&mut self, texcoords: Vec<Vec2>) -> MeshResult<()> {
        if texcoords.len() != self.points.len() {
            return Err(MeshError::invalid_parameter(format!(
                "expected {} texcoords, got {}",
                self.points.len(),
                texcoords.len()
            )));
        }
        self.texcoords = Some(texcoords);
        Ok(())
    }

    /// Drops the normal buffer.
    pub fn clear_normals(&mut self) {
        self.normals = None;
    }

    /// Drops the texture coordinate buffer.
    pub fn clear_texcoords(&mut self) {
        self.texcoords = None;
    }

    /// Releases all four buffers, leaving an empty mesh.
    pub fn clear(&mut self) {
        self.points = Vec::new();
        self.triangles = Vec::new();
        self.normals = None;
        self.texcoords = None;
    }

    /// Deep-copies this mesh into `target`, reusing its allocations.
    ///
    /// Optional buffers absent here are removed from `target`.
    pub fn clone_into(&self, target: &mut Mesh) {
        target.points.clone_from(&self.points);
        target.triangles.clone_from(&self.triangles);
        target.normals.clone_from(&self.normals);
        target.texcoords.clone_from(&self.texcoords);
    }

    /// Computes the axis-aligned bounding box in a single pass.
    ///
    /// # Errors
    ///
    /// [`MeshError::EmptyMesh`] when the mesh has no points.
    pub fn compute_aabb(&self) -> MeshResult<Aabb> {
        Aabb::from_points(&self.points).ok_or_else(|| MeshError::empty_mesh("compute_aabb"))
    }

    /// Validates the mesh invariants.
    ///
    /// Checks:
    /// - the point count fits the index type
    /// - all triangle indices are in range
    /// - optional buffers have one entry per point
    pub fn validate(&self) -> MeshResult<()> {
        ensure_indexable(self.points.len())?;

        let point_count = self.points.len();
        for (i, tri) in self.triangles.iter().enumerate() {
            if tri.iter().any(|&v| usize::from(v) >= point_count) {
                return Err(MeshError::invalid_parameter(format!(
                    "triangle {i} {tri:?} references a point >= {point_count}"
                )));
            }
        }

        if let Some(normals) = &self.normals {
            if normals.len() != point_count {
                return Err(MeshError::invalid_parameter(format!(
                    "{} normals for {point_count} points",
                    normals.len()
                )));
            }
        }

        if let Some(texcoords) = &self.texcoords {
            if texcoords.len() != point_count {
                return Err(MeshError::invalid_parameter(format!(
                    "{} texcoords for {point_count} points",
                    texcoords.len()
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_mesh() -> Mesh {
        Mesh::from_parts(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![[0, 1, 2]]).unwrap()
    }

    #[test]
    fn test_serde_round_trip() {
        let mesh = triangle_mesh();
        let json = serde_json::to_string(&mesh).unwrap();
        let back: Mesh = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mesh);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_index() {
        let json = r#"{"points":[[0.0,0.0,0.0]],"triangles":[[0,1,2]],"normals":null,"texcoords":null}"#;
        let err = serde_json::from_str::<Mesh>(json).unwrap_err();
        assert!(err.to_string().contains("references a point"));
    }

    #[test]
    fn test_deserialize_rejects_short_normals() {
        let json = r#"{"points":[[0.0,0.0,0.0],[1.0,0.0,0.0]],"triangles":[],"normals":[[0.0,0.0,1.0]]}"#;
        assert!(serde_json::from_str::<Mesh>(json).is_err());
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.point_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.normals().is_none());
        assert!(mesh.texcoords().is_none());
    }

    #[test]
    fn test_mesh_add_point() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_point(Vec3::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(mesh.point_count(), 1);
        assert_eq!(mesh.point(0), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_add_point_grows_optional_buffers() {
        let mut mesh = triangle_mesh();
        mesh.set_normals(vec![Vec3::Z; 3]).unwrap();
        mesh.add_point(Vec3::ONE).unwrap();
        assert_eq!(mesh.normals().unwrap().len(), 4);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_add_point_overflow() {
        let mut mesh = Mesh::new();
        mesh.points = vec![Vec3::ZERO; MAX_POINTS];
        let err = mesh.add_point(Vec3::ONE).unwrap_err();
        assert!(matches!(err, MeshError::TooManyVertices { .. }));
    }

    #[test]
    fn test_mesh_aabb() {
        let mut mesh = Mesh::new();
        mesh.add_point(Vec3::new(-1.0, -2.0, -3.0)).unwrap();
        mesh.add_point(Vec3::new(4.0, 5.0, 6.0)).unwrap();
        mesh.add_point(Vec3::new(0.0, 9.0, 0.0)).unwrap();
        let aabb = mesh.compute_aabb().unwrap();
        assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(aabb.max, Vec3::new(4.0, 9.0, 6.0));
        assert_eq!(aabb.extent(), Vec3::new(5.0, 11.0, 9.0));
    }

    #[test]
    fn test_mesh_aabb_empty_is_error() {
        let err = Mesh::new().compute_aabb().unwrap_err();
        assert!(matches!(err, MeshError::EmptyMesh { .. }));
    }

    #[test]
    fn test_set_normals_length_mismatch() {
        let mut mesh = triangle_mesh();
        assert!(mesh.set_normals(vec![Vec3::Z; 2]).is_err());
        assert!(mesh.set_texcoords(vec![Vec2::ZERO; 4]).is_err());
        assert!(mesh.normals().is_none());
    }

    #[test]
    fn test_clone_into_preserves_absence() {
        let source = triangle_mesh();
        let mut target = triangle_mesh();
        target.set_normals(vec![Vec3::Z; 3]).unwrap();
        target.add_point(Vec3::ONE).unwrap();

        source.clone_into(&mut target);
        assert_eq!(target, source);
        assert!(target.normals().is_none());
    }

    #[test]
    fn test_clone_is_deep() {
        let original = triangle_mesh();
        let mut copy = original.clone();
        copy.points_mut()[0] = Vec3::splat(7.0);
        assert_eq!(original.point(0), Vec3::ZERO);
    }

    #[test]
    fn test_clear_releases_buffers() {
        let mut mesh = triangle_mesh();
        mesh.set_texcoords(vec![Vec2::ONE; 3]).unwrap();
        mesh.clear();
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.texcoords().is_none());
    }

    #[test]
    fn test_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_point(Vec3::ZERO).unwrap();
        mesh.add_triangle(0, 1, 2);
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn test_validate_buffer_lengths() {
        let mut mesh = triangle_mesh();
        mesh.normals = Some(vec![Vec3::Z; 2]);
        assert!(mesh.validate().is_err());
    }
}
