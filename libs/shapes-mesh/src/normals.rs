//! # Normal Computation
//!
//! Hard (per-face accumulated) and seam-smooth vertex normals.

use crate::error::MeshResult;
use crate::mesh::Mesh;
use config::constants::WeldConfig;
use glam::Vec3;

impl Mesh {
    /// Computes per-vertex normals from the faces touching each vertex.
    ///
    /// Each triangle adds its unnormalized edge cross product to its three
    /// corners, which weights faces by area. Vertices used by no face keep a
    /// zero normal.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![Vec3::ZERO; self.points.len()];

        for tri in &self.triangles {
            let [a, b, c] = self.corners(tri);
            let normal = (b - a).cross(c - a);
            for &v in tri {
                normals[usize::from(v)] += normal;
            }
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
    }

    /// Computes normals that are smooth across parametrization seams.
    ///
    /// The mesh is welded into a temporary copy, hard normals are computed
    /// there and scattered back through the weld map. Point topology is left
    /// untouched.
    pub fn compute_smooth_normals(&mut self) -> MeshResult<()> {
        self.compute_smooth_normals_with(&WeldConfig::default())
    }

    /// [`Mesh::compute_smooth_normals`] with an explicit weld configuration.
    pub fn compute_smooth_normals_with(&mut self, config: &WeldConfig) -> MeshResult<()> {
        let (mut welded, map) = self.weld_with(config.seam_epsilon, config)?;
        welded.compute_normals();

        let welded_normals = welded.normals.unwrap_or_default();
        let normals = map
            .as_slice()
            .iter()
            .map(|&target| welded_normals[target as usize])
            .collect();
        self.normals = Some(normals);
        Ok(())
    }
}
