//! # Index Buffer Clean-up
//!
//! Winding inversion, degenerate triangle removal and unwelding.

use crate::error::{MeshError, MeshResult};
use crate::mesh::{ensure_indexable, Index, Mesh};
use log::debug;

impl Mesh {
    /// Reverses the winding of `count` triangles starting at `start`.
    ///
    /// A `count` of 0 inverts every triangle from `start` to the end.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the range extends past the last
    /// triangle.
    pub fn invert(&mut self, start: usize, count: usize) -> MeshResult<()> {
        let total = self.triangles.len();
        let end = if count == 0 { total } else { start.saturating_add(count) };
        if start > total || end > total {
            return Err(MeshError::invalid_parameter(format!(
                "invert range {start}..{end} exceeds {total} triangles"
            )));
        }

        for tri in &mut self.triangles[start..end] {
            tri.swap(0, 2);
        }
        Ok(())
    }

    /// Removes triangles whose area is below `min_area`.
    ///
    /// Points are kept; only the index buffer shrinks.
    pub fn remove_degenerate(&mut self, min_area: f32) {
        // |cross| is twice the triangle area.
        let threshold = (2.0 * min_area) * (2.0 * min_area);
        let points = &self.points;
        let before = self.triangles.len();

        self.triangles.retain(|tri| {
            let [a, b, c] = tri.map(|i| points[i as usize]);
            (b - a).cross(c - a).length_squared() >= threshold
        });

        let removed = before - self.triangles.len();
        if removed > 0 {
            debug!("remove_degenerate: dropped {removed} of {before} triangles");
        }
    }

    /// Gives every triangle its own three points.
    ///
    /// Point `3t + k` becomes corner `k` of triangle `t`; normals and
    /// texcoords are expanded alongside. With `create_indices` the triangles
    /// become `[3t, 3t+1, 3t+2]`, otherwise the index buffer is cleared and
    /// the mesh is left as a bare triangle soup.
    ///
    /// # Errors
    ///
    /// Returns `TooManyVertices` if three points per triangle exceed the
    /// 16-bit index range; the mesh is left unchanged.
    pub fn unweld(&mut self, create_indices: bool) -> MeshResult<()> {
        let corner_count = self.triangles.len() * 3;
        ensure_indexable(corner_count)?;

        let corners = || self.triangles.iter().flatten().map(|&i| i as usize);
        let points = corners().map(|i| self.points[i]).collect();
        let normals = self
            .normals
            .as_ref()
            .map(|n| corners().map(|i| n[i]).collect());
        let texcoords = self
            .texcoords
            .as_ref()
            .map(|t| corners().map(|i| t[i]).collect());

        self.points = points;
        self.normals = normals;
        self.texcoords = texcoords;
        self.triangles = if create_indices {
            (0..corner_count / 3)
                .map(|t| {
                    let base = (3 * t) as Index;
                    [base, base + 1, base + 2]
                })
                .collect()
        } else {
            Vec::new()
        };
        Ok(())
    }
}
