//! # Spatial Welding
//!
//! Grid-hash deduplication of coincident points.
//!
//! ## Algorithm
//!
//! 1. Map the bounding box onto a `grid_size³` integer lattice.
//! 2. Sort an index permutation by flattened lattice cell, so points of the
//!    same cell become contiguous.
//! 3. Record the first sorted point of every occupied cell.
//! 4. For each unwelded point, scan the runs of every occupied cell that
//!    intersects its epsilon cube and weld later points within `epsilon`.
//! 5. Compact survivors in input order and rewrite triangles, dropping the
//!    ones that collapsed.
//!
//! Expected cost is linear for evenly spread geometry; the lattice only
//! prunes candidates, the distance test itself is exact.
//!
//! ## Example
//!
//! ```rust
//! use shapes_mesh::Mesh;
//! use glam::Vec3;
//!
//! let points = vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::Y];
//! let mesh = Mesh::from_parts(points, vec![[0, 1, 2], [3, 4, 5]]).unwrap();
//! let (welded, map) = mesh.weld(0.001).unwrap();
//! assert_eq!(welded.point_count(), 4);
//! assert_eq!(map.get(3), map.get(1));
//! ```

use crate::error::{MeshError, MeshResult};
use crate::mesh::{ensure_indexable, Aabb, Index, Mesh, Triangle};
use config::constants::{ConfigError, WeldConfig, WELD_NEIGHBOR_BIN_HINT};
use glam::Vec3;

// =============================================================================
// WELD MAP
// =============================================================================

/// Mapping from every original point to its surviving representative.
///
/// Targets are indices into the welded point buffer. Representatives keep
/// their input order, so a weld that merges nothing yields the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeldMap {
    /// original point -> welded point
    targets: Vec<u32>,
    /// welded point -> original point it was copied from
    representatives: Vec<u32>,
}

impl WeldMap {
    /// Number of original points.
    #[inline]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns true if the map covers no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Welded index of original point `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.targets.get(index).copied()
    }

    /// All targets, indexed by original point.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.targets
    }

    /// Original index of each surviving point, in welded order.
    #[inline]
    pub fn representatives(&self) -> &[u32] {
        &self.representatives
    }

    /// Number of points left after welding.
    #[inline]
    pub fn survivor_count(&self) -> usize {
        self.representatives.len()
    }

    /// Returns true if no point was merged.
    pub fn is_identity(&self) -> bool {
        self.targets
            .iter()
            .enumerate()
            .all(|(i, &target)| target as usize == i)
    }

    /// Rewrites a triangle through the map, `None` if it collapsed.
    #[inline]
    fn remap(&self, corners: [usize; 3]) -> Option<[u32; 3]> {
        let [a, b, c] = corners.map(|v| self.targets[v]);
        (a != b && a != c && b != c).then_some([a, b, c])
    }
}

// =============================================================================
// LATTICE
// =============================================================================

/// Affine mapping of a bounding box onto the integer weld lattice.
#[derive(Debug, Clone, Copy)]
struct Lattice {
    origin: Vec3,
    scale: Vec3,
    grid_size: usize,
}

impl Lattice {
    fn new(aabb: &Aabb, grid_size: usize) -> Self {
        let max_cell = (grid_size - 1) as f32;
        let extent = aabb.extent();
        let axis_scale = |e: f32| if e > 0.0 { max_cell / e } else { 1.0 };
        Self {
            origin: aabb.min,
            scale: Vec3::new(axis_scale(extent.x), axis_scale(extent.y), axis_scale(extent.z)),
            grid_size,
        }
    }

    #[inline]
    fn to_lattice(&self, p: Vec3) -> Vec3 {
        (p - self.origin) * self.scale
    }

    #[inline]
    fn clamp_axis(&self, value: f32) -> usize {
        let last = self.grid_size - 1;
        if value <= 0.0 || value.is_nan() {
            0
        } else {
            (value.floor() as usize).min(last)
        }
    }

    #[inline]
    fn flatten(&self, i: usize, j: usize, k: usize) -> usize {
        i + self.grid_size * j + self.grid_size * self.grid_size * k
    }

    /// Flattened cell index `i + g*j + g²*k` of a point.
    fn cell(&self, p: Vec3) -> usize {
        let l = self.to_lattice(p);
        self.flatten(self.clamp_axis(l.x), self.clamp_axis(l.y), self.clamp_axis(l.z))
    }

    /// Inclusive per-axis cell range covered by the epsilon cube around `p`.
    fn cell_range(&self, p: Vec3, epsilon: f32) -> ([usize; 3], [usize; 3]) {
        let l = self.to_lattice(p);
        let radius = self.scale * epsilon;
        let lo = l - radius;
        let hi = l + radius;
        (
            [self.clamp_axis(lo.x), self.clamp_axis(lo.y), self.clamp_axis(lo.z)],
            [self.clamp_axis(hi.x), self.clamp_axis(hi.y), self.clamp_axis(hi.z)],
        )
    }
}

// =============================================================================
// WELDING
// =============================================================================

/// Computes the weld map of a point buffer.
///
/// Points closer than `epsilon` (Euclidean) are merged onto the first
/// representative in lattice order. Chains never form: a point that was
/// welded is never used as a target afterwards.
///
/// # Errors
///
/// - [`MeshError::EmptyMesh`] for an empty slice
/// - [`MeshError::InvalidParameter`] for a non-positive or NaN epsilon
/// - [`MeshError::InvalidConfig`] for a lattice smaller than 2 cells per axis
pub fn weld_points(points: &[Vec3], epsilon: f32, config: &WeldConfig) -> MeshResult<WeldMap> {
    let aabb = Aabb::from_points(points).ok_or_else(|| MeshError::empty_mesh("weld"))?;
    if !(epsilon > 0.0) {
        return Err(MeshError::invalid_parameter(format!(
            "weld epsilon must be positive: {epsilon}"
        )));
    }
    if config.grid_size < 2 {
        return Err(ConfigError::InvalidGridSize(config.grid_size).into());
    }

    let n = points.len();
    let lattice = Lattice::new(&aabb, config.grid_size);
    let cells: Vec<usize> = points.iter().map(|&p| lattice.cell(p)).collect();

    // sortmap: sorted position -> original point; invmap is its inverse.
    let mut sortmap: Vec<u32> = (0..n as u32).collect();
    sortmap.sort_by_key(|&original| cells[original as usize]);
    let mut invmap = vec![0u32; n];
    for (sorted, &original) in sortmap.iter().enumerate() {
        invmap[original as usize] = sorted as u32;
    }
    let sorted_cells: Vec<usize> = sortmap.iter().map(|&o| cells[o as usize]).collect();

    // First sorted point of every occupied cell. Same-cell points follow it.
    let grid_cells = config.grid_size * config.grid_size * config.grid_size;
    let mut bins: Vec<Option<u32>> = vec![None; grid_cells];
    for (sorted, &cell) in sorted_cells.iter().enumerate() {
        bins[cell].get_or_insert(sorted as u32);
    }

    let epsilon2 = epsilon * epsilon;
    let mut weld: Vec<u32> = (0..n as u32).collect();
    let mut nearby: Vec<(usize, usize)> = Vec::with_capacity(WELD_NEIGHBOR_BIN_HINT);

    for p in 0..n {
        if weld[p] as usize != p {
            continue;
        }
        let position = points[sortmap[p] as usize];

        nearby.clear();
        let (lo, hi) = lattice.cell_range(position, epsilon);
        for k in lo[2]..=hi[2] {
            for j in lo[1]..=hi[1] {
                for i in lo[0]..=hi[0] {
                    let cell = lattice.flatten(i, j, k);
                    if let Some(first) = bins[cell] {
                        nearby.push((cell, first as usize));
                    }
                }
            }
        }
        if nearby.len() > WELD_NEIGHBOR_BIN_HINT {
            log::trace!(
                "weld query for point {} visits {} occupied bins",
                sortmap[p],
                nearby.len()
            );
        }

        for &(cell, first) in &nearby {
            let mut q = first;
            while q < n && sorted_cells[q] == cell {
                // Earlier unwelded points already had their chance to claim p.
                if q > p
                    && weld[q] as usize == q
                    && points[sortmap[q] as usize].distance_squared(position) < epsilon2
                {
                    weld[q] = p as u32;
                }
                q += 1;
            }
        }
    }

    // Express representatives in input-point indices, then compact in input order.
    let representative_of =
        |original: usize| sortmap[weld[invmap[original] as usize] as usize] as usize;

    let mut condensed = vec![u32::MAX; n];
    let mut representatives = Vec::new();
    for original in 0..n {
        if representative_of(original) == original {
            condensed[original] = representatives.len() as u32;
            representatives.push(original as u32);
        }
    }
    let targets = (0..n)
        .map(|original| condensed[representative_of(original)])
        .collect();

    Ok(WeldMap {
        targets,
        representatives,
    })
}

/// Welds an unindexed triangle soup: every three consecutive points form
/// one triangle.
///
/// Used to re-index buffers whose point count may exceed the 16-bit index
/// range before welding.
///
/// # Errors
///
/// As [`weld_points`], plus [`MeshError::TooManyVertices`] if the welded
/// result still needs more than 16-bit indices, and
/// [`MeshError::InvalidParameter`] if the point count is not a multiple of 3.
pub fn weld_triangle_soup(
    points: &[Vec3],
    epsilon: f32,
    config: &WeldConfig,
) -> MeshResult<(Mesh, WeldMap)> {
    if points.len() % 3 != 0 {
        return Err(MeshError::invalid_parameter(format!(
            "triangle soup needs a multiple of 3 points, got {}",
            points.len()
        )));
    }

    let map = weld_points(points, epsilon, config)?;
    ensure_indexable(map.survivor_count())?;

    let welded_points = map
        .representatives()
        .iter()
        .map(|&o| points[o as usize])
        .collect();
    let triangles = (0..points.len() / 3)
        .filter_map(|t| map.remap([3 * t, 3 * t + 1, 3 * t + 2]))
        .map(|tri| tri.map(|v| v as Index))
        .collect();

    let mesh = Mesh {
        points: welded_points,
        triangles,
        normals: None,
        texcoords: None,
    };
    Ok((mesh, map))
}

impl Mesh {
    /// Welds coincident points with the default lattice resolution.
    ///
    /// Returns a new mesh plus the map from every point of `self` to its
    /// representative. Triangles that collapse are removed; surviving points
    /// keep their normals and texture coordinates.
    pub fn weld(&self, epsilon: f32) -> MeshResult<(Mesh, WeldMap)> {
        self.weld_with(epsilon, &WeldConfig::default())
    }

    /// Welds coincident points with an explicit weld configuration.
    pub fn weld_with(&self, epsilon: f32, config: &WeldConfig) -> MeshResult<(Mesh, WeldMap)> {
        let map = weld_points(&self.points, epsilon, config)?;
        let reps = map.representatives();

        let points = reps.iter().map(|&o| self.points[o as usize]).collect();
        let normals = self
            .normals
            .as_ref()
            .map(|n| reps.iter().map(|&o| n[o as usize]).collect());
        let texcoords = self
            .texcoords
            .as_ref()
            .map(|t| reps.iter().map(|&o| t[o as usize]).collect());

        let triangles: Vec<Triangle> = self
            .triangles
            .iter()
            .filter_map(|tri| map.remap(tri.map(usize::from)))
            .map(|tri| tri.map(|v| v as Index))
            .collect();

        log::debug!(
            "welded {} points into {} (epsilon {}), {} of {} triangles kept",
            self.point_count(),
            map.survivor_count(),
            epsilon,
            triangles.len(),
            self.triangle_count()
        );

        let welded = Mesh {
            points,
            triangles,
            normals,
            texcoords,
        };
        Ok((welded, map))
    }
}
