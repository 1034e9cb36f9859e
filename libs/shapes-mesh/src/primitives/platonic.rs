//! # Platonic Solids
//!
//! Fixed vertex and face tables. Each solid fits the unit sphere except the
//! cube, which spans `[0, 1]³`.

use crate::mesh::{Index, Mesh, Triangle};
use glam::Vec3;

// =============================================================================
// TABLES
// =============================================================================

const TETRAHEDRON_POINTS: [[f32; 3]; 4] = [
    [0.000, 1.333, 0.0],
    [0.943, 0.0, 0.0],
    [-0.471, 0.0, 0.816],
    [-0.471, 0.0, -0.816],
];

const TETRAHEDRON_FACES: [Triangle; 4] = [[2, 1, 0], [3, 2, 0], [1, 3, 0], [1, 2, 3]];

const CUBE_CORNERS: [[f32; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [1.0, 1.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, 0.0, 1.0],
];

/// front, back, right, top, left, bottom
const CUBE_QUADS: [[Index; 4]; 6] = [
    [7, 6, 5, 4],
    [0, 1, 2, 3],
    [6, 7, 3, 2],
    [5, 6, 2, 1],
    [4, 5, 1, 0],
    [7, 4, 0, 3],
];

const OCTAHEDRON_POINTS: [[f32; 3]; 6] = [
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, -1.0],
];

const OCTAHEDRON_FACES: [Triangle; 8] = [
    [0, 1, 2],
    [0, 2, 3],
    [0, 3, 4],
    [0, 4, 1],
    [2, 1, 5],
    [3, 2, 5],
    [4, 3, 5],
    [1, 4, 5],
];

const DODECAHEDRON_POINTS: [[f32; 3]; 20] = [
    [0.607, 0.000, 0.795],
    [0.188, 0.577, 0.795],
    [-0.491, 0.357, 0.795],
    [-0.491, -0.357, 0.795],
    [0.188, -0.577, 0.795],
    [0.982, 0.000, 0.188],
    [0.304, 0.934, 0.188],
    [-0.795, 0.577, 0.188],
    [-0.795, -0.577, 0.188],
    [0.304, -0.934, 0.188],
    [0.795, 0.577, -0.188],
    [-0.304, 0.934, -0.188],
    [-0.982, 0.000, -0.188],
    [-0.304, -0.934, -0.188],
    [0.795, -0.577, -0.188],
    [0.491, 0.357, -0.795],
    [-0.188, 0.577, -0.795],
    [-0.607, 0.000, -0.795],
    [-0.188, -0.577, -0.795],
    [0.491, -0.357, -0.795],
];

const DODECAHEDRON_PENTAGONS: [[Index; 5]; 12] = [
    [0, 1, 2, 3, 4],
    [5, 10, 6, 1, 0],
    [6, 11, 7, 2, 1],
    [7, 12, 8, 3, 2],
    [8, 13, 9, 4, 3],
    [9, 14, 5, 0, 4],
    [15, 16, 11, 6, 10],
    [16, 17, 12, 7, 11],
    [17, 18, 13, 8, 12],
    [18, 19, 14, 9, 13],
    [19, 15, 10, 5, 14],
    [19, 18, 17, 16, 15],
];

const ICOSAHEDRON_POINTS: [[f32; 3]; 12] = [
    [0.000, 0.000, 1.000],
    [0.894, 0.000, 0.447],
    [0.276, 0.851, 0.447],
    [-0.724, 0.526, 0.447],
    [-0.724, -0.526, 0.447],
    [0.276, -0.851, 0.447],
    [0.724, 0.526, -0.447],
    [-0.276, 0.851, -0.447],
    [-0.894, 0.000, -0.447],
    [-0.276, -0.851, -0.447],
    [0.724, -0.526, -0.447],
    [0.000, 0.000, -1.000],
];

const ICOSAHEDRON_FACES: [Triangle; 20] = [
    [0, 1, 2],
    [0, 2, 3],
    [0, 3, 4],
    [0, 4, 5],
    [0, 5, 1],
    [7, 6, 11],
    [8, 7, 11],
    [9, 8, 11],
    [10, 9, 11],
    [6, 10, 11],
    [6, 2, 1],
    [7, 3, 2],
    [8, 4, 3],
    [9, 5, 4],
    [10, 1, 5],
    [6, 7, 2],
    [7, 8, 3],
    [8, 9, 4],
    [9, 10, 5],
    [10, 6, 1],
];

// =============================================================================
// GENERATORS
// =============================================================================

fn from_tables(points: &[[f32; 3]], triangles: Vec<Triangle>) -> Mesh {
    Mesh {
        points: points.iter().copied().map(Vec3::from_array).collect(),
        triangles,
        normals: None,
        texcoords: None,
    }
}

/// Creates a tetrahedron standing on the XZ plane.
pub fn create_tetrahedron() -> Mesh {
    from_tables(&TETRAHEDRON_POINTS, TETRAHEDRON_FACES.to_vec())
}

/// Creates the unit cube spanning `[0, 1]³`.
///
/// Every face has its own four points, giving 24 points and 12 triangles.
///
/// # Example
///
/// ```rust
/// use shapes_mesh::primitives::create_cube;
///
/// let cube = create_cube();
/// assert_eq!(cube.point_count(), 24);
/// assert_eq!(cube.triangle_count(), 12);
/// ```
pub fn create_cube() -> Mesh {
    let mut points = Vec::with_capacity(24);
    let mut triangles = Vec::with_capacity(12);

    for quad in &CUBE_QUADS {
        let base = points.len() as Index;
        points.extend(quad.iter().map(|&c| CUBE_CORNERS[c as usize]));
        triangles.push([base, base + 1, base + 2]);
        triangles.push([base + 2, base + 3, base]);
    }

    from_tables(&points, triangles)
}

/// Creates an octahedron with its corners on the coordinate axes.
pub fn create_octahedron() -> Mesh {
    from_tables(&OCTAHEDRON_POINTS, OCTAHEDRON_FACES.to_vec())
}

/// Creates a dodecahedron; each pentagon is fanned into three triangles.
pub fn create_dodecahedron() -> Mesh {
    let triangles = DODECAHEDRON_PENTAGONS
        .iter()
        .flat_map(|p| [[p[0], p[1], p[2]], [p[0], p[2], p[3]], [p[0], p[3], p[4]]])
        .collect();
    from_tables(&DODECAHEDRON_POINTS, triangles)
}

/// Creates an icosahedron with a vertex at each pole.
pub fn create_icosahedron() -> Mesh {
    from_tables(&ICOSAHEDRON_POINTS, ICOSAHEDRON_FACES.to_vec())
}
