//! # Parametric Surfaces
//!
//! Closed-form surfaces sampled through [`create_parametric`].

use super::parametric::create_parametric;
use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use config::constants::{
    MIN_PLANAR_SLICES, MIN_PLANAR_STACKS, MIN_SLICES, MIN_STACKS, MIN_TUBE_STACKS,
    POLE_DEGENERATE_AREA, TORUS_MAX_RADIUS, TORUS_MIN_RADIUS, TREFOIL_MAX_RADIUS,
    TREFOIL_MIN_RADIUS,
};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

/// A surface that can be sampled over the unit square.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Surface {
    /// Unit sphere around the origin, poles on the Z axis.
    Sphere,
    /// The `y >= 0` half of the unit sphere.
    Hemisphere,
    /// Unit square in the XY plane.
    Plane,
    /// Open unit-radius tube from `z = 0` to `z = 1`.
    Cylinder,
    /// Torus of major radius 1 in the XY plane.
    Torus { radius: f32 },
    /// Klein bottle.
    KleinBottle,
    /// Tube swept along a trefoil knot.
    TrefoilKnot { radius: f32 },
}

impl Surface {
    /// Evaluates the surface at `uv`.
    pub fn evaluate(&self, uv: Vec2) -> Vec3 {
        match *self {
            Surface::Sphere => sphere(uv.x * PI, uv.y * TAU),
            Surface::Hemisphere => sphere(uv.x * PI, uv.y * PI),
            Surface::Plane => Vec3::new(uv.x, uv.y, 0.0),
            Surface::Cylinder => {
                let theta = uv.y * TAU;
                Vec3::new(theta.sin(), theta.cos(), uv.x)
            }
            Surface::Torus { radius } => torus(uv, radius),
            Surface::KleinBottle => klein(uv),
            Surface::TrefoilKnot { radius } => trefoil(uv, radius),
        }
    }

    fn min_resolution(&self) -> (u32, u32) {
        match self {
            Surface::Plane => (MIN_PLANAR_SLICES, MIN_PLANAR_STACKS),
            Surface::Cylinder => (MIN_SLICES, MIN_TUBE_STACKS),
            _ => (MIN_SLICES, MIN_STACKS),
        }
    }

    fn validate(&self, slices: u32, stacks: u32) -> MeshResult<()> {
        let (min_slices, min_stacks) = self.min_resolution();
        if slices < min_slices || stacks < min_stacks {
            return Err(MeshError::invalid_parameter(format!(
                "{:?} needs at least {min_slices} slices and {min_stacks} stacks: {slices}x{stacks}",
                self
            )));
        }

        let radius_range = match *self {
            Surface::Torus { radius } => Some((radius, TORUS_MIN_RADIUS, TORUS_MAX_RADIUS)),
            Surface::TrefoilKnot { radius } => {
                Some((radius, TREFOIL_MIN_RADIUS, TREFOIL_MAX_RADIUS))
            }
            _ => None,
        };
        if let Some((radius, min, max)) = radius_range {
            if !(min..=max).contains(&radius) {
                return Err(MeshError::invalid_parameter(format!(
                    "{:?} radius must lie in [{min}, {max}] to avoid self-intersection",
                    self
                )));
            }
        }
        Ok(())
    }
}

fn sphere(phi: f32, theta: f32) -> Vec3 {
    Vec3::new(theta.cos() * phi.sin(), theta.sin() * phi.sin(), phi.cos())
}

fn torus(uv: Vec2, minor: f32) -> Vec3 {
    let theta = uv.x * TAU;
    let phi = uv.y * TAU;
    let beta = 1.0 + minor * phi.cos();
    Vec3::new(theta.cos() * beta, theta.sin() * beta, phi.sin() * minor)
}

fn klein(uv: Vec2) -> Vec3 {
    let u = uv.x * TAU;
    let v = uv.y * TAU;
    let bulge = 2.0 * (1.0 - u.cos() / 2.0);
    let y = -bulge * v.sin();
    if u < PI {
        Vec3::new(
            3.0 * u.cos() * (1.0 + u.sin()) + bulge * u.cos() * v.cos(),
            y,
            -8.0 * u.sin() - bulge * u.sin() * v.cos(),
        )
    } else {
        Vec3::new(
            3.0 * u.cos() * (1.0 + u.sin()) + bulge * (v + PI).cos(),
            y,
            -8.0 * u.sin(),
        )
    }
}

fn trefoil(uv: Vec2, minor: f32) -> Vec3 {
    const A: f32 = 0.5;
    const B: f32 = 0.3;
    const C: f32 = 0.5;
    let d = minor * 0.1;
    let u = (1.0 - uv.x) * 2.0 * TAU;
    let v = uv.y * TAU;

    let r = A + B * (1.5 * u).cos();
    let center = Vec3::new(r * u.cos(), r * u.sin(), C * (1.5 * u).sin());

    // Frenet-like frame around the knot's tangent.
    let tangent = Vec3::new(
        -1.5 * B * (1.5 * u).sin() * u.cos() - r * u.sin(),
        -1.5 * B * (1.5 * u).sin() * u.sin() + r * u.cos(),
        1.5 * C * (1.5 * u).cos(),
    )
    .normalize_or_zero();
    let side = Vec3::new(tangent.y, -tangent.x, 0.0).normalize_or_zero();
    let up = tangent.cross(side);

    center + d * (side * v.cos() + up * v.sin())
}

/// Creates a mesh for any [`Surface`].
///
/// Spheres and hemispheres lose their collapsed pole triangles. The Klein
/// bottle has the winding of its outer 27/32 fixed up so normals face out.
///
/// # Errors
///
/// Returns `InvalidParameter` below the surface's minimum resolution or
/// when a radius is out of range.
pub fn create_surface(surface: Surface, slices: u32, stacks: u32) -> MeshResult<Mesh> {
    surface.validate(slices, stacks)?;
    let mut mesh = create_parametric(|uv| surface.evaluate(uv), slices, stacks)?;

    match surface {
        Surface::Sphere | Surface::Hemisphere => mesh.remove_degenerate(POLE_DEGENERATE_AREA),
        Surface::KleinBottle => {
            let flipped_stacks = (27 * stacks / 32) as usize;
            if flipped_stacks > 0 {
                mesh.invert(0, 2 * slices as usize * flipped_stacks)?;
                mesh.compute_smooth_normals()?;
            }
        }
        _ => {}
    }
    Ok(mesh)
}

/// Creates an open cylinder of radius 1 along `z ∈ [0, 1]`.
pub fn create_cylinder(slices: u32, stacks: u32) -> MeshResult<Mesh> {
    create_surface(Surface::Cylinder, slices, stacks)
}

/// Creates a unit sphere from the latitude/longitude parametrization.
///
/// # Example
///
/// ```rust
/// use shapes_mesh::primitives::create_parametric_sphere;
///
/// let mesh = create_parametric_sphere(16, 8).unwrap();
/// assert!(mesh.normals().is_some());
/// ```
pub fn create_parametric_sphere(slices: u32, stacks: u32) -> MeshResult<Mesh> {
    create_surface(Surface::Sphere, slices, stacks)
}

/// Creates the `y >= 0` half of the unit sphere.
pub fn create_hemisphere(slices: u32, stacks: u32) -> MeshResult<Mesh> {
    create_surface(Surface::Hemisphere, slices, stacks)
}

/// Creates a torus with major radius 1 and the given minor radius.
pub fn create_torus(slices: u32, stacks: u32, radius: f32) -> MeshResult<Mesh> {
    create_surface(Surface::Torus { radius }, slices, stacks)
}

/// Creates a Klein bottle; part of the triangle range has its winding
/// inverted so neighbouring faces agree.
pub fn create_klein_bottle(slices: u32, stacks: u32) -> MeshResult<Mesh> {
    create_surface(Surface::KleinBottle, slices, stacks)
}

/// Creates a tube of the given thickness swept along a trefoil knot.
pub fn create_trefoil_knot(slices: u32, stacks: u32, radius: f32) -> MeshResult<Mesh> {
    create_surface(Surface::TrefoilKnot { radius }, slices, stacks)
}

/// Creates the unit square in the XY plane.
pub fn create_plane(slices: u32, stacks: u32) -> MeshResult<Mesh> {
    create_surface(Surface::Plane, slices, stacks)
}
