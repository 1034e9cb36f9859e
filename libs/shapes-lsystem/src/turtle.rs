//! # Turtle
//!
//! The pose that places each tube: an orientation frame, a position and a
//! per-axis scale.

use crate::program::Axis;
use glam::{Mat3, Vec3};
use shapes_mesh::Mesh;

/// Turtle pose. Columns of `frame` are the turtle's local X, Y and Z axes
/// in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turtle {
    pub frame: Mat3,
    pub position: Vec3,
    pub scale: Vec3,
}

impl Default for Turtle {
    fn default() -> Self {
        Self {
            frame: Mat3::IDENTITY,
            position: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Turtle {
    /// Turns the frame about one of its own axes.
    ///
    /// Positive angles turn clockwise when looking down the local axis
    /// towards the turtle, so `ry 90` swings local Z onto world -X.
    pub fn rotate(&mut self, axis: Axis, degrees: f32) {
        let radians = -degrees.to_radians();
        let local = match axis {
            Axis::X => Mat3::from_rotation_x(radians),
            Axis::Y => Mat3::from_rotation_y(radians),
            Axis::Z => Mat3::from_rotation_z(radians),
        };
        self.frame = self.frame * local;
    }

    /// Moves along one of the turtle's own axes.
    pub fn translate(&mut self, axis: Axis, distance: f32) {
        self.position += self.frame.col(axis.index()) * distance;
    }

    /// Multiplies the scale along one local axis.
    pub fn scale(&mut self, axis: Axis, factor: f32) {
        self.scale[axis.index()] *= factor;
    }

    /// Multiplies the scale along all three axes.
    pub fn scale_uniform(&mut self, factor: f32) {
        self.scale *= factor;
    }

    /// Maps a point of the unit template into world space.
    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.frame * (point * self.scale) + self.position
    }

    /// Returns a copy of `template` placed at this pose.
    pub fn place(&self, template: &Mesh) -> Mesh {
        let mut placed = template.clone();
        for p in placed.points_mut() {
            *p = self.transform_point(*p);
        }
        placed
    }
}
