//! # Text Export
//!
//! Writes a mesh as a plain `v`/`vt`/`vn`/`f` listing. The face syntax
//! depends on which optional buffers are present.

use crate::mesh::Mesh;
use std::fmt::{self, Write};

impl Mesh {
    /// Writes the mesh as an OBJ-style text listing.
    ///
    /// Face indices are 1-based and reuse the point index for the texcoord
    /// and normal slots:
    ///
    /// | Buffers            | Face form    |
    /// |--------------------|--------------|
    /// | normals + texcoords| `f a/a/a ..` |
    /// | normals only       | `f a//a ..`  |
    /// | texcoords only     | `f a/a ..`   |
    /// | neither            | `f a ..`     |
    pub fn write_obj<W: Write>(&self, out: &mut W) -> fmt::Result {
        let normals = self.normals();
        let texcoords = self.texcoords();

        for (i, p) in self.points.iter().enumerate() {
            writeln!(out, "v {:.6} {:.6} {:.6}", p.x, p.y, p.z)?;
            if let Some(uv) = texcoords.map(|t| t[i]) {
                writeln!(out, "vt {:.6} {:.6}", uv.x, uv.y)?;
            }
            if let Some(n) = normals.map(|n| n[i]) {
                writeln!(out, "vn {:.6} {:.6} {:.6}", n.x, n.y, n.z)?;
            }
        }

        for tri in &self.triangles {
            let [a, b, c] = tri.map(|v| u32::from(v) + 1);
            match (texcoords.is_some(), normals.is_some()) {
                (true, true) => writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?,
                (false, true) => writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}")?,
                (true, false) => writeln!(out, "f {a}/{a} {b}/{b} {c}/{c}")?,
                (false, false) => writeln!(out, "f {a} {b} {c}")?,
            }
        }

        Ok(())
    }

    /// Returns the text listing produced by [`Mesh::write_obj`].
    pub fn to_obj_string(&self) -> String {
        let mut text = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_obj(&mut text);
        text
    }
}
