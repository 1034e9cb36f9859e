//! # Shapes L-System
//!
//! Grows branching tube meshes from small turtle-graphics programs.
//!
//! ## Architecture
//!
//! ```text
//! text → parse → Program → LSystem::generate → LSystemOutput { mesh, .. }
//! ```
//!
//! ## Program Text
//!
//! Whitespace-separated `command argument` pairs:
//!
//! | Command | Argument | Effect |
//! |---------|----------|--------|
//! | `rule` | `name[.weight]` | starts a rule |
//! | `shape` | `connect` or other | emits a unit tube at the turtle |
//! | `call` | rule name | runs a weighted random rule with a copied turtle |
//! | `rx` `ry` `rz` | degrees | turns about a local axis |
//! | `tx` `ty` `tz` | distance | moves along a local axis |
//! | `sx` `sy` `sz` `sa` | factor | scales one or all axes |
//!
//! ## Example
//!
//! ```rust
//! use shapes_lsystem::create_lsystem;
//!
//! let program = "
//!     sx 2 sy 2 ry 90 rx 90
//!     shape tube rx 15 call rlimb rx -15 call llimb
//!     rule rlimb sx 0.925 sy 0.925 tz 1 rx 1.2 call rlimb2
//!     rule rlimb2.1 shape connect call rlimb
//!     rule rlimb2.1 rx 15 shape connect call rlimb
//!     rule llimb sx 0.925 sy 0.925 tz 1 rx -1.2 call llimb2
//!     rule llimb2.1 shape connect call llimb
//!     rule llimb2.1 rx -15 shape connect call llimb
//! ";
//! let mesh = create_lsystem(program, 5, 20).unwrap();
//! assert!(mesh.triangle_count() > 0);
//! ```

pub mod error;
pub mod interpreter;
pub mod parser;
pub mod program;
pub mod turtle;

pub use error::{LSystemError, LSystemResult, ParseError, ParseErrorKind};
pub use interpreter::{create_lsystem, LSystem, LSystemOutput};
pub use parser::parse;
pub use program::{Axis, Command, Program, Rule, ShapeMode};
pub use turtle::Turtle;
