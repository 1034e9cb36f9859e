//! # Interpreter
//!
//! Runs a [`Program`] on an explicit stack of frames. Each frame holds the
//! rule it executes, a program counter and its own turtle. A frame is popped
//! once its program counter passes the last command; `call` pushes a frame
//! only while the stack is shallower than `max_depth`.

use crate::error::{LSystemError, LSystemResult, ParseError};
use crate::parser::parse;
use crate::program::{Command, Program, Rule, ShapeMode};
use crate::turtle::Turtle;
use config::constants::{DEFAULT_LSYSTEM_SEED, MAX_POINTS};
use log::{debug, warn};
use shapes_mesh::primitives::create_cylinder;
use shapes_mesh::{Index, Mesh, MeshError};

/// Result of one L-system run.
#[derive(Debug, Clone)]
pub struct LSystemOutput {
    /// All emitted tubes, merged.
    pub mesh: Mesh,
    /// Number of `shape` commands executed.
    pub tubes: usize,
    /// `call` commands skipped because the stack was at `max_depth`.
    pub dropped_calls: usize,
}

struct Frame<'a> {
    rule: &'a Rule,
    pc: usize,
    turtle: Turtle,
}

/// An L-system ready to generate meshes.
///
/// # Example
///
/// ```rust
/// use shapes_lsystem::{parse, LSystem};
///
/// let program = parse("shape connect tz 1 call grow rule grow rx 15 shape connect").unwrap();
/// let output = LSystem::new(program).generate(8, 4).unwrap();
/// assert_eq!(output.tubes, 2);
/// assert_eq!(output.dropped_calls, 0);
/// ```
#[derive(Debug, Clone)]
pub struct LSystem {
    program: Program,
}

impl LSystem {
    /// Wraps a parsed program.
    pub fn new(program: Program) -> Self {
        Self { program }
    }

    /// Returns the program this system runs.
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Generates with [`DEFAULT_LSYSTEM_SEED`].
    pub fn generate(&self, slices: u32, max_depth: usize) -> LSystemResult<LSystemOutput> {
        self.generate_with_seed(slices, max_depth, DEFAULT_LSYSTEM_SEED)
    }

    /// Generates the tube mesh.
    ///
    /// # Arguments
    ///
    /// * `slices` - Segments around each tube
    /// * `max_depth` - Maximum number of live frames, entry frame included
    /// * `seed` - Seed for weighted rule selection
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for a zero `max_depth` or a call to a rule the
    /// program does not define; `Mesh` if the tube is below its minimum
    /// resolution or the scene outgrows 16-bit indices.
    pub fn generate_with_seed(
        &self,
        slices: u32,
        max_depth: usize,
        seed: u64,
    ) -> LSystemResult<LSystemOutput> {
        if max_depth == 0 {
            return Err(LSystemError::invalid_parameter("max_depth must be at least 1"));
        }

        let mut tube = create_cylinder(slices, 1)?;
        tube.clear_normals();
        tube.clear_texcoords();

        let mut rng = fastrand::Rng::with_seed(seed);
        let mut scene = Mesh::new();
        let mut tubes = 0;
        let mut dropped_calls = 0;

        let mut stack = Vec::with_capacity(max_depth.min(64));
        stack.push(Frame {
            rule: self.program.entry(),
            pc: 0,
            turtle: Turtle::default(),
        });

        loop {
            let depth = stack.len();
            let Some(frame) = stack.last_mut() else {
                break;
            };
            let rule = frame.rule;
            let Some(command) = rule.commands.get(frame.pc) else {
                stack.pop();
                continue;
            };
            frame.pc += 1;

            match command {
                Command::Shape(mode) => {
                    let placed = frame.turtle.place(&tube);
                    match mode {
                        ShapeMode::Connect => connect(&mut scene, &placed, slices)?,
                        ShapeMode::Disjoint => scene.merge_and_free(placed)?,
                    }
                    tubes += 1;
                }
                Command::Call(name) => {
                    if depth < max_depth {
                        let turtle = frame.turtle;
                        let rule = self.pick_rule(name, &mut rng)?;
                        stack.push(Frame { rule, pc: 0, turtle });
                    } else {
                        dropped_calls += 1;
                    }
                }
                Command::Rotate { axis, degrees } => frame.turtle.rotate(*axis, *degrees),
                Command::Translate { axis, distance } => frame.turtle.translate(*axis, *distance),
                Command::Scale { axis, factor } => frame.turtle.scale(*axis, *factor),
                Command::ScaleUniform(factor) => frame.turtle.scale_uniform(*factor),
            }
        }

        if dropped_calls > 0 {
            warn!("lsystem: dropped {dropped_calls} calls at max_depth {max_depth}");
        }
        debug!(
            "lsystem: {} tubes, {} points, {} triangles",
            tubes,
            scene.point_count(),
            scene.triangle_count()
        );

        Ok(LSystemOutput {
            mesh: scene,
            tubes,
            dropped_calls,
        })
    }

    /// Picks one of the rules named `name`, weighted by rule weight.
    fn pick_rule(&self, name: &str, rng: &mut fastrand::Rng) -> LSystemResult<&Rule> {
        let total: u64 = self
            .program
            .rules_named(name)
            .map(|r| u64::from(r.weight))
            .sum();
        let draw = rng.f32();

        let mut cumulative = 0.0;
        let mut last = None;
        for rule in self.program.rules_named(name) {
            last = Some(rule);
            if total > 0 {
                cumulative += rule.weight as f32 / total as f32;
                if cumulative >= draw {
                    return Ok(rule);
                }
            }
        }
        last.ok_or_else(|| LSystemError::invalid_parameter(format!("undefined rule '{name}'")))
    }
}

/// Appends `tube` so that it starts at the scene's last ring.
///
/// Only the tube's end ring is added; the new faces bridge from the
/// previous end ring, using the same cell pattern as the parametric grid.
/// An empty scene receives the whole tube. On overflow the scene is left
/// unchanged.
fn connect(scene: &mut Mesh, tube: &Mesh, slices: u32) -> LSystemResult<()> {
    let ring = slices as usize + 1;
    if scene.point_count() < ring {
        scene.merge(tube)?;
        return Ok(());
    }

    let count = scene.point_count() + ring;
    if count > MAX_POINTS {
        return Err(MeshError::TooManyVertices { count, max: MAX_POINTS }.into());
    }

    let base = scene.point_count() - ring;
    for &p in &tube.points()[ring..2 * ring] {
        scene.add_point(p)?;
    }
    for slice in 0..slices as usize {
        let here = (base + slice) as Index;
        let next = (base + slice + 1) as Index;
        let ring = ring as Index;
        scene.add_triangle(here + ring, next, here);
        scene.add_triangle(here + ring, next + ring, next);
    }
    Ok(())
}

/// Parses `text` and generates its mesh with the default seed.
///
/// # Example
///
/// ```rust
/// use shapes_lsystem::create_lsystem;
///
/// let mesh = create_lsystem("sa 0.5 shape connect", 6, 1).unwrap();
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_lsystem(text: &str, slices: u32, max_depth: usize) -> LSystemResult<Mesh> {
    let program = parse(text)?;
    Ok(LSystem::new(program).generate(slices, max_depth)?.mesh)
}

impl TryFrom<&str> for LSystem {
    type Error = ParseError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        parse(text).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn system(text: &str) -> LSystem {
        LSystem::try_from(text).unwrap()
    }

    #[test]
    fn test_single_connected_tube() {
        let output = system("shape connect").generate(8, 1).unwrap();
        assert_eq!(output.tubes, 1);
        assert_eq!(output.mesh.point_count(), 18);
        assert_eq!(output.mesh.triangle_count(), 16);
        assert!(output.mesh.normals().is_none());
        assert!(output.mesh.texcoords().is_none());
    }

    #[test]
    fn test_connect_shares_ring() {
        let output = system("shape connect tz 1 shape connect").generate(6, 1).unwrap();
        let mesh = &output.mesh;
        assert_eq!(output.tubes, 2);
        assert_eq!(mesh.point_count(), 3 * 7);
        assert_eq!(mesh.triangle_count(), 2 * 12);
        assert!(mesh.validate().is_ok());

        let aabb = mesh.compute_aabb().unwrap();
        assert_relative_eq!(aabb.max.z, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_disjoint_tubes_do_not_share() {
        let output = system("shape disjoint tz 1 shape disjoint").generate(6, 1).unwrap();
        assert_eq!(output.mesh.point_count(), 4 * 7);
        assert_eq!(output.mesh.triangle_count(), 2 * 12);
    }

    #[test]
    fn test_depth_limit_drops_calls() {
        let text = "call grow rule grow shape connect tz 1 call grow";
        let output = system(text).generate(4, 3).unwrap();
        // entry + two levels of grow
        assert_eq!(output.tubes, 2);
        assert_eq!(output.dropped_calls, 1);
    }

    #[test]
    fn test_call_inherits_pose() {
        let text = "tz 5 call leaf rule leaf shape disjoint";
        let output = system(text).generate(4, 2).unwrap();
        let aabb = output.mesh.compute_aabb().unwrap();
        assert_relative_eq!(aabb.min.z, 5.0, epsilon = 1e-5);
    }

    #[test]
    fn test_child_pose_does_not_leak() {
        let text = "call move shape disjoint rule move tz 10";
        let output = system(text).generate(4, 2).unwrap();
        let aabb = output.mesh.compute_aabb().unwrap();
        assert_relative_eq!(aabb.max.z, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_weighted_choice_is_seeded() {
        let text = "call a call a call a call a rule a.1 shape disjoint rule a.3 tz 1 shape disjoint";
        let lsystem = system(text);
        let first = lsystem.generate_with_seed(4, 2, 42).unwrap();
        let second = lsystem.generate_with_seed(4, 2, 42).unwrap();
        assert_eq!(first.mesh, second.mesh);
    }

    fn draw_counts(text: &str, name: &str, draws: usize) -> Vec<usize> {
        let lsystem = system(text);
        let candidates: Vec<&Rule> = lsystem.program().rules_named(name).collect();
        let mut counts = vec![0; candidates.len()];
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..draws {
            let picked = lsystem.pick_rule(name, &mut rng).unwrap();
            let slot = candidates
                .iter()
                .position(|r| std::ptr::eq(*r, picked))
                .unwrap();
            counts[slot] += 1;
        }
        counts
    }

    #[test]
    fn test_weighted_choice_follows_weights() {
        let text = "call a rule a.1 shape disjoint rule a.3 tz 1 shape disjoint";
        let counts = draw_counts(text, "a", 4000);
        assert_eq!(counts.iter().sum::<usize>(), 4000);
        // Expect 1000 / 3000; a binomial sigma here is about 27.
        assert!((850..=1150).contains(&counts[0]), "light rule drawn {} times", counts[0]);
        assert!((2850..=3150).contains(&counts[1]), "heavy rule drawn {} times", counts[1]);
    }

    #[test]
    fn test_single_alternative_always_chosen() {
        let text = "call a rule a.5 shape disjoint rule b.1 tz 1 shape disjoint";
        assert_eq!(draw_counts(text, "a", 200), vec![200]);
        assert_eq!(draw_counts(text, "b", 200), vec![200]);
    }

    #[test]
    fn test_picked_rule_outlives_name() {
        let lsystem = system("call a rule a shape disjoint");
        let mut rng = fastrand::Rng::with_seed(1);
        let rule = {
            let name = String::from("a");
            lsystem.pick_rule(&name, &mut rng).unwrap()
        };
        assert_eq!(rule.name, "a");
    }

    #[test]
    fn test_connect_overflow_leaves_scene_unchanged() {
        let tube = create_cylinder(4, 1).unwrap();
        let mut scene = Mesh::from_parts(vec![glam::Vec3::ZERO; MAX_POINTS - 2], Vec::new()).unwrap();
        let err = connect(&mut scene, &tube, 4).unwrap_err();
        assert!(matches!(err, LSystemError::Mesh(MeshError::TooManyVertices { .. })));
        assert_eq!(scene.point_count(), MAX_POINTS - 2);
        assert_eq!(scene.triangle_count(), 0);
    }

    #[test]
    fn test_zero_weight_rules_still_resolve() {
        let output = system("call a rule a.0 shape disjoint").generate(4, 2).unwrap();
        assert_eq!(output.tubes, 1);
    }

    #[test]
    fn test_zero_depth_rejected() {
        let err = system("shape connect").generate(8, 0).unwrap_err();
        assert!(matches!(err, LSystemError::InvalidParameter { .. }));
    }

    #[test]
    fn test_low_slice_count_rejected() {
        let err = system("shape connect").generate(2, 1).unwrap_err();
        assert!(matches!(err, LSystemError::Mesh(_)));
    }

    #[test]
    fn test_empty_entry_yields_empty_mesh() {
        let output = system("rule unused shape connect").generate(4, 3).unwrap();
        assert!(output.mesh.is_empty());
        assert_eq!(output.tubes, 0);
    }
}
