//! # Program Model
//!
//! Parsed L-system rules. A program is immutable once parsed.

use serde::{Deserialize, Serialize};

/// Name of the implicit rule collecting commands before the first `rule`.
pub const ENTRY_RULE: &str = "entry";

/// A turtle-local axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Column of the turtle frame this axis selects.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// How an emitted tube joins the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeMode {
    /// Reuse the previous tube's end ring as this tube's start ring.
    Connect,
    /// Append a separate tube.
    Disjoint,
}

/// One interpreted command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// `shape <mode>`
    Shape(ShapeMode),
    /// `call <rule>`
    Call(String),
    /// `rx|ry|rz <degrees>`
    Rotate { axis: Axis, degrees: f32 },
    /// `tx|ty|tz <distance>`
    Translate { axis: Axis, distance: f32 },
    /// `sx|sy|sz <factor>`
    Scale { axis: Axis, factor: f32 },
    /// `sa <factor>`
    ScaleUniform(f32),
}

/// A named, weighted command list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Name used by `call`; several rules may share one.
    pub name: String,
    /// Relative likelihood among rules sharing `name`.
    pub weight: u32,
    /// Commands in program order.
    pub commands: Vec<Command>,
}

impl Rule {
    pub(crate) fn new(name: impl Into<String>, weight: u32) -> Self {
        Self {
            name: name.into(),
            weight,
            commands: Vec::new(),
        }
    }
}

/// A parsed program. The first rule is always the entry rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rule>", into = "Vec<Rule>")]
pub struct Program {
    rules: Vec<Rule>,
}

impl TryFrom<Vec<Rule>> for Program {
    type Error = String;

    fn try_from(rules: Vec<Rule>) -> Result<Self, Self::Error> {
        match rules.first() {
            Some(rule) if rule.name == ENTRY_RULE => Ok(Self { rules }),
            _ => Err(format!("first rule must be '{ENTRY_RULE}'")),
        }
    }
}

impl From<Program> for Vec<Rule> {
    fn from(program: Program) -> Self {
        program.rules
    }
}

impl Program {
    pub(crate) fn from_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// All rules in definition order, entry first.
    #[inline]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The rule execution starts from.
    #[inline]
    pub fn entry(&self) -> &Rule {
        &self.rules[0]
    }

    /// Rules sharing `name`, in definition order.
    pub fn rules_named<'a, 'b>(&'a self, name: &'b str) -> impl Iterator<Item = &'a Rule> + 'b
    where
        'a: 'b,
    {
        self.rules.iter().filter(move |r| r.name == name)
    }
}
