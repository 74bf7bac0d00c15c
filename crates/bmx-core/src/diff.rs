//! # Difference Diagnostics
//!
//! A boolean answer is enough for the equality contract, but when two
//! records disagree the caller usually wants to know where. A comparison
//! walk tracks its position as a [`FieldPath`] and hands every mismatch to a
//! [`DiffSink`], which decides whether the walk continues.
//!
//! Paths render the way the field would be written in source:
//! `ip2[1][0]`, `inner.values[3]`.

use std::borrow::Cow;
use std::fmt;
use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};

/// One step into a structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    /// A named record field.
    Field(Cow<'static, str>),
    /// A position in an ordered container.
    Index(usize),
}

/// Location of a value relative to the root of a comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldPath(Vec<Segment>);

impl FieldPath {
    /// The empty path, naming the compared values themselves.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Descend into a named field.
    pub fn push_field(&mut self, name: impl Into<Cow<'static, str>>) {
        self.0.push(Segment::Field(name.into()));
    }

    /// Descend into a container position.
    pub fn push_index(&mut self, index: usize) {
        self.0.push(Segment::Index(index));
    }

    /// Step back out of the innermost segment.
    pub fn pop(&mut self) -> Option<Segment> {
        self.0.pop()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                Segment::Field(name) if i == 0 => f.write_str(name)?,
                Segment::Field(name) => write!(f, ".{name}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// What disagreed at a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DifferenceKind {
    /// Containers of different length at this nesting level.
    Length { left: usize, right: usize },
    /// One side holds a value and the other does not.
    Presence { left: bool, right: bool },
    /// Leaves that are not equal. Both sides are rendered with `Debug`.
    Value { left: String, right: String },
    /// Values of different kind or rank, only possible for dynamic records.
    Kind { left: String, right: String },
}

impl DifferenceKind {
    /// Render a leaf mismatch.
    pub fn value<T: fmt::Debug + ?Sized>(left: &T, right: &T) -> Self {
        Self::Value {
            left: format!("{left:?}"),
            right: format!("{right:?}"),
        }
    }
}

fn presence(present: bool) -> &'static str {
    if present {
        "present"
    } else {
        "absent"
    }
}

impl fmt::Display for DifferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { left, right } => write!(f, "length {left} != {right}"),
            Self::Presence { left, right } => {
                write!(f, "{} vs {}", presence(*left), presence(*right))
            }
            Self::Value { left, right } => write!(f, "{left} != {right}"),
            Self::Kind { left, right } => write!(f, "kind {left} != {right}"),
        }
    }
}

/// A single mismatch found during a comparison walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difference {
    pub path: FieldPath,
    pub kind: DifferenceKind,
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// Receives mismatches from a comparison walk.
///
/// Returning `Break` stops the walk; the caller sees the same `Break`.
pub trait DiffSink {
    fn record(&mut self, path: &FieldPath, kind: DifferenceKind) -> ControlFlow<()>;
}

/// Keeps the first mismatch and stops.
#[derive(Debug, Default)]
pub struct FirstDifference(pub Option<Difference>);

impl DiffSink for FirstDifference {
    fn record(&mut self, path: &FieldPath, kind: DifferenceKind) -> ControlFlow<()> {
        self.0 = Some(Difference {
            path: path.clone(),
            kind,
        });
        ControlFlow::Break(())
    }
}

/// Keeps every mismatch, optionally up to a limit.
#[derive(Debug, Default)]
pub struct AllDifferences {
    pub found: Vec<Difference>,
    pub limit: Option<usize>,
}

impl AllDifferences {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            found: Vec::new(),
            limit: Some(limit),
        }
    }
}

impl DiffSink for AllDifferences {
    fn record(&mut self, path: &FieldPath, kind: DifferenceKind) -> ControlFlow<()> {
        if matches!(self.limit, Some(limit) if self.found.len() >= limit) {
            return ControlFlow::Break(());
        }
        self.found.push(Difference {
            path: path.clone(),
            kind,
        });
        match self.limit {
            Some(limit) if self.found.len() >= limit => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }
}
