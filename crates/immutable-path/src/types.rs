//! Path and step types plus the dotted-string syntax.

use std::fmt;

/// A single step into a nested value.
///
/// `Key` addresses an object member, `Index` an array element. Steps are
/// interpreted against the container they actually traverse: a `Key` over an
/// array is re-read as an index when it parses as one, and an `Index` over an
/// object is looked up as its decimal string key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    Key(String),
    Index(usize),
}

impl From<&str> for PathStep {
    fn from(key: &str) -> Self {
        PathStep::Key(key.to_string())
    }
}

impl From<String> for PathStep {
    fn from(key: String) -> Self {
        PathStep::Key(key)
    }
}

impl From<usize> for PathStep {
    fn from(index: usize) -> Self {
        PathStep::Index(index)
    }
}

/// An ordered sequence of steps locating a nested field.
///
/// The empty path addresses the root value itself. Paths are usually built
/// from the dotted-string syntax:
///
/// ```
/// use immutable_path::{Path, PathStep};
///
/// let path = Path::parse("items.0.name");
/// assert_eq!(
///     path.steps(),
///     &[
///         PathStep::Key("items".to_string()),
///         PathStep::Index(0),
///         PathStep::Key("name".to_string()),
///     ]
/// );
/// ```
///
/// Segments are separated by `.`; a literal dot or backslash inside a key is
/// escaped with a backslash (`"a\\.b"` is the single key `a.b`). A segment
/// that is a canonical decimal integer (no leading zeros except `"0"`) parses
/// as an index, anything else as a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    /// The empty path, addressing the root value.
    pub fn root() -> Self {
        Path { steps: Vec::new() }
    }

    /// Parse the dotted-string syntax. The empty string is the root path.
    pub fn parse(input: &str) -> Self {
        if input.is_empty() {
            return Path::root();
        }
        let mut steps = Vec::new();
        let mut segment = String::new();
        let mut chars = input.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some(escaped) => segment.push(escaped),
                    None => segment.push('\\'),
                },
                '.' => {
                    steps.push(segment_step(&segment));
                    segment.clear();
                }
                _ => segment.push(c),
            }
        }
        steps.push(segment_step(&segment));
        Path { steps }
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Append a step in place.
    pub fn push(&mut self, step: impl Into<PathStep>) {
        self.steps.push(step.into());
    }

    /// Return this path extended by one step.
    pub fn child(mut self, step: impl Into<PathStep>) -> Self {
        self.push(step);
        self
    }
}

impl From<&str> for Path {
    fn from(input: &str) -> Self {
        Path::parse(input)
    }
}

impl From<String> for Path {
    fn from(input: String) -> Self {
        Path::parse(&input)
    }
}

impl From<Vec<PathStep>> for Path {
    fn from(steps: Vec<PathStep>) -> Self {
        Path { steps }
    }
}

impl FromIterator<PathStep> for Path {
    fn from_iter<I: IntoIterator<Item = PathStep>>(iter: I) -> Self {
        Path {
            steps: iter.into_iter().collect(),
        }
    }
}

/// Formats back to the dotted-string syntax, re-escaping dots and
/// backslashes. Paths produced by [`Path::parse`] round-trip; a hand-built
/// `Key` that looks like a canonical integer would re-parse as an `Index`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            match step {
                PathStep::Key(key) => f.write_str(&escape_segment(key))?,
                PathStep::Index(index) => write!(f, "{index}")?,
            }
        }
        Ok(())
    }
}

fn segment_step(segment: &str) -> PathStep {
    if is_canonical_index(segment) {
        if let Ok(index) = segment.parse::<usize>() {
            return PathStep::Index(index);
        }
    }
    PathStep::Key(segment.to_string())
}

/// A canonical decimal index: non-empty, digits only, no leading zero unless
/// the segment is exactly `"0"`.
fn is_canonical_index(segment: &str) -> bool {
    if segment.is_empty() {
        return false;
    }
    let bytes = segment.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|b| b.is_ascii_digit())
}

fn escape_segment(key: &str) -> String {
    if !key.contains('\\') && !key.contains('.') {
        return key.to_string();
    }
    // Order matters: \ must be escaped before .
    key.replace('\\', "\\\\").replace('.', "\\.")
}
