//! Configuration types for the tree renderer

use std::fmt;
use std::str::FromStr;

use crate::error::ArborError;

/// How far below the root the renderer descends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Depth {
    /// Only the immediate children of the root (selector `0`).
    #[default]
    Current,
    /// Children and grandchildren (selector `1`).
    OneLevel,
    /// No limit (selector `-1`).
    Pierce,
}

impl Depth {
    /// Numeric selector as used on the command line and in file names.
    pub fn selector(self) -> i32 {
        match self {
            Depth::Current => 0,
            Depth::OneLevel => 1,
            Depth::Pierce => -1,
        }
    }

    /// Whether a directory listed at `current` levels below the root gets its
    /// own children listed.
    pub fn allows_descent(self, current: usize) -> bool {
        match self {
            Depth::Pierce => true,
            Depth::Current => false,
            Depth::OneLevel => current < 1,
        }
    }
}

impl TryFrom<i32> for Depth {
    type Error = ArborError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Depth::Current),
            1 => Ok(Depth::OneLevel),
            -1 => Ok(Depth::Pierce),
            other => Err(ArborError::InvalidDepth(other.to_string())),
        }
    }
}

impl FromStr for Depth {
    type Err = ArborError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "current" => return Ok(Depth::Current),
            "one" => return Ok(Depth::OneLevel),
            "pierce" => return Ok(Depth::Pierce),
            _ => {}
        }
        s.parse::<i32>()
            .map_err(|_| ArborError::InvalidDepth(s.to_string()))
            .and_then(Depth::try_from)
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.selector())
    }
}

/// Configuration for a single render call.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    pub depth: Depth,
    /// Glob patterns matched against entry names; matches are left out of the diagram.
    pub ignore_patterns: Vec<String>,
}

impl RenderConfig {
    pub fn with_depth(depth: Depth) -> Self {
        Self {
            depth,
            ..Default::default()
        }
    }
}
