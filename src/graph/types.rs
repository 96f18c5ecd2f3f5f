//! Core type definitions for vertices and their edge lines

use super::error::GraphError;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix used to build the default name of an unnamed vertex
pub const DEFAULT_NAME_PREFIX: &str = "Vertex_";

/// Unique identifier for a vertex within one counter epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        VertexId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        VertexId(id)
    }
}

/// Accepts either a bare integer (`"7"`) or a default vertex name (`"Vertex_7"`).
impl FromStr for VertexId {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix(DEFAULT_NAME_PREFIX).unwrap_or(s);
        digits
            .parse::<u64>()
            .map(VertexId)
            .map_err(|_| GraphError::InvalidVertexId(s.to_string()))
    }
}

/// Label carried by an edge (a "line" between two vertices)
///
/// Several lines towards the same neighbour model parallel edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct Line(String);

impl Line {
    pub fn new(line: impl Into<String>) -> Self {
        Line(line.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Line {
    fn from(s: String) -> Self {
        Line(s)
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Line(s.to_string())
    }
}

impl PartialEq<str> for Line {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Line {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Neighbour identity -> ordered lines towards (or from) that neighbour.
/// Iteration follows first-insertion order of the neighbours.
pub type AdjacencyList = IndexMap<VertexId, Vec<Line>, FxBuildHasher>;
