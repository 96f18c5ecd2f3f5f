//! Vertex implementation for the labeled multigraph
//!
//! A vertex knows its own identity and name, and keeps two independent
//! adjacency lists:
//! - outgoing: neighbours this vertex points to
//! - incoming: neighbours pointing to this vertex
//!
//! Each neighbour maps to an ordered list of lines (edge labels). Adding a
//! line to a neighbour that is already present appends to its list, so
//! parallel edges share a single neighbour entry.

use super::counter::{id_counter, IdCounter};
use super::types::{AdjacencyList, Line, VertexId, DEFAULT_NAME_PREFIX};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// A vertex in a directed multigraph
///
/// Identity and name are fixed at construction. Adjacency is append-only:
/// nothing removes a neighbour or rewrites a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    id: VertexId,
    name: String,
    adjacency_out: AdjacencyList,
    adjacency_in: AdjacencyList,
}

impl Vertex {
    /// Create a vertex named `Vertex_<id>`, drawing its id from the global counter
    pub fn new() -> Self {
        Self::new_in(id_counter())
    }

    /// Create a vertex with the given name, drawing its id from the global counter
    pub fn with_name(name: impl Into<String>) -> Self {
        Self::with_name_in(id_counter(), name)
    }

    /// Create a vertex named `Vertex_<id>` with an id from `counter`
    pub fn new_in(counter: &IdCounter) -> Self {
        let id = counter.next();
        // The name is fixed now; a later reset does not touch it
        let name = format!("{}{}", DEFAULT_NAME_PREFIX, id.as_u64());
        Self::build(id, name)
    }

    /// Create a named vertex with an id from `counter`. The name is kept verbatim.
    pub fn with_name_in(counter: &IdCounter, name: impl Into<String>) -> Self {
        let id = counter.next();
        Self::build(id, name.into())
    }

    fn build(id: VertexId, name: String) -> Self {
        trace!("Created vertex {} named {:?}", id, name);
        Vertex {
            id,
            name,
            adjacency_out: AdjacencyList::default(),
            adjacency_in: AdjacencyList::default(),
        }
    }

    /// Reset the global id counter to zero.
    ///
    /// Only affects vertices created afterwards.
    pub fn restart_id_counter() {
        id_counter().reset();
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record an outgoing line towards `neighbour`
    pub fn add_neighbour_out(&mut self, neighbour: VertexId, line: impl Into<Line>) {
        let line = line.into();
        trace!("Vertex {}: line {:?} out to {}", self.id, line.as_str(), neighbour);
        self.adjacency_out.entry(neighbour).or_default().push(line);
    }

    /// Record an incoming line from `neighbour`
    pub fn add_neighbour_in(&mut self, neighbour: VertexId, line: impl Into<Line>) {
        let line = line.into();
        trace!("Vertex {}: line {:?} in from {}", self.id, line.as_str(), neighbour);
        self.adjacency_in.entry(neighbour).or_default().push(line);
    }

    /// Outgoing adjacency. `len()` is the number of distinct out-neighbours.
    pub fn adjacency_out(&self) -> &AdjacencyList {
        &self.adjacency_out
    }

    /// Incoming adjacency. `len()` is the number of distinct in-neighbours.
    pub fn adjacency_in(&self) -> &AdjacencyList {
        &self.adjacency_in
    }

    /// Lines towards `neighbour` in insertion order, empty if it is not an out-neighbour
    pub fn get_lines_out(&self, neighbour: VertexId) -> &[Line] {
        self.adjacency_out
            .get(&neighbour)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Lines from `neighbour` in insertion order, empty if it is not an in-neighbour
    pub fn get_lines_in(&self, neighbour: VertexId) -> &[Line] {
        self.adjacency_in
            .get(&neighbour)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_neighbour_out(&self, neighbour: VertexId) -> bool {
        self.adjacency_out.contains_key(&neighbour)
    }

    pub fn is_neighbour_in(&self, neighbour: VertexId) -> bool {
        self.adjacency_in.contains_key(&neighbour)
    }

    /// Distinct out-neighbours plus distinct in-neighbours.
    ///
    /// A vertex linked in both directions is counted once per direction.
    pub fn neighbour_count(&self) -> usize {
        self.adjacency_out.len() + self.adjacency_in.len()
    }

    /// Out-neighbour ids in the order they were first added
    pub fn out_neighbours(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency_out.keys().copied()
    }

    /// In-neighbour ids in the order they were first added
    pub fn in_neighbours(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency_in.keys().copied()
    }

    pub fn out_degree(&self) -> usize {
        self.adjacency_out.len()
    }

    pub fn in_degree(&self) -> usize {
        self.adjacency_in.len()
    }

    /// Total outgoing lines, parallel edges counted individually
    pub fn line_count_out(&self) -> usize {
        self.adjacency_out.values().map(Vec::len).sum()
    }

    /// Total incoming lines, parallel edges counted individually
    pub fn line_count_in(&self) -> usize {
        self.adjacency_in.values().map(Vec::len).sum()
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(#{})", self.name, self.id.as_u64())
    }
}
