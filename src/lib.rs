//! Linegraph
//!
//! The vertex building block of a directed, labeled multigraph. A [`Vertex`]
//! owns its identity, its name and two independent adjacency lists (outgoing
//! and incoming). Each adjacency entry maps a neighbour id to the ordered
//! lines (edge labels) connecting the two vertices, so parallel edges between
//! the same pair share one entry.
//!
//! Graph containers, traversal and import/export are built on top of this
//! crate, not inside it.
//!
//! ## Example Usage
//!
//! ```rust
//! use linegraph::graph::{IdCounter, Vertex};
//!
//! let counter = IdCounter::default();
//! let mut station = Vertex::new_in(&counter);
//! let mut terminus = Vertex::with_name_in(&counter, "Terminus");
//!
//! // One logical edge is recorded on both ends
//! station.add_neighbour_out(terminus.id(), "Red");
//! terminus.add_neighbour_in(station.id(), "Red");
//! station.add_neighbour_out(terminus.id(), "Blue");
//!
//! assert_eq!(station.name(), "Vertex_0");
//! assert_eq!(station.adjacency_out().len(), 1);
//! assert_eq!(station.get_lines_out(terminus.id()).len(), 2);
//! assert!(terminus.is_neighbour_in(station.id()));
//! assert!(!terminus.is_neighbour_out(station.id()));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod graph;

// Re-export main types for convenience
pub use graph::{
    id_counter, AdjacencyList, GraphError, GraphResult, IdCounter, Line, Vertex, VertexId,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
