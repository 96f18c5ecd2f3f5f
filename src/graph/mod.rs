//! Vertex primitive for a directed, labeled multigraph
//!
//! This module implements:
//! - Vertices with a sequential identity and a display name
//! - Separate outgoing and incoming adjacency per vertex
//! - Multiple lines (edge labels) between the same pair of vertices
//! - A resettable process-wide identity counter

pub mod counter;
pub mod error;
pub mod types;
pub mod vertex;

// Re-export main types
pub use counter::{id_counter, IdCounter};
pub use error::{GraphError, GraphResult};
pub use types::{AdjacencyList, Line, VertexId, DEFAULT_NAME_PREFIX};
pub use vertex::Vertex;
