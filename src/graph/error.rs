//! Error types for vertex identities

use thiserror::Error;

/// Errors raised by the identity helpers
///
/// The vertex operations themselves never fail; unknown neighbours are
/// reported as "not present" instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Invalid vertex id: {0:?}")]
    InvalidVertexId(String),

    #[error("Vertex id space exhausted")]
    IdSpaceExhausted,
}

pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GraphError::InvalidVertexId("abc".to_string());
        assert_eq!(err.to_string(), "Invalid vertex id: \"abc\"");
        assert_eq!(GraphError::IdSpaceExhausted.to_string(), "Vertex id space exhausted");
    }
}
