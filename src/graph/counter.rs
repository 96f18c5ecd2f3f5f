//! Sequential vertex identity allocation
//!
//! A single process-wide [`IdCounter`] backs [`Vertex::new`](super::Vertex::new)
//! and [`Vertex::with_name`](super::Vertex::with_name). Callers that need
//! isolated numbering (tests, independent graphs) create their own counter and
//! use the `*_in` constructors.
//!
//! The counter is an `AtomicU64` so it can live in a `static`, but ordering
//! between threads is not part of the contract: a `reset` racing with `next`
//! yields unspecified identities.

use super::error::{GraphError, GraphResult};
use super::types::VertexId;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

static GLOBAL_COUNTER: IdCounter = IdCounter::new(0);

/// The process-wide counter used by the default vertex constructors
pub fn id_counter() -> &'static IdCounter {
    &GLOBAL_COUNTER
}

/// Hands out strictly increasing vertex identities until reset
#[derive(Debug)]
pub struct IdCounter {
    /// Value restored by `reset`
    base: u64,
    /// Next identity to hand out
    next: AtomicU64,
}

impl IdCounter {
    /// Create a counter whose first identity (and restart value) is `base`
    pub const fn new(base: u64) -> Self {
        Self {
            base,
            next: AtomicU64::new(base),
        }
    }

    /// Take the next identity, advancing the counter.
    ///
    /// Wraps to 0 after handing out `u64::MAX`; use [`try_next`](Self::try_next)
    /// to detect exhaustion instead.
    pub fn next(&self) -> VertexId {
        VertexId::new(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// Take the next identity, failing once the identity space is used up
    pub fn try_next(&self) -> GraphResult<VertexId> {
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |id| id.checked_add(1))
            .map(VertexId::new)
            .map_err(|_| GraphError::IdSpaceExhausted)
    }

    /// Identity the next call to `next` would return
    pub fn peek(&self) -> VertexId {
        VertexId::new(self.next.load(Ordering::Relaxed))
    }

    /// Restart numbering from the base. Vertices already built keep their ids.
    pub fn reset(&self) {
        let previous = self.next.swap(self.base, Ordering::Relaxed);
        debug!("Reset vertex id counter from {} to {}", previous, self.base);
    }

    pub fn base(&self) -> u64 {
        self.base
    }
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::new(0)
    }
}
