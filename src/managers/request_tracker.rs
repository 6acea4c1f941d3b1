use crate::types::view::Container;

/// Per-container request generations.
///
/// Every fetch is stamped with the generation current when it was issued.
/// Issuing a newer request for the same container makes older stamps stale,
/// so their responses can be recognised and dropped whatever order they
/// arrive in.
#[derive(Debug, Default, Clone)]
pub struct RequestTracker {
    generations: [u64; 3],
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation for `container` and returns it.
    pub fn issue(&mut self, container: Container) -> u64 {
        let slot = &mut self.generations[container.index()];
        *slot += 1;
        *slot
    }

    pub fn current(&self, container: Container) -> u64 {
        self.generations[container.index()]
    }

    pub fn is_current(&self, container: Container, generation: u64) -> bool {
        self.current(container) == generation
    }
}
