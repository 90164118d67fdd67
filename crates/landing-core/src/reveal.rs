use fnv::FnvHashSet;

/// Marker class added to a card the first time it scrolls into view.
pub const REVEALED_CLASS: &str = "animate-in";

/// One-shot reveal bookkeeping keyed by element index.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: FnvHashSet<usize>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an intersection report. Returns true only on the first
    /// intersecting report for `index`.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        intersecting && self.revealed.insert(index)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}
