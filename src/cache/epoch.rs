use std::sync::atomic::{AtomicU64, Ordering};

/// A monotonically increasing generation counter.
///
/// Bumped whenever the breakpoint registry is swapped in (§5's COW
/// publish) or a code object is unloaded; cached entries stamped with a
/// stale epoch are treated as invalid without needing to touch every entry
/// up front.
#[derive(Debug, Default)]
pub struct Epoch(AtomicU64);

impl Epoch {
    pub const fn new() -> Self {
        Epoch(AtomicU64::new(0))
    }

    pub fn current(&self) -> u64 {
        self.0.load(Ordering::Acquire)
    }

    /// Advances the epoch and returns the new value.
    pub fn bump(&self) -> u64 {
        self.0.fetch_add(1, Ordering::AcqRel) + 1
    }
}
