use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

use super::epoch::Epoch;

/// A unique, stable identity for one compiled code object (function, module
/// body, comprehension body, ...) in the target runtime.
pub type CodeObjectId = u64;

/// Outcome of the frame analyzer's interestingness classification (§4.4),
/// cached per code object so repeated calls into the same function skip
/// re-walking the breakpoint registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interest {
    Skip,
    TraceLines,
    TraceLinesAndCalls,
}

#[derive(Debug, Clone)]
pub struct CodeObjectInfo {
    pub file_path: String,
    pub first_line: u32,
    pub interest: Interest,
    /// The breakpoint registry epoch this classification was computed
    /// against; if it no longer matches [`CodeObjectCache`]'s current epoch
    /// the entry is stale and must be recomputed.
    pub epoch: u64,
}

/// Bounded LRU of [`CodeObjectInfo`], epoch-stamped so a breakpoint
/// registry swap doesn't require walking (or clearing) the whole cache —
/// entries are simply treated as absent once their stamped epoch falls
/// behind the current one, and get lazily recomputed and restamped on next
/// lookup.
pub struct CodeObjectCache {
    entries: Mutex<LruCache<CodeObjectId, CodeObjectInfo>>,
    epoch: Epoch,
}

impl CodeObjectCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            epoch: Epoch::new(),
        }
    }

    /// Invalidates all cached classifications. Called whenever the
    /// breakpoint registry is swapped (§5's COW publish).
    pub fn invalidate_all(&self) -> u64 {
        self.epoch.bump()
    }

    /// Looks up a still-valid cached classification for `id`, if any.
    pub fn get(&self, id: CodeObjectId) -> Option<CodeObjectInfo> {
        let current = self.epoch.current();
        let mut entries = self.entries.lock();
        match entries.get(&id) {
            Some(info) if info.epoch == current => Some(info.clone()),
            Some(_) => {
                entries.pop(&id);
                None
            }
            None => None,
        }
    }

    /// Caches `info` for `id`, stamping it with the current epoch.
    pub fn insert(&self, id: CodeObjectId, mut info: CodeObjectInfo) {
        info.epoch = self.epoch.current();
        self.entries.lock().put(id, info);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_epoch_entries_are_treated_as_absent() {
        let cache = CodeObjectCache::new(NonZeroUsize::new(8).unwrap());
        cache.insert(
            1,
            CodeObjectInfo {
                file_path: "mod.rs".into(),
                first_line: 10,
                interest: Interest::TraceLines,
                epoch: 0,
            },
        );
        assert!(cache.get(1).is_some());
        cache.invalidate_all();
        assert!(cache.get(1).is_none());
    }
}
