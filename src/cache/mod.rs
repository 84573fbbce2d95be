//! Cache Manager: the three caches the tracer and session engine consult on
//! every frame so that, absent breakpoints, the hot path costs a couple of
//! hash lookups rather than a walk of the breakpoint registry.
//!
//! Grounded in the corpus's concurrent-cache idioms: `dashmap` for the
//! always-growing per-thread and per-file tables (same role
//! `DataDog-libdatadog`'s internal registries use it for), `lru` +
//! `parking_lot::Mutex` for the bounded, epoch-invalidated code-object
//! table.

pub mod code_object;
pub mod epoch;
pub mod file_classification;
pub mod thread_info;

use std::num::NonZeroUsize;

pub use code_object::{CodeObjectCache, CodeObjectId, CodeObjectInfo, Interest};
pub use file_classification::{ClassificationRules, FileClass, FileClassificationCache};
pub use thread_info::{ThreadInfo, ThreadInfoCache};

/// Default bound on the number of distinct code objects tracked at once.
/// Chosen generously relative to typical program sizes; spec.md §4.3 treats
/// this as tunable, not load-bearing.
pub const DEFAULT_CODE_OBJECT_CAPACITY: usize = 4096;

/// Owns all three caches for one debug session.
pub struct CacheManager {
    pub threads: ThreadInfoCache,
    pub code_objects: CodeObjectCache,
    pub files: FileClassificationCache,
}

impl CacheManager {
    pub fn new(classification_rules: ClassificationRules) -> Self {
        Self {
            threads: ThreadInfoCache::new(),
            code_objects: CodeObjectCache::new(
                NonZeroUsize::new(DEFAULT_CODE_OBJECT_CAPACITY).unwrap(),
            ),
            files: FileClassificationCache::new(classification_rules),
        }
    }

    /// Invalidates cached code-object classifications. Called by the
    /// session engine immediately after publishing a new breakpoint
    /// registry snapshot (§5), since a classification computed against the
    /// old registry may no longer hold.
    pub fn invalidate_breakpoint_dependent_state(&self) {
        self.code_objects.invalidate_all();
    }
}
