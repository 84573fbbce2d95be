//! The breakpoint registry: a copy-on-write table the session engine
//! rebuilds and publishes on every `setBreakpoints`-family request, and the
//! tracer's dispatcher reads lock-free on every frame.
//!
//! Grounded in `DataDog-libdatadog`'s `agent-info` use of `arc_swap` to
//! publish a freshly built, fully-formed snapshot behind a single atomic
//! pointer swap rather than mutating a shared table in place: readers never
//! block on a writer building the next snapshot, and there is exactly one
//! writer (the engine).

use std::sync::Arc;

use arc_swap::ArcSwap;
use rustc_hash::FxHashMap;

use crate::cache::CodeObjectId;

#[derive(Debug, Clone)]
pub struct SourceLineBreakpoint {
    pub id: usize,
    pub line: usize,
    pub condition: Option<String>,
    pub hit_condition: Option<String>,
    pub log_message: Option<String>,
    pub hit_count: u64,
}

#[derive(Debug, Clone)]
pub struct FunctionBreakpointEntry {
    pub id: usize,
    pub name: String,
    pub condition: Option<String>,
    pub hit_condition: Option<String>,
    pub hit_count: u64,
}

/// A single, internally consistent view of every breakpoint currently
/// active, keyed for O(1) lookup from the tracer's hot path.
#[derive(Debug, Clone, Default)]
pub struct BreakpointSnapshot {
    /// Source breakpoints, by the canonical path the runtime reports for a
    /// source file.
    pub by_file: FxHashMap<String, Vec<SourceLineBreakpoint>>,
    /// Source breakpoints already resolved to a code object, so the
    /// dispatcher can skip the file lookup entirely once a code object's
    /// frame has been classified once.
    pub by_code_object: FxHashMap<CodeObjectId, Vec<SourceLineBreakpoint>>,
    pub function_breakpoints: Vec<FunctionBreakpointEntry>,
    /// Exception filter ids currently enabled (e.g. "raised", "uncaught").
    pub exception_filters: Vec<String>,
}

impl BreakpointSnapshot {
    pub fn has_any(&self) -> bool {
        !self.by_file.is_empty()
            || !self.function_breakpoints.is_empty()
            || !self.exception_filters.is_empty()
    }

    pub fn lines_for_file(&self, path: &str) -> &[SourceLineBreakpoint] {
        self.by_file.get(path).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// The single-writer, many-reader registry itself.
///
/// `setBreakpoints`/`setFunctionBreakpoints`/`setExceptionBreakpoints`
/// handlers build a whole new [`BreakpointSnapshot`] (since DAP replaces
/// the full set for a given source on each call) and `publish` it; every
/// other thread holds only an `Arc<BreakpointSnapshot>` borrowed from
/// `load()`, valid for as long as it's held even if a newer snapshot is
/// published concurrently.
#[derive(Debug, Default)]
pub struct BreakpointRegistry {
    current: ArcSwap<BreakpointSnapshot>,
}

impl BreakpointRegistry {
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(BreakpointSnapshot::default()),
        }
    }

    pub fn load(&self) -> Arc<BreakpointSnapshot> {
        self.current.load_full()
    }

    pub fn publish(&self, snapshot: BreakpointSnapshot) {
        self.current.store(Arc::new(snapshot));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readers_see_a_consistent_snapshot_across_a_publish() {
        let registry = BreakpointRegistry::new();
        let before = registry.load();
        assert!(!before.has_any());

        let mut snapshot = BreakpointSnapshot::default();
        snapshot.by_file.insert(
            "main.rt".to_string(),
            vec![SourceLineBreakpoint {
                id: 1,
                line: 10,
                condition: None,
                hit_condition: None,
                log_message: None,
                hit_count: 0,
            }],
        );
        registry.publish(snapshot);

        // The handle taken before publish is untouched by it.
        assert!(!before.has_any());
        let after = registry.load();
        assert!(after.has_any());
    }
}
