use dashmap::DashMap;

/// What the tracer and session engine know about one OS thread the debuggee
/// is running on.
#[derive(Debug, Clone)]
pub struct ThreadInfo {
    /// The id handed out to the DAP client in `Thread.id` and `StoppedEvent.thread_id`.
    pub dap_thread_id: i64,
    /// The runtime's native OS thread identifier.
    pub native_thread_id: u64,
    pub name: String,
}

/// Per-OS-thread cache, keyed by native thread id.
///
/// Threads come and go independently of the breakpoint registry, so unlike
/// [`crate::cache::code_object::CodeObjectCache`] entries here are never
/// epoch-invalidated — they're removed explicitly when the runtime reports
/// the thread has exited.
#[derive(Debug, Default)]
pub struct ThreadInfoCache {
    threads: DashMap<u64, ThreadInfo>,
    next_dap_id: std::sync::atomic::AtomicI64,
}

impl ThreadInfoCache {
    pub fn new() -> Self {
        Self {
            threads: DashMap::new(),
            next_dap_id: std::sync::atomic::AtomicI64::new(1),
        }
    }

    /// Returns the cached info for `native_thread_id`, registering it with a
    /// freshly allocated DAP thread id if this is the first time it's seen.
    pub fn get_or_insert(&self, native_thread_id: u64, name: impl FnOnce() -> String) -> ThreadInfo {
        if let Some(existing) = self.threads.get(&native_thread_id) {
            return existing.clone();
        }
        let dap_thread_id = self
            .next_dap_id
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        let info = ThreadInfo {
            dap_thread_id,
            native_thread_id,
            name: name(),
        };
        self.threads.insert(native_thread_id, info.clone());
        info
    }

    pub fn get(&self, native_thread_id: u64) -> Option<ThreadInfo> {
        self.threads.get(&native_thread_id).map(|e| e.clone())
    }

    /// Reverse lookup for the client-facing DAP thread id carried on every
    /// `thread_id` argument (`continue`, `next`, `pause`, `stackTrace`, ...).
    pub fn resolve_native(&self, dap_thread_id: i64) -> Option<u64> {
        self.threads
            .iter()
            .find(|e| e.value().dap_thread_id == dap_thread_id)
            .map(|e| *e.key())
    }

    pub fn remove(&self, native_thread_id: u64) {
        self.threads.remove(&native_thread_id);
    }

    pub fn snapshot(&self) -> Vec<ThreadInfo> {
        self.threads.iter().map(|e| e.value().clone()).collect()
    }
}
