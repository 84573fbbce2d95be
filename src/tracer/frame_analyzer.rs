use crate::breakpoints::BreakpointSnapshot;
use crate::cache::{CacheManager, CodeObjectId, FileClass, Interest};

/// Identity and static facts about one frame, as reported by the runtime's
/// trace hook, sufficient to decide whether the frame is worth tracing
/// without inspecting any local state.
#[derive(Debug, Clone)]
pub struct FrameIdentity {
    pub code_object_id: CodeObjectId,
    pub file_path: String,
    pub first_line: u32,
}

/// Decides how closely a frame needs to be traced, consulting the cache
/// before the (more expensive) breakpoint registry walk.
///
/// This is the component spec.md's "near-zero overhead when nothing is
/// interesting" invariant rests on: the common case (`no breakpoints in
/// this file, not single-stepping`) resolves to [`Interest::Skip`] from a
/// cache hit alone.
pub struct FrameAnalyzer;

impl FrameAnalyzer {
    /// Classifies `frame`, using and populating `cache` as needed.
    ///
    /// `stepping_active` forces at least [`Interest::TraceLines`] even when
    /// no breakpoint touches the frame, since a `next`/`step` in progress
    /// needs every line event to evaluate its stop condition.
    pub fn classify(
        cache: &CacheManager,
        breakpoints: &BreakpointSnapshot,
        frame: &FrameIdentity,
        stepping_active: bool,
    ) -> Interest {
        if let Some(cached) = cache.code_objects.get(frame.code_object_id) {
            return Self::escalate_for_stepping(cached.interest, stepping_active);
        }

        let class = cache.files.classify(&frame.file_path);
        let base_interest = Self::compute(class, breakpoints, frame);

        cache.code_objects.insert(
            frame.code_object_id,
            crate::cache::CodeObjectInfo {
                file_path: frame.file_path.clone(),
                first_line: frame.first_line,
                interest: base_interest,
                epoch: 0,
            },
        );

        Self::escalate_for_stepping(base_interest, stepping_active)
    }

    fn compute(
        class: FileClass,
        breakpoints: &BreakpointSnapshot,
        frame: &FrameIdentity,
    ) -> Interest {
        if matches!(class, FileClass::Generated) && breakpoints.lines_for_file(&frame.file_path).is_empty()
        {
            // Generated sources (eval/REPL) can still carry explicit
            // breakpoints set against a synthetic path; only skip when none do.
            return Interest::Skip;
        }

        let has_line_breakpoints = !breakpoints.lines_for_file(&frame.file_path).is_empty()
            || breakpoints.by_code_object.contains_key(&frame.code_object_id);
        let has_function_breakpoints = !breakpoints.function_breakpoints.is_empty();
        let has_exception_filters = !breakpoints.exception_filters.is_empty();

        if has_function_breakpoints || has_exception_filters {
            // Function breakpoints fire on call; exception filters need
            // call/return bracketing to maintain an accurate stack on fault.
            Interest::TraceLinesAndCalls
        } else if has_line_breakpoints {
            Interest::TraceLines
        } else {
            Interest::Skip
        }
    }

    fn escalate_for_stepping(interest: Interest, stepping_active: bool) -> Interest {
        if stepping_active && matches!(interest, Interest::Skip) {
            Interest::TraceLines
        } else {
            interest
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ClassificationRules;

    fn frame() -> FrameIdentity {
        FrameIdentity {
            code_object_id: 42,
            file_path: "/home/user/app/main.rt".to_string(),
            first_line: 1,
        }
    }

    #[test]
    fn no_breakpoints_means_skip() {
        let cache = CacheManager::new(ClassificationRules::default());
        let breakpoints = BreakpointSnapshot::default();
        let interest = FrameAnalyzer::classify(&cache, &breakpoints, &frame(), false);
        assert_eq!(interest, Interest::Skip);
    }

    #[test]
    fn stepping_forces_line_tracing_even_without_breakpoints() {
        let cache = CacheManager::new(ClassificationRules::default());
        let breakpoints = BreakpointSnapshot::default();
        let interest = FrameAnalyzer::classify(&cache, &breakpoints, &frame(), true);
        assert_eq!(interest, Interest::TraceLines);
    }

    #[test]
    fn cached_classification_is_reused() {
        let cache = CacheManager::new(ClassificationRules::default());
        let mut breakpoints = BreakpointSnapshot::default();
        breakpoints.by_file.insert(
            frame().file_path,
            vec![crate::breakpoints::SourceLineBreakpoint {
                id: 1,
                line: 5,
                condition: None,
                hit_condition: None,
                log_message: None,
                hit_count: 0,
            }],
        );
        let first = FrameAnalyzer::classify(&cache, &breakpoints, &frame(), false);
        assert_eq!(first, Interest::TraceLines);
        assert_eq!(cache.code_objects.len(), 1);

        // Even if the registry is mutated in place (which production code
        // never does without bumping the epoch), the cached answer sticks
        // until invalidated.
        breakpoints.by_file.clear();
        let second = FrameAnalyzer::classify(&cache, &breakpoints, &frame(), false);
        assert_eq!(second, Interest::TraceLines);
    }
}
