//! Conditional-breakpoint expression evaluation on the tracer's hot path.
//!
//! Spec.md §4.4 requires the dispatcher to evaluate a breakpoint's
//! `condition` before deciding to stop, and to treat a raising condition as
//! `false` (§4.4 Failure model) while reporting it once via an `output`
//! event. That evaluation has to run synchronously, on the debuggee's own
//! thread, before the frame is parked — which rules out going through
//! [`crate::session::Debuggee`] (an `async` trait meant to be driven from
//! the engine's side of the park/resume boundary). [`ConditionEvaluator`]
//! is the narrower, synchronous seam the dispatcher calls instead.

use super::dispatcher::FrameSnapshot;

/// Evaluates a boolean breakpoint condition against a live (not yet
/// parked) frame.
pub trait ConditionEvaluator: Send + Sync {
    /// Returns the truthiness of `expression` evaluated in `frame`'s
    /// context, or `Err(message)` if evaluation raised.
    fn evaluate_bool(&self, frame: &FrameSnapshot, expression: &str) -> Result<bool, String>;
}

/// A [`ConditionEvaluator`] that never stops on a condition: used when no
/// embedder-supplied evaluator is wired up (e.g. before `launch`
/// completes, or in tests that don't exercise conditional breakpoints).
pub struct AlwaysFalseEvaluator;

impl ConditionEvaluator for AlwaysFalseEvaluator {
    fn evaluate_bool(&self, _frame: &FrameSnapshot, _expression: &str) -> Result<bool, String> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_false_evaluator_never_stops() {
        let evaluator = AlwaysFalseEvaluator;
        let stops = evaluator
            .evaluate_bool(&FrameSnapshot::default(), "i == 3")
            .unwrap();
        assert!(!stops);
    }
}
