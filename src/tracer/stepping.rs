/// What kind of step, if any, is in progress on a thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepMode {
    #[default]
    None,
    Over,
    Into,
    Out,
    Continue,
}

/// Per-thread stepping state: the mode requested and the frame depth it was
/// requested from, needed to tell a step's target frame apart from a
/// recursive call into the same function.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepState {
    pub mode: StepMode,
    pub origin_depth: u32,
}

impl StepState {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn start(mode: StepMode, origin_depth: u32) -> Self {
        Self { mode, origin_depth }
    }

    /// Whether a line event at `current_depth` should stop execution given
    /// this step's mode and the depth it started from.
    ///
    /// - `Over`: stop at any line at or above the origin depth (i.e. not
    ///   inside a call the step started in).
    /// - `Into`: stop at the very next line event, any depth.
    /// - `Out`: stop once execution returns to strictly above the origin
    ///   depth.
    /// - `Continue`/`None`: never stops on a line event by itself.
    pub fn should_stop_at_line(&self, current_depth: u32) -> bool {
        match self.mode {
            StepMode::None | StepMode::Continue => false,
            StepMode::Into => true,
            StepMode::Over => current_depth <= self.origin_depth,
            StepMode::Out => current_depth < self.origin_depth,
        }
    }

    /// Whether a return event from `returning_depth` completes an `Out`
    /// step (the frame being stepped out of has just returned).
    pub fn should_stop_at_return(&self, returning_depth: u32) -> bool {
        matches!(self.mode, StepMode::Out) && returning_depth == self.origin_depth
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.mode, StepMode::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_over_ignores_deeper_calls() {
        let step = StepState::start(StepMode::Over, 3);
        assert!(!step.should_stop_at_line(4));
        assert!(step.should_stop_at_line(3));
        assert!(step.should_stop_at_line(2));
    }

    #[test]
    fn step_into_stops_on_the_very_next_line() {
        let step = StepState::start(StepMode::Into, 3);
        assert!(step.should_stop_at_line(4));
        assert!(step.should_stop_at_line(3));
    }

    #[test]
    fn step_out_waits_for_the_matching_return() {
        let step = StepState::start(StepMode::Out, 3);
        assert!(!step.should_stop_at_line(3));
        assert!(!step.should_stop_at_line(4));
        assert!(step.should_stop_at_return(3));
        assert!(!step.should_stop_at_return(4));
    }
}
