//! Step navigation state machine for the multi-step form.
//!
//! Navigation is pure index arithmetic over a fixed-length step sequence.
//! Every command recomputes a [`StepView`] snapshot; turning that snapshot
//! into widgets is the renderer's job, so the machine is testable without a
//! terminal.

/// Snapshot of the navigation state after a render.
///
/// Exactly one panel and one indicator are active at any time, and the
/// progress percentage is a deterministic function of the active index and
/// the step count.
#[derive(Debug, Clone, PartialEq)]
pub struct StepView {
    /// Index of the active step panel.
    pub active: usize,
    /// Total number of steps in the sequence.
    pub total: usize,
    /// Progress through the form, `100 * (active + 1) / total`.
    pub progress_percent: f64,
    /// One flag per step indicator, true exactly at `active`.
    pub indicators: Vec<bool>,
}

impl StepView {
    fn of(active: usize, total: usize) -> Self {
        Self {
            active,
            total,
            progress_percent: (active + 1) as f64 / total as f64 * 100.0,
            indicators: (0..total).map(|i| i == active).collect(),
        }
    }

    /// Whether the step at `index` is the active one.
    pub fn is_active(&self, index: usize) -> bool {
        self.indicators.get(index).copied().unwrap_or(false)
    }
}

/// Owns the current step index and keeps it within bounds.
///
/// Transitions never fail: out-of-range moves clamp to the nearest boundary
/// and still trigger a re-render, so the machine idles at whichever edge it
/// reaches.
pub struct StepNavigator {
    current: usize,
    len: usize,
    view: StepView,
}

impl StepNavigator {
    /// Create a navigator over `len` steps.
    ///
    /// The step sequence is fixed for the life of the navigator. The initial
    /// view reflects step 0 without requiring a navigation command.
    ///
    /// # Panics
    ///
    /// Panics if `len` is 0; a form without steps is a broken precondition,
    /// not a state this machine models.
    pub fn new(len: usize) -> Self {
        assert!(len >= 1, "a form needs at least one step");
        Self {
            current: 0,
            len,
            view: StepView::of(0, len),
        }
    }

    /// Move forward one step, clamped to the last valid index.
    pub fn advance(&mut self) -> &StepView {
        self.current = (self.current + 1).min(self.len - 1);
        self.render()
    }

    /// Move backward one step, clamped to 0.
    pub fn retreat(&mut self) -> &StepView {
        self.current = self.current.saturating_sub(1);
        self.render()
    }

    /// Recompute the view from the current index.
    ///
    /// Runs on every navigation command, including ones that clamped into a
    /// no-op on the index.
    pub fn render(&mut self) -> &StepView {
        self.view = StepView::of(self.current, self.len);
        &self.view
    }

    /// The most recently rendered view.
    pub fn view(&self) -> &StepView {
        &self.view
    }

    /// Index of the active step.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of steps in the sequence.
    pub fn step_count(&self) -> usize {
        self.len
    }

    pub fn on_first_step(&self) -> bool {
        self.current == 0
    }

    pub fn on_last_step(&self) -> bool {
        self.current + 1 == self.len
    }
}
