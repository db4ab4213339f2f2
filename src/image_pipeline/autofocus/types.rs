//! Autofocus configuration and results

/// Bounds and schedule of the focus search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusConfig {
    /// Lowest actuator position the search may use
    pub min_focus: i32,
    /// Highest actuator position the search may use
    pub max_focus: i32,
    /// Step of the first coarse probes
    pub initial_step: i32,
    /// Cap on the coarse step after doubling
    pub max_step: i32,
    /// Ternary narrowing rounds in the fine phase
    pub refine_iterations: usize,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            min_focus: 450,
            max_focus: 500_000,
            initial_step: 5_000,
            max_step: 100_000,
            refine_iterations: 8,
        }
    }
}

impl FocusConfig {
    #[inline]
    pub fn clamp(&self, focus: i32) -> i32 {
        focus.clamp(self.min_focus, self.max_focus)
    }
}

/// Outcome of one focus search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusReport {
    /// Position the actuator was left at
    pub focus: i32,
    /// Sharpness measured there
    pub score: f64,
    /// Interval the fine search had narrowed to, inclusive
    pub bracket: (i32, i32),
    /// Number of sharpness evaluations, each one a sensor exposure in production
    pub evaluations: usize,
}
