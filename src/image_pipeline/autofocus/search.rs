use tracing::{debug, info};

use crate::image_pipeline::autofocus::oracle::FocusOracle;
use crate::image_pipeline::autofocus::types::{FocusConfig, FocusReport};
use crate::image_pipeline::common::error::Result;

/// Counts evaluations and traces every probe.
struct Probe<'o, O: FocusOracle> {
    oracle: &'o mut O,
    evaluations: usize,
}

impl<O: FocusOracle> Probe<'_, O> {
    fn score(&mut self, focus: i32) -> Result<f64> {
        let score = self.oracle.score(focus)?;
        self.evaluations += 1;
        debug!(focus, score, "Focus probe");
        Ok(score)
    }
}

/// Coarse-to-fine focus search: a doubling hill climb to find the peak's
/// neighbourhood, then ternary narrowing inside it.
#[derive(Debug, Clone, Default)]
pub struct AutoFocus {
    config: FocusConfig,
}

impl AutoFocus {
    pub fn new(config: FocusConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FocusConfig {
        &self.config
    }

    /// Searches from `initial_focus` and leaves the oracle at the best position.
    ///
    /// Probes are strictly sequential; every one of them is a full exposure
    /// when the oracle is a sensor.
    pub fn run<O: FocusOracle>(&self, oracle: &mut O, initial_focus: i32) -> Result<FocusReport> {
        let config = &self.config;
        let mut probe = Probe {
            oracle,
            evaluations: 0,
        };

        let mut focus = config.clamp(initial_focus);
        let mut best = probe.score(focus)?;
        let mut step = config.initial_step;

        // Only climb probes are clamped; the lens stays put until one improves
        let right_score = probe.score(focus + step)?;
        let left_score = probe.score(focus - step)?;

        let direction = if right_score > best {
            best = right_score;
            1
        } else if left_score > best {
            best = left_score;
            -1
        } else {
            0
        };

        while direction != 0 {
            let next = config.clamp(focus + direction * step);
            let score = probe.score(next)?;
            if score > best {
                focus = next;
                best = score;
                step = (step * 2).min(config.max_step);
            } else {
                break;
            }
        }

        debug!(focus, step, direction, "Coarse search finished");

        let mut low = (focus - step).max(config.min_focus);
        let mut high = (focus + step).min(config.max_focus);
        for _ in 0..config.refine_iterations {
            if low >= high {
                break;
            }
            let third = (high - low) / 3;
            let mid1 = low + third;
            let mid2 = high - third;
            let score1 = probe.score(mid1)?;
            let score2 = probe.score(mid2)?;
            if score1 < score2 {
                low = mid1;
                focus = mid2;
                best = score2;
            } else {
                high = mid2;
                focus = mid1;
                best = score1;
            }
        }

        let evaluations = probe.evaluations;
        probe.oracle.settle(focus)?;

        info!(
            focus,
            score = best,
            low,
            high,
            evaluations,
            "Autofocus converged"
        );

        Ok(FocusReport {
            focus,
            score: best,
            bracket: (low, high),
            evaluations,
        })
    }
}
