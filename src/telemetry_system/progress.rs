use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use super::telemetry::{Reporter, StateRecord};
use crate::errors::SimulationResult;

/// Terminal progress bar over simulated time, drawn on stderr.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        let bar = if enabled {
            ProgressBar::with_draw_target(Some(100), ProgressDrawTarget::stderr())
        } else {
            ProgressBar::hidden()
        };

        if let Ok(style) = ProgressStyle::with_template("Simulating... [{bar:50}] {pos:>3}%") {
            bar.set_style(style.progress_chars("##-"));
        }

        ProgressReporter { bar }
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl Reporter for ProgressReporter {
    fn record(&mut self, _record: &StateRecord) -> SimulationResult<()> {
        Ok(())
    }

    fn progress(&mut self, percent: u8) {
        self.bar.set_position(u64::from(percent));
    }

    fn finish(&mut self) -> SimulationResult<()> {
        self.bar.finish();
        Ok(())
    }
}
