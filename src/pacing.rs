//! Frame pacing
//!
//! Sleeps for whatever is left of a fixed frame budget after the frame's work,
//! measured with the monotonic clock.

use std::time::Duration;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

/// Time left in `budget` after `elapsed` of work
pub fn remaining(budget: Duration, elapsed: Duration) -> Duration {
    budget.saturating_sub(elapsed)
}

pub struct FramePacer {
    budget: Duration,
    #[cfg(not(target_arch = "wasm32"))]
    frame_start: Instant,
}

impl FramePacer {
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            #[cfg(not(target_arch = "wasm32"))]
            frame_start: Instant::now(),
        }
    }

    /// Mark the start of a frame's work
    pub fn begin(&mut self) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.frame_start = Instant::now();
        }
    }

    /// Block until the frame budget is used up. The browser paces frames on
    /// wasm, so this is a no-op there.
    pub fn wait(&self) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let left = remaining(self.budget, self.frame_start.elapsed());
            if !left.is_zero() {
                std::thread::sleep(left);
            }
        }
    }
}
