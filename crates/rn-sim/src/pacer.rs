//! Wall-clock pacing between ticks.
//!
//! The simulation clock is logical; pacing only decides how long the process
//! waits before starting the next tick.  Tests use [`NoDelay`].

use std::time::Duration;

use rn_core::Tick;

/// Called once after every tick that leaves the simulation unfinished.
pub trait TickPacer {
    fn pace(&mut self, tick: Tick);
}

/// Never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl TickPacer for NoDelay {
    fn pace(&mut self, _tick: Tick) {}
}

/// Sleeps the current thread for a fixed duration.  A zero duration is a
/// no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedDelay(pub Duration);

impl TickPacer for FixedDelay {
    fn pace(&mut self, _tick: Tick) {
        if !self.0.is_zero() {
            std::thread::sleep(self.0);
        }
    }
}
