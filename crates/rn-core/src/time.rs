//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter starting at zero.  One
//! tick is one simulated second by default; `SimClock` keeps the mapping
//!
//!   elapsed_secs = tick * tick_duration_secs
//!
//! The logical clock is fully decoupled from wall-clock time.  Real-time
//! pacing, when wanted at all, is a separate `tick_delay` in [`SimConfig`]
//! applied by the simulator between ticks.

use std::fmt;
use std::time::Duration;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// `true` on every `interval`-th tick, starting with tick 0.
    ///
    /// An interval of 0 never matches.
    #[inline]
    pub fn is_report_tick(self, interval: u64) -> bool {
        interval > 0 && self.0.is_multiple_of(interval)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The logical clock advanced once per simulation iteration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// How many simulated seconds one tick represents.
    pub tick_duration_secs: u32,
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_duration_secs: u32) -> Self {
        Self {
            tick_duration_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> u64 {
        self.secs_at(self.current_tick)
    }

    /// Simulated seconds from tick 0 to the start of `tick`.
    #[inline]
    pub fn secs_at(&self, tick: Tick) -> u64 {
        tick.0 * self.tick_duration_secs as u64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} s)", self.current_tick, self.elapsed_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Built by the application (usually from CLI flags) and handed to the
/// simulation builder.  `Default` is one second per tick, a status report
/// every 5th tick, no pacing and no tick cap.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Simulated seconds per tick.  Must be non-zero.
    pub tick_duration_secs: u32,

    /// Emit a status report every N ticks (tick 0 included).  0 disables
    /// reporting.
    pub report_interval_ticks: u64,

    /// Wall-clock delay between ticks.  Zero runs as fast as possible.
    pub tick_delay: Duration,

    /// Abort the run if it has not finished after this many ticks.  `None`
    /// runs until every vehicle is done.
    pub max_ticks: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_duration_secs:    1,
            report_interval_ticks: 5,
            tick_delay:            Duration::ZERO,
            max_ticks:             None,
        }
    }
}

impl SimConfig {
    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_secs)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.tick_duration_secs == 0 {
            return Err(CoreError::Config("tick_duration_secs must be non-zero".into()));
        }
        Ok(())
    }
}
