//! Simulation observer trait for status reporting and data collection.

use rn_core::Tick;
use rn_fleet::Vehicle;

use crate::StatusLine;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — arrival printer
///
/// ```rust,ignore
/// struct ArrivalPrinter;
///
/// impl SimObserver for ArrivalPrinter {
///     fn on_arrival(&mut self, tick: Tick, vehicle: &Vehicle) {
///         println!("{tick}: {} arrived at {}", vehicle.id(), vehicle.end());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for every vehicle that reaches its destination this tick, in
    /// vehicle order.
    fn on_arrival(&mut self, _tick: Tick, _vehicle: &Vehicle) {}

    /// Called on report ticks (every `config.report_interval_ticks`) with
    /// one line per vehicle, in vehicle order.
    fn on_report(&mut self, _tick: Tick, _lines: &[StatusLine<'_>]) {}

    /// Called at the end of each tick.
    ///
    /// `active` is the number of vehicles still travelling after this tick's
    /// arrivals were processed.
    fn on_tick_end(&mut self, _tick: Tick, _active: usize) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
