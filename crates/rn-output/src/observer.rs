//! `StatusObserver<W>` — bridges `SimObserver` to a `StatusWriter`.

use rn_core::{SimClock, SimConfig, Tick};
use rn_sim::{SimObserver, StatusLine};

use crate::row::StatusRow;
use crate::writer::StatusWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that forwards every status report to a
/// [`StatusWriter`] backend (text or CSV).
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct StatusObserver<W: StatusWriter> {
    writer:     W,
    clock:      SimClock,
    last_error: Option<OutputError>,
}

impl<W: StatusWriter> StatusObserver<W> {
    /// Create an observer backed by `writer`, using `config` to convert
    /// report ticks into elapsed seconds.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self { writer, clock: config.make_clock(), last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: StatusWriter> SimObserver for StatusObserver<W> {
    fn on_report(&mut self, tick: Tick, lines: &[StatusLine<'_>]) {
        let rows: Vec<StatusRow> = lines.iter().map(|l| StatusRow::from_line(tick.0, l)).collect();
        let result = self.writer.write_report(tick.0, self.clock.secs_at(tick), &rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

/// Fans one simulation out to two observers, e.g. console text plus a CSV
/// file.
pub struct Tee<A, B>(pub A, pub B);

impl<A: SimObserver, B: SimObserver> SimObserver for Tee<A, B> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.0.on_tick_start(tick);
        self.1.on_tick_start(tick);
    }

    fn on_arrival(&mut self, tick: Tick, vehicle: &rn_fleet::Vehicle) {
        self.0.on_arrival(tick, vehicle);
        self.1.on_arrival(tick, vehicle);
    }

    fn on_report(&mut self, tick: Tick, lines: &[StatusLine<'_>]) {
        self.0.on_report(tick, lines);
        self.1.on_report(tick, lines);
    }

    fn on_tick_end(&mut self, tick: Tick, active: usize) {
        self.0.on_tick_end(tick, active);
        self.1.on_tick_end(tick, active);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.0.on_sim_end(final_tick);
        self.1.on_sim_end(final_tick);
    }
}
