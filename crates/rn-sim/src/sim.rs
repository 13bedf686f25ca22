//! The `Sim` struct and its tick loop.

use log::info;

use rn_core::{SimClock, SimConfig, Tick};
use rn_graph::RoadGraph;

use crate::{FixedDelay, Journey, Phase, SimError, SimObserver, SimResult, StatusLine, TickPacer};

/// Totals returned by [`Sim::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimSummary {
    /// The tick on which the last vehicle finished.
    pub final_tick: Tick,
    pub arrived:    usize,
    pub excluded:   usize,
}

/// The movement simulator.
///
/// Each tick runs three phases over every journey, in vehicle order:
///
/// 1. **Settle**: a vehicle whose segment time has run out moves on to its
///    next segment (fetching that segment's travel time from the graph), or
///    arrives if it has no segments left.  Vehicles that have not started yet
///    begin their first segment here.
/// 2. **Report**: on every `report_interval_ticks`-th tick the observer gets
///    one status line per vehicle.
/// 3. **Advance**: every vehicle in transit spends `tick_duration_secs` of
///    its remaining segment time.
///
/// The run ends on the first tick after which no vehicle is still travelling.
/// Excluded vehicles never hold the loop open.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<'g, P: TickPacer = FixedDelay> {
    /// Global configuration.
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick.
    pub clock: SimClock,

    /// Read-only for the lifetime of the simulation.
    graph: &'g RoadGraph,

    /// One journey per vehicle, in vehicle order.
    journeys: Vec<Journey>,

    pacer: P,
}

impl<'g, P: TickPacer> Sim<'g, P> {
    pub(crate) fn new(config: SimConfig, graph: &'g RoadGraph, journeys: Vec<Journey>, pacer: P) -> Self {
        Self {
            clock: config.make_clock(),
            config,
            graph,
            journeys,
            pacer,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    pub fn journeys(&self) -> &[Journey] {
        &self.journeys
    }

    pub fn graph(&self) -> &'g RoadGraph {
        self.graph
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// `true` once every vehicle has arrived or been excluded.
    pub fn is_finished(&self) -> bool {
        self.journeys.iter().all(Journey::is_done)
    }

    /// Status of every vehicle right now, in vehicle order.
    pub fn status_report(&self) -> Vec<StatusLine<'_>> {
        self.journeys.iter().map(Journey::status_line).collect()
    }

    /// Run until every vehicle has arrived or been excluded.
    ///
    /// # Errors
    ///
    /// - `TickLimit` if `config.max_ticks` is set and reached first.
    /// - `Graph` if a segment's road vanished from the graph (routes are
    ///   checked at build time, so this indicates a bad custom router).
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimSummary> {
        info!(
            "simulation start: {} vehicles, {} excluded",
            self.journeys.len(),
            self.count(Phase::Excluded)
        );

        loop {
            let now = self.clock.current_tick;
            if let Some(limit) = self.config.max_ticks {
                if now.0 >= limit {
                    return Err(SimError::TickLimit { limit });
                }
            }

            observer.on_tick_start(now);
            let active = self.process_tick(now, observer)?;
            observer.on_tick_end(now, active);

            if active == 0 {
                observer.on_sim_end(now);
                let summary = self.summary(now);
                info!(
                    "simulation complete at {}: {} arrived, {} excluded",
                    self.clock, summary.arrived, summary.excluded
                );
                return Ok(summary);
            }

            self.pacer.pace(now);
            self.clock.advance();
        }
    }

    /// Run exactly `n` ticks from the current position, finished or not.
    ///
    /// Returns the number of vehicles still travelling.  Useful for tests and
    /// incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<usize> {
        let mut active = self.journeys.iter().filter(|j| !j.is_done()).count();
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            active = self.process_tick(now, observer)?;
            observer.on_tick_end(now, active);
            self.pacer.pace(now);
            self.clock.advance();
        }
        Ok(active)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<usize> {
        // ── Phase 1: settle ───────────────────────────────────────────────
        let arrived = self.settle_all(now)?;
        for i in arrived {
            observer.on_arrival(now, self.journeys[i].vehicle());
        }

        // ── Phase 2: report ───────────────────────────────────────────────
        if now.is_report_tick(self.config.report_interval_ticks) {
            let lines = self.status_report();
            observer.on_report(now, &lines);
        }

        // ── Phase 3: advance ──────────────────────────────────────────────
        let active = self.journeys.iter().filter(|j| !j.is_done()).count();
        if active > 0 {
            self.advance_all(self.config.tick_duration_secs as u64);
        }
        Ok(active)
    }

    /// Settle every journey; returns indices of vehicles that arrived, in
    /// ascending order.
    fn settle_all(&mut self, now: Tick) -> SimResult<Vec<usize>> {
        let graph = self.graph;

        #[cfg(not(feature = "parallel"))]
        {
            let mut arrived = Vec::new();
            for (i, journey) in self.journeys.iter_mut().enumerate() {
                if journey.settle(graph, now)? {
                    arrived.push(i);
                }
            }
            Ok(arrived)
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // Journeys are independent within a tick; results are collected
            // back in vehicle order.
            let flags = self
                .journeys
                .par_iter_mut()
                .map(|journey| journey.settle(graph, now))
                .collect::<Result<Vec<bool>, _>>()?;
            Ok(flags
                .into_iter()
                .enumerate()
                .filter_map(|(i, arrived)| arrived.then_some(i))
                .collect())
        }
    }

    fn advance_all(&mut self, secs: u64) {
        #[cfg(not(feature = "parallel"))]
        for journey in &mut self.journeys {
            journey.advance(secs);
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.journeys.par_iter_mut().for_each(|j| j.advance(secs));
        }
    }

    fn count(&self, phase: Phase) -> usize {
        self.journeys.iter().filter(|j| j.state().phase == phase).count()
    }

    fn summary(&self, final_tick: Tick) -> SimSummary {
        SimSummary {
            final_tick,
            arrived:  self.count(Phase::Arrived),
            excluded: self.count(Phase::Excluded),
        }
    }
}
