//! Integration tests for rn-sim.

use rn_core::{IntersectionId, SimConfig, Tick};
use rn_fleet::{Vehicle, VehicleRegistry};
use rn_graph::RoadGraph;

use crate::{SimObserver, StatusLine, VehicleStatus};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(report_interval_ticks: u64) -> SimConfig {
    SimConfig { report_interval_ticks, ..SimConfig::default() }
}

/// A→B(3), B→C(2), plus an isolated intersection D.
fn line_graph() -> RoadGraph {
    let mut g = RoadGraph::new();
    g.add_road("A", "B", 3);
    g.add_road("B", "C", 2);
    g.add_intersection("D");
    g
}

fn registry(vehicles: &[(&str, &str, &str)]) -> VehicleRegistry {
    let mut r = VehicleRegistry::new();
    for &(id, start, end) in vehicles {
        r.register(Vehicle::new(id, start, end)).unwrap();
    }
    r
}

fn render(line: &StatusLine<'_>) -> String {
    match line.status {
        VehicleStatus::Waiting => format!("{} waiting", line.vehicle),
        VehicleStatus::OnRoad { from, to, remaining } => {
            format!("{} {from}{to} {remaining}", line.vehicle)
        }
        VehicleStatus::Arrived { at } => format!("{} arrived {}", line.vehicle, at.0),
        VehicleStatus::Unroutable { .. } => format!("{} unroutable", line.vehicle),
    }
}

/// Records every callback as plain strings.
#[derive(Default)]
struct Recorder {
    reports:  Vec<(u64, Vec<String>)>,
    arrivals: Vec<(u64, String)>,
    ticks:    Vec<(u64, usize)>,
    ended:    Option<u64>,
}

impl Recorder {
    fn report_at(&self, tick: u64) -> Option<&[String]> {
        self.reports
            .iter()
            .find(|(t, _)| *t == tick)
            .map(|(_, lines)| lines.as_slice())
    }
}

impl SimObserver for Recorder {
    fn on_arrival(&mut self, tick: Tick, vehicle: &Vehicle) {
        self.arrivals.push((tick.0, vehicle.id().to_string()));
    }

    fn on_report(&mut self, tick: Tick, lines: &[StatusLine<'_>]) {
        self.reports.push((tick.0, lines.iter().map(render).collect()));
    }

    fn on_tick_end(&mut self, tick: Tick, active: usize) {
        self.ticks.push((tick.0, active));
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.ended = Some(final_tick.0);
    }
}

// ── Movement timing ───────────────────────────────────────────────────────────

#[cfg(test)]
mod movement {
    use super::*;
    use crate::{NoDelay, Phase, SimBuilder};

    #[test]
    fn two_segment_trip_timing() {
        let g = line_graph();
        let mut sim = SimBuilder::new(test_config(1), &g)
            .vehicles(&registry(&[("V1", "A", "C")]))
            .pacer(NoDelay)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let summary = sim.run(&mut rec).unwrap();

        let per_tick: Vec<String> = rec.reports.iter().map(|(_, l)| l[0].clone()).collect();
        assert_eq!(
            per_tick,
            ["V1 AB 3", "V1 AB 2", "V1 AB 1", "V1 BC 2", "V1 BC 1", "V1 arrived 5"]
        );
        assert_eq!(summary.final_tick, Tick(5));
        assert_eq!(summary.arrived, 1);
        assert_eq!(rec.arrivals, [(5, "V1".to_string())]);
        assert_eq!(rec.ended, Some(5));
    }

    #[test]
    fn parallel_roads_drive_the_newest() {
        // The scan routes over the cheaper road, but the segment takes the
        // travel time of the newest A→B road, not the minimum.
        let mut g = RoadGraph::new();
        g.add_road("A", "B", 1);
        g.add_road("A", "B", 5);
        let mut sim = SimBuilder::new(test_config(5), &g)
            .vehicles(&registry(&[("V", "A", "B")]))
            .pacer(NoDelay)
            .build()
            .unwrap();
        assert_eq!(sim.journeys()[0].route().unwrap().distance, 1);

        let mut rec = Recorder::default();
        let summary = sim.run(&mut rec).unwrap();
        assert_eq!(rec.report_at(0).unwrap(), ["V AB 5"]);
        assert_eq!(summary.final_tick, Tick(5));
        assert_eq!(rec.arrivals, [(5, "V".to_string())]);
    }

    #[test]
    fn reports_every_fifth_tick() {
        let g = line_graph();
        let mut sim = SimBuilder::new(test_config(5), &g)
            .vehicles(&registry(&[("V1", "A", "C")]))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        let ticks: Vec<u64> = rec.reports.iter().map(|(t, _)| *t).collect();
        assert_eq!(ticks, [0, 5]);
        assert_eq!(rec.report_at(0).unwrap(), ["V1 AB 3"]);
        assert_eq!(rec.report_at(5).unwrap(), ["V1 arrived 5"]);
    }

    #[test]
    fn start_equals_end_arrives_at_tick_zero() {
        let g = line_graph();
        let mut sim = SimBuilder::new(test_config(5), &g)
            .vehicles(&registry(&[("Idle", "B", "B")]))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let summary = sim.run(&mut rec).unwrap();
        assert_eq!(summary.final_tick, Tick(0));
        assert_eq!(rec.report_at(0).unwrap(), ["Idle arrived 0"]);
        assert_eq!(sim.journeys()[0].state().arrived_at, Some(Tick(0)));
    }

    #[test]
    fn zero_time_segments_cost_no_ticks() {
        let mut g = RoadGraph::new();
        g.add_road("A", "B", 0);
        g.add_road("B", "C", 2);
        g.add_road("C", "D", 0);
        let mut sim = SimBuilder::new(test_config(1), &g)
            .vehicles(&registry(&[("V", "A", "D")]))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let summary = sim.run(&mut rec).unwrap();
        assert_eq!(rec.report_at(0).unwrap(), ["V BC 2"]);
        assert_eq!(summary.final_tick, Tick(2));
    }

    #[test]
    fn longer_tick_duration_spends_more_time() {
        let g = line_graph();
        let config = SimConfig { tick_duration_secs: 2, ..test_config(1) };
        let mut sim = SimBuilder::new(config, &g)
            .vehicles(&registry(&[("V1", "A", "C")]))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let summary = sim.run(&mut rec).unwrap();
        let per_tick: Vec<String> = rec.reports.iter().map(|(_, l)| l[0].clone()).collect();
        assert_eq!(per_tick, ["V1 AB 3", "V1 AB 1", "V1 BC 2", "V1 arrived 3"]);
        assert_eq!(summary.final_tick, Tick(3));
    }

    #[test]
    fn run_ticks_steps_partially() {
        let g = line_graph();
        let mut sim = SimBuilder::new(test_config(0), &g)
            .vehicles(&registry(&[("V1", "A", "C")]))
            .build()
            .unwrap();
        let active = sim.run_ticks(3, &mut Recorder::default()).unwrap();
        assert_eq!(active, 1);
        assert_eq!(sim.clock.current_tick, Tick(3));

        let j = &sim.journeys()[0];
        assert_eq!(j.state().phase, Phase::InTransit);
        assert_eq!(j.state().remaining, 0);
        let (from, to) = j.current_segment().unwrap();
        assert_eq!((from.as_str(), to.as_str()), ("A", "B"));
        assert!(!sim.is_finished());

        // Finishing the run picks up where stepping left off.
        let summary = sim.run(&mut Recorder::default()).unwrap();
        assert_eq!(summary.final_tick, Tick(5));
        assert!(sim.is_finished());
    }
}

// ── Termination ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod termination {
    use super::*;
    use crate::{NoDelay, SimBuilder, SimError, TickPacer};

    #[test]
    fn ends_when_last_vehicle_arrives() {
        let g = line_graph();
        let mut sim = SimBuilder::new(test_config(0), &g)
            .vehicles(&registry(&[("Short", "B", "C"), ("Long", "A", "C")]))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let summary = sim.run(&mut rec).unwrap();

        assert_eq!(
            rec.arrivals,
            [(2, "Short".to_string()), (5, "Long".to_string())]
        );
        assert_eq!(summary.final_tick, Tick(5));
        // Active count drops to zero exactly on the final tick.
        assert!(rec.ticks[..5].iter().all(|&(_, active)| active > 0));
        assert_eq!(rec.ticks.last(), Some(&(5, 0)));
    }

    #[test]
    fn unreachable_vehicle_does_not_stall() {
        let g = line_graph();
        let mut sim = SimBuilder::new(test_config(5), &g)
            .vehicles(&registry(&[("Lost", "C", "A"), ("V1", "A", "B")]))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let summary = sim.run(&mut rec).unwrap();

        assert_eq!(summary.final_tick, Tick(3));
        assert_eq!(summary.arrived, 1);
        assert_eq!(summary.excluded, 1);
        assert_eq!(rec.report_at(0).unwrap(), ["Lost unroutable", "V1 AB 3"]);
    }

    #[test]
    fn unknown_intersection_excluded() {
        let g = line_graph();
        let sim = SimBuilder::new(test_config(5), &g)
            .vehicles(&registry(&[("Ghost", "Z", "A")]))
            .build()
            .unwrap();
        let j = &sim.journeys()[0];
        assert!(j.is_done());
        assert!(matches!(
            j.status(),
            VehicleStatus::Unroutable { error: rn_graph::GraphError::UnknownIntersection(_) }
        ));
    }

    #[test]
    fn isolated_destination_excluded() {
        let g = line_graph();
        let mut sim = SimBuilder::new(test_config(5), &g)
            .vehicles(&registry(&[("V", "A", "D")]))
            .build()
            .unwrap();
        let summary = sim.run(&mut Recorder::default()).unwrap();
        assert_eq!(summary.final_tick, Tick(0));
        assert_eq!(summary.excluded, 1);
    }

    #[test]
    fn no_vehicles_finishes_immediately() {
        let g = line_graph();
        let mut sim = SimBuilder::new(test_config(5), &g).build().unwrap();
        let mut rec = Recorder::default();
        let summary = sim.run(&mut rec).unwrap();
        assert_eq!(summary.final_tick, Tick(0));
        assert_eq!(rec.reports, [(0, Vec::<String>::new())]);
    }

    #[test]
    fn tick_limit_aborts() {
        let g = line_graph();
        let config = SimConfig { max_ticks: Some(3), ..test_config(5) };
        let mut sim = SimBuilder::new(config, &g)
            .vehicles(&registry(&[("V1", "A", "C")]))
            .build()
            .unwrap();
        match sim.run(&mut Recorder::default()) {
            Err(SimError::TickLimit { limit }) => assert_eq!(limit, 3),
            other => panic!("expected TickLimit, got {other:?}"),
        }
    }

    #[test]
    fn tick_limit_not_hit_when_run_finishes_in_time() {
        let g = line_graph();
        let config = SimConfig { max_ticks: Some(6), ..test_config(5) };
        let mut sim = SimBuilder::new(config, &g)
            .vehicles(&registry(&[("V1", "A", "C")]))
            .pacer(NoDelay)
            .build()
            .unwrap();
        assert!(sim.run(&mut Recorder::default()).is_ok());
    }

    struct CountingPacer(u64);

    impl TickPacer for CountingPacer {
        fn pace(&mut self, _tick: Tick) {
            self.0 += 1;
        }
    }

    #[test]
    fn pacer_runs_between_ticks_only() {
        let g = line_graph();
        let mut sim = SimBuilder::new(test_config(5), &g)
            .vehicles(&registry(&[("V1", "A", "C")]))
            .pacer(CountingPacer(0))
            .build()
            .unwrap();
        sim.run(&mut Recorder::default()).unwrap();
        // Ticks 0..=5; no pause after the final tick.
        assert_eq!(sim_pacer_count(&sim), 5);
    }

    fn sim_pacer_count(sim: &crate::Sim<'_, CountingPacer>) -> u64 {
        sim.pacer().0
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;
    use rn_graph::{GraphError, GraphResult, Route, Router};

    use crate::{Phase, SimBuilder, SimError};

    #[test]
    fn invalid_config_rejected() {
        let g = line_graph();
        let config = SimConfig { tick_duration_secs: 0, ..SimConfig::default() };
        assert!(matches!(SimBuilder::new(config, &g).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn vehicles_keep_registry_order() {
        let g = line_graph();
        let sim = SimBuilder::new(test_config(5), &g)
            .vehicles(&registry(&[("V2", "A", "B"), ("V1", "B", "C")]))
            .vehicle(Vehicle::new("V3", "A", "A"))
            .build()
            .unwrap();
        let ids: Vec<_> = sim.journeys().iter().map(|j| j.vehicle().id().as_str()).collect();
        assert_eq!(ids, ["V2", "V1", "V3"]);
        assert!(sim.journeys().iter().all(|j| j.state().phase == Phase::Pending));
    }

    #[test]
    fn routes_match_shortest_paths() {
        let mut g = RoadGraph::new();
        g.add_road("A", "B", 4);
        g.add_road("B", "C", 2);
        g.add_road("A", "C", 10);
        let sim = SimBuilder::new(test_config(5), &g)
            .vehicles(&registry(&[("V", "A", "C")]))
            .build()
            .unwrap();
        let route = sim.journeys()[0].route().unwrap();
        let path: Vec<_> = route.path.iter().map(IntersectionId::as_str).collect();
        assert_eq!(path, ["A", "B", "C"]);
        assert_eq!(route.distance, 6);
    }

    #[test]
    fn precomputed_route_with_missing_road_excluded() {
        let g = line_graph();
        let bogus = Route {
            path:     vec!["A".into(), "C".into()],
            legs:     vec![5],
            distance: 5,
        };
        let sim = SimBuilder::new(test_config(5), &g)
            .journey(Vehicle::new("V", "A", "C"), Ok(bogus))
            .build()
            .unwrap();
        assert!(matches!(
            sim.journeys()[0].status(),
            VehicleStatus::Unroutable { error: GraphError::MissingEdge { .. } }
        ));
    }

    #[test]
    fn precomputed_valid_route_is_driven() {
        let g = line_graph();
        let route = Route {
            path:     vec!["A".into(), "B".into()],
            legs:     vec![3],
            distance: 3,
        };
        let mut sim = SimBuilder::new(test_config(5), &g)
            .journey(Vehicle::new("V", "A", "B"), Ok(route))
            .build()
            .unwrap();
        let summary = sim.run(&mut Recorder::default()).unwrap();
        assert_eq!(summary.final_tick, Tick(3));
    }

    fn route(path: &[&str], legs: &[u32]) -> Route {
        Route {
            path:     path.iter().map(|&k| IntersectionId::from(k)).collect(),
            legs:     legs.to_vec(),
            distance: legs.iter().map(|&w| w as u64).sum(),
        }
    }

    fn exclusion(g: &RoadGraph, vehicle: Vehicle, r: Route) -> Option<String> {
        let sim = SimBuilder::new(test_config(5), g).journey(vehicle, Ok(r)).build().unwrap();
        let why = match sim.journeys()[0].status() {
            VehicleStatus::Unroutable { error: GraphError::InvalidRoute(why) } => Some(why.clone()),
            _ => None,
        };
        why
    }

    #[test]
    fn precomputed_route_without_legs_excluded() {
        let g = line_graph();
        let why = exclusion(&g, Vehicle::new("V", "A", "C"), route(&["A", "B", "C"], &[]));
        assert_eq!(why.as_deref(), Some("0 legs for 2 roads"));
    }

    #[test]
    fn precomputed_route_with_extra_legs_excluded() {
        let g = line_graph();
        let why = exclusion(&g, Vehicle::new("V", "A", "B"), route(&["A", "B"], &[3, 2]));
        assert_eq!(why.as_deref(), Some("2 legs for 1 roads"));
    }

    #[test]
    fn precomputed_route_must_match_trip() {
        let g = line_graph();
        // Stops short of the vehicle's destination.
        assert!(exclusion(&g, Vehicle::new("V", "A", "C"), route(&["A", "B"], &[3])).is_some());
        // Starts somewhere else.
        assert!(exclusion(&g, Vehicle::new("V", "A", "C"), route(&["B", "C"], &[2])).is_some());
    }

    #[test]
    fn journey_segments_follow_the_path() {
        // Built directly, bypassing the builder's checks: the journey still
        // drives every road of the path.
        let g = line_graph();
        let mut j = crate::Journey::new(Vehicle::new("V", "A", "C"), Ok(route(&["A", "B", "C"], &[])));
        let mut tick = 0;
        while !j.settle(&g, Tick(tick)).unwrap() {
            if tick == 0 {
                assert_eq!(render(&j.status_line()), "V AB 3");
            }
            j.advance(1);
            tick += 1;
        }
        assert_eq!(tick, 5);
        assert_eq!(j.state().arrived_at, Some(Tick(5)));
        assert_eq!(j.state().segment, 2);
    }

    #[test]
    fn empty_precomputed_path_is_unreachable() {
        let g = line_graph();
        let route = Route { path: vec![], legs: vec![], distance: 0 };
        let sim = SimBuilder::new(test_config(5), &g)
            .journey(Vehicle::new("V", "A", "B"), Ok(route))
            .build()
            .unwrap();
        assert!(matches!(
            sim.journeys()[0].status(),
            VehicleStatus::Unroutable { error: GraphError::Unreachable { .. } }
        ));
    }

    /// Refuses every request.
    struct Closed;

    impl Router for Closed {
        fn route(
            &self,
            _graph: &RoadGraph,
            from:   &IntersectionId,
            to:     &IntersectionId,
        ) -> GraphResult<Route> {
            Err(GraphError::Unreachable { from: from.clone(), to: to.clone() })
        }
    }

    #[test]
    fn custom_router_is_used() {
        let g = line_graph();
        let mut sim = SimBuilder::new(test_config(5), &g)
            .router(Closed)
            .vehicles(&registry(&[("V1", "A", "C"), ("V2", "A", "B")]))
            .build()
            .unwrap();
        let summary = sim.run(&mut Recorder::default()).unwrap();
        assert_eq!(summary.excluded, 2);
        assert_eq!(summary.final_tick, Tick(0));
    }
}
