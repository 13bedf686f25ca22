//! Fluent builder for constructing a [`Sim`].

use log::warn;

use rn_core::SimConfig;
use rn_fleet::{Vehicle, VehicleRegistry};
use rn_graph::{GraphError, GraphResult, RoadGraph, Route, Router, ScanDijkstra};

use crate::{FixedDelay, Journey, Sim, SimError, SimResult, TickPacer};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — report interval, tick duration, pacing, tick cap
/// - `&RoadGraph` — borrowed for the whole run, so it cannot change while
///   vehicles are moving
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                  |
/// |---------------------|------------------------------------------|
/// | `.router(r)`        | [`ScanDijkstra`]                         |
/// | `.pacer(p)`         | `FixedDelay(config.tick_delay)`          |
/// | `.vehicles(reg)`    | no vehicles                              |
/// | `.journey(v, r)`    | —  (adds a vehicle with a precomputed route) |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default(), &graph)
///     .vehicles(&registry)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<'g, R: Router = ScanDijkstra, P: TickPacer = FixedDelay> {
    config:   SimConfig,
    graph:    &'g RoadGraph,
    router:   R,
    pacer:    P,
    pending:  Vec<(Vehicle, Option<GraphResult<Route>>)>,
}

impl<'g> SimBuilder<'g> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, graph: &'g RoadGraph) -> Self {
        let pacer = FixedDelay(config.tick_delay);
        Self {
            config,
            graph,
            router: ScanDijkstra,
            pacer,
            pending: Vec::new(),
        }
    }
}

impl<'g, R: Router, P: TickPacer> SimBuilder<'g, R, P> {
    /// Route vehicles with `router` instead of [`ScanDijkstra`].
    pub fn router<R2: Router>(self, router: R2) -> SimBuilder<'g, R2, P> {
        SimBuilder {
            config:  self.config,
            graph:   self.graph,
            router,
            pacer:   self.pacer,
            pending: self.pending,
        }
    }

    /// Replace the wall-clock pacer.
    pub fn pacer<P2: TickPacer>(self, pacer: P2) -> SimBuilder<'g, R, P2> {
        SimBuilder {
            config:  self.config,
            graph:   self.graph,
            router:  self.router,
            pacer,
            pending: self.pending,
        }
    }

    /// Add every vehicle in `registry`, in registry order.  Each is routed
    /// once during [`build`](Self::build).
    pub fn vehicles(mut self, registry: &VehicleRegistry) -> Self {
        self.pending.extend(registry.iter().cloned().map(|v| (v, None)));
        self
    }

    /// Add one vehicle to be routed during [`build`](Self::build).
    pub fn vehicle(mut self, vehicle: Vehicle) -> Self {
        self.pending.push((vehicle, None));
        self
    }

    /// Add a vehicle whose route was computed elsewhere.
    ///
    /// The route is checked during `build`: a path that does not run from
    /// the vehicle's start to its end, or whose `legs` do not match its
    /// roads, is excluded with `InvalidRoute`; a segment with no road is
    /// excluded with `MissingEdge`.
    pub fn journey(mut self, vehicle: Vehicle, route: GraphResult<Route>) -> Self {
        self.pending.push((vehicle, Some(route)));
        self
    }

    /// Validate the configuration, route every vehicle, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<'g, P>> {
        self.config
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;

        let graph = self.graph;
        let journeys: Vec<Journey> = self
            .pending
            .into_iter()
            .map(|(vehicle, route)| {
                let route = route
                    .unwrap_or_else(|| self.router.route(graph, vehicle.start(), vehicle.end()))
                    .and_then(|r| check_route(graph, &vehicle, r));
                if let Err(e) = &route {
                    warn!("vehicle {} excluded from simulation: {e}", vehicle.id());
                }
                Journey::new(vehicle, route)
            })
            .collect();

        Ok(Sim::new(self.config, graph, journeys, self.pacer))
    }
}

/// Every route, precomputed or from the router, must run from the vehicle's start to its end, carry
/// one leg per road, and use only roads that exist in `graph`.
///
/// An empty path is passed through; the journey reports it as unreachable.
fn check_route(graph: &RoadGraph, vehicle: &Vehicle, route: Route) -> GraphResult<Route> {
    let (Some(first), Some(last)) = (route.origin(), route.destination()) else {
        return Ok(route);
    };
    if first != vehicle.start() || last != vehicle.end() {
        return Err(GraphError::InvalidRoute(format!(
            "path {first} .. {last} does not match trip {} -> {}",
            vehicle.start(),
            vehicle.end()
        )));
    }
    if route.legs.len() != route.hops() {
        return Err(GraphError::InvalidRoute(format!(
            "{} legs for {} roads",
            route.legs.len(),
            route.hops()
        )));
    }
    for (from, to) in route.segments() {
        if graph.edge_weight(from.as_str(), to.as_str()).is_none() {
            return Err(GraphError::MissingEdge { from: from.clone(), to: to.clone() });
        }
    }
    Ok(route)
}
