//! Depth-first enumeration of the routes between two vertices.
//!
//! Routes may revisit vertices (cycles), so the enumeration only terminates because of the
//! [`Bound`] given by the caller. No other depth limit is enforced: on densely connected graphs
//! the number of routes grows exponentially with the bound and choosing a sensible bound is up to
//! the caller.

mod route;

pub use route::Routes;

use rustc_hash::FxHashSet;
use strum::{Display, EnumString, IntoStaticStr};
use tracing::{debug, trace};

use crate::{DirectedGraph, Distance, Route};

/// How the number of stops of a route is compared against the maximum number of stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum StopsMatch {
    /// The route must have exactly the maximum number of stops.
    Exactly,
    /// The route can have any number of stops up to the maximum.
    #[default]
    AtMost,
}

impl StopsMatch {
    pub const fn matches(&self, stops: usize, max_stops: usize) -> bool {
        match self {
            Self::Exactly => stops == max_stops,
            Self::AtMost => stops <= max_stops,
        }
    }
}

/// Stopping policy of the route enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// Routes are bounded by their number of stops (edges).
    /// A branch is no longer extended as soon as it reaches the destination with an accepted number
    /// of stops.
    Stops {
        max_stops: usize,
        matching: StopsMatch,
    },
    /// Routes are bounded by their total distance, which must be strictly lower than the limit.
    /// A branch keeps being extended after reaching the destination, as long as it stays below the
    /// limit.
    DistanceLimit { limit: Distance },
}

impl Bound {
    pub const fn stops(max_stops: usize, matching: StopsMatch) -> Self {
        Self::Stops {
            max_stops,
            matching,
        }
    }

    pub const fn distance_limit(limit: Distance) -> Self {
        Self::DistanceLimit { limit }
    }
}

/// Finds all the routes from origin to destination within the bound.
///
/// Each route has at least one edge, therefore a vertex is never a route to itself unless the
/// route goes through a cycle. Routes are returned in discovery order, which follows the order of
/// [`DirectedGraph::vertex_exiting_edges`]. Returns no routes if the origin doesn't belong to the
/// graph.
pub fn find_routes<G: DirectedGraph>(
    graph: &G,
    origin: G::VertexId,
    destination: G::VertexId,
    bound: Bound,
) -> Routes<G::VertexId> {
    debug!("Finding routes {origin:?} -> {destination:?} with {bound:?}");

    if !graph.contains_vertex(origin) {
        debug!("Origin {origin:?} does not belong to the graph");
        return Routes::default();
    }

    let mut search = Search {
        graph,
        destination,
        bound,
        path: vec![origin],
        seen: FxHashSet::default(),
        routes: vec![],
    };

    search.visit(Distance::ZERO);

    debug!(
        "Found {} routes {origin:?} -> {destination:?}",
        search.routes.len()
    );

    Routes::from(search.routes)
}

/// Finds the shortest (by distance) of the routes bounded by the number of stops.
/// If more routes have the same minimum distance the first one discovered is returned.
pub fn shortest_route<G: DirectedGraph>(
    graph: &G,
    origin: G::VertexId,
    destination: G::VertexId,
    max_stops: usize,
    matching: StopsMatch,
) -> Option<Route<G::VertexId>> {
    find_routes(
        graph,
        origin,
        destination,
        Bound::stops(max_stops, matching),
    )
    .into_shortest()
}

struct Search<'a, G: DirectedGraph> {
    graph: &'a G,
    destination: G::VertexId,
    bound: Bound,
    /// Vertices of the branch currently explored, starting from the origin.
    path: Vec<G::VertexId>,
    seen: FxHashSet<Vec<G::VertexId>>,
    routes: Vec<Route<G::VertexId>>,
}

impl<G: DirectedGraph> Search<'_, G> {
    fn visit(&mut self, distance: Distance) {
        let stops = self.path.len() - 1;
        let at_destination = stops > 0 && self.path.last() == Some(&self.destination);

        match self.bound {
            Bound::Stops {
                max_stops,
                matching,
            } => {
                if at_destination && matching.matches(stops, max_stops) {
                    self.record(distance);
                    return;
                }

                if stops >= max_stops {
                    trace!("Pruning {:?}: {stops} stops", self.path);
                    return;
                }
            }
            Bound::DistanceLimit { limit } => {
                if distance >= limit {
                    trace!("Pruning {:?}: distance {distance}", self.path);
                    return;
                }

                if at_destination {
                    self.record(distance);
                }
            }
        }

        let graph = self.graph;
        let Some(&vertex) = self.path.last() else {
            return;
        };

        for (next, edge_distance) in graph.vertex_exiting_edges(vertex) {
            self.path.push(next);
            self.visit(distance + edge_distance);
            self.path.pop();
        }
    }

    fn record(&mut self, distance: Distance) {
        if !self.seen.insert(self.path.clone()) {
            return;
        }

        trace!("Found route {:?} with distance {distance}", self.path);

        self.routes.push(Route {
            distance,
            vertices: self.path.clone(),
        });
    }
}
