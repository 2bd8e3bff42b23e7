//! Railway network of named stations connected by directed weighted edges.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use strum::{Display, EnumString, IntoStaticStr};
use tracing::{debug, info};

use crate::graph::path::path_distance;
use crate::{
    Bound, DirectedGraph, Distance, GraphError, ParseError, PathError, Route, RouteError, Routes,
    StopsMatch,
};

/// The five stations network every [`RouteGraph::default`] is made of, in compact edge format.
pub const DEFAULT_TOPOLOGY: &str = "AB5, AD5, AE7, BC4, CD8, CE2, DC8, DE6, EB3";

const DEFAULT_EDGES: [(&str, &str, u32); 9] = [
    ("A", "B", 5),
    ("A", "D", 5),
    ("A", "E", 7),
    ("B", "C", 4),
    ("C", "D", 8),
    ("C", "E", 2),
    ("D", "C", 8),
    ("D", "E", 6),
    ("E", "B", 3),
];

/// Separates the station names of a path in its textual form.
pub const PATH_SEPARATOR: char = '-';

/// What to do when the same directed edge is defined twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum DuplicateEdges {
    /// Fail the graph construction.
    #[default]
    Reject,
    /// The last definition wins, the edge keeps the position of its first definition.
    Replace,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GraphConfig {
    pub duplicate_edges: DuplicateEdges,
}

/// Index of a station in a [`RouteGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(u32);

impl StationId {
    const fn index(&self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Station {
    name: String,
    /// Outgoing edges in insertion order, at most one per destination.
    edges: Vec<(StationId, Distance)>,
}

/// Immutable directed graph of named stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGraph {
    stations: Vec<Station>,
    names: FxHashMap<String, StationId>,
}

impl Default for RouteGraph {
    fn default() -> Self {
        let mut graph = Self::empty();

        for (from, to, distance) in DEFAULT_EDGES {
            let from = graph.insert_station(from);
            let to = graph.insert_station(to);
            graph.stations[from.index()]
                .edges
                .push((to, Distance::new(distance)));
        }

        graph
    }
}

impl FromStr for RouteGraph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_topology(&GraphConfig::default(), s)
    }
}

impl DirectedGraph for RouteGraph {
    type VertexId = StationId;

    fn contains_vertex(&self, vertex: Self::VertexId) -> bool {
        vertex.index() < self.stations.len()
    }

    fn vertex_exiting_edges(
        &self,
        vertex: Self::VertexId,
    ) -> impl Iterator<Item = (Self::VertexId, Distance)> {
        self.stations
            .get(vertex.index())
            .into_iter()
            .flat_map(|station| station.edges.iter().copied())
    }
}

impl RouteGraph {
    fn empty() -> Self {
        Self {
            stations: vec![],
            names: FxHashMap::default(),
        }
    }

    /// Builds the graph from `(from, to, distance)` edges.
    /// Stations are created the first time they appear in an edge, either as origin or destination.
    pub fn from_edges<S: AsRef<str>>(
        config: &GraphConfig,
        edges: impl IntoIterator<Item = (S, S, u32)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::empty();

        for (from, to, distance) in edges {
            let (from, to) = (from.as_ref().trim(), to.as_ref().trim());

            if from.is_empty() || to.is_empty() {
                return Err(GraphError::EmptyStationName);
            }

            if distance == 0 {
                return Err(GraphError::ZeroDistance(from.into(), to.into()));
            }

            let from_id = graph.insert_station(from);
            let to_id = graph.insert_station(to);
            let distance = Distance::new(distance);
            let edges = &mut graph.stations[from_id.index()].edges;

            match edges.iter_mut().find(|(id, _)| *id == to_id) {
                None => edges.push((to_id, distance)),
                Some(_) if config.duplicate_edges == DuplicateEdges::Reject => {
                    return Err(GraphError::DuplicateEdge(from.into(), to.into()));
                }
                Some(edge) => {
                    debug!("Replacing edge {from} -> {to}: {} -> {distance}", edge.1);
                    edge.1 = distance;
                }
            }
        }

        debug!(
            "Built graph with {} stations and {} edges",
            graph.stations.len(),
            graph.edges_count()
        );

        Ok(graph)
    }

    /// Builds the graph from its textual topology: edges separated by commas and/or whitespace.
    ///
    /// Each edge is either `FROM-TO:DISTANCE` (e.g. `Paddington-Reading:58`) or, for single
    /// character station names, the compact `FTDISTANCE` (e.g. `AB5`).
    pub fn parse_topology(config: &GraphConfig, topology: &str) -> Result<Self, GraphError> {
        let edges = topology
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(parse_edge)
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_edges(config, edges)
    }

    fn insert_station(&mut self, name: &str) -> StationId {
        if let Some(&id) = self.names.get(name) {
            return id;
        }

        let id = StationId(self.stations.len() as u32);
        self.stations.push(Station {
            name: name.into(),
            edges: vec![],
        });
        self.names.insert(name.into(), id);
        id
    }

    pub fn stations_count(&self) -> usize {
        self.stations.len()
    }

    pub fn edges_count(&self) -> usize {
        self.stations.iter().map(|s| s.edges.len()).sum()
    }

    /// Gets an iterator over the station names, in insertion order.
    pub fn station_names(&self) -> impl Iterator<Item = &str> {
        self.stations.iter().map(|s| s.name.as_str())
    }

    pub fn station_id(&self, name: &str) -> Option<StationId> {
        self.names.get(name).copied()
    }

    pub fn station_name(&self, station: StationId) -> Option<&str> {
        self.stations.get(station.index()).map(|s| s.name.as_str())
    }

    fn resolve(&self, name: &str) -> Result<StationId, RouteError> {
        self.station_id(name)
            .ok_or_else(|| RouteError::UnknownStation(name.into()))
    }

    fn name(&self, station: StationId) -> String {
        self.station_name(station)
            .map_or_else(|| format!("{station:?}"), str::to_string)
    }

    /// Resolves the station names of a route found in this graph.
    pub fn named_route(&self, route: &Route<StationId>) -> NamedRoute {
        NamedRoute {
            distance: route.distance,
            stations: route.vertices.iter().map(|&s| self.name(s)).collect(),
        }
    }

    /// Returns the total distance of the path given as sequence of station names.
    ///
    /// A path made of a single known station has zero distance, which is not a failure.
    pub fn route_distance<S: AsRef<str>>(&self, path: &[S]) -> Result<Distance, RouteError> {
        let path = path
            .iter()
            .map(|name| self.resolve(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        path_distance(self, &path).map_err(|error| match error {
            PathError::Empty => RouteError::EmptyPath,
            PathError::UnknownVertex(s) => RouteError::UnknownStation(self.name(s)),
            PathError::NoEdge(from, to) => RouteError::NoEdge(self.name(from), self.name(to)),
        })
    }

    /// Returns the total distance of the path given in its textual form, e.g. `A-B-C`.
    pub fn route_distance_str(&self, path: &str) -> Result<Distance, RouteError> {
        info!("Computing distance of {path}");
        let path = parse_path(path)?;
        self.route_distance(&path)
    }

    /// Finds all the routes between two stations within the bound, see [`crate::find_routes`].
    pub fn find_routes(
        &self,
        origin: &str,
        destination: &str,
        bound: Bound,
    ) -> Result<Routes<StationId>, RouteError> {
        info!("Finding routes {origin} -> {destination} with {bound:?}");

        let routes = crate::find_routes(
            self,
            self.resolve(origin)?,
            self.resolve(destination)?,
            bound,
        );

        for route in routes.iter() {
            debug!(
                "Trip: {} TotalDistance: {}",
                self.named_route(route),
                route.distance
            );
        }

        Ok(routes)
    }

    /// Counts the routes between two stations with exactly, or at most, the given number of stops.
    pub fn count_routes_by_stops(
        &self,
        origin: &str,
        destination: &str,
        max_stops: usize,
        matching: StopsMatch,
    ) -> Result<usize, RouteError> {
        self.find_routes(origin, destination, Bound::stops(max_stops, matching))
            .map(|routes| routes.len())
    }

    /// Counts the routes between two stations with a total distance strictly lower than the limit.
    pub fn count_routes_by_distance_limit(
        &self,
        origin: &str,
        destination: &str,
        limit: Distance,
    ) -> Result<usize, RouteError> {
        self.find_routes(origin, destination, Bound::distance_limit(limit))
            .map(|routes| routes.len())
    }

    /// Finds the shortest route between two stations among those with exactly, or at most, the
    /// given number of stops. Returns `None` if there is no such route.
    pub fn shortest_route(
        &self,
        origin: &str,
        destination: &str,
        max_stops: usize,
        matching: StopsMatch,
    ) -> Result<Option<NamedRoute>, RouteError> {
        let routes = self.find_routes(origin, destination, Bound::stops(max_stops, matching))?;
        Ok(routes.shortest().map(|route| self.named_route(route)))
    }
}

/// Route with resolved station names, displayed in its textual form (e.g. `A-B-C`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedRoute {
    pub distance: Distance,
    pub stations: Vec<String>,
}

impl fmt::Display for NamedRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, station) in self.stations.iter().enumerate() {
            if i > 0 {
                write!(f, "{PATH_SEPARATOR}")?;
            }
            f.write_str(station)?;
        }
        Ok(())
    }
}

/// Splits the textual form of a path (e.g. `A-B-C`) into station names.
pub fn parse_path(path: &str) -> Result<Vec<&str>, ParseError> {
    let path = path.trim();

    if path.is_empty() {
        return Err(ParseError::EmptyPath);
    }

    path.split(PATH_SEPARATOR)
        .map(|name| match name.trim() {
            "" => Err(ParseError::EmptySegment(path.into())),
            name => Ok(name),
        })
        .collect()
}

fn parse_edge(token: &str) -> Result<(&str, &str, u32), ParseError> {
    let (from, to, distance) = match token.split_once(':') {
        Some((stations, distance)) => {
            let (from, to) = stations
                .split_once(PATH_SEPARATOR)
                .ok_or_else(|| ParseError::InvalidEdge(token.into()))?;
            (from, to, distance)
        }
        None => {
            let mut boundaries = token.char_indices().map(|(i, _)| i).skip(1);
            let (Some(first), Some(second)) = (boundaries.next(), boundaries.next()) else {
                return Err(ParseError::InvalidEdge(token.into()));
            };
            (&token[..first], &token[first..second], &token[second..])
        }
    };

    let distance = distance
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidDistance(distance.into()))?;

    Ok((from, to, distance))
}
