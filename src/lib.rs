#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod model;
mod network;
mod routing;

pub use error::{GraphError, ParseError, PathError, RouteError};
pub use graph::DirectedGraph;
pub use graph::path::{Route, is_path_connected, path_distance};
pub use model::Distance;
pub use network::{
    DEFAULT_TOPOLOGY, DuplicateEdges, GraphConfig, NamedRoute, PATH_SEPARATOR, RouteGraph,
    StationId, parse_path,
};
pub use routing::{Bound, Routes, StopsMatch, find_routes, shortest_route};
