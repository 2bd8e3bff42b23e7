use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum PathError<VertexId> {
    #[error("Path is empty")]
    Empty,
    #[error("Vertex {0:?} does not belong to the graph")]
    UnknownVertex(VertexId),
    #[error("No edge from {0:?} to {1:?}")]
    NoEdge(VertexId, VertexId),
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("Path is empty")]
    EmptyPath,
    #[error("Path has an empty station name: {0:?}")]
    EmptySegment(String),
    #[error("Edge is not valid, expected `A-B:5` or `AB5`: {0:?}")]
    InvalidEdge(String),
    #[error("Edge distance is not a positive integer: {0:?}")]
    InvalidDistance(String),
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GraphError {
    #[error("Cannot parse topology: {0}")]
    Parse(#[from] ParseError),
    #[error("Station name cannot be empty")]
    EmptyStationName,
    #[error("Edge {0} -> {1} has zero distance")]
    ZeroDistance(String, String),
    #[error("Edge {0} -> {1} is defined more than once")]
    DuplicateEdge(String, String),
}

/// Every variant displays as the `NO SUCH ROUTE` answer followed by the reason.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RouteError {
    #[error("NO SUCH ROUTE: {0}")]
    InvalidPath(#[from] ParseError),
    #[error("NO SUCH ROUTE: path is empty")]
    EmptyPath,
    #[error("NO SUCH ROUTE: unknown station {0:?}")]
    UnknownStation(String),
    #[error("NO SUCH ROUTE: no edge {0} -> {1}")]
    NoEdge(String, String),
}

impl RouteError {
    /// Returns true if the error names a station or edge missing from the graph,
    /// as opposed to malformed input.
    pub const fn is_missing_route(&self) -> bool {
        matches!(self, Self::UnknownStation(_) | Self::NoEdge(..))
    }
}
