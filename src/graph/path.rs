use tracing::trace;

use crate::{DirectedGraph, Distance, PathError};

/// Walk through the graph: the sequence of visited vertices and the sum of the distances of the
/// edges that connect them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route<VertexId> {
    pub distance: Distance,
    pub vertices: Vec<VertexId>,
}

impl<VertexId> Default for Route<VertexId> {
    fn default() -> Self {
        Self {
            distance: Distance::ZERO,
            vertices: vec![],
        }
    }
}

impl<VertexId: Copy> Route<VertexId> {
    /// Number of stops, that is, the number of edges travelled.
    pub const fn stops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn origin(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    pub fn destination(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }
}

/// Returns the total distance of the path, that is, the sum of the distances of the edges between
/// each pair of consecutive vertices.
///
/// A path made of a single vertex has zero distance.
pub fn path_distance<G: DirectedGraph>(
    graph: &G,
    path: &[G::VertexId],
) -> Result<Distance, PathError<G::VertexId>> {
    let Some(&first) = path.first() else {
        return Err(PathError::Empty);
    };

    if !graph.contains_vertex(first) {
        return Err(PathError::UnknownVertex(first));
    }

    let mut distance = Distance::ZERO;

    for window in path.windows(2) {
        let [from, to] = [window[0], window[1]];

        match graph.get_edge_distance(from, to) {
            Some(d) => distance += d,
            None => {
                trace!("Path {path:?} is broken at {from:?} -> {to:?}");
                return Err(PathError::NoEdge(from, to));
            }
        }
    }

    Ok(distance)
}

/// Returns true only if the path is not empty and each pair of consecutive vertices is connected by
/// a directed edge of the graph.
pub fn is_path_connected<G: DirectedGraph>(graph: &G, path: &[G::VertexId]) -> bool {
    path_distance(graph, path).is_ok()
}
