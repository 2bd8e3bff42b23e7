use std::fmt::Debug;
use std::hash::Hash;

use crate::Distance;

/// Directed weighted graph.
/// Exposes the behavior the route queries need from a railway network.
/// [`RouteGraph`](crate::RouteGraph) is the implementation shipped with the crate, any other
/// adjacency representation can implement it to run the same queries.
pub trait DirectedGraph {
    /// Uniquely identify a vertex (station) that belongs to the graph.
    type VertexId: Debug + Copy + Eq + Hash;

    /// Returns true only if the vertex belongs to the graph.
    fn contains_vertex(&self, vertex: Self::VertexId) -> bool;

    /// Gets an iterator over all the outgoing edges from the given vertex.
    /// For each edge returns the edge end vertex and the edge distance.
    ///
    /// The iteration order must be stable: route enumeration reports routes in the order the
    /// edges are visited. Returns an empty iterator if the vertex doesn't belong to the graph.
    fn vertex_exiting_edges(
        &self,
        vertex: Self::VertexId,
    ) -> impl Iterator<Item = (Self::VertexId, Distance)>;

    /// Gets the distance of the directed edge between two vertices, if such an edge exists.
    fn get_edge_distance(&self, from: Self::VertexId, to: Self::VertexId) -> Option<Distance> {
        self.vertex_exiting_edges(from)
            .find_map(|(vertex, distance)| (vertex == to).then_some(distance))
    }

    /// Returns the number of edges leaving the vertex.
    fn vertex_out_degree(&self, vertex: Self::VertexId) -> usize {
        self.vertex_exiting_edges(vertex).count()
    }
}

pub mod path;
