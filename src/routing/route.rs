use std::ops::Deref;

use crate::{Distance, Route};

/// Routes discovered by a single enumeration, in discovery order and without duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routes<VertexId>(Vec<Route<VertexId>>);

impl<VertexId> Default for Routes<VertexId> {
    fn default() -> Self {
        Self(vec![])
    }
}

impl<VertexId> From<Vec<Route<VertexId>>> for Routes<VertexId> {
    fn from(routes: Vec<Route<VertexId>>) -> Self {
        Self(routes)
    }
}

impl<VertexId> Deref for Routes<VertexId> {
    type Target = Vec<Route<VertexId>>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<VertexId> IntoIterator for Routes<VertexId> {
    type Item = Route<VertexId>;
    type IntoIter = std::vec::IntoIter<Route<VertexId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<VertexId> Routes<VertexId> {
    pub fn distances(&self) -> impl Iterator<Item = Distance> + '_ {
        self.iter().map(|r| r.distance)
    }

    /// Gets the route with the minimum distance.
    /// Ties are broken by discovery order: the first route found wins.
    pub fn shortest(&self) -> Option<&Route<VertexId>> {
        self.iter().min_by_key(|r| r.distance)
    }

    /// Consumes the routes returning the one with the minimum distance, see [`Routes::shortest`].
    pub fn into_shortest(self) -> Option<Route<VertexId>> {
        self.into_iter().min_by_key(|r| r.distance)
    }
}
