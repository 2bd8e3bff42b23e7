use std::sync::LazyLock;

use railroutes::{DEFAULT_TOPOLOGY, GraphConfig, RouteGraph};

/// A -5-> B, A -5-> D, A -7-> E, B -4-> C, C -8-> D, C -2-> E, D -8-> C, D -6-> E, E -3-> B
pub static TOWN_GRAPH: LazyLock<RouteGraph> =
    LazyLock::new(|| DEFAULT_TOPOLOGY.parse().unwrap());

/// Stations with multi-character names, York and Norwich have no departures.
pub static KINGS_CROSS_GRAPH: LazyLock<RouteGraph> = LazyLock::new(|| {
    RouteGraph::from_edges(
        &GraphConfig::default(),
        [
            ("KingsCross", "Peterborough", 123),
            ("KingsCross", "Cambridge", 93),
            ("Cambridge", "Ely", 24),
            ("Peterborough", "Ely", 48),
            ("Ely", "Peterborough", 48),
            ("Peterborough", "York", 188),
            ("Ely", "Norwich", 87),
        ],
    )
    .unwrap()
});
