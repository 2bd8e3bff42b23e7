mod network;

pub use network::{KINGS_CROSS_GRAPH, TOWN_GRAPH};
