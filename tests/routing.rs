mod graph;

use railroutes::{Bound, Distance, RouteError, RouteGraph, StopsMatch};
use test_log::test;

use crate::graph::{KINGS_CROSS_GRAPH, TOWN_GRAPH};

fn route_names(graph: &RouteGraph, origin: &str, destination: &str, bound: Bound) -> Vec<String> {
    graph
        .find_routes(origin, destination, bound)
        .unwrap()
        .iter()
        .map(|route| graph.named_route(route).to_string())
        .collect()
}

#[test]
fn count_routes_by_stops_001() {
    let graph: &RouteGraph = &TOWN_GRAPH;

    assert_eq!(
        graph.count_routes_by_stops("C", "C", 3, StopsMatch::AtMost),
        Ok(2)
    );
    assert_eq!(
        route_names(graph, "C", "C", Bound::stops(3, StopsMatch::AtMost)),
        ["C-D-C", "C-E-B-C"]
    );
}

#[test]
fn count_routes_by_stops_002() {
    let graph: &RouteGraph = &TOWN_GRAPH;

    assert_eq!(
        graph.count_routes_by_stops("A", "C", 4, StopsMatch::Exactly),
        Ok(3)
    );
    assert_eq!(
        route_names(graph, "A", "C", Bound::stops(4, StopsMatch::Exactly)),
        ["A-B-C-D-C", "A-D-C-D-C", "A-D-E-B-C"]
    );
}

#[test]
fn count_routes_by_stops_003() {
    let graph: &RouteGraph = &TOWN_GRAPH;

    // a single edge is a route, a single station is not
    assert_eq!(
        graph.count_routes_by_stops("A", "B", 1, StopsMatch::AtMost),
        Ok(1)
    );
    assert_eq!(
        graph.count_routes_by_stops("A", "A", 10, StopsMatch::AtMost),
        Ok(0)
    );
    assert_eq!(
        graph.count_routes_by_stops("C", "C", 0, StopsMatch::AtMost),
        Ok(0)
    );
}

#[test]
fn count_routes_by_stops_bounds_001() {
    let graph: &RouteGraph = &TOWN_GRAPH;

    for max_stops in 1..=6 {
        let exactly = graph
            .find_routes("A", "C", Bound::stops(max_stops, StopsMatch::Exactly))
            .unwrap();
        assert!(exactly.iter().all(|r| r.stops() == max_stops));

        let at_most = graph
            .find_routes("A", "C", Bound::stops(max_stops, StopsMatch::AtMost))
            .unwrap();
        assert!(at_most.iter().all(|r| (1..=max_stops).contains(&r.stops())));
    }
}

#[test]
fn count_routes_by_distance_limit_001() {
    let graph: &RouteGraph = &TOWN_GRAPH;

    assert_eq!(
        graph.count_routes_by_distance_limit("C", "C", Distance::new(30)),
        Ok(7)
    );
    assert_eq!(
        route_names(graph, "C", "C", Bound::distance_limit(Distance::new(30))),
        [
            "C-D-C",
            "C-D-C-E-B-C",
            "C-D-E-B-C",
            "C-E-B-C",
            "C-E-B-C-D-C",
            "C-E-B-C-E-B-C",
            "C-E-B-C-E-B-C-E-B-C",
        ]
    );
}

#[test]
fn count_routes_by_distance_limit_002() {
    let graph: &RouteGraph = &TOWN_GRAPH;

    for limit in [0, 5, 9, 10, 25, 40] {
        let limit = Distance::new(limit);
        let routes = graph
            .find_routes("A", "C", Bound::distance_limit(limit))
            .unwrap();

        for route in routes.iter() {
            assert!(route.distance < limit);
            assert!(route.stops() > 0);

            let names = graph.named_route(route).stations;
            assert_eq!(graph.route_distance(&names), Ok(route.distance));
        }
    }

    assert_eq!(
        graph.count_routes_by_distance_limit("A", "C", Distance::new(9)),
        Ok(0)
    );
    assert_eq!(
        graph.count_routes_by_distance_limit("A", "C", Distance::new(10)),
        Ok(1)
    );
}

#[test]
fn shortest_route_001() {
    let graph: &RouteGraph = &TOWN_GRAPH;

    let route = graph
        .shortest_route("A", "C", 3, StopsMatch::AtMost)
        .unwrap()
        .unwrap();

    let expected = graph
        .find_routes("A", "C", Bound::stops(3, StopsMatch::AtMost))
        .unwrap()
        .distances()
        .min()
        .unwrap();

    assert_eq!(route.distance, expected);
    assert_eq!(route.to_string(), "A-B-C");
    assert_eq!(route.distance, Distance::new(9));
}

#[test]
fn shortest_route_002() {
    let graph: &RouteGraph = &TOWN_GRAPH;

    let route = graph
        .shortest_route("A", "C", 4, StopsMatch::Exactly)
        .unwrap()
        .unwrap();
    assert_eq!(route.to_string(), "A-D-E-B-C");
    assert_eq!(route.distance, Distance::new(18));

    let route = graph
        .shortest_route("B", "B", 10, StopsMatch::AtMost)
        .unwrap()
        .unwrap();
    assert_eq!(route.to_string(), "B-C-E-B");
    assert_eq!(route.distance, Distance::new(9));
}

#[test]
fn shortest_route_003() {
    let graph: &RouteGraph = &TOWN_GRAPH;

    assert_eq!(graph.shortest_route("A", "A", 5, StopsMatch::AtMost), Ok(None));
    assert_eq!(graph.shortest_route("C", "C", 1, StopsMatch::AtMost), Ok(None));
}

#[test]
fn shortest_route_is_minimum_001() {
    let graph: &RouteGraph = &TOWN_GRAPH;
    let stations: Vec<_> = graph.station_names().collect();

    for origin in &stations {
        for destination in &stations {
            for matching in [StopsMatch::Exactly, StopsMatch::AtMost] {
                let routes = graph
                    .find_routes(origin, destination, Bound::stops(4, matching))
                    .unwrap();
                let shortest = graph
                    .shortest_route(origin, destination, 4, matching)
                    .unwrap();

                match shortest {
                    Some(route) => assert!(routes.distances().all(|d| route.distance <= d)),
                    None => assert!(routes.is_empty()),
                }
            }
        }
    }
}

#[test]
fn queries_are_idempotent_001() {
    let graph: &RouteGraph = &TOWN_GRAPH;

    assert_eq!(
        graph.find_routes("C", "C", Bound::distance_limit(Distance::new(30))),
        graph.find_routes("C", "C", Bound::distance_limit(Distance::new(30)))
    );
    assert_eq!(
        graph.shortest_route("A", "C", 4, StopsMatch::AtMost),
        graph.shortest_route("A", "C", 4, StopsMatch::AtMost)
    );
}

#[test]
fn unknown_station_001() {
    let graph: &RouteGraph = &TOWN_GRAPH;

    assert_eq!(
        graph.count_routes_by_stops("Z", "C", 3, StopsMatch::AtMost),
        Err(RouteError::UnknownStation("Z".into()))
    );
    assert_eq!(
        graph.count_routes_by_distance_limit("A", "Z", Distance::new(30)),
        Err(RouteError::UnknownStation("Z".into()))
    );
    assert_eq!(
        graph.shortest_route("Z", "Z", 3, StopsMatch::Exactly),
        Err(RouteError::UnknownStation("Z".into()))
    );
}

#[test]
fn named_stations_001() {
    let graph: &RouteGraph = &KINGS_CROSS_GRAPH;

    assert_eq!(
        route_names(
            graph,
            "KingsCross",
            "York",
            Bound::stops(4, StopsMatch::AtMost)
        ),
        [
            "KingsCross-Peterborough-Ely-Peterborough-York",
            "KingsCross-Peterborough-York",
            "KingsCross-Cambridge-Ely-Peterborough-York",
        ]
    );
    assert_eq!(
        graph.count_routes_by_stops("KingsCross", "York", 2, StopsMatch::Exactly),
        Ok(1)
    );
    assert_eq!(
        route_names(
            graph,
            "KingsCross",
            "York",
            Bound::distance_limit(Distance::new(400))
        ),
        [
            "KingsCross-Peterborough-York",
            "KingsCross-Cambridge-Ely-Peterborough-York",
        ]
    );

    let route = graph
        .shortest_route("KingsCross", "York", 4, StopsMatch::AtMost)
        .unwrap()
        .unwrap();
    assert_eq!(route.to_string(), "KingsCross-Peterborough-York");
    assert_eq!(route.distance, Distance::new(311));
}

#[test]
fn dead_end_station_001() {
    let graph: &RouteGraph = &KINGS_CROSS_GRAPH;

    assert_eq!(
        graph.count_routes_by_stops("York", "KingsCross", 10, StopsMatch::AtMost),
        Ok(0)
    );
    assert_eq!(
        graph.shortest_route("Norwich", "Ely", 10, StopsMatch::AtMost),
        Ok(None)
    );
    assert_eq!(
        graph.count_routes_by_distance_limit("KingsCross", "Norwich", Distance::new(300)),
        Ok(2)
    );
}
