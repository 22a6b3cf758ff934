use super::*;
use shortcut_core::models::{Leg, Location};
use shortcut_core::planner::{RouteResult, RouteSegment};
use std::fs::File;

fn read_problem_file(path: &str) -> Result<Vec<Stop>, String> {
    read_problem(BufReader::new(File::open(path).expect("cannot open problem file")))
}

#[test]
fn can_read_problem_with_unnamed_stop() {
    let stops = read_problem_file("../data/berlin.problem.json").unwrap();

    assert_eq!(stops.len(), 6);
    assert_eq!(stops[0].display_name(), "Alexanderplatz");
    assert_eq!(stops[3].name, None);
    assert_eq!(stops[3].display_name(), "Waypoint");
    assert_eq!(stops[5].coordinate, Coordinate::new(52.5186, 13.3762));
}

#[test]
fn can_reject_problem_with_invalid_location() {
    let err = read_problem_file("../data/invalid.problem.json").unwrap_err();

    assert_eq!(err, "stop at index 1 has invalid location: (91, 13.4)");
}

#[test]
fn can_reject_malformed_problem() {
    let err = read_problem(BufReader::new(r#"{ "stops": [ { "name": "start" } ] }"#.as_bytes())).unwrap_err();

    assert!(err.starts_with("cannot deserialize problem:"));
}

#[test]
fn can_check_amount_of_stops() {
    let stops = read_problem_file("../data/too_many.problem.json").unwrap();

    assert_eq!(
        check_stops(&stops, DEFAULT_MAX_STOPS),
        Err("too many stops: 6 besides the start, at most 5 allowed".to_string())
    );
    assert_eq!(check_stops(&stops, 6), Ok(()));
    assert_eq!(check_stops(&stops, 0), Ok(()));
    assert_eq!(check_stops(&[], DEFAULT_MAX_STOPS), Err("problem has no stops".to_string()));
}

#[test]
fn can_read_routing_matrix() {
    let file = File::open("../data/square.matrix.json").expect("cannot open matrix file");

    assert!(read_matrix(BufReader::new(file), 4).is_ok());
}

#[test]
fn can_reject_routing_matrix_of_wrong_size() {
    let file = File::open("../data/square.matrix.json").expect("cannot open matrix file");

    let result = read_matrix(BufReader::new(file), 3);

    assert_eq!(result.err(), Some("routing matrix must have 9 entries for 3 locations".to_string()));
}

#[test]
fn can_write_route() {
    let start = Coordinate::new(1., 2.);
    let other = Coordinate::new(3., 4.);
    let planned = PlannedRoute {
        route: RouteResult {
            names: vec!["a".to_string(), "b".to_string(), "a".to_string()],
            segments: vec![
                RouteSegment {
                    from: Location::new(0),
                    to: Location::new(1),
                    leg: Leg { distance: 5., duration: 2., geometry: vec![start, other] },
                },
                RouteSegment { from: Location::new(1), to: Location::new(0), leg: Leg::new(5., 3.) },
            ],
            waypoints: vec![start, other, start],
            total_distance: 10.,
            total_duration: 5.,
        },
        generations: 3,
        best_cost: 10.,
        metrics: None,
    };
    let mut buffer = Vec::new();

    write_route(BufWriter::new(&mut buffer), &planned).unwrap();

    let output: RouteOutput = serde_json::from_slice(buffer.as_slice()).unwrap();
    assert_eq!(output.names, vec!["a", "b", "a"]);
    assert_eq!(output.segments.len(), 2);
    assert_eq!(output.segments[0].geometry, vec![[1., 2.], [3., 4.]]);
    assert_eq!((output.segments[1].from, output.segments[1].to), (1, 0));
    assert_eq!(output.waypoints, vec![[1., 2.], [3., 4.], [1., 2.]]);
    assert_eq!((output.total_distance, output.total_duration), (10., 5.));
    assert_eq!(output.generations, 3);
    assert!(output.metrics.is_none());

    let json = String::from_utf8(buffer).unwrap();
    assert!(json.contains("\"totalDistance\""));
    assert!(!json.contains("\"metrics\""));
}
