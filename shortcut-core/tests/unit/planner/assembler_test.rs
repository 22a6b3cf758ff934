use super::*;
use crate::helpers::models::*;

fn to_locations(indices: &[usize]) -> Vec<Location> {
    indices.iter().map(|&index| Location::new(index)).collect()
}

parameterized_test! {can_rotate_to_start, (order, expected), {
    let cycle = rotate_to_start(to_locations(&order).as_slice(), Location::START);

    assert_eq!(cycle, expected.map(|expected: Vec<usize>| to_locations(&expected)));
}}

can_rotate_to_start! {
    case01_interior: (vec![2, 3, 0, 1], Some(vec![0, 1, 2, 3, 0])),
    case02_first: (vec![0, 3, 1, 2], Some(vec![0, 3, 1, 2, 0])),
    case03_last: (vec![4, 1, 3, 2, 0], Some(vec![0, 4, 1, 3, 2, 0])),
    case04_single: (vec![0], Some(vec![0, 0])),
    case05_missing: (vec![1, 2], None),
    case06_empty: (Vec::<usize>::new(), None),
}

#[test]
fn can_assemble_route_starting_at_first_stop() {
    let stops = create_stops(4);
    let mut matrix = create_square_matrix();
    let leg = Leg { geometry: vec![stops[0].coordinate], ..Leg::new(1., 60.) };
    matrix.set_leg(Location::new(0), Location::new(3), leg);

    let route = assemble_route(&create_tour(&[2, 1, 0, 3]), stops.as_slice(), &matrix).unwrap();

    assert_eq!(route.names, vec!["s0", "s3", "s2", "s1", "s0"]);
    assert_eq!(
        route.segments.iter().map(|segment| (segment.from.index, segment.to.index)).collect::<Vec<_>>(),
        vec![(0, 3), (3, 2), (2, 1), (1, 0)]
    );
    assert_eq!(route.segments[0].leg.geometry, vec![stops[0].coordinate]);
    assert_eq!(
        route.waypoints,
        vec![stops[0].coordinate, stops[3].coordinate, stops[2].coordinate, stops[1].coordinate, stops[0].coordinate]
    );
    assert_eq!(route.total_distance, 4.);
    assert_eq!(route.total_duration, 60.);
}

#[test]
fn can_use_default_name_for_unnamed_stops() {
    let stops = vec![
        create_stop("Home", 0., 0.),
        Stop::new(None, Coordinate::new(0., 1.)),
        Stop::new(Some(String::new()), Coordinate::new(1., 1.)),
    ];
    let matrix = create_matrix(vec![vec![0., 1., 2.], vec![1., 0., 1.], vec![2., 1., 0.]]);

    let route = assemble_route(&create_tour(&[1, 2, 0]), stops.as_slice(), &matrix).unwrap();

    assert_eq!(route.names, vec!["Home", "Waypoint", "Waypoint", "Home"]);
}

#[test]
fn can_return_trivial_routes() {
    let empty = assemble_route(&create_tour(&[]), &[], &DistanceMatrix::new(0)).unwrap();
    assert_eq!(empty, RouteResult::default());

    let stops = create_stops(1);
    let single = assemble_route(&create_tour(&[0]), stops.as_slice(), &DistanceMatrix::new(1)).unwrap();
    assert_eq!(single.names, vec!["s0"]);
    assert_eq!(single.waypoints, vec![stops[0].coordinate]);
    assert!(single.segments.is_empty());
    assert_eq!(single.total_distance, 0.);
}

#[test]
fn can_fail_on_missing_leg() {
    let stops = create_stops(3);
    let mut matrix = create_matrix(vec![vec![0., 1., 2.], vec![1., 0., 1.], vec![2., 1., 0.]]);
    matrix.mark_failed(Location::new(2), Location::new(0));

    let result = assemble_route(&create_tour(&[0, 1, 2]), stops.as_slice(), &matrix);

    assert_eq!(result.unwrap_err().to_string(), "no directions from 's2' to 's0'");
}

parameterized_test! {can_reject_invalid_input, (indices, size, expected), {
    let result = assemble_route(&create_tour(&indices), create_stops(size).as_slice(), &create_square_matrix());

    assert_eq!(result.unwrap_err().to_string(), expected);
}}

can_reject_invalid_input! {
    case01_not_permutation: (vec![0, 1, 1, 3], 4, "tour does not visit each of 4 stops exactly once"),
    case02_size_mismatch: (vec![0, 1, 2], 3, "matrix size 4 does not match amount of stops 3"),
}
