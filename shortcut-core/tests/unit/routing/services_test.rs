use super::*;
use crate::helpers::models::create_stop;
use crate::models::Location;

fn create_request(from: usize, to: usize, source: Stop, destination: Stop) -> DirectionsRequest {
    DirectionsRequest { from: Location::new(from), to: Location::new(to), source, destination }
}

#[tokio::test]
async fn can_approximate_directions() {
    let service = ApproxDirections::default();
    let berlin = create_stop("Berlin", 52.52, 13.405);
    let paris = create_stop("Paris", 48.8566, 2.3522);

    let leg = service.directions(create_request(0, 1, berlin.clone(), paris.clone())).await.unwrap();

    assert!(leg.distance > 870_000. && leg.distance < 885_000., "unexpected distance: {}", leg.distance);
    assert!((leg.duration - leg.distance / DEFAULT_APPROX_SPEED).abs() < 1E-6);
    assert_eq!(leg.geometry, vec![berlin.coordinate, paris.coordinate]);
}

#[tokio::test]
async fn can_fail_approximation_for_invalid_coordinate() {
    let service = ApproxDirections::new(5.).unwrap();

    let result = service.directions(create_request(0, 1, create_stop("a", 91., 0.), create_stop("b", 0., 0.))).await;

    assert_eq!(result.unwrap_err().to_string(), "cannot approximate directions from 'a' to 'b': invalid coordinate");
}

parameterized_test! {can_validate_approximation_speed, (speed, is_ok), {
    assert_eq!(ApproxDirections::new(speed).is_ok(), is_ok);
}}

can_validate_approximation_speed! {
    case01_positive: (13.8, true),
    case02_zero: (0., false),
    case03_negative: (-1., false),
    case04_nan: (f64::NAN, false),
}

#[test]
fn can_calculate_haversine_distance_of_same_point() {
    let point = Coordinate::new(10., 10.);

    assert_eq!(get_haversine_distance(&point, &point), 0.);
}

#[tokio::test]
async fn can_use_routing_matrix() {
    let service =
        MatrixDirections::new(2, vec![0., 100., 200., 0.], vec![0., 10., 20., 0.], Some(vec![0, 0, 3, 0])).unwrap();
    let (first, second) = (create_stop("a", 0., 0.), create_stop("b", 1., 1.));

    let leg = service.directions(create_request(0, 1, first.clone(), second.clone())).await.unwrap();
    assert_eq!((leg.distance, leg.duration), (100., 10.));

    let error = service.directions(create_request(1, 0, second.clone(), first.clone())).await.unwrap_err();
    assert_eq!(error.to_string(), "no route from 'b' to 'a', error code: 3");

    let error = service.directions(create_request(0, 2, first, second)).await.unwrap_err();
    assert_eq!(error.to_string(), "routing matrix has no entry for 0 -> 2");
}

parameterized_test! {can_validate_routing_matrix, (distances, durations, error_codes, is_ok), {
    assert_eq!(MatrixDirections::new(2, distances, durations, error_codes).is_ok(), is_ok);
}}

can_validate_routing_matrix! {
    case01_valid: (vec![0., 1., 1., 0.], vec![0., 1., 1., 0.], None, true),
    case02_short_distances: (vec![0., 1., 1.], vec![0., 1., 1., 0.], None, false),
    case03_short_durations: (vec![0., 1., 1., 0.], vec![0.], None, false),
    case04_short_codes: (vec![0., 1., 1., 0.], vec![0., 1., 1., 0.], Some(vec![0]), false),
    case05_negative: (vec![0., -1., 1., 0.], vec![0., 1., 1., 0.], None, false),
}
