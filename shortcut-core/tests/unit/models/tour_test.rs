use super::*;
use crate::helpers::models::*;

#[test]
fn can_calculate_cycle_length_of_three_locations() {
    let matrix = create_matrix(vec![vec![0., 2., 9.], vec![1., 0., 6.], vec![15., 7., 0.]]);

    // 0 -> 1 -> 2 -> 0
    assert_eq!(create_tour(&[0, 1, 2]).cycle_length(&matrix), 2. + 6. + 15.);
    // 0 -> 2 -> 1 -> 0
    assert_eq!(create_tour(&[0, 2, 1]).cycle_length(&matrix), 9. + 7. + 1.);
    // rotation does not change a cycle
    assert_eq!(create_tour(&[2, 1, 0]).cycle_length(&matrix), 7. + 1. + 9.);
}

parameterized_test! {can_calculate_cycle_length_of_square, (indices, expected), {
    let matrix = create_square_matrix();
    let actual = create_tour(&indices).cycle_length(&matrix);

    assert!((actual - expected).abs() < 1E-9);
}}

can_calculate_cycle_length_of_square! {
    case01_perimeter: (vec![0, 1, 2, 3], 4.),
    case02_rotated: (vec![2, 3, 0, 1], 4.),
    case03_crossed: (vec![0, 2, 1, 3], 2. + 2. * 2_f64.sqrt()),
    case04_single: (vec![0], 0.),
    case05_empty: (Vec::<usize>::new(), 0.),
}

#[test]
fn can_calculate_fitness_monotonically() {
    let matrix = create_square_matrix();
    let short = create_tour(&[0, 1, 2, 3]);
    let long = create_tour(&[0, 2, 1, 3]);
    let total_cost = short.cycle_length(&matrix) + long.cycle_length(&matrix);

    assert!(short.fitness(&matrix, total_cost) > long.fitness(&matrix, total_cost));
    assert_eq!(relative_fitness(1., 4.), 0.75);
}

#[test]
#[should_panic(expected = "fitness is undefined")]
fn can_reject_fitness_without_cost() {
    relative_fitness(0., 0.);
}

parameterized_test! {can_check_permutation, (indices, size, expected), {
    assert_eq!(create_tour(&indices).is_permutation_of(size), expected);
}}

can_check_permutation! {
    case01_valid: (vec![2, 0, 1], 3, true),
    case02_duplicate: (vec![0, 0, 1], 3, false),
    case03_missing: (vec![0, 1], 3, false),
    case04_out_of_range: (vec![0, 1, 3], 3, false),
    case05_empty: (Vec::<usize>::new(), 0, true),
}

#[test]
fn can_take_visiting_order() {
    let tour = create_tour(&[3, 1, 0, 2]);

    assert_eq!(tour.clone().into_order(), tour.order().to_vec());
    assert_eq!(tour.len(), 4);
    assert!(!tour.is_empty());
}
