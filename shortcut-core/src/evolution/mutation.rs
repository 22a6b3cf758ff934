#[cfg(test)]
#[path = "../../tests/unit/evolution/mutation_test.rs"]
mod mutation_test;

use crate::models::Tour;
use crate::utils::Random;

/// With given probability, swaps two uniformly chosen positions of the tour. Positions may
/// coincide, in which case the tour stays as is.
pub fn swap_mutation(tour: Tour, probability: f64, random: &(dyn Random + Send + Sync)) -> Tour {
    if tour.is_empty() || !random.is_hit(probability) {
        return tour;
    }

    let last = tour.len() as i32 - 1;
    let first_idx = random.uniform_int(0, last) as usize;
    let second_idx = random.uniform_int(0, last) as usize;

    let mut order = tour.into_order();
    order.swap(first_idx, second_idx);

    Tour::new(order)
}
