#[cfg(test)]
#[path = "../../tests/unit/evolution/crossover_test.rs"]
mod crossover_test;

use crate::models::Tour;
use crate::utils::Random;
use rustc_hash::FxHashSet;

/// Produces a child from two parents using ordered crossover with a random cut index.
pub fn crossover(first: &Tour, second: &Tour, random: &(dyn Random + Send + Sync)) -> Tour {
    if first.is_empty() {
        return first.clone();
    }

    let cut = random.uniform_int(0, first.len() as i32 - 1) as usize;

    ordered_crossover(first, second, cut)
}

/// Produces a child which takes the first parent's order up to `cut` (exclusive) and fills the
/// rest by scanning the second parent cyclically from `cut`, skipping already taken locations.
pub fn ordered_crossover(first: &Tour, second: &Tour, cut: usize) -> Tour {
    let size = first.len();
    assert_eq!(size, second.len(), "parents must have the same length");
    assert!(cut <= size, "cut index is out of bounds");

    if size == 0 {
        return Tour::new(vec![]);
    }

    let mut taken = FxHashSet::default();
    let mut order = Vec::with_capacity(size);

    first.order()[..cut].iter().for_each(|&location| {
        taken.insert(location);
        order.push(location);
    });

    (0..size).map(|offset| second.order()[(cut + offset) % size]).for_each(|location| {
        if taken.insert(location) {
            order.push(location);
        }
    });

    assert_eq!(order.len(), size, "parents must be permutations of the same locations");

    Tour::new(order)
}
