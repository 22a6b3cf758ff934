#[cfg(test)]
#[path = "../../tests/unit/evolution/selection_test.rs"]
mod selection_test;

use super::{Individual, RankedPopulation};
use crate::utils::Random;

/// Selects a parent using fitness proportionate (roulette wheel) selection.
///
/// Individuals are scanned from the fittest one while accumulating their fitness share; the
/// first one whose cumulative share reaches a random threshold is selected. The last scanned
/// individual is returned when rounding leaves the cumulative sum just under the threshold.
/// When the population has no positive fitness, a parent is picked uniformly.
pub fn select_parent<'a>(population: &'a RankedPopulation, random: &(dyn Random + Send + Sync)) -> &'a Individual {
    let individuals = population.individuals();
    assert!(!individuals.is_empty(), "cannot select a parent from an empty population");

    let last = &individuals[individuals.len() - 1];

    let Some(total_fitness) = population.total_fitness().filter(|&total| total > 0.) else {
        return &individuals[random.uniform_int(0, individuals.len() as i32 - 1) as usize];
    };

    let threshold = random.uniform_real(0., 1.);
    let mut cumulative = 0.;

    individuals
        .iter()
        .find(|individual| {
            cumulative += population.fitness(individual).unwrap_or(0.) / total_fitness;
            cumulative >= threshold
        })
        .unwrap_or(last)
}
