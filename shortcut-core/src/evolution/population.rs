#[cfg(test)]
#[path = "../../tests/unit/evolution/population_test.rs"]
mod population_test;

use crate::models::{DistanceMatrix, Location, Tour, relative_fitness};
use crate::utils::{Random, ThreadPool, compare_floats, parallel_collect, shuffle};

/// A tour together with its cycle length.
#[derive(Clone, Debug)]
pub struct Individual {
    /// A visiting order.
    pub tour: Tour,
    /// A cycle length of the tour.
    pub cycle_length: f64,
}

/// A fixed-size set of tours which forms one generation.
pub struct Population {
    members: Vec<Tour>,
}

impl Population {
    /// Creates a new instance of `Population`.
    pub fn new(members: Vec<Tour>) -> Self {
        Self { members }
    }

    /// Creates a population of `size` randomly shuffled tours over given locations.
    pub fn new_random(size: usize, locations: &[Location], random: &(dyn Random + Send + Sync)) -> Self {
        let members = (0..size)
            .map(|_| {
                let mut order = locations.to_vec();
                shuffle(order.as_mut_slice(), random);
                Tour::new(order)
            })
            .collect();

        Self { members }
    }

    #[cfg(test)]
    pub(crate) fn size(&self) -> usize {
        self.members.len()
    }

    #[cfg(test)]
    pub(crate) fn members(&self) -> &[Tour] {
        self.members.as_slice()
    }

    /// Evaluates cycle lengths of all members, in parallel, and ranks them by fitness.
    pub fn rank(self, matrix: &DistanceMatrix, pool: Option<&ThreadPool>) -> RankedPopulation {
        let evaluate = || parallel_collect(self.members.as_slice(), |tour| tour.cycle_length(matrix));
        let cycle_lengths = match pool {
            Some(pool) => pool.execute(evaluate),
            None => evaluate(),
        };

        let mut individuals = self
            .members
            .into_iter()
            .zip(cycle_lengths)
            .map(|(tour, cycle_length)| Individual { tour, cycle_length })
            .collect::<Vec<_>>();

        // NOTE shorter cycle means higher fitness, sort is stable so ties keep their order
        individuals.sort_by(|a, b| compare_floats(a.cycle_length, b.cycle_length));

        let total_cost = individuals.iter().map(|individual| individual.cycle_length).sum::<f64>();
        let total_fitness = (total_cost > 0.).then(|| {
            individuals.iter().map(|individual| relative_fitness(individual.cycle_length, total_cost)).sum()
        });

        RankedPopulation { individuals, total_cost, total_fitness }
    }
}

/// An evaluated population, sorted by descending fitness.
pub struct RankedPopulation {
    individuals: Vec<Individual>,
    total_cost: f64,
    total_fitness: Option<f64>,
}

impl RankedPopulation {
    /// Returns individuals, the fittest first.
    pub fn individuals(&self) -> &[Individual] {
        self.individuals.as_slice()
    }

    /// Returns the fittest individual.
    pub fn best(&self) -> Option<&Individual> {
        self.individuals.first()
    }

    /// Returns population size.
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    /// Returns the sum of cycle lengths of all individuals.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Returns the mean cycle length.
    pub fn mean_cost(&self) -> f64 {
        if self.individuals.is_empty() { 0. } else { self.total_cost / self.individuals.len() as f64 }
    }

    /// Returns fitness of the individual within this population or `None` when the population
    /// has no cost at all (e.g. all travel costs are zero).
    pub fn fitness(&self, individual: &Individual) -> Option<f64> {
        (self.total_cost > 0.).then(|| relative_fitness(individual.cycle_length, self.total_cost))
    }

    /// Returns the sum of fitness values of all individuals, calculated once on ranking.
    pub fn total_fitness(&self) -> Option<f64> {
        self.total_fitness
    }
}
