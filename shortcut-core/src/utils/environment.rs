use super::*;
use std::sync::Arc;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random + Send + Sync>,

    /// An external quota which stops evolution when reached, e.g. interruption by user.
    pub quota: Option<Arc<dyn Quota + Send + Sync>>,

    /// Amount of threads used to evaluate a population. Rayon's default is used when not set.
    pub parallelism: Option<usize>,
}

impl Environment {
    /// Creates an instance of `Environment` with a repeatable random generator.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { random: Arc::new(RepeatableRandom::new(seed)), ..Self::default() }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self { random: Arc::new(DefaultRandom::default()), quota: None, parallelism: None }
    }
}
