//! Algorithm configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use serde::Deserialize;
use shortcut_core::evolution::{EvolutionConfigBuilder, InfoLogger, TelemetryMode};
use shortcut_core::utils::{DefaultRandom, Environment, Quota, RepeatableRandom};
use std::io::{BufReader, Read};
use std::sync::Arc;

/// An algorithm configuration.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct Config {
    /// Specifies evolution configuration.
    pub evolution: Option<EvolutionConfig>,
    /// Specifies algorithm termination configuration.
    pub termination: Option<TerminationConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
    /// Specifies environment configuration.
    pub environment: Option<EnvironmentConfig>,
}

/// An evolution configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionConfig {
    /// Amount of tours in each generation. Default is 750.
    pub population_size: Option<usize>,
    /// Probability to mutate a child. Default is 0.1.
    pub mutation_probability: Option<f64>,
}

/// A termination configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    /// Max amount of generations. Default is 3 when no time limit is set.
    pub max_generations: Option<usize>,
    /// Max running time in seconds.
    pub max_time: Option<usize>,
}

/// A telemetry configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct TelemetryConfig {
    /// Logging configuration.
    pub logging: Option<LoggingConfig>,
    /// Metrics configuration.
    pub metrics: Option<MetricsConfig>,
}

/// A logging configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled.
    pub enabled: bool,
    /// Specifies how often best tour is logged. Default is every generation.
    pub log_best: Option<usize>,
}

/// A metrics configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MetricsConfig {
    /// Specifies whether metrics collection is enabled.
    pub enabled: bool,
    /// Specifies how often best tour is tracked. Default is every generation.
    pub track_best: Option<usize>,
}

/// An environment configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentConfig {
    /// A random seed for reproducible runs.
    pub seed: Option<u64>,
    /// Amount of threads used to evaluate tours. Default is amount of cpus.
    pub parallelism: Option<usize>,
}

const LOG_BEST: usize = 1;
const TRACK_BEST: usize = 1;

/// Creates a logger which writes to stdout.
pub fn create_stdout_logger() -> InfoLogger {
    Arc::new(|msg: &str| println!("{msg}"))
}

fn configure_from_evolution(
    mut builder: EvolutionConfigBuilder,
    evolution_config: &Option<EvolutionConfig>,
) -> Result<EvolutionConfigBuilder, String> {
    if let Some(config) = evolution_config {
        if let Some(population_size) = config.population_size {
            builder = builder.with_population_size(population_size);
        }

        if let Some(mutation_probability) = config.mutation_probability {
            builder = builder.with_mutation_probability(mutation_probability);
        }
    }

    Ok(builder)
}

fn configure_from_termination(
    mut builder: EvolutionConfigBuilder,
    termination_config: &Option<TerminationConfig>,
) -> Result<EvolutionConfigBuilder, String> {
    if let Some(config) = termination_config {
        builder = builder.with_max_generations(config.max_generations).with_max_time(config.max_time);
    }

    Ok(builder)
}

fn configure_from_telemetry(
    builder: EvolutionConfigBuilder,
    telemetry_config: &Option<TelemetryConfig>,
) -> Result<EvolutionConfigBuilder, String> {
    let create_metrics =
        |track_best: &Option<usize>| TelemetryMode::OnlyMetrics { track_best: track_best.unwrap_or(TRACK_BEST) };

    let create_logging = |log_best: &Option<usize>| TelemetryMode::OnlyLogging {
        logger: create_stdout_logger(),
        log_best: log_best.unwrap_or(LOG_BEST),
    };

    let telemetry_mode = match telemetry_config.as_ref().map(|t| (&t.logging, &t.metrics)) {
        Some((None, Some(MetricsConfig { enabled, track_best }))) if *enabled => create_metrics(track_best),
        Some((Some(LoggingConfig { enabled, log_best }), None)) if *enabled => create_logging(log_best),
        Some((
            Some(LoggingConfig { enabled: logging_enabled, log_best }),
            Some(MetricsConfig { enabled: metrics_enabled, track_best }),
        )) => match (logging_enabled, metrics_enabled) {
            (true, true) => TelemetryMode::All {
                logger: create_stdout_logger(),
                log_best: log_best.unwrap_or(LOG_BEST),
                track_best: track_best.unwrap_or(TRACK_BEST),
            },
            (true, false) => create_logging(log_best),
            (false, true) => create_metrics(track_best),
            _ => TelemetryMode::None,
        },
        _ => TelemetryMode::None,
    };

    Ok(builder.with_telemetry_mode(telemetry_mode))
}

/// Creates an environment: a seed gives a repeatable random, parallelism is limited by the
/// amount of available cpus.
pub fn create_environment(
    environment_config: &Option<EnvironmentConfig>,
    seed: Option<u64>,
    quota: Option<Arc<dyn Quota + Send + Sync>>,
) -> Result<Environment, String> {
    let seed = seed.or_else(|| environment_config.as_ref().and_then(|config| config.seed));
    let parallelism = environment_config.as_ref().and_then(|config| config.parallelism);

    if parallelism == Some(0) {
        return Err("parallelism must be positive".to_string());
    }

    Ok(Environment {
        random: match seed {
            Some(seed) => Arc::new(RepeatableRandom::new(seed)),
            None => Arc::new(DefaultRandom::default()),
        },
        quota,
        parallelism: parallelism.map(|parallelism| parallelism.min(num_cpus::get())),
    })
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates an evolution config builder from config. Environment is not set.
pub fn create_builder_from_config(config: &Config) -> Result<EvolutionConfigBuilder, String> {
    let mut builder = EvolutionConfigBuilder::default();

    builder = configure_from_telemetry(builder, &config.telemetry)?;
    builder = configure_from_evolution(builder, &config.evolution)?;
    builder = configure_from_termination(builder, &config.termination)?;

    Ok(builder)
}
