#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;

use clap::{Arg, ArgAction, Command};
use shortcut_cli::extensions::solve::config::*;
use shortcut_cli::extensions::solve::formats::{DEFAULT_MAX_STOPS, check_stops, read_matrix, read_problem, write_route};
use shortcut_cli::extensions::solve::interruption::create_interruption_quota;
use shortcut_cli::plan_route;
use shortcut_core::evolution::TelemetryMode;
use shortcut_core::routing::{ApproxDirections, DEFAULT_APPROX_SPEED, DirectionsService};
use std::io::BufReader;
use std::sync::Arc;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const MATRIX_ARG_NAME: &str = "matrix";
const CONFIG_ARG_NAME: &str = "config";
const GENERATIONS_ARG_NAME: &str = "max-generations";
const TIME_ARG_NAME: &str = "max-time";
const POPULATION_ARG_NAME: &str = "population-size";
const MUTATION_ARG_NAME: &str = "mutation-probability";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const SPEED_ARG_NAME: &str = "speed";
const MAX_STOPS_ARG_NAME: &str = "max-stops";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const LOG_ARG_NAME: &str = "log";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Plans a short round trip which starts and ends at the first stop")
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(1))
        .arg(
            Arg::new(MATRIX_ARG_NAME)
                .help("Specifies path to file with routing matrix")
                .short('m')
                .long(MATRIX_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(GENERATIONS_ARG_NAME)
                .help("Specifies maximum number of generations")
                .short('n')
                .long(GENERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time algorithm run in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(POPULATION_ARG_NAME)
                .help("Specifies amount of tours in each generation")
                .short('p')
                .long(POPULATION_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MUTATION_ARG_NAME)
                .help("Specifies probability to mutate a child tour")
                .long(MUTATION_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies randomization seed to avoid stochastic behavior")
                .short('s')
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SPEED_ARG_NAME)
                .help("Specifies speed in meters per second used to approximate travel without routing matrix")
                .long(SPEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MAX_STOPS_ARG_NAME)
                .help("Specifies max amount of stops besides the start, zero disables the check")
                .long(MAX_STOPS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
}

/// Runs solve command.
pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    // required
    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem file is not specified")?;
    let stops = read_problem(BufReader::new(open_file(problem_path, "problem")?))
        .map_err(|err| format!("cannot read problem from '{problem_path}': {err}"))?;

    // optional
    let max_stops = parse_int_value::<usize>(matches, MAX_STOPS_ARG_NAME, "max stops")?.unwrap_or(DEFAULT_MAX_STOPS);
    let max_generations = parse_int_value::<usize>(matches, GENERATIONS_ARG_NAME, "max generations")?;
    let max_time = parse_int_value::<usize>(matches, TIME_ARG_NAME, "max time")?;
    let population_size = parse_int_value::<usize>(matches, POPULATION_ARG_NAME, "population size")?;
    let mutation_probability = parse_float_value::<f64>(matches, MUTATION_ARG_NAME, "mutation probability")?;
    let seed = parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "seed")?;
    let speed = parse_float_value::<f64>(matches, SPEED_ARG_NAME, "speed")?;
    let is_logging = matches.get_flag(LOG_ARG_NAME);

    check_stops(stops.as_slice(), max_stops)?;

    let service: Arc<dyn DirectionsService> = match matches.get_one::<String>(MATRIX_ARG_NAME) {
        Some(path) => Arc::new(read_matrix(BufReader::new(open_file(path, "routing matrix")?), stops.len())?),
        None => {
            Arc::new(ApproxDirections::new(speed.unwrap_or(DEFAULT_APPROX_SPEED)).map_err(|err| err.to_string())?)
        }
    };

    let config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?))?,
        None => Config::default(),
    };

    let mut builder = create_builder_from_config(&config)?;
    if let Some(population_size) = population_size {
        builder = builder.with_population_size(population_size);
    }
    if let Some(mutation_probability) = mutation_probability {
        builder = builder.with_mutation_probability(mutation_probability);
    }
    if max_generations.is_some() {
        builder = builder.with_max_generations(max_generations);
    }
    if max_time.is_some() {
        builder = builder.with_max_time(max_time);
    }
    if is_logging {
        let logging = TelemetryMode::OnlyLogging { logger: create_stdout_logger(), log_best: 1 };
        builder = builder.with_telemetry_mode(logging);
    }

    let environment = create_environment(&config.environment, seed, Some(create_interruption_quota()))?;
    let evolution_config = builder.with_environment(Arc::new(environment)).build().map_err(|err| err.to_string())?;

    let planned = plan_route(stops, service, evolution_config)?;

    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    write_route(out_writer_func(out_result), &planned)
}
