use super::*;
use std::io::Read;

const SQUARE_PROBLEM_PATH: &str = "../data/square.problem.json";
const SQUARE_MATRIX_PATH: &str = "../data/square.matrix.json";
const SQUARE_ERROR_MATRIX_PATH: &str = "../data/square.error.matrix.json";
const BERLIN_PROBLEM_PATH: &str = "../data/berlin.problem.json";
const TOO_MANY_PROBLEM_PATH: &str = "../data/too_many.problem.json";
const CONFIG_PATH: &str = "../data/config.full.json";

struct DummyWrite {}

impl Write for DummyWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn run_solve_with_out_writer(matches: &ArgMatches) -> Result<(), String> {
    run_solve(matches, |_| BufWriter::new(Box::new(DummyWrite {})))
}

fn get_matches(problem_path: &str, params: &[&str]) -> ArgMatches {
    let args = [&["solve", problem_path], params].concat();

    get_solve_app().try_get_matches_from(args).unwrap()
}

#[test]
fn can_solve_problem_with_approximate_directions() {
    let matches = get_matches(BERLIN_PROBLEM_PATH, &["--max-generations", "2", "--population-size", "20", "-s", "1"]);

    run_solve_with_out_writer(&matches).unwrap();
}

#[test]
fn can_solve_problem_with_routing_matrix_and_config() {
    let matches = get_matches(SQUARE_PROBLEM_PATH, &["--matrix", SQUARE_MATRIX_PATH, "--config", CONFIG_PATH]);

    run_solve_with_out_writer(&matches).unwrap();
}

#[test]
fn can_write_optimal_route_into_file() {
    let out_file = tempfile::NamedTempFile::new().unwrap();
    let out_path = out_file.path().to_str().unwrap().to_string();
    let params = [
        "--matrix",
        SQUARE_MATRIX_PATH,
        "--max-generations",
        "3",
        "--population-size",
        "50",
        "-s",
        "42",
        "--out-result",
        &out_path,
    ];
    let matches = get_matches(SQUARE_PROBLEM_PATH, &params);

    run_solve(&matches, create_write_buffer).unwrap();

    let mut content = String::new();
    File::open(out_file.path()).unwrap().read_to_string(&mut content).unwrap();
    let output: serde_json::Value = serde_json::from_str(&content).unwrap();
    let names = output["names"].as_array().unwrap();
    assert_eq!(names.len(), 5);
    assert_eq!(names.first(), Some(&serde_json::Value::from("Depot")));
    assert_eq!(names.last(), Some(&serde_json::Value::from("Depot")));
    assert_eq!(output["segments"].as_array().map(Vec::len), Some(4));
    assert_eq!(output["generations"].as_u64(), Some(3));
    assert_eq!(output["totalDistance"].as_f64(), Some(4000.));
}

#[test]
fn can_reject_problem_with_too_many_stops() {
    let matches = get_matches(TOO_MANY_PROBLEM_PATH, &["--max-generations", "1"]);

    let err = run_solve_with_out_writer(&matches).unwrap_err();

    assert_eq!(err, "too many stops: 6 besides the start, at most 5 allowed");
}

#[test]
fn can_override_max_stops() {
    let matches = get_matches(TOO_MANY_PROBLEM_PATH, &["--max-generations", "1", "-p", "10", "--max-stops", "6"]);

    run_solve_with_out_writer(&matches).unwrap();
}

#[test]
fn can_fail_on_lookup_error() {
    let matches = get_matches(SQUARE_PROBLEM_PATH, &["--matrix", SQUARE_ERROR_MATRIX_PATH]);

    let err = run_solve_with_out_writer(&matches).unwrap_err();

    assert!(err.contains("'North East' -> 'East'"), "unexpected error: {err}");
}

#[test]
fn can_reject_invalid_settings() {
    let cases: [&[&str]; 4] = [
        &["--max-generations", "0"],
        &["--mutation-probability", "1.5"],
        &["--population-size", "zero"],
        &["--speed", "0"],
    ];

    for params in cases {
        let matches = get_matches(SQUARE_PROBLEM_PATH, params);

        assert!(run_solve_with_out_writer(&matches).is_err(), "expected an error for {params:?}");
    }
}

#[test]
fn can_require_problem_path() {
    get_solve_app().try_get_matches_from(vec!["solve"]).unwrap_err();
}

#[test]
fn can_specify_log_setting() {
    let matches = get_matches(SQUARE_PROBLEM_PATH, &["--log"]);

    assert!(matches.get_flag(LOG_ARG_NAME));
}

#[test]
fn can_fail_on_missing_problem_file() {
    let matches = get_matches("../data/unknown.problem.json", &[]);

    let err = run_solve_with_out_writer(&matches).unwrap_err();

    assert!(err.starts_with("cannot open problem file"));
}
