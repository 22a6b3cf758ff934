use super::*;
use crate::evolution::Population;
use crate::helpers::models::*;
use std::sync::Mutex;

fn create_logger() -> (InfoLogger, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(vec![]));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |message: &str| messages.lock().unwrap().push(message.to_string()))
    };

    (logger, messages)
}

fn create_population() -> RankedPopulation {
    Population::new(vec![create_tour(&[0, 2, 1, 3]), create_tour(&[0, 1, 2, 3])]).rank(&create_square_matrix(), None)
}

fn run_telemetry(telemetry: &mut Telemetry, generations: usize) {
    let population = create_population();
    let mut statistics = EvolutionStatistics::default();

    telemetry.on_initial(&population, 4, Timer::start());
    (0..generations).for_each(|_| {
        statistics.generation += 1;
        let estimate = statistics.generation as f64 / generations as f64;
        telemetry.on_generation(&population, &statistics, estimate, Timer::start());
    });
    telemetry.on_result(&population, &statistics);
}

#[test]
fn can_log_evolution_progress() {
    let (logger, messages) = create_logger();
    let mut telemetry = Telemetry::new(TelemetryMode::OnlyLogging { logger, log_best: 2 });

    run_telemetry(&mut telemetry, 3);

    let messages = messages.lock().unwrap().clone();
    assert_eq!(messages.len(), 4);
    assert!(messages[0].contains("created initial population of 2 tours over 4 locations"));
    assert!(messages[1].contains("generation 2 took"));
    assert!(messages[1].contains("progress: 67%"));
    assert!(messages[1].contains("best cost: 4.000"));
    assert!(messages[2].contains("total generations: 3"));
    assert_eq!(messages[3], "\tbest cost: 4.000");
    assert!(telemetry.take_metrics().is_none());
}

#[test]
fn can_collect_metrics() {
    let mut telemetry = Telemetry::new(TelemetryMode::OnlyMetrics { track_best: 2 });

    run_telemetry(&mut telemetry, 3);

    let metrics = telemetry.take_metrics().unwrap();
    assert_eq!(metrics.generations, 3);
    // generation 2 is tracked regularly, generation 3 on result
    assert_eq!(metrics.evolution.iter().map(|generation| generation.number).collect::<Vec<_>>(), vec![2, 3]);
    assert_eq!(metrics.evolution[0].best_cost, 4.);
    assert!(metrics.evolution[0].mean_cost > 4.);
}

#[test]
fn can_log_and_collect_metrics() {
    let (logger, messages) = create_logger();
    let mut telemetry = Telemetry::new(TelemetryMode::All { logger, log_best: 1, track_best: 1 });

    run_telemetry(&mut telemetry, 2);

    assert_eq!(messages.lock().unwrap().len(), 5);
    assert_eq!(telemetry.take_metrics().unwrap().evolution.len(), 2);
}

#[test]
fn can_stay_silent_without_telemetry() {
    let mut telemetry = Telemetry::new(TelemetryMode::None);

    run_telemetry(&mut telemetry, 2);

    assert!(telemetry.take_metrics().is_none());
}
