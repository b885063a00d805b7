#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, Command};
use std::io::{BufReader, BufWriter};
use std::sync::Arc;
use vrp_tailor_cli::extensions::solve::config::{Config, read_config_file};
use vrp_tailor_cli::extensions::solve::interruption::create_interruption;
use vrp_tailor_cli::extensions::solve::matrix::read_cost_matrix;
use vrp_tailor_core::format::{JsonSolutionWriter, get_solution_report, get_solution_summary, read_problem};
use vrp_tailor_core::models::problem::create_transport_cost;
use vrp_tailor_core::prelude::*;
use vrp_tailor_core::solver::objectives::create_objective;
use vrp_tailor_core::solver::termination::*;
use vrp_tailor_core::solver::tracking::ProgressRecorder;
use vrp_tailor_core::utils::Parallelism;

pub const TIME_MATRIX_ARG_NAME: &str = "time-matrix";
pub const DISTANCE_MATRIX_ARG_NAME: &str = "distance-matrix";
pub const INSTANCE_ARG_NAME: &str = "instance";
pub const ALGORITHM_ARG_NAME: &str = "algorithm";
pub const SOLUTION_ARG_NAME: &str = "solution";
pub const MINMAX_ARG_NAME: &str = "minmax";
pub const TIME_ARG_NAME: &str = "max-time";
pub const NO_IMPROVEMENT_ARG_NAME: &str = "no-improvement-iterations";
pub const STABLE_ITERATIONS_ARG_NAME: &str = "stable-iterations";
pub const STABLE_COEF_ARG_NAME: &str = "stable-coef";
pub const THREADS_ARG_NAME: &str = "threads";
pub const NEARBY_ARG_NAME: &str = "nearby";
pub const DEBUG_ARG_NAME: &str = "debug";
pub const DEBUG_GRAPH_ARG_NAME: &str = "debug-graph";
pub const RANDOM_SEED_ARG_NAME: &str = "seed";

const DEFAULT_ALGORITHM_PATH: &str = "config.json";
const DEFAULT_SOLUTION_PATH: &str = "solution.json";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves vehicle routing problem defined by json instance and cost matrices")
        .arg(
            Arg::new(TIME_MATRIX_ARG_NAME)
                .help("Specifies path to the time matrix file")
                .long(TIME_MATRIX_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(DISTANCE_MATRIX_ARG_NAME)
                .help("Specifies path to the distance matrix file, required unless time matrix is specified")
                .long(DISTANCE_MATRIX_ARG_NAME)
                .required_unless_present(TIME_MATRIX_ARG_NAME),
        )
        .arg(
            Arg::new(INSTANCE_ARG_NAME)
                .help("Specifies path to the problem instance file")
                .short('i')
                .long(INSTANCE_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(ALGORITHM_ARG_NAME)
                .help("Specifies path to the algorithm config file, defaults are used if the default file is missing")
                .short('a')
                .long(ALGORITHM_ARG_NAME)
                .default_value(DEFAULT_ALGORITHM_PATH),
        )
        .arg(
            Arg::new(SOLUTION_ARG_NAME)
                .help("Specifies path to the solution output file")
                .short('o')
                .long(SOLUTION_ARG_NAME)
                .default_value(DEFAULT_SOLUTION_PATH),
        )
        .arg(
            Arg::new(MINMAX_ARG_NAME)
                .help("Minimizes the cost of the most expensive route instead of the total cost")
                .long(MINMAX_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time algorithm run in milliseconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(NO_IMPROVEMENT_ARG_NAME)
                .help("Specifies max amount of consecutive iterations without improvement")
                .short('n')
                .long(NO_IMPROVEMENT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(STABLE_ITERATIONS_ARG_NAME)
                .help("Specifies sample size of coefficient of variation termination criteria")
                .long(STABLE_ITERATIONS_ARG_NAME)
                .requires(STABLE_COEF_ARG_NAME),
        )
        .arg(
            Arg::new(STABLE_COEF_ARG_NAME)
                .help("Specifies threshold of coefficient of variation termination criteria")
                .long(STABLE_COEF_ARG_NAME)
                .requires(STABLE_ITERATIONS_ARG_NAME),
        )
        .arg(
            Arg::new(THREADS_ARG_NAME)
                .help("Specifies amount of worker threads")
                .long(THREADS_ARG_NAME)
                .default_value("1"),
        )
        .arg(
            Arg::new(NEARBY_ARG_NAME)
                .help("Enables locality smoothing of transport costs")
                .long(NEARBY_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(DEBUG_ARG_NAME)
                .help("Prints the best solution summary and activity schedule when search is finished")
                .short('d')
                .long(DEBUG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(DEBUG_GRAPH_ARG_NAME)
                .help("Specifies path to csv file with search progress")
                .long(DEBUG_GRAPH_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies random seed, overrides the one from algorithm config")
                .short('s')
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
}

/// Termination options collected from command line.
struct TerminationArgs {
    max_time: Option<u64>,
    no_improvement: Option<usize>,
    variation: Option<(usize, f64)>,
}

pub fn run_solve(matches: &ArgMatches) -> Result<(), String> {
    let max_time = parse_int_value::<u64>(matches, TIME_ARG_NAME, "max time")?;
    let no_improvement = parse_int_value::<usize>(matches, NO_IMPROVEMENT_ARG_NAME, "no improvement iterations")?;
    let stable_iterations = parse_int_value::<usize>(matches, STABLE_ITERATIONS_ARG_NAME, "stable iterations")?;
    let stable_coef = parse_float_value::<f64>(matches, STABLE_COEF_ARG_NAME, "stable coefficient")?;
    let threads = parse_int_value::<usize>(matches, THREADS_ARG_NAME, "threads")?.unwrap_or(1);
    let seed = parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "random seed")?;

    if stable_iterations == Some(0) {
        return Err("stable iterations should be greater than zero".to_string());
    }

    let terminations = TerminationArgs {
        max_time,
        no_improvement,
        variation: stable_iterations.zip(stable_coef),
    };

    let algorithm_path = get_path_value(matches, ALGORITHM_ARG_NAME, DEFAULT_ALGORITHM_PATH);
    let is_explicit_config = matches.value_source(ALGORITHM_ARG_NAME) != Some(ValueSource::DefaultValue);
    let config = read_config_file(algorithm_path, is_explicit_config)?;

    let problem = Arc::new(read_problem_from_args(matches, &config)?);
    let environment = Arc::new(create_environment(threads, seed.or(config.get_seed()))?);

    let solution_path = get_path_value(matches, SOLUTION_ARG_NAME, DEFAULT_SOLUTION_PATH);
    let debug_graph =
        matches.get_one::<String>(DEBUG_GRAPH_ARG_NAME).map(|path| create_file(path, "debug graph")).transpose()?;

    let kind = if matches.get_flag(MINMAX_ARG_NAME) { ObjectiveKind::Bottleneck } else { ObjectiveKind::Sum };

    let mut state = BestSolutionState::default();
    let outcome = {
        let writer = JsonSolutionWriter::new(solution_path);
        let tracker = BestSolutionTracker::new(&mut state, writer, environment.logger.clone());

        let mut builder = SolverBuilder::new(problem.clone(), environment.clone())
            .with_objective(create_objective(kind, config.get_penalty()))
            .with_search(Box::new(config.create_search()))
            .add_listener(Box::new(tracker));

        if let Some(file) = debug_graph {
            builder = builder.add_listener(Box::new(ProgressRecorder::new(BufWriter::new(file))));
        }

        create_terminations(&config, &terminations)
            .into_iter()
            .fold(builder, |builder, termination| builder.add_termination(termination))
            .build()
            .solve()
            .map_err(|err| format!("cannot solve problem: '{err}'"))?
    };

    JsonSolutionWriter::new(solution_path)
        .write(problem.as_ref(), &outcome.solution)
        .map_err(|err| format!("cannot write final solution: '{err}'"))?;

    if matches.get_flag(DEBUG_ARG_NAME) {
        (environment.logger)(&get_solution_summary(&outcome.solution));
        (environment.logger)(&get_solution_report(&outcome.solution));
    }

    Ok(())
}

fn read_problem_from_args(matches: &ArgMatches, config: &Config) -> Result<Problem, String> {
    let open_matrix = |arg_name: &str, description: &str| {
        matches.get_one::<String>(arg_name).map(|path| open_file(path, description).map(BufReader::new)).transpose()
    };

    let distances = open_matrix(DISTANCE_MATRIX_ARG_NAME, "distance matrix")?;
    let durations = open_matrix(TIME_MATRIX_ARG_NAME, "time matrix")?;
    let matrix = read_cost_matrix(distances, durations).map_err(|err| format!("cannot read cost matrix: '{err}'"))?;

    let smoothing_factor = matches.get_flag(NEARBY_ARG_NAME).then(|| config.get_smoothing_factor());
    let transport = create_transport_cost(Arc::new(matrix), smoothing_factor);

    let instance_path =
        matches.get_one::<String>(INSTANCE_ARG_NAME).ok_or_else(|| "instance path is not specified".to_string())?;
    let instance = open_file(instance_path, "instance")?;

    read_problem(BufReader::new(instance), transport).map_err(|err| format!("cannot read instance: '{err}'"))
}

fn get_path_value<'a>(matches: &'a ArgMatches, arg_name: &str, default: &'a str) -> &'a str {
    matches.get_one::<String>(arg_name).map_or(default, |path| path.as_str())
}

fn create_environment(threads: usize, seed: Option<u64>) -> Result<Environment, String> {
    let random: Arc<dyn Random + Send + Sync> = match seed {
        Some(seed) => Arc::new(DefaultRandom::new_repeatable(seed)),
        None => Arc::new(DefaultRandom::default()),
    };
    let parallelism = Parallelism::new(threads).map_err(|err| err.to_string())?;

    Ok(Environment::new(random, parallelism, Arc::new(|msg| println!("{msg}"))))
}

fn create_terminations(config: &Config, args: &TerminationArgs) -> Vec<Box<dyn Termination>> {
    let mut terminations: Vec<Box<dyn Termination>> =
        vec![Box::new(MaxIterations::new(config.get_max_iterations())), Box::new(create_interruption())];

    if let Some(max_time) = args.max_time {
        terminations.push(Box::new(MaxTime::new(max_time)));
    }

    if let Some(limit) = args.no_improvement {
        terminations.push(Box::new(MaxIterationsWithoutImprovement::new(limit)));
    }

    if let Some((sample, threshold)) = args.variation {
        terminations.push(Box::new(MinVariation::new(sample, threshold)));
    }

    terminations
}
