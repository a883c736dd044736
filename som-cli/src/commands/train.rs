#[cfg(test)]
#[path = "../../tests/unit/commands/train_test.rs"]
mod train_test;

use super::*;
use som_cli::extensions::generate::{DataShape, generate_points};
use som_cli::extensions::import::read_csv_points;
use som_cli::extensions::plots::{MapDrawConfig, draw_map_svg, get_caption};
use som_cli::extensions::train::*;
use som_core::prelude::*;
use std::io::BufReader;
use std::sync::Arc;

const DATA_ARG_NAME: &str = "data";
const SHAPE_ARG_NAME: &str = "shape";
const DATA_SIZE_ARG_NAME: &str = "data-size";
const GRID_SIZE_ARG_NAME: &str = "grid-size";
const ITERATIONS_ARG_NAME: &str = "iterations";
const LEARNING_RATE_ARG_NAME: &str = "learning-rate";
const RADIUS_ARG_NAME: &str = "radius";
const SEED_ARG_NAME: &str = "seed";
const LOG_ARG_NAME: &str = "log";
const PROGRESS_PERIOD_ARG_NAME: &str = "progress-period";
const MAX_TIME_ARG_NAME: &str = "max-time";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const PLOT_ARG_NAME: &str = "plot";
const PLOT_INITIAL_ARG_NAME: &str = "plot-initial";

const DEFAULT_DATA_SIZE: usize = 4000;
const PLOT_SIZE: u32 = 800;

pub fn get_train_app() -> Command {
    Command::new("train")
        .about("Trains a Self-Organizing Map on a set of points")
        .arg(
            Arg::new(DATA_ARG_NAME)
                .help("Specifies path to the csv file with points, one point per row")
                .short('d')
                .long(DATA_ARG_NAME)
                .required(false)
                .conflicts_with_all([SHAPE_ARG_NAME, DATA_SIZE_ARG_NAME]),
        )
        .arg(
            Arg::new(SHAPE_ARG_NAME)
                .help("Specifies a shape of generated points when no data file is given")
                .long(SHAPE_ARG_NAME)
                .required(false)
                .value_parser(["square", "ring", "blobs"]),
        )
        .arg(
            Arg::new(DATA_SIZE_ARG_NAME)
                .help("Amount of generated points when no data file is given")
                .long(DATA_SIZE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(GRID_SIZE_ARG_NAME)
                .help("Specifies side size of the square grid")
                .short('m')
                .long(GRID_SIZE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ITERATIONS_ARG_NAME)
                .help("Specifies total amount of iterations")
                .short('t')
                .long(ITERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LEARNING_RATE_ARG_NAME)
                .help("Specifies initial learning rate")
                .short('a')
                .long(LEARNING_RATE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RADIUS_ARG_NAME)
                .help("Specifies initial neighbourhood radius")
                .short('r')
                .long(RADIUS_ARG_NAME)
                .required(false),
        )
        .arg(get_seed_arg(SEED_ARG_NAME))
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether training progress should be logged to stderr")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new(PROGRESS_PERIOD_ARG_NAME)
                .help("Specifies how often progress is reported, zero disables it")
                .long(PROGRESS_PERIOD_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MAX_TIME_ARG_NAME)
                .help("Specifies max training time in seconds")
                .long(MAX_TIME_ARG_NAME)
                .required(false),
        )
        .arg(get_out_result_arg(OUT_RESULT_ARG_NAME, "Specifies path to the file for json report output"))
        .arg(
            Arg::new(PLOT_ARG_NAME)
                .help("Specifies path to the svg file with rendered trained map")
                .short('p')
                .long(PLOT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(PLOT_INITIAL_ARG_NAME)
                .help("Specifies path to the svg file with rendered map before training")
                .long(PLOT_INITIAL_ARG_NAME)
                .required(false),
        )
}

pub fn run_train(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let settings = get_training_settings(matches)?;
    let points = get_points(matches, settings.seed)?;
    let environment = get_environment(matches, settings.seed)?;

    let output = train_map(points.as_slice(), &settings, &environment)?;
    if output.result.is_interrupted {
        (environment.logger)(format!("training stopped early after {} iterations", output.result.iterations).as_str());
    }

    let caption = get_caption(settings.grid_size, settings.learning_rate, settings.radius, settings.iterations);
    if let Some(path) = matches.get_one::<String>(PLOT_INITIAL_ARG_NAME) {
        write_plot(path, &output.initial_state, points.as_slice(), caption.clone())?;
    }

    if let Some(path) = matches.get_one::<String>(PLOT_ARG_NAME) {
        write_plot(path, &get_map_state(&output.map), points.as_slice(), caption)?;
    }

    let report = TrainingReport::new(&output, &settings, points.len());
    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    serialize_training_report(out_writer_func(out_result), &report)
}

fn get_training_settings(matches: &ArgMatches) -> Result<TrainingSettings, String> {
    let defaults = TrainingSettings::default();

    Ok(TrainingSettings {
        grid_size: parse_int_value(matches, GRID_SIZE_ARG_NAME, "grid size")?.unwrap_or(defaults.grid_size),
        iterations: parse_int_value(matches, ITERATIONS_ARG_NAME, "iterations")?.unwrap_or(defaults.iterations),
        learning_rate: parse_float_value(matches, LEARNING_RATE_ARG_NAME, "learning rate")?
            .unwrap_or(defaults.learning_rate),
        radius: parse_float_value(matches, RADIUS_ARG_NAME, "radius")?.unwrap_or(defaults.radius),
        progress_period: parse_int_value(matches, PROGRESS_PERIOD_ARG_NAME, "progress period")?
            .unwrap_or(defaults.progress_period),
        seed: parse_int_value(matches, SEED_ARG_NAME, "random seed")?,
    })
}

fn get_points(matches: &ArgMatches, seed: Option<u64>) -> Result<Vec<Vec<Float>>, String> {
    if let Some(path) = matches.get_one::<String>(DATA_ARG_NAME) {
        let reader = BufReader::new(open_file(path, "data")?);
        return read_csv_points(reader).map_err(|err| format!("cannot read data: '{err}'"));
    }

    let shape =
        matches.get_one::<String>(SHAPE_ARG_NAME).map_or(Ok(DataShape::Square), |shape| DataShape::from_str(shape))?;
    let size = parse_int_value(matches, DATA_SIZE_ARG_NAME, "data size")?.unwrap_or(DEFAULT_DATA_SIZE);

    generate_points(shape, size, seed).map_err(|err| format!("cannot generate data: '{err}'"))
}

fn get_environment(matches: &ArgMatches, seed: Option<u64>) -> Result<Environment, String> {
    let max_time = parse_int_value::<usize>(matches, MAX_TIME_ARG_NAME, "max time")?;
    let is_logging = matches.get_flag(LOG_ARG_NAME);

    let random: Arc<dyn Random> = Arc::new(seed.map_or_else(DefaultRandom::default, DefaultRandom::new_repeatable));
    let logger: InfoLogger = if is_logging { Arc::new(|msg: &str| eprintln!("{msg}")) } else { Arc::new(|_: &str| {}) };

    Ok(Environment::new(random, Some(create_interruption_quota(max_time)), logger))
}

fn write_plot(path: &str, state: &MapState, data: &[Vec<Float>], caption: String) -> Result<(), String> {
    let svg = draw_map_svg(&MapDrawConfig { caption, state, data, chart_size: PLOT_SIZE })
        .map_err(|err| format!("cannot render map: '{err}'"))?;

    let mut file = create_file(path, "plot")?;
    file.write_all(svg.as_bytes()).map_err(|err| format!("cannot write plot file '{path}': '{err}'"))
}
