#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;
use som_cli::extensions::generate::{DataShape, generate_points};
use som_cli::extensions::import::write_csv_points;

const SHAPE_ARG_NAME: &str = "SHAPE";
const SIZE_ARG_NAME: &str = "size";
const SEED_ARG_NAME: &str = "seed";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Generates a dataset of 2-dimensional points in csv format")
        .arg(
            Arg::new(SHAPE_ARG_NAME)
                .help("Specifies a shape of generated data")
                .required(true)
                .value_parser(["square", "ring", "blobs"])
                .index(1),
        )
        .arg(
            Arg::new(SIZE_ARG_NAME)
                .help("Amount of generated points")
                .short('s')
                .long(SIZE_ARG_NAME)
                .required(true),
        )
        .arg(get_seed_arg(SEED_ARG_NAME))
        .arg(get_out_result_arg(OUT_RESULT_ARG_NAME, "Specifies path to the file for generated data output"))
}

pub fn run_generate(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let shape = matches
        .get_one::<String>(SHAPE_ARG_NAME)
        .ok_or_else(|| "shape is not specified".to_string())
        .and_then(|shape| DataShape::from_str(shape))?;
    let size = parse_int_value::<usize>(matches, SIZE_ARG_NAME, "data size")?
        .ok_or_else(|| "data size is not specified".to_string())?;
    let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "random seed")?;

    let points = generate_points(shape, size, seed).map_err(|err| format!("cannot generate data: '{err}'"))?;

    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    write_csv_points(out_writer_func(out_result), points.as_slice())
        .map_err(|err| format!("cannot write data: '{err}'"))
}
