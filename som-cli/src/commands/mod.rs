use clap::{Arg, ArgMatches, Command};

pub mod generate;
pub mod train;

use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::str::FromStr;

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

fn parse_float_value<T: FromStr<Err = std::num::ParseFloatError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get float value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn get_seed_arg(name: &'static str) -> Arg {
    Arg::new(name).help("Specifies a random seed to make the run repeatable").long(name).required(false)
}

fn get_out_result_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).help(help).short('o').long(name).required(false)
}

/// Creates the top level command with all subcommands.
pub fn get_app() -> Command {
    Command::new("Self-Organizing Map")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to train and render Self-Organizing Maps")
        .subcommand_required(true)
        .subcommand(train::get_train_app())
        .subcommand(generate::get_generate_app())
}
