//! A command line interface to train and render Self-Organizing Maps.

mod commands;

use crate::commands::generate::run_generate;
use crate::commands::train::run_train;
use crate::commands::{create_write_buffer, get_app};
use std::process;

fn main() {
    let matches = get_app().get_matches();

    let result = match matches.subcommand() {
        Some(("train", train_matches)) => run_train(train_matches, create_write_buffer),
        Some(("generate", generate_matches)) => run_generate(generate_matches, create_write_buffer),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
