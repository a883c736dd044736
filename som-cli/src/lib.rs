//! A library part of the command line interface: data generation and import, training
//! orchestration, run reports and map rendering.

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

pub mod extensions;
