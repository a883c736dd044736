//! Module provides various helper functionality.

pub mod generate;
pub mod import;
pub mod plots;
pub mod train;
