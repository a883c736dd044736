//! Import and export of datasets.

mod csv;
pub use self::csv::*;
