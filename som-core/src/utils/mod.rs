//! This module contains helper functionality.

mod environment;
pub use self::environment::*;

mod random;
pub use self::random::*;

mod timing;
pub use self::timing::*;

mod types;
pub use self::types::*;
