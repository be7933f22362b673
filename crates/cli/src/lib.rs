//! Command implementations behind the `rangepick` binary

pub mod cmd;
pub mod util;
