//! CLI command implementations

pub mod lint;
pub mod run;
pub mod watch;
