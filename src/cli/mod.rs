//! Command workflows behind the `check` and `tag` subcommands

pub mod orchestration;

pub use orchestration::{run_check, run_tag, CheckArgs, CheckReport, TagArgs, TagReport};
