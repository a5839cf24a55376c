pub mod boundary;
pub mod cli;
pub mod config;
pub mod document;
pub mod domain;
pub mod env_export;
pub mod error;
pub mod git;
pub mod ui;

pub use error::{PolicyError, Result, VersionGateError};
