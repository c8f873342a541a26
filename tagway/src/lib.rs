//! Configuration for the tagway compositor: the user facing `config.ron`, its defaults and
//! checks, and logging setup.
mod config;
pub mod utils;

pub use config::*;
