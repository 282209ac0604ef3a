pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::AlgoEngine, filter::ThresholdFilter, pipeline::CtdPipeline};
pub use utils::error::{AlgoError, Result};
