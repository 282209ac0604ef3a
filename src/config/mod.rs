pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_name, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

// Fixed paths of the CtD container contract.
pub const DEFAULT_INPUTS_DIR: &str = "/data/inputs";
pub const DEFAULT_OUTPUT_PATH: &str = "/data/outputs/results.json";
pub const CUSTOM_PARAMS_FILENAME: &str = "algoCustomData.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "ctd-algo"),
    command(about = "Compute-to-Data algorithm template: filter a mounted JSON dataset")
)]
pub struct CliConfig {
    /// Directory tree holding the mounted dataset and optional params file
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_INPUTS_DIR))]
    pub inputs_dir: String,

    /// File the filtered result array is written to
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_OUTPUT_PATH))]
    pub output_path: String,

    /// Name of the optional params file inside the inputs directory
    #[cfg_attr(feature = "cli", arg(long, default_value = CUSTOM_PARAMS_FILENAME))]
    pub params_file: String,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Log per-phase CPU/memory stats"))]
    pub monitor: bool,

    #[cfg_attr(
        feature = "cli",
        arg(long, help = "Emit JSON log lines for the provider's log collector")
    )]
    pub json_logs: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            inputs_dir: DEFAULT_INPUTS_DIR.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            params_file: CUSTOM_PARAMS_FILENAME.to_string(),
            verbose: false,
            monitor: false,
            json_logs: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn inputs_dir(&self) -> &str {
        &self.inputs_dir
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn params_file(&self) -> &str {
        &self.params_file
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("inputs_dir", &self.inputs_dir)?;
        validate_path("output_path", &self.output_path)?;
        validate_file_name("params_file", &self.params_file)?;
        Ok(())
    }
}
