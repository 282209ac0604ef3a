use crate::core::{
    Algorithm, ConfigProvider, CustomParams, Extracted, Pipeline, Storage, TransformResult,
};
use crate::utils::error::{AlgoError, Result};
use serde_json::Value;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The fixed CtD harness around the user algorithm: reads optional
/// params, discovers the mounted dataset, parses it, runs the algorithm
/// and writes the result to the output path.
pub struct CtdPipeline<S: Storage, C: ConfigProvider, A: Algorithm> {
    storage: S,
    config: C,
    algorithm: A,
}

impl<S: Storage, C: ConfigProvider, A: Algorithm> CtdPipeline<S, C, A> {
    pub fn new(storage: S, config: C, algorithm: A) -> Self {
        Self {
            storage,
            config,
            algorithm,
        }
    }

    /// Loads custom params, falling back to defaults on any problem. A
    /// missing file is the normal case; an unreadable or malformed file
    /// is logged as a warning and otherwise ignored.
    pub async fn read_custom_params(&self) -> CustomParams {
        match self.try_read_custom_params().await {
            Ok(params) => params,
            Err(e) => {
                tracing::warn!("{}; using default params", e);
                CustomParams::default()
            }
        }
    }

    pub async fn try_read_custom_params(&self) -> Result<CustomParams> {
        let path = Path::new(self.config.inputs_dir()).join(self.config.params_file());
        if !path.is_file() {
            return Ok(CustomParams::default());
        }

        let path_str = path.to_string_lossy();
        let bytes =
            self.storage
                .read_file(&path_str)
                .await
                .map_err(|e| AlgoError::ConfigReadError {
                    path: path_str.to_string(),
                    reason: e.to_string(),
                })?;

        serde_json::from_slice(&bytes).map_err(|e| AlgoError::ConfigReadError {
            path: path_str.to_string(),
            reason: e.to_string(),
        })
    }

    /// Returns the first regular file under the inputs directory that is
    /// not the params file. Entries are visited in file-name order so the
    /// choice is deterministic across runs.
    pub fn find_input_file(&self) -> Result<PathBuf> {
        let params_file = self.config.params_file();

        WalkDir::new(self.config.inputs_dir())
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .find(|entry| entry.file_name() != OsStr::new(params_file))
            .map(|entry| entry.into_path())
            .ok_or_else(|| AlgoError::InputNotFoundError {
                dir: self.config.inputs_dir().to_string(),
            })
    }

    pub async fn parse_json_file(&self, path: &Path) -> Result<Value> {
        let path_str = path.to_string_lossy();
        let bytes = self
            .storage
            .read_file(&path_str)
            .await
            .map_err(|e| AlgoError::ParseError {
                path: path_str.to_string(),
                reason: e.to_string(),
            })?;

        serde_json::from_slice(&bytes).map_err(|e| AlgoError::ParseError {
            path: path_str.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, A: Algorithm> Pipeline for CtdPipeline<S, C, A> {
    async fn extract(&self) -> Result<Extracted> {
        let params = self.read_custom_params().await;
        tracing::debug!("Using threshold = {}", params.threshold);

        let input = self.find_input_file()?;
        tracing::debug!("Found input file at {}", input.display());

        let dataset = self.parse_json_file(&input).await?;

        Ok(Extracted {
            dataset,
            params,
            source: input.display().to_string(),
        })
    }

    async fn transform(&self, extracted: Extracted) -> Result<TransformResult> {
        let input_count = extracted
            .dataset
            .as_array()
            .map(|items| items.len())
            .unwrap_or(0);

        let kept = self.algorithm.apply(&extracted.dataset, &extracted.params)?;

        Ok(TransformResult { kept, input_count })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let output_path = self.config.output_path().to_string();
        let json = serde_json::to_vec_pretty(&result.kept)?;

        tracing::debug!("Writing {} bytes to {}", json.len(), output_path);
        self.storage
            .write_file(&output_path, &json)
            .await
            .map_err(|e| AlgoError::WriteError {
                path: output_path.clone(),
                reason: e.to_string(),
            })?;

        Ok(output_path)
    }
}
