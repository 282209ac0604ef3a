use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single dataset record. CtD datasets are arbitrary JSON, so the raw
/// value is kept as-is and unknown fields survive the round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub Value);

impl Record {
    /// The record's numeric `value` field; 0 when absent or non-numeric.
    pub fn value(&self) -> f64 {
        self.0.get("value").and_then(Value::as_f64).unwrap_or(0.0)
    }
}

/// Optional parameters read from algoCustomData.json. Unknown fields are
/// ignored so user params files can carry extra keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomParams {
    #[serde(default)]
    pub threshold: f64,
}

/// Output of the extract stage: the parsed dataset plus run parameters.
#[derive(Debug, Clone)]
pub struct Extracted {
    pub dataset: Value,
    pub params: CustomParams,
    pub source: String,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub kept: Vec<Record>,
    pub input_count: usize,
}
