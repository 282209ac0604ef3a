use crate::core::{Algorithm, CustomParams, Record};
use crate::utils::error::{AlgoError, Result};
use serde_json::Value;

/// The packaged algorithm logic: keep every record whose `value` field
/// (0 when absent) is at or above the threshold, in input order. Replace
/// this with your own [`Algorithm`] impl to ship a different algorithm.
pub struct ThresholdFilter;

impl Algorithm for ThresholdFilter {
    fn apply(&self, data: &Value, params: &CustomParams) -> Result<Vec<Record>> {
        let items = data
            .as_array()
            .ok_or_else(|| AlgoError::TransformTypeError {
                actual: json_type_name(data).to_string(),
            })?;

        let kept = items
            .iter()
            .cloned()
            .map(Record)
            .filter(|record| record.value() >= params.threshold)
            .collect();

        Ok(kept)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
