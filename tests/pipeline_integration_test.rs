use ctd_algo::{AlgoEngine, AlgoError, CliConfig, CtdPipeline, LocalStorage, ThresholdFilter};
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

fn stage(temp: &TempDir) -> CliConfig {
    let inputs = temp.path().join("inputs");
    fs::create_dir_all(&inputs).unwrap();

    CliConfig {
        inputs_dir: inputs.to_string_lossy().to_string(),
        output_path: temp
            .path()
            .join("outputs/results.json")
            .to_string_lossy()
            .to_string(),
        ..CliConfig::default()
    }
}

fn engine_for(
    config: CliConfig,
) -> AlgoEngine<CtdPipeline<LocalStorage, CliConfig, ThresholdFilter>> {
    AlgoEngine::new(CtdPipeline::new(LocalStorage::new(), config, ThresholdFilter))
}

#[tokio::test]
async fn test_end_to_end_with_threshold_params() {
    let temp = TempDir::new().unwrap();
    let config = stage(&temp);
    let output_path = config.output_path.clone();

    fs::write(
        temp.path().join("inputs/dataset.json"),
        r#"[{"value": 5}, {"value": -1}, {"value": 10}]"#,
    )
    .unwrap();
    fs::write(
        temp.path().join("inputs/algoCustomData.json"),
        r#"{"threshold": 3}"#,
    )
    .unwrap();

    let result = engine_for(config).run().await.unwrap();
    assert_eq!(result, output_path);

    let written: Value = serde_json::from_slice(&fs::read(&output_path).unwrap()).unwrap();
    assert_eq!(written, json!([{"value": 5}, {"value": 10}]));
}

#[tokio::test]
async fn test_missing_params_file_defaults_threshold_to_zero() {
    let temp = TempDir::new().unwrap();
    let config = stage(&temp);
    let output_path = config.output_path.clone();

    // No algoCustomData.json: threshold 0 keeps non-negative and
    // value-less records, drops negatives.
    fs::write(
        temp.path().join("inputs/dataset.json"),
        r#"[{"value": 1}, {"name": "no value"}, {"value": -2}]"#,
    )
    .unwrap();

    engine_for(config).run().await.unwrap();

    let written: Value = serde_json::from_slice(&fs::read(&output_path).unwrap()).unwrap();
    assert_eq!(written, json!([{"value": 1}, {"name": "no value"}]));
}

#[tokio::test]
async fn test_malformed_params_file_is_soft_failure() {
    let temp = TempDir::new().unwrap();
    let config = stage(&temp);
    let output_path = config.output_path.clone();

    fs::write(temp.path().join("inputs/dataset.json"), r#"[{"value": 7}]"#).unwrap();
    fs::write(
        temp.path().join("inputs/algoCustomData.json"),
        "{broken json",
    )
    .unwrap();

    // The run still completes with default params.
    engine_for(config).run().await.unwrap();

    let written: Value = serde_json::from_slice(&fs::read(&output_path).unwrap()).unwrap();
    assert_eq!(written, json!([{"value": 7}]));
}

#[tokio::test]
async fn test_non_array_dataset_fails_without_output() {
    let temp = TempDir::new().unwrap();
    let config = stage(&temp);
    let output_path = config.output_path.clone();

    fs::write(
        temp.path().join("inputs/dataset.json"),
        r#"{"value": 5}"#,
    )
    .unwrap();

    let err = engine_for(config).run().await.unwrap_err();
    assert!(matches!(err, AlgoError::TransformTypeError { .. }));

    // No partial output on failure.
    assert!(!std::path::Path::new(&output_path).exists());
}

#[tokio::test]
async fn test_missing_input_file_fails() {
    let temp = TempDir::new().unwrap();
    let config = stage(&temp);

    // Only the params file is mounted.
    fs::write(temp.path().join("inputs/algoCustomData.json"), "{}").unwrap();

    let err = engine_for(config).run().await.unwrap_err();
    assert!(matches!(err, AlgoError::InputNotFoundError { .. }));
}

#[tokio::test]
async fn test_invalid_json_input_fails() {
    let temp = TempDir::new().unwrap();
    let config = stage(&temp);

    fs::write(temp.path().join("inputs/dataset.json"), "[{]").unwrap();

    let err = engine_for(config).run().await.unwrap_err();
    assert!(matches!(err, AlgoError::ParseError { .. }));
}

#[tokio::test]
async fn test_dataset_in_nested_directory_is_found() {
    let temp = TempDir::new().unwrap();
    let config = stage(&temp);
    let output_path = config.output_path.clone();

    let nested = temp.path().join("inputs/did-op-asset/0");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("dataset.json"), r#"[{"value": 4}]"#).unwrap();
    fs::write(temp.path().join("inputs/algoCustomData.json"), "{}").unwrap();

    engine_for(config).run().await.unwrap();

    let written: Value = serde_json::from_slice(&fs::read(&output_path).unwrap()).unwrap();
    assert_eq!(written, json!([{"value": 4}]));
}

#[tokio::test]
async fn test_round_trip_preserves_record_fields() {
    let temp = TempDir::new().unwrap();
    let config = stage(&temp);
    let output_path = config.output_path.clone();

    let dataset = json!([
        {"value": 5, "label": "keep", "meta": {"tags": ["a", "b"]}},
        {"value": 1, "label": "drop"}
    ]);
    fs::write(
        temp.path().join("inputs/dataset.json"),
        serde_json::to_vec(&dataset).unwrap(),
    )
    .unwrap();
    fs::write(
        temp.path().join("inputs/algoCustomData.json"),
        r#"{"threshold": 2}"#,
    )
    .unwrap();

    engine_for(config).run().await.unwrap();

    let written: Value = serde_json::from_slice(&fs::read(&output_path).unwrap()).unwrap();
    assert_eq!(
        written,
        json!([{"value": 5, "label": "keep", "meta": {"tags": ["a", "b"]}}])
    );
}
