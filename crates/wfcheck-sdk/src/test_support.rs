use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

pub fn temp_dir(prefix: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time must be monotonic")
        .as_nanos();
    path.push(format!("wfcheck-sdk-{prefix}-{}-{nanos}", std::process::id()));
    fs::create_dir_all(&path).expect("must create temp dir");
    path
}

pub fn write(path: impl AsRef<Path>, content: &str) {
    fs::write(path, content).expect("must write fixture");
}

pub fn write_json(path: impl AsRef<Path>, value: &Value) {
    let text = serde_json::to_string_pretty(value).expect("fixture must encode");
    write(path, text.as_str());
}

pub fn sum_workflow() -> Value {
    json!({
        "name": "sum_numbers",
        "version": 1,
        "inputParameters": ["num1", "num2"],
        "tasks": [
            {
                "name": "testTask",
                "taskReferenceName": "sum_ref",
                "type": "SIMPLE",
                "inputParameters": {
                    "num1": "${workflow.input.num1}",
                    "num2": "${workflow.input.num2}"
                }
            }
        ]
    })
}

pub fn sum_schema() -> Value {
    json!({
        "name": "sum_numbers_input",
        "version": 1,
        "type": "JSON",
        "data": {
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {
                "num1": { "type": "number" },
                "num2": { "type": "number" }
            },
            "required": ["num1", "num2"]
        }
    })
}

pub fn sum_payload() -> Value {
    json!({ "num1": 5, "num2": 3 })
}

pub fn write_set(
    dir: &Path,
    base: &str,
    workflow: &Value,
    schema: &Value,
    payload: Option<&Value>,
) {
    fs::create_dir_all(dir).expect("must create set dir");
    write_json(dir.join(format!("{base}.json")), workflow);
    write_json(dir.join(format!("{base}_schema.json")), schema);
    if let Some(payload) = payload {
        write_json(dir.join(format!("{base}_payload.json")), payload);
    }
}
