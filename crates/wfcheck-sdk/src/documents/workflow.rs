use super::DocumentVersion;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDefinition {
    pub name: String,
    pub version: DocumentVersion,
    pub input_parameters: Vec<String>,
    pub tasks: Vec<TaskSpec>,
}

impl WorkflowDefinition {
    pub fn declares_input(&self, name: &str) -> bool {
        self.input_parameters.iter().any(|input| input == name)
    }

    pub fn expected_schema_name(&self) -> String {
        format!("{}_input", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSpec {
    pub name: String,
    pub task_reference_name: String,
    #[serde(rename = "type")]
    pub task_type: String,
    #[serde(default)]
    pub input_parameters: Map<String, Value>,
}
