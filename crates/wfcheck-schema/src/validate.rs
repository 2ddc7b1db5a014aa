use jsonschema::JSONSchema;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("schema compile failed: {message}")]
pub struct CompileError {
    pub message: String,
}

pub trait SchemaInstanceValidator {
    type Compiled;

    fn compile(&self, schema: &Value) -> Result<Self::Compiled, CompileError>;

    // Empty means valid.
    fn execute(&self, compiled: &Self::Compiled, instance: &Value) -> Vec<Violation>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSchemaValidator;

impl SchemaInstanceValidator for JsonSchemaValidator {
    type Compiled = JSONSchema;

    fn compile(&self, schema: &Value) -> Result<JSONSchema, CompileError> {
        JSONSchema::options()
            .compile(schema)
            .map_err(|err| CompileError {
                message: err.to_string(),
            })
    }

    fn execute(&self, compiled: &JSONSchema, instance: &Value) -> Vec<Violation> {
        let mut violations = match compiled.validate(instance) {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .map(|error| Violation {
                    path: error.instance_path.to_string(),
                    message: error.to_string(),
                })
                .collect::<Vec<_>>(),
        };
        violations.sort_by(|left, right| {
            (&left.path, &left.message).cmp(&(&right.path, &right.message))
        });
        violations
    }
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
