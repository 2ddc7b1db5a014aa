pub mod validate;

pub use validate::{CompileError, JsonSchemaValidator, SchemaInstanceValidator, Violation};
