mod schema;
mod version;
mod workflow;

pub use schema::{SchemaBody, SchemaDefinition};
pub use version::DocumentVersion;
pub use workflow::{TaskSpec, WorkflowDefinition};
