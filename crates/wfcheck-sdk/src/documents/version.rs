use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentVersion {
    Number(Number),
    Text(String),
}

impl Display for DocumentVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentVersion::Number(number) => write!(f, "{number}"),
            DocumentVersion::Text(text) => f.write_str(text),
        }
    }
}
