use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldPathSegment {
    Key(String),
    Index(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath {
    segments: Vec<FieldPathSegment>,
}

impl FieldPath {
    pub fn root() -> Self {
        Self { segments: Vec::new() }
    }

    pub fn from_segments(segments: Vec<FieldPathSegment>) -> Self {
        Self { segments }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.segments.push(FieldPathSegment::Key(key.into()));
        self
    }

    pub fn index(mut self, index: usize) -> Self {
        self.segments.push(FieldPathSegment::Index(index));
        self
    }

    pub fn segments(&self) -> &[FieldPathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn from_json_pointer(pointer: &str) -> Self {
        let mut segments = Vec::new();
        for raw_segment in pointer.trim_start_matches('/').split('/') {
            if raw_segment.is_empty() {
                continue;
            }
            let decoded = raw_segment.replace("~1", "/").replace("~0", "~");
            match decoded.parse::<usize>() {
                Ok(index) => segments.push(FieldPathSegment::Index(index)),
                Err(_) => segments.push(FieldPathSegment::Key(decoded)),
            }
        }
        Self::from_segments(segments)
    }

    pub fn to_json_pointer(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                FieldPathSegment::Key(key) => {
                    out.push_str(key.replace('~', "~0").replace('/', "~1").as_str())
                }
                FieldPathSegment::Index(index) => out.push_str(index.to_string().as_str()),
            }
        }
        out
    }
}

impl Default for FieldPath {
    fn default() -> Self {
        Self::root()
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "$")?;
        for segment in &self.segments {
            match segment {
                FieldPathSegment::Key(key) => write!(f, ".{key}")?,
                FieldPathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
#[path = "field_path_test.rs"]
mod tests;
