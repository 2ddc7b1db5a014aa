use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputReference<'a> {
    pub name: &'a str,
    pub span: Range<usize>,
}

pub fn scan_input_references(text: &str) -> Vec<InputReference<'_>> {
    if !text.contains("${") {
        return Vec::new();
    }
    input_reference_pattern()
        .captures_iter(text)
        .filter_map(|capture| {
            let whole = capture.get(0)?;
            let name = capture.get(1)?;
            Some(InputReference {
                name: name.as_str(),
                span: whole.range(),
            })
        })
        .collect()
}

fn input_reference_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{workflow\.input\.([A-Za-z0-9_.\-]+)\}").expect("valid regex")
    })
}

#[cfg(test)]
#[path = "reference_test.rs"]
mod tests;
