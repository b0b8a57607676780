//! Front matter extraction from diary files

use crate::domain::DiaryEntry;
use regex::Regex;
use std::sync::OnceLock;

/// Matches a leading `---` fenced YAML block and captures its contents
fn block_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"(?s)\A\s*---[ \t]*\r?\n(.*?)\r?\n---[ \t]*(?:\r?\n|\z)").unwrap()
    })
}

/// Why a front matter block could not be read
#[derive(Debug, Clone, PartialEq)]
pub enum FrontmatterError {
    /// Opening `---` without a closing one
    Unclosed,
    InvalidYaml(String),
}

impl std::fmt::Display for FrontmatterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrontmatterError::Unclosed => f.write_str("unclosed front matter block, missing closing ---"),
            FrontmatterError::InvalidYaml(msg) => write!(f, "invalid YAML: {}", msg),
        }
    }
}

/// Split a diary file into its entry record and markdown body.
///
/// Returns `Ok(None)` when the file has no front matter at all.
pub fn parse_entry(source: &str) -> Result<Option<DiaryEntry>, FrontmatterError> {
    let Some(captures) = block_regex().captures(source) else {
        if source.trim_start().starts_with("---") {
            return Err(FrontmatterError::Unclosed);
        }
        return Ok(None);
    };

    let yaml = captures.get(1).map_or("", |m| m.as_str());
    let body_start = captures.get(0).map_or(0, |m| m.end());

    let mut entry: DiaryEntry =
        serde_yaml::from_str(yaml).map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?;
    entry.body = source[body_start..].trim().to_string();

    Ok(Some(entry))
}
