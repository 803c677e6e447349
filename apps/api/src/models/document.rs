use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Resume,
    JobDescription,
}

/// Extracted plain text of one input document. Empty text is valid input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    source: SourceType,
    text: String,
}

impl Document {
    pub fn new(source: SourceType, text: impl Into<String>) -> Self {
        Self {
            source,
            text: text.into(),
        }
    }

    pub fn resume(text: impl Into<String>) -> Self {
        Self::new(SourceType::Resume, text)
    }

    pub fn job_description(text: impl Into<String>) -> Self {
        Self::new(SourceType::JobDescription, text)
    }

    pub fn source(&self) -> SourceType {
        self.source
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when the document carries no non-whitespace text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
