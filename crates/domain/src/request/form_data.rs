//! Multipart form-data parts

use serde::{Deserialize, Serialize};

/// Whether a part carries inline text or a file attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FormDataPartType {
    /// Inline text value
    #[default]
    Text,
    /// File attachment; the value holds the file name
    File,
}

/// A single multipart form-data part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDataPart {
    /// Part name
    pub key: String,
    /// Text value, or the file name for file parts
    pub value: String,
    /// Text or file
    #[serde(default)]
    pub part_type: FormDataPartType,
    /// Explicit content type of the part
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Optional description for documentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether this part is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

impl FormDataPart {
    /// Creates an enabled text part.
    #[must_use]
    pub fn text(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            part_type: FormDataPartType::Text,
            content_type: None,
            description: None,
            enabled: true,
        }
    }

    /// Creates an enabled file part referencing `file_name`.
    #[must_use]
    pub fn file(key: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            part_type: FormDataPartType::File,
            ..Self::text(key, file_name)
        }
    }

    /// Sets the part content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Returns true for file attachments.
    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self.part_type, FormDataPartType::File)
    }
}
