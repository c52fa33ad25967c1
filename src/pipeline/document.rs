use serde::{Deserialize, Serialize};

use super::PipelineError;

/// Minimum usable document length in trimmed characters. Shorter inputs are
/// refused before any service call is made.
pub const MIN_DOCUMENT_CHARS: usize = 50;

/// Where the text came from. Byte-level extraction (PDF/DOCX parsing, OCR)
/// happens upstream; this crate only sees the resulting text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Pdf,
    Docx,
    Txt,
    Image,
}

impl SourceFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Txt => "txt",
            Self::Image => "image",
        }
    }
}

/// Extracted document text plus its source-format tag, gated on minimum
/// length at construction so every downstream consumer can assume usable
/// input.
#[derive(Debug, Clone)]
pub struct RawDocument {
    text: String,
    format: SourceFormat,
}

impl RawDocument {
    pub fn new(text: impl Into<String>, format: SourceFormat) -> Result<Self, PipelineError> {
        let text = text.into();
        let trimmed_chars = text.trim().chars().count();
        if trimmed_chars < MIN_DOCUMENT_CHARS {
            tracing::warn!(
                format = format.as_str(),
                chars = trimmed_chars,
                "document text below minimum length"
            );
            return Err(PipelineError::InsufficientText(trimmed_chars));
        }
        Ok(Self { text, format })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn format(&self) -> SourceFormat {
        self.format
    }
}
