use crate::config::ServiceConfig;
use crate::models::{CourseMetadata, ExpandedDeadline};

use super::chunker::{chunk_text, DEFAULT_CHUNK_SIZE};
use super::client::{ChatCompletionsClient, CompletionRequest, ExtractionClient};
use super::document::{RawDocument, MIN_DOCUMENT_CHARS};
use super::parser::{parse_array_lenient, parse_json_response};
use super::prompt;
use super::recurrence::expand_recurring;
use super::validate::validate_deadlines;
use super::PipelineError;

/// Documents at or under this many characters are summarized in one pass;
/// longer documents go through chunked map-reduce.
const SINGLE_PASS_SUMMARY_LIMIT: usize = 12_000;

/// Pass-1 metadata extraction reads at most this many characters.
const METADATA_INPUT_LIMIT: usize = 15_000;

/// Pass-2 deadline extraction reads at most this many characters.
const DEADLINE_INPUT_LIMIT: usize = 25_000;

/// Term window and semester assumed when pass 1 could not provide them, so
/// a missing pass-1 date never blocks pass 2.
const DEFAULT_TERM_START: &str = "2026-01-12";
const DEFAULT_TERM_END: &str = "2026-05-08";
const DEFAULT_SEMESTER: &str = "Spring 2026";

/// Drives the document-to-structured-data flows: two-pass metadata+deadline
/// extraction and map-reduce summarization, on top of a pluggable
/// extraction-service client.
pub struct SyllabusPipeline {
    pub(crate) client: Box<dyn ExtractionClient + Send + Sync>,
}

impl SyllabusPipeline {
    pub fn new(client: Box<dyn ExtractionClient + Send + Sync>) -> Self {
        Self { client }
    }

    /// Pipeline backed by the HTTP client configured from the environment.
    pub fn from_env() -> Result<Self, PipelineError> {
        let config = ServiceConfig::from_env()?;
        Ok(Self::new(Box::new(ChatCompletionsClient::new(config))))
    }

    /// PASS 1: extract course metadata from a syllabus.
    ///
    /// Recoverable failures (malformed JSON, shape mismatch) degrade to
    /// default metadata so deadline extraction can still run; fatal service
    /// errors propagate.
    pub fn extract_metadata(&self, text: &str) -> Result<CourseMetadata, PipelineError> {
        tracing::debug!("pass 1: extracting course metadata");

        let request = CompletionRequest {
            system: prompt::METADATA_SYSTEM_PROMPT.to_string(),
            user: prompt::build_metadata_user_content(truncate_chars(text, METADATA_INPUT_LIMIT)),
            temperature: 0.1,
            max_tokens: 2_000,
        };
        let raw = self.client.complete(&request)?;

        let metadata = parse_json_response(&raw)
            .and_then(|value| {
                serde_json::from_value::<CourseMetadata>(value)
                    .map_err(|e| PipelineError::MalformedResponse(e.to_string()))
            })
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "metadata extraction failed, using defaults");
                CourseMetadata::default()
            });

        tracing::debug!(course = %metadata.course_name, "parsed course metadata");
        Ok(metadata)
    }

    /// PASS 2: extract deadlines using pass-1 metadata for context, then
    /// validate and expand them.
    ///
    /// A malformed response yields an empty list (not every document has
    /// deadlines); fatal service errors propagate.
    pub fn extract_deadlines(
        &self,
        text: &str,
        metadata: &CourseMetadata,
    ) -> Result<Vec<ExpandedDeadline>, PipelineError> {
        tracing::debug!("pass 2: extracting deadlines with context");

        let start_date = metadata.start_date.as_deref().unwrap_or(DEFAULT_TERM_START);
        let end_date = metadata.end_date.as_deref().unwrap_or(DEFAULT_TERM_END);
        let semester = metadata.semester.as_deref().unwrap_or(DEFAULT_SEMESTER);

        let request = CompletionRequest {
            system: prompt::build_deadline_system_prompt(start_date, end_date, semester),
            user: prompt::build_deadline_user_content(truncate_chars(text, DEADLINE_INPUT_LIMIT)),
            temperature: 0.1,
            max_tokens: 6_000,
        };
        let raw = self.client.complete(&request)?;

        let value = match parse_json_response(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "failed to parse deadline response");
                return Ok(Vec::new());
            }
        };
        let Some(items) = value.as_array() else {
            tracing::warn!("deadline response was not a JSON array");
            return Ok(Vec::new());
        };

        let templates = parse_array_lenient(Some(items));
        tracing::debug!(count = templates.len(), "parsed deadlines before validation");

        let validated = validate_deadlines(templates);
        tracing::debug!(count = validated.len(), "deadlines after validation");

        let expanded = expand_recurring(validated, Some(start_date), Some(end_date));
        tracing::debug!(count = expanded.len(), "deadlines after recurring expansion");

        Ok(expanded)
    }

    /// Summarize a document. Short documents take one request; long ones are
    /// chunked, summarized per chunk in order, and reduced into one unified
    /// summary. Any service failure aborts the whole flow.
    pub fn summarize(&self, text: &str) -> Result<String, PipelineError> {
        let trimmed_chars = text.trim().chars().count();
        if trimmed_chars < MIN_DOCUMENT_CHARS {
            return Err(PipelineError::InsufficientText(trimmed_chars));
        }

        if text.chars().count() <= SINGLE_PASS_SUMMARY_LIMIT {
            let request = CompletionRequest {
                system: prompt::SUMMARY_SYSTEM_PROMPT.to_string(),
                user: text.to_string(),
                temperature: 0.3,
                max_tokens: 900,
            };
            return Ok(self.client.complete(&request)?.trim().to_string());
        }

        tracing::debug!(chars = text.len(), "large document, using chunked summarization");
        let chunks = chunk_text(text, DEFAULT_CHUNK_SIZE);
        tracing::debug!(chunks = chunks.len(), "split document for summarization");

        let mut partials = Vec::with_capacity(chunks.len());
        for (i, chunk) in chunks.iter().enumerate() {
            let request = CompletionRequest {
                system: prompt::build_chunk_summary_prompt(i + 1, chunks.len()),
                user: chunk.text.clone(),
                temperature: 0.3,
                max_tokens: 500,
            };
            partials.push(self.client.complete(&request)?.trim().to_string());
        }

        let combined = partials
            .iter()
            .enumerate()
            .map(|(i, summary)| format!("Section {}:\n{}", i + 1, summary))
            .collect::<Vec<_>>()
            .join("\n\n");

        let request = CompletionRequest {
            system: prompt::REDUCE_SYSTEM_PROMPT.to_string(),
            user: combined,
            temperature: 0.3,
            max_tokens: 1_200,
        };
        Ok(self.client.complete(&request)?.trim().to_string())
    }

    /// The full two-pass document flow: metadata, then deadlines extracted
    /// with that metadata as context.
    pub fn process(
        &self,
        document: &RawDocument,
    ) -> Result<(CourseMetadata, Vec<ExpandedDeadline>), PipelineError> {
        let metadata = self.extract_metadata(document.text())?;
        let deadlines = self.extract_deadlines(document.text(), &metadata)?;
        Ok((metadata, deadlines))
    }
}

/// Truncate to a maximum number of characters without splitting a
/// character.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
