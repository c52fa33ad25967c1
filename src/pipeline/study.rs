use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::models::{Flashcard, QuizQuestion};

use super::client::CompletionRequest;
use super::orchestrator::{truncate_chars, SyllabusPipeline};
use super::parser::{parse_array_lenient, parse_json_response};
use super::prompt;
use super::PipelineError;

/// Study-material inputs are truncated to this many characters.
const STUDY_INPUT_LIMIT: usize = 15_000;

/// Minimum usable study-material length in trimmed characters.
const MIN_STUDY_CHARS: usize = 100;

/// Maximum cards produced by the heuristic fallback generator.
const MAX_FALLBACK_CARDS: usize = 10;

fn sentence_splitter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]\s+").unwrap())
}

/// Deterministic flashcards from sentence structure alone, used when the
/// extraction service cannot produce a usable card list.
pub fn fallback_flashcards(text: &str) -> Vec<Flashcard> {
    let mut cards = Vec::new();

    for sentence in sentence_splitter().split(text) {
        if cards.len() >= MAX_FALLBACK_CARDS {
            break;
        }
        let sentence = sentence.trim();
        if sentence.chars().count() <= 20 {
            continue;
        }
        let front: String = sentence.chars().take(80).collect();
        let front = format!("{}?", front.trim_end_matches(['.', '?', '!']));
        let back: String = sentence.chars().take(200).collect();
        cards.push(Flashcard { front, back });
    }

    if cards.is_empty() {
        cards.push(Flashcard {
            front: "Key topic".to_string(),
            back: text.chars().take(200).collect(),
        });
    }

    cards
}

impl SyllabusPipeline {
    /// Generate flashcards from study material (single pass).
    ///
    /// A malformed or non-array reply falls back to the heuristic generator;
    /// fatal service errors propagate.
    pub fn generate_flashcards(&self, text: &str) -> Result<Vec<Flashcard>, PipelineError> {
        let trimmed_chars = text.trim().chars().count();
        if trimmed_chars < MIN_STUDY_CHARS {
            return Err(PipelineError::InsufficientText(trimmed_chars));
        }

        let request = CompletionRequest {
            system: prompt::FLASHCARD_SYSTEM_PROMPT.to_string(),
            user: prompt::build_flashcard_user_content(truncate_chars(text, STUDY_INPUT_LIMIT)),
            temperature: 0.3,
            max_tokens: 4_000,
        };
        let raw = self.client.complete(&request)?;

        match parse_json_response(&raw) {
            Ok(Value::Array(items)) => {
                let cards: Vec<Flashcard> = parse_array_lenient(Some(&items));
                tracing::debug!(count = cards.len(), "generated flashcards");
                Ok(cards)
            }
            Ok(_) | Err(_) => {
                tracing::warn!("flashcard reply unusable, using fallback generator");
                Ok(fallback_flashcards(text))
            }
        }
    }

    /// Generate a multiple-choice quiz from study material (single pass).
    ///
    /// The reply may be a bare array of questions or an object holding a
    /// `questions` array; anything else is a malformed response. There is
    /// no fallback.
    pub fn generate_quiz(&self, text: &str) -> Result<Vec<QuizQuestion>, PipelineError> {
        let trimmed_chars = text.trim().chars().count();
        if trimmed_chars < MIN_STUDY_CHARS {
            return Err(PipelineError::InsufficientText(trimmed_chars));
        }

        let request = CompletionRequest {
            system: prompt::QUIZ_SYSTEM_PROMPT.to_string(),
            user: prompt::build_quiz_user_content(truncate_chars(text, STUDY_INPUT_LIMIT)),
            temperature: 0.4,
            max_tokens: 4_000,
        };
        let raw = self.client.complete(&request)?;

        let questions = match parse_json_response(&raw)? {
            Value::Array(items) => parse_array_lenient(Some(&items)),
            Value::Object(map) => match map.get("questions").and_then(Value::as_array) {
                Some(items) => parse_array_lenient(Some(items)),
                None => {
                    return Err(PipelineError::MalformedResponse(
                        "quiz reply had no questions array".into(),
                    ))
                }
            },
            _ => {
                return Err(PipelineError::MalformedResponse(
                    "quiz reply was neither an array nor an object".into(),
                ))
            }
        };

        tracing::debug!(count = questions.len(), "generated quiz questions");
        Ok(questions)
    }
}
