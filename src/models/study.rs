use serde::{Deserialize, Serialize};

/// A single front/back study card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    #[serde(default)]
    pub front: String,
    #[serde(default)]
    pub back: String,
}

fn default_correct_answer() -> String {
    "A".to_string()
}

/// A multiple-choice quiz question with lettered options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default = "default_correct_answer")]
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: Option<String>,
}
