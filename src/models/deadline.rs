use serde::{Deserialize, Serialize};

/// Kind of calendar deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DeadlineType {
    Exam,
    Assignment,
    Project,
    Quiz,
    Homework,
    Presentation,
    Admin,
    #[default]
    Deadline,
}

impl DeadlineType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exam => "Exam",
            Self::Assignment => "Assignment",
            Self::Project => "Project",
            Self::Quiz => "Quiz",
            Self::Homework => "Homework",
            Self::Presentation => "Presentation",
            Self::Admin => "Admin",
            Self::Deadline => "Deadline",
        }
    }
}

/// Classify a free-text deadline type from the extraction service.
/// Unrecognized or missing values fall back to the generic `Deadline`.
pub fn classify_deadline_type(raw: Option<&str>) -> DeadlineType {
    match raw.map(|s| s.trim().to_lowercase()).as_deref() {
        Some("exam") | Some("test") => DeadlineType::Exam,
        Some("assignment") => DeadlineType::Assignment,
        Some("project") => DeadlineType::Project,
        Some("quiz") => DeadlineType::Quiz,
        Some("homework") | Some("hw") => DeadlineType::Homework,
        Some("presentation") => DeadlineType::Presentation,
        Some("admin") => DeadlineType::Admin,
        _ => DeadlineType::Deadline,
    }
}

/// A raw deadline record as extracted from a syllabus. Every field is
/// optional: the extraction service is free-form and the validator decides
/// what survives. Exists only within a single extraction call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeadlineTemplate {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub recurring: Option<bool>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub day_of_week: Option<String>,
}

impl DeadlineTemplate {
    pub fn is_recurring(&self) -> bool {
        self.recurring.unwrap_or(false)
    }

    /// The description persisted downstream: syllabus context wins over the
    /// generic description field.
    pub fn resolved_description(&self) -> Option<String> {
        self.context
            .clone()
            .or_else(|| self.description.clone())
            .filter(|s| !s.trim().is_empty())
    }
}

/// A concrete dated deadline instance, ready for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpandedDeadline {
    pub date: String,
    pub time: Option<String>,
    #[serde(rename = "type")]
    pub kind: DeadlineType,
    pub title: String,
    pub description: Option<String>,
    pub recurring: bool,
    pub frequency: Option<String>,
    pub day_of_week: Option<String>,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_known_types() {
        assert_eq!(classify_deadline_type(Some("Exam")), DeadlineType::Exam);
        assert_eq!(classify_deadline_type(Some("quiz")), DeadlineType::Quiz);
        assert_eq!(
            classify_deadline_type(Some("Presentation")),
            DeadlineType::Presentation
        );
        assert_eq!(classify_deadline_type(Some("HW")), DeadlineType::Homework);
    }

    #[test]
    fn classify_unknown_falls_back_to_deadline() {
        assert_eq!(classify_deadline_type(Some("reading")), DeadlineType::Deadline);
        assert_eq!(classify_deadline_type(None), DeadlineType::Deadline);
        assert_eq!(classify_deadline_type(Some("")), DeadlineType::Deadline);
    }

    #[test]
    fn template_deserializes_with_missing_fields() {
        let t: DeadlineTemplate =
            serde_json::from_str(r#"{"date": "2026-02-15", "title": "Midterm"}"#).unwrap();
        assert_eq!(t.date.as_deref(), Some("2026-02-15"));
        assert!(!t.is_recurring());
        assert!(t.kind.is_none());
    }

    #[test]
    fn template_tolerates_null_recurring() {
        let t: DeadlineTemplate =
            serde_json::from_str(r#"{"date": "2026-02-15", "recurring": null}"#).unwrap();
        assert!(!t.is_recurring());
    }

    #[test]
    fn context_wins_over_description() {
        let t = DeadlineTemplate {
            context: Some("Covers chapters 1-3".into()),
            description: Some("ignored".into()),
            ..Default::default()
        };
        assert_eq!(t.resolved_description().as_deref(), Some("Covers chapters 1-3"));

        let t = DeadlineTemplate {
            description: Some("fallback".into()),
            ..Default::default()
        };
        assert_eq!(t.resolved_description().as_deref(), Some("fallback"));
    }

    #[test]
    fn expanded_serializes_type_field_name() {
        let d = ExpandedDeadline {
            date: "2026-02-15".into(),
            time: None,
            kind: DeadlineType::Exam,
            title: "Midterm Exam".into(),
            description: None,
            recurring: false,
            frequency: None,
            day_of_week: None,
            completed: false,
        };
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["type"], "Exam");
        assert_eq!(json["completed"], false);
    }
}
