use serde::{Deserialize, Serialize};

fn default_course_name() -> String {
    "Unknown Course".to_string()
}

/// Course metadata extracted in pass 1. Produced once per document and fed
/// to pass 2 as context. Dates stay ISO strings until something downstream
/// needs real date arithmetic.
///
/// Every field has a documented default so a sparse or partially-wrong
/// service response still yields a usable value: `course_name` falls back to
/// `"Unknown Course"`, everything else to null/empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseMetadata {
    #[serde(default = "default_course_name")]
    pub course_name: String,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub holidays: Vec<String>,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default, deserialize_with = "lenient_course_info")]
    pub course_info: Option<CourseInfo>,
}

impl Default for CourseMetadata {
    fn default() -> Self {
        Self {
            course_name: default_course_name(),
            semester: None,
            start_date: None,
            end_date: None,
            holidays: Vec::new(),
            instructor: None,
            course_info: None,
        }
    }
}

impl CourseMetadata {
    /// Split a combined `"FINC 313 - Corporate Finance"` course name into
    /// `(code, name)`. Names without the separator have no code.
    pub fn split_name(&self) -> (Option<String>, String) {
        match self.course_name.split_once(" - ") {
            Some((code, name)) if !name.trim().is_empty() => {
                (Some(code.trim().to_string()), name.trim().to_string())
            }
            _ => (None, self.course_name.trim().to_string()),
        }
    }
}

/// A malformed `course_info` object degrades to `None` instead of failing
/// the whole metadata parse.
fn lenient_course_info<'de, D>(deserializer: D) -> Result<Option<CourseInfo>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Detailed syllabus information nested under pass-1 metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseInfo {
    #[serde(default)]
    pub instructor: Option<InstructorInfo>,
    #[serde(default)]
    pub logistics: Option<Logistics>,
    #[serde(default)]
    pub grade_breakdown: Vec<GradeComponent>,
    #[serde(default)]
    pub policies: Option<Policies>,
    #[serde(default)]
    pub materials: Option<Materials>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstructorInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub office: Option<String>,
    #[serde(default)]
    pub office_hours: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Logistics {
    #[serde(default)]
    pub meeting_times: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub attendance_policy: Option<String>,
    #[serde(default)]
    pub late_work_policy: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GradeComponent {
    #[serde(default)]
    pub component: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Policies {
    #[serde(default)]
    pub participation: Option<String>,
    #[serde(default)]
    pub extra_credit: Option<String>,
    #[serde(default)]
    pub academic_integrity: Option<String>,
    #[serde(default)]
    pub prerequisites: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Materials {
    #[serde(default)]
    pub required_textbooks: Vec<String>,
    #[serde(default)]
    pub recommended_readings: Vec<String>,
    #[serde(default)]
    pub course_portal: Option<String>,
    #[serde(default)]
    pub ta_info: Option<String>,
}
