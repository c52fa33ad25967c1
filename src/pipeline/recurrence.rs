use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::models::{classify_deadline_type, DeadlineTemplate, ExpandedDeadline};

/// Hard cap on instances generated from one recurring template.
const MAX_INSTANCES_PER_TEMPLATE: usize = 15;

/// Term window substituted when the supplied dates fail to parse.
fn fallback_window() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
        NaiveDate::from_ymd_opt(2026, 5, 8).unwrap(),
    )
}

/// Recognize a full weekday name, case-insensitively.
fn parse_weekday(raw: &str) -> Option<Weekday> {
    match raw.trim().to_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Expand validated deadline records into concrete dated instances.
///
/// Weekly recurring templates become a contiguous run of instances in place
/// of the template entry; everything else passes through as a single
/// instance. The first matching week of the term is treated as a
/// non-assessed introductory week and is never emitted — expansion starts
/// one week after the first weekday match.
///
/// `start_date`/`end_date` are ISO `YYYY-MM-DD` strings; if either fails to
/// parse, a fixed fallback window is used rather than failing.
pub fn expand_recurring(
    records: Vec<DeadlineTemplate>,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Vec<ExpandedDeadline> {
    let parsed_start = start_date.and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());
    let parsed_end = end_date.and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());
    let (start, end) = match (parsed_start, parsed_end) {
        (Some(s), Some(e)) => (s, e),
        _ => {
            tracing::debug!("invalid date range for recurring expansion, using defaults");
            fallback_window()
        }
    };

    let mut expanded = Vec::new();

    for record in records {
        let weekly_day = record
            .frequency
            .as_deref()
            .filter(|f| f.to_lowercase() == "weekly")
            .and(record.day_of_week.as_deref())
            .and_then(parse_weekday);

        match weekly_day {
            Some(target) if record.is_recurring() => {
                let title = record
                    .title
                    .clone()
                    .unwrap_or_else(|| "Weekly Item".to_string());

                let mut current = start;
                while current.weekday() != target {
                    current += Duration::days(1);
                }
                // Skip the first matching week (intro week, not assessed).
                current += Duration::days(7);

                let mut instance = 1;
                while current <= end && instance <= MAX_INSTANCES_PER_TEMPLATE {
                    expanded.push(ExpandedDeadline {
                        date: current.format("%Y-%m-%d").to_string(),
                        time: record.time.clone(),
                        kind: classify_deadline_type(record.kind.as_deref()),
                        title: format!("{title} #{instance}"),
                        description: record.resolved_description(),
                        recurring: true,
                        frequency: Some("weekly".to_string()),
                        day_of_week: record.day_of_week.clone(),
                        completed: false,
                    });
                    instance += 1;
                    current += Duration::days(7);
                }

                tracing::debug!(
                    title = %title,
                    instances = instance - 1,
                    "expanded recurring deadline"
                );
            }
            _ => {
                // Not recurring (or unusable recurrence metadata): one
                // instance, unchanged. Dateless records were rejected by the
                // validator; drop any stragglers to keep every emitted
                // instance dated.
                let Some(date) = record.date.clone() else {
                    continue;
                };
                expanded.push(ExpandedDeadline {
                    date,
                    time: record.time.clone(),
                    kind: classify_deadline_type(record.kind.as_deref()),
                    title: record.title.clone().unwrap_or_default(),
                    description: record.resolved_description(),
                    recurring: record.is_recurring(),
                    frequency: record.frequency.clone(),
                    day_of_week: record.day_of_week.clone(),
                    completed: false,
                });
            }
        }
    }

    expanded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeadlineType;

    fn weekly_template(title: &str, day: &str) -> DeadlineTemplate {
        DeadlineTemplate {
            date: Some("2026-01-12".into()),
            title: Some(title.into()),
            kind: Some("Quiz".into()),
            recurring: Some(true),
            frequency: Some("weekly".into()),
            day_of_week: Some(day.into()),
            ..Default::default()
        }
    }

    #[test]
    fn weekly_expansion_skips_intro_week() {
        let expanded = expand_recurring(
            vec![weekly_template("Weekly Quiz", "Monday")],
            Some("2026-01-12"),
            Some("2026-05-08"),
        );

        // 2026-01-12 is itself a Monday; the intro week is skipped.
        assert_eq!(expanded[0].date, "2026-01-19");
        assert_eq!(expanded[0].title, "Weekly Quiz #1");
        assert_eq!(expanded[1].date, "2026-01-26");
        assert_eq!(expanded[1].title, "Weekly Quiz #2");

        for pair in expanded.windows(2) {
            let a = NaiveDate::parse_from_str(&pair[0].date, "%Y-%m-%d").unwrap();
            let b = NaiveDate::parse_from_str(&pair[1].date, "%Y-%m-%d").unwrap();
            assert_eq!(b - a, Duration::days(7));
        }

        assert!(expanded.len() <= MAX_INSTANCES_PER_TEMPLATE);
        assert_eq!(expanded.len(), 15);
        assert_eq!(expanded.last().unwrap().date, "2026-04-27");
        assert!(expanded.iter().all(|d| d.recurring));
        assert!(expanded.iter().all(|d| d.kind == DeadlineType::Quiz));
        assert!(expanded.iter().all(|d| !d.completed));
    }

    #[test]
    fn caps_at_fifteen_instances() {
        // A multi-year window would match far more than 15 Fridays.
        let expanded = expand_recurring(
            vec![weekly_template("Reading Check", "Friday")],
            Some("2026-01-12"),
            Some("2027-12-31"),
        );
        assert_eq!(expanded.len(), 15);
        assert_eq!(expanded.last().unwrap().title, "Reading Check #15");
    }

    #[test]
    fn short_window_emits_fewer_instances() {
        let expanded = expand_recurring(
            vec![weekly_template("Weekly HW", "Wednesday")],
            Some("2026-01-12"),
            Some("2026-02-06"),
        );
        // First Wednesday on/after Jan 12 is Jan 14; skip to Jan 21; then
        // Jan 28 and Feb 4 fit inside the window.
        let dates: Vec<&str> = expanded.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, vec!["2026-01-21", "2026-01-28", "2026-02-04"]);
    }

    #[test]
    fn non_recurring_passes_through_unchanged() {
        let record = DeadlineTemplate {
            date: Some("2026-02-15".into()),
            title: Some("Midterm Exam".into()),
            kind: Some("Exam".into()),
            context: Some("Covers chapters 1-4".into()),
            recurring: Some(false),
            ..Default::default()
        };
        let expanded = expand_recurring(vec![record], Some("2026-01-12"), Some("2026-05-08"));
        assert_eq!(expanded.len(), 1);
        assert_eq!(expanded[0].date, "2026-02-15");
        assert_eq!(expanded[0].title, "Midterm Exam");
        assert_eq!(expanded[0].kind, DeadlineType::Exam);
        assert_eq!(
            expanded[0].description.as_deref(),
            Some("Covers chapters 1-4")
        );
        assert!(!expanded[0].recurring);
    }

    #[test]
    fn recurring_without_weekday_passes_through() {
        let record = DeadlineTemplate {
            date: Some("2026-03-01".into()),
            title: Some("Monthly Report".into()),
            recurring: Some(true),
            frequency: Some("monthly".into()),
            day_of_week: None,
            ..Default::default()
        };
        let expanded = expand_recurring(vec![record], Some("2026-01-12"), Some("2026-05-08"));
        assert_eq!(expanded.len(), 1);
        assert_eq!(expanded[0].title, "Monthly Report");
    }

    #[test]
    fn unparseable_window_uses_fallback() {
        let expanded = expand_recurring(
            vec![weekly_template("Weekly Quiz", "monday")],
            Some("soon"),
            None,
        );
        // Fallback window 2026-01-12..2026-05-08, same as the explicit test.
        assert_eq!(expanded[0].date, "2026-01-19");
        assert_eq!(expanded.len(), 15);
    }

    #[test]
    fn weekday_name_is_case_insensitive_but_strict() {
        assert_eq!(parse_weekday("MONDAY"), Some(Weekday::Mon));
        assert_eq!(parse_weekday("  sunday "), Some(Weekday::Sun));
        assert_eq!(parse_weekday("mon"), None);
        assert_eq!(parse_weekday("someday"), None);
    }

    #[test]
    fn recurring_order_is_contiguous_within_output() {
        let records = vec![
            DeadlineTemplate {
                date: Some("2026-02-15".into()),
                title: Some("Midterm".into()),
                ..Default::default()
            },
            weekly_template("Weekly Quiz", "Monday"),
            DeadlineTemplate {
                date: Some("2026-05-01".into()),
                title: Some("Final Paper".into()),
                ..Default::default()
            },
        ];
        let expanded = expand_recurring(records, Some("2026-01-12"), Some("2026-02-06"));
        let titles: Vec<&str> = expanded.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Midterm", "Weekly Quiz #1", "Weekly Quiz #2", "Weekly Quiz #3", "Final Paper"]
        );
    }

    #[test]
    fn dateless_straggler_is_dropped() {
        let record = DeadlineTemplate {
            title: Some("Orphan".into()),
            ..Default::default()
        };
        let expanded = expand_recurring(vec![record], Some("2026-01-12"), Some("2026-05-08"));
        assert!(expanded.is_empty());
    }
}
