//! Per-field draft validation.
//!
//! Validation is declarative and never short-circuits across fields: every
//! violated field reports at once so the user sees all problems together.
//! Each rule is a small pure function; [`validate`] runs them all against a
//! draft snapshot and collects the messages into a [`ValidationReport`].

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::draft::ScheduleDraft;

pub const TOPIC_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Zero-padded 24h wall-clock time ("07:45", "23:59").
const TIME_PATTERN: &str = r"^([0-1][0-9]|2[0-3]):[0-5][0-9]$";

fn time_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // The pattern is a literal; compilation cannot fail at runtime.
    RE.get_or_init(|| Regex::new(TIME_PATTERN).expect("time pattern compiles"))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Fields & report
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A draft field that can carry a validation message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Topic,
    Time,
    Days,
    Description,
}

impl Field {
    /// Stable lowercase name for logs and UI anchors.
    pub fn name(self) -> &'static str {
        match self {
            Field::Topic => "topic",
            Field::Time => "time",
            Field::Days => "days",
            Field::Description => "description",
        }
    }
}

/// Field-scoped validation messages for one draft snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<Field, String>,
}

impl ValidationReport {
    /// True when no field carries a message; only a clean draft may submit.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// The message attached to one field, if any.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Number of violated fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// All messages in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Rules
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Validate every field of a draft independently.
pub fn validate(draft: &ScheduleDraft) -> ValidationReport {
    let mut errors = BTreeMap::new();

    if let Err(msg) = validate_topic(&draft.topic) {
        errors.insert(Field::Topic, msg);
    }
    if let Err(msg) = validate_time(&draft.time) {
        errors.insert(Field::Time, msg);
    }
    if draft.days.is_empty() {
        errors.insert(Field::Days, "select at least one day".into());
    }
    if let Err(msg) = validate_description(&draft.description) {
        errors.insert(Field::Description, msg);
    }

    ValidationReport { errors }
}

/// topic: required, at most 100 characters.
pub fn validate_topic(topic: &str) -> Result<(), String> {
    if topic.is_empty() {
        return Err("topic is required".into());
    }
    let chars = topic.chars().count();
    if chars > TOPIC_MAX_CHARS {
        return Err(format!(
            "topic must be at most {} characters (got {})",
            TOPIC_MAX_CHARS, chars
        ));
    }
    Ok(())
}

/// time: required, strict zero-padded 24h "HH:MM".
pub fn validate_time(time: &str) -> Result<(), String> {
    if time.is_empty() {
        return Err("time is required".into());
    }
    if !time_pattern().is_match(time) {
        return Err("time must be 24h HH:MM, zero-padded (e.g. 07:45)".into());
    }
    Ok(())
}

/// description: optional, at most 500 characters.
pub fn validate_description(description: &str) -> Result<(), String> {
    let chars = description.chars().count();
    if chars > DESCRIPTION_MAX_CHARS {
        return Err(format!(
            "description must be at most {} characters (got {})",
            DESCRIPTION_MAX_CHARS, chars
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sr_domain::schedule::Weekday;

    // ── Topic ────────────────────────────────────────────────────────

    #[test]
    fn topic_boundaries() {
        assert!(validate_topic("").is_err());
        assert!(validate_topic("a").is_ok());
        assert!(validate_topic(&"x".repeat(100)).is_ok());
        assert!(validate_topic(&"x".repeat(101)).is_err());
    }

    #[test]
    fn topic_limit_counts_characters_not_bytes() {
        // 100 two-byte characters are exactly at the limit.
        assert!(validate_topic(&"é".repeat(100)).is_ok());
        assert!(validate_topic(&"é".repeat(101)).is_err());
    }

    // ── Time ─────────────────────────────────────────────────────────

    #[test]
    fn time_accepts_strict_24h() {
        assert!(validate_time("00:00").is_ok());
        assert!(validate_time("09:05").is_ok());
        assert!(validate_time("18:30").is_ok());
        assert!(validate_time("23:59").is_ok());
    }

    #[test]
    fn time_rejects_out_of_range_and_unpadded() {
        assert!(validate_time("").is_err());
        assert!(validate_time("24:00").is_err());
        assert!(validate_time("23:60").is_err());
        assert!(validate_time("9:30").is_err(), "must be zero-padded");
        assert!(validate_time("18:5").is_err());
        assert!(validate_time("18:30 ").is_err());
        assert!(validate_time("ab:cd").is_err());
        assert!(validate_time("1830").is_err());
    }

    // ── Description ──────────────────────────────────────────────────

    #[test]
    fn description_is_optional_with_upper_bound() {
        assert!(validate_description("").is_ok());
        assert!(validate_description(&"x".repeat(500)).is_ok());
        assert!(validate_description(&"x".repeat(501)).is_err());
    }

    // ── Whole-draft report ───────────────────────────────────────────

    #[test]
    fn empty_draft_reports_every_required_field_at_once() {
        let report = validate(&ScheduleDraft::empty());
        assert_eq!(report.len(), 3, "topic, time, and days all report together");
        assert!(report.error(Field::Topic).is_some());
        assert!(report.error(Field::Time).is_some());
        assert!(report.error(Field::Days).is_some());
        assert!(report.error(Field::Description).is_none(), "empty description is valid");
    }

    #[test]
    fn complete_draft_is_clean() {
        let mut draft = ScheduleDraft::empty();
        draft.topic = "Calculus".into();
        draft.time = "18:30".into();
        draft.toggle_day(Weekday::Monday);

        let report = validate(&draft);
        assert!(report.is_clean());
        assert!(report.is_empty());
    }

    #[test]
    fn report_iterates_in_field_order() {
        let mut draft = ScheduleDraft::empty();
        draft.description = "d".repeat(501);

        let fields: Vec<Field> = validate(&draft).iter().map(|(f, _)| f).collect();
        assert_eq!(
            fields,
            vec![Field::Topic, Field::Time, Field::Days, Field::Description]
        );
    }
}
