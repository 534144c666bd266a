use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled blocking rule: blocks a set of apps during a daily time window
/// on selected weekdays.
///
/// Serialized with camelCase fields and RFC 3339 dates so previously persisted
/// data remains readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockingRule {
    pub id: String,
    pub name: String,
    /// Package names blocked by this rule.
    pub blocked_apps: Vec<String>,
    /// Window start, HH:mm 24-hour format.
    pub start_time: String,
    /// Window end, HH:mm 24-hour format. An end before the start wraps past
    /// midnight (e.g. 22:00-06:00).
    pub end_time: String,
    /// Weekday labels ("Mon".."Sun") on which the rule is eligible.
    pub days: Vec<String>,
    /// User-controlled enable flag, independent of time-window matching.
    pub is_active: bool,
    /// Display-only attribute.
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating a rule; id and timestamps are assigned by
/// the engine.
#[derive(Debug, Clone)]
pub struct RuleInput {
    pub name: String,
    pub blocked_apps: Vec<String>,
    pub start_time: String,
    pub end_time: String,
    pub days: Vec<String>,
    pub is_active: bool,
    pub color: String,
}

/// Partial update merged onto an existing rule. Absent fields are left as-is.
#[derive(Debug, Clone, Default)]
pub struct RuleUpdate {
    pub name: Option<String>,
    pub blocked_apps: Option<Vec<String>>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub days: Option<Vec<String>>,
    pub is_active: Option<bool>,
    pub color: Option<String>,
}

impl BlockingRule {
    /// Whether this rule is effective at the given weekday label and HH:mm
    /// time. Pure function of the rule and the instant; never persisted.
    pub fn is_active_at(&self, day: &str, time: &str) -> bool {
        self.is_active && self.days.iter().any(|d| d == day)
            && is_time_in_range(time, &self.start_time, &self.end_time)
    }

    pub fn blocks_app(&self, package_name: &str) -> bool {
        self.blocked_apps.iter().any(|a| a == package_name)
    }

    pub fn apply(&mut self, update: RuleUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(blocked_apps) = update.blocked_apps {
            self.blocked_apps = blocked_apps;
        }
        if let Some(start_time) = update.start_time {
            self.start_time = start_time;
        }
        if let Some(end_time) = update.end_time {
            self.end_time = end_time;
        }
        if let Some(days) = update.days {
            self.days = days;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        if let Some(color) = update.color {
            self.color = color;
        }
    }
}

/// Check whether `current` falls within the window `[start, end]`.
///
/// Both ends are inclusive for same-day windows; the boundary minute counts
/// as blocked. When start is after end the window wraps past midnight and
/// matches `current >= start || current <= end`. Malformed times never match.
pub fn is_time_in_range(current: &str, start: &str, end: &str) -> bool {
    let (Some(current), Some(start), Some(end)) = (
        time_to_minutes(current),
        time_to_minutes(start),
        time_to_minutes(end),
    ) else {
        return false;
    };

    if start <= end {
        // Same-day range (e.g. 09:00 to 17:00)
        current >= start && current <= end
    } else {
        // Overnight range (e.g. 22:00 to 06:00)
        current >= start || current <= end
    }
}

/// Parse HH:mm into minutes since midnight. Returns None for anything that
/// is not a well-formed 24-hour time.
fn time_to_minutes(time: &str) -> Option<u32> {
    let (hours, minutes) = time.split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if hours >= 24 || minutes >= 60 {
        return None;
    }
    Some(hours * 60 + minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rule() -> BlockingRule {
        BlockingRule {
            id: "1".to_string(),
            name: "Evenings".to_string(),
            blocked_apps: vec!["app.tiktok".to_string()],
            start_time: "21:00".to_string(),
            end_time: "06:00".to_string(),
            days: vec!["Mon".to_string()],
            is_active: true,
            color: "#FF2D55".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_same_day_range_inclusive_both_ends() {
        assert!(is_time_in_range("09:00", "09:00", "17:00"));
        assert!(is_time_in_range("12:30", "09:00", "17:00"));
        assert!(is_time_in_range("17:00", "09:00", "17:00"));
        assert!(!is_time_in_range("08:59", "09:00", "17:00"));
        assert!(!is_time_in_range("17:01", "09:00", "17:00"));
    }

    #[test]
    fn test_zero_length_window_matches_its_own_minute() {
        assert!(is_time_in_range("09:00", "09:00", "09:00"));
        assert!(!is_time_in_range("09:01", "09:00", "09:00"));
    }

    #[test]
    fn test_overnight_range_wraps_midnight() {
        assert!(is_time_in_range("23:30", "22:00", "06:00"));
        assert!(is_time_in_range("02:00", "22:00", "06:00"));
        assert!(is_time_in_range("22:00", "22:00", "06:00"));
        assert!(is_time_in_range("06:00", "22:00", "06:00"));
        assert!(!is_time_in_range("12:00", "22:00", "06:00"));
        assert!(!is_time_in_range("21:59", "22:00", "06:00"));
    }

    #[test]
    fn test_malformed_times_never_match() {
        assert!(!is_time_in_range("9am", "09:00", "17:00"));
        assert!(!is_time_in_range("12:00", "garbage", "17:00"));
        assert!(!is_time_in_range("12:00", "09:00", "25:00"));
        assert!(!is_time_in_range("12:60", "09:00", "17:00"));
        assert!(!is_time_in_range("", "", ""));
    }

    #[test]
    fn test_is_active_at_requires_day_and_window() {
        let rule = sample_rule();

        // Wraparound match on a Monday evening
        assert!(rule.is_active_at("Mon", "23:30"));
        // Day matches but time is outside the window
        assert!(!rule.is_active_at("Mon", "12:00"));
        // Window matches but day does not
        assert!(!rule.is_active_at("Tue", "23:30"));
    }

    #[test]
    fn test_is_active_at_respects_enable_flag() {
        let mut rule = sample_rule();
        rule.is_active = false;
        assert!(!rule.is_active_at("Mon", "23:30"));
    }

    #[test]
    fn test_blocks_app() {
        let rule = sample_rule();
        assert!(rule.blocks_app("app.tiktok"));
        assert!(!rule.blocks_app("app.readwise"));
    }

    #[test]
    fn test_apply_merges_partial_update() {
        let mut rule = sample_rule();
        let before_created = rule.created_at;

        rule.apply(RuleUpdate {
            name: Some("Weeknights".to_string()),
            is_active: Some(false),
            ..RuleUpdate::default()
        });

        assert_eq!(rule.name, "Weeknights");
        assert!(!rule.is_active);
        // Untouched fields keep their values
        assert_eq!(rule.start_time, "21:00");
        assert_eq!(rule.created_at, before_created);
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let rule = sample_rule();
        let json = serde_json::to_string(&rule).unwrap();

        assert!(json.contains("\"blockedApps\""));
        assert!(json.contains("\"startTime\""));
        assert!(json.contains("\"isActive\""));
        assert!(json.contains("\"createdAt\""));
    }

    #[test]
    fn test_deserializes_legacy_payload() {
        let json = r##"{
            "id": "1700000000000",
            "name": "Work hours",
            "blockedApps": ["com.instagram.android"],
            "startTime": "09:00",
            "endTime": "17:00",
            "days": ["Mon", "Tue", "Wed", "Thu", "Fri"],
            "isActive": true,
            "color": "#E4405F",
            "createdAt": "2024-01-15T08:30:00.000Z",
            "updatedAt": "2024-01-15T08:30:00.000Z"
        }"##;

        let rule: BlockingRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.id, "1700000000000");
        assert_eq!(rule.blocked_apps, vec!["com.instagram.android"]);
        assert!(rule.is_active_at("Mon", "10:00"));
    }
}
