use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single timed focus session blocking a set of apps until it expires or
/// is ended explicitly. At most one session is active at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusSession {
    pub id: String,
    /// Requested length in minutes.
    pub duration: u32,
    pub blocked_apps: Vec<String>,
    pub start_time: DateTime<Utc>,
    /// `start_time + duration`, fixed at creation.
    pub end_time: DateTime<Utc>,
    /// True while running. A session is also implicitly over once
    /// `now >= end_time`, regardless of this flag.
    pub is_active: bool,
}

impl FocusSession {
    pub fn new(duration_minutes: u32, blocked_apps: Vec<String>) -> Self {
        let start_time = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            duration: duration_minutes,
            blocked_apps,
            start_time,
            end_time: start_time + Duration::minutes(i64::from(duration_minutes)),
            is_active: true,
        }
    }

    /// Whether the session is still in effect at the given instant.
    pub fn is_running_at(&self, now: DateTime<Utc>) -> bool {
        self.is_active && now < self.end_time
    }

    pub fn blocks_app(&self, package_name: &str) -> bool {
        self.blocked_apps.iter().any(|a| a == package_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_computes_end_time_from_duration() {
        let session = FocusSession::new(25, vec!["app.tiktok".to_string()]);

        assert!(!session.id.is_empty());
        assert!(session.is_active);
        assert_eq!(session.duration, 25);
        assert_eq!(
            session.end_time - session.start_time,
            Duration::minutes(25)
        );
    }

    #[test]
    fn test_fresh_session_is_running() {
        let session = FocusSession::new(25, vec![]);
        assert!(session.is_running_at(Utc::now()));
    }

    #[test]
    fn test_session_not_running_after_end_time() {
        let session = FocusSession::new(25, vec![]);
        let after_expiry = session.end_time + Duration::seconds(1);
        assert!(!session.is_running_at(after_expiry));

        // end_time itself is already expired (now >= end_time)
        assert!(!session.is_running_at(session.end_time));
    }

    #[test]
    fn test_ended_session_not_running_even_before_end_time() {
        let mut session = FocusSession::new(25, vec![]);
        session.is_active = false;
        assert!(!session.is_running_at(Utc::now()));
    }

    #[test]
    fn test_blocks_app() {
        let session = FocusSession::new(10, vec!["com.instagram.android".to_string()]);
        assert!(session.blocks_app("com.instagram.android"));
        assert!(!session.blocks_app("com.spotify.music"));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = FocusSession::new(10, vec![]);
        let b = FocusSession::new(10, vec![]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serde_round_trip_with_camel_case() {
        let session = FocusSession::new(25, vec!["app.tiktok".to_string()]);
        let json = serde_json::to_string(&session).unwrap();

        assert!(json.contains("\"blockedApps\""));
        assert!(json.contains("\"startTime\""));
        assert!(json.contains("\"endTime\""));

        let parsed: FocusSession = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, session);
    }
}
