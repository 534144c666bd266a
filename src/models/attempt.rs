use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One blocked launch attempt, recorded for analytics. The log is append-only
/// and capped at the most recent 1000 entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedAppAttempt {
    pub package_name: String,
    pub app_name: String,
    pub timestamp: DateTime<Utc>,
    /// The rule that caused the block, when one did.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    /// The focus session that caused the block, when one did.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl BlockedAppAttempt {
    pub fn new(
        package_name: &str,
        app_name: &str,
        rule_id: Option<String>,
        session_id: Option<String>,
    ) -> Self {
        Self {
            package_name: package_name.to_string(),
            app_name: app_name.to_string(),
            timestamp: Utc::now(),
            rule_id,
            session_id,
        }
    }
}
