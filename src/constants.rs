// src/constants.rs

/// Storage key for the full blocking-rule collection.
pub const RULES_KEY: &str = "blocking-rules";

/// Storage key for the single active focus session.
pub const SESSION_KEY: &str = "active-focus-session";

/// Storage key for the blocked-attempt log.
pub const ATTEMPTS_KEY: &str = "blocked-attempts";

/// Maximum number of blocked attempts retained (oldest evicted first).
pub const MAX_BLOCKED_ATTEMPTS: usize = 1000;

/// Default number of attempts returned when callers pass no explicit limit.
pub const DEFAULT_ATTEMPT_LIMIT: usize = 100;

/// Advisory focus session ceiling in minutes (24 hours). Longer sessions
/// are accepted but logged.
pub const MAX_SESSION_MINUTES: u32 = 24 * 60;

/// Weekday labels used in rule `days` sets, Monday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
