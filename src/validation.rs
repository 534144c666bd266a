use crate::constants::{MAX_SESSION_MINUTES, WEEKDAY_LABELS};
use crate::error::AppError;

/// Validate a focus session duration in minutes. Any positive duration is
/// accepted; only zero is rejected.
pub fn validate_duration_minutes(duration_minutes: u32) -> Result<(), AppError> {
    if duration_minutes == 0 {
        return Err(AppError::InvalidInput {
            field: "duration_minutes",
            reason: "must be positive".into(),
        });
    }
    Ok(())
}

/// Advisory check for a duration past the 24-hour mark. Such sessions are
/// accepted but worth logging, like unmatchable rule windows.
pub fn duration_exceeds_day(duration_minutes: u32) -> bool {
    duration_minutes > MAX_SESSION_MINUTES
}

/// Validate time format (HH:mm, 24-hour format).
///
/// Advisory for rule windows: the engine stores whatever it is given and a
/// malformed window simply never matches, but callers can validate up front.
pub fn validate_time_format(time: &str) -> Result<(), AppError> {
    let err = |reason: &str| AppError::InvalidInput {
        field: "time",
        reason: reason.into(),
    };

    let (hours, minutes) = time.split_once(':').ok_or_else(|| err("must be in HH:mm format"))?;

    let hours: u32 = hours.parse().map_err(|_| err("invalid hours"))?;
    let minutes: u32 = minutes.parse().map_err(|_| err("invalid minutes"))?;

    if hours >= 24 {
        return Err(err("hours must be 00-23"));
    }
    if minutes >= 60 {
        return Err(err("minutes must be 00-59"));
    }

    Ok(())
}

/// Validate a rule's day set (labels Mon..Sun, at least one). Advisory, like
/// `validate_time_format`.
pub fn validate_days(days: &[String]) -> Result<(), AppError> {
    if days.is_empty() {
        return Err(AppError::InvalidInput {
            field: "days",
            reason: "at least one day required".into(),
        });
    }

    for day in days {
        if !WEEKDAY_LABELS.contains(&day.as_str()) {
            return Err(AppError::InvalidInput {
                field: "days",
                reason: format!("invalid day: '{day}'"),
            });
        }
    }

    Ok(())
}
