use crate::errors::AppError;
use crate::models::{
    AppData, IntakeLog, LogEntry, LogKind, NewLogEntry, StressLog, SymptomLog, BRISTOL_MAX,
    BRISTOL_MIN, SEVERITY_MAX,
};
use chrono::{Local, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

pub fn create(data: &mut AppData, new: NewLogEntry) -> Result<LogEntry, AppError> {
    create_at(data, new, Utc::now().timestamp_millis())
}

/// Creates an entry stamped with `now_millis`. Callers never supply the id
/// or timestamp; both are assigned here. A stress entry is refused when one
/// already exists for the same local calendar day.
pub fn create_at(
    data: &mut AppData,
    new: NewLogEntry,
    now_millis: i64,
) -> Result<LogEntry, AppError> {
    let entry = materialize(new, Uuid::new_v4().to_string(), now_millis);
    validate(&entry)?;

    if entry.kind() == LogKind::Stress {
        let today = local_day_of(now_millis)
            .ok_or_else(|| AppError::bad_request("timestamp out of range"))?;
        if stress_logged_on(data, today) {
            return Err(AppError::conflict("stress already logged today"));
        }
    }

    data.logs.push(entry.clone());
    sort_newest_first(&mut data.logs);
    Ok(entry)
}

/// Replaces the record matching `entry.id()` wholesale. The id must exist
/// and the type must be unchanged; everything else, timestamp included, is
/// taken from the supplied entry.
pub fn update(data: &mut AppData, entry: LogEntry) -> Result<(), AppError> {
    validate(&entry)?;

    let pos = data
        .logs
        .iter()
        .position(|existing| existing.id() == entry.id())
        .ok_or_else(|| AppError::not_found("no entry with that id"))?;
    if data.logs[pos].kind() != entry.kind() {
        return Err(AppError::bad_request("entry type cannot change"));
    }

    data.logs[pos] = entry;
    sort_newest_first(&mut data.logs);
    Ok(())
}

/// Removing an id that is not present is a no-op, not an error.
pub fn delete(data: &mut AppData, id: &str) {
    data.logs.retain(|entry| entry.id() != id);
}

pub fn latest_of_kind(data: &AppData, kind: LogKind) -> Option<&LogEntry> {
    data.logs
        .iter()
        .filter(|entry| entry.kind() == kind)
        .max_by_key(|entry| entry.timestamp())
}

pub fn stress_logged_on(data: &AppData, day: NaiveDate) -> bool {
    latest_of_kind(data, LogKind::Stress)
        .and_then(LogEntry::local_day)
        .is_some_and(|entry_day| entry_day == day)
}

pub fn sort_newest_first(logs: &mut [LogEntry]) {
    logs.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
}

fn materialize(new: NewLogEntry, id: String, timestamp: i64) -> LogEntry {
    match new {
        NewLogEntry::Symptom {
            bowel_movement,
            cramps_severity,
            bloating_severity,
            urgency,
            notes,
        } => LogEntry::Symptom(SymptomLog {
            id,
            timestamp,
            bowel_movement,
            cramps_severity,
            bloating_severity,
            urgency,
            notes,
        }),
        NewLogEntry::Intake {
            item,
            quantity,
            notes,
        } => LogEntry::Intake(IntakeLog {
            id,
            timestamp,
            item,
            quantity,
            notes,
        }),
        NewLogEntry::Stress { level, notes } => LogEntry::Stress(StressLog {
            id,
            timestamp,
            level,
            notes,
        }),
    }
}

fn validate(entry: &LogEntry) -> Result<(), AppError> {
    match entry {
        LogEntry::Symptom(log) => {
            if let Some(scale) = log.bowel_movement {
                if !(BRISTOL_MIN..=BRISTOL_MAX).contains(&scale) {
                    return Err(AppError::bad_request("bowel movement must be 1-7"));
                }
            }
            if log.cramps_severity.is_some_and(|value| value > SEVERITY_MAX) {
                return Err(AppError::bad_request("cramps severity must be 0-5"));
            }
            if log
                .bloating_severity
                .is_some_and(|value| value > SEVERITY_MAX)
            {
                return Err(AppError::bad_request("bloating severity must be 0-5"));
            }
        }
        LogEntry::Intake(log) => {
            if log.item.trim().is_empty() {
                return Err(AppError::bad_request("item is required"));
            }
        }
        LogEntry::Stress(log) => {
            if log.level > SEVERITY_MAX {
                return Err(AppError::bad_request("stress level must be 0-5"));
            }
        }
    }
    Ok(())
}

fn local_day_of(millis: i64) -> Option<NaiveDate> {
    Local
        .timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.date_naive())
}
