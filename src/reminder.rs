use crate::models::AppData;
use crate::repo;
use chrono::{DateTime, Local, Timelike};

/// Earliest local hour at which the daily reminder may fire.
pub const REMINDER_HOUR: u32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderCheck {
    pub remind: bool,
    pub stress_logged_today: bool,
}

/// Recomputed on every poll, so a passed day boundary resets both flags
/// without any scheduled state to maintain. The reminder is due when it is
/// evening, no stress entry exists for today, and today's reminder has not
/// already been sent.
pub fn evaluate(data: &AppData, now: DateTime<Local>) -> ReminderCheck {
    let today = now.date_naive();
    let stress_logged_today = repo::stress_logged_on(data, today);
    let already_sent = data
        .last_reminded
        .as_deref()
        .is_some_and(|marker| marker == today.to_string());

    ReminderCheck {
        remind: now.hour() >= REMINDER_HOUR && !stress_logged_today && !already_sent,
        stress_logged_today,
    }
}

/// Stamps today as reminded; the caller persists the snapshot.
pub fn mark_sent(data: &mut AppData, now: DateTime<Local>) {
    data.last_reminded = Some(now.date_naive().to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LogEntry, StressLog};
    use chrono::TimeZone;

    fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
    }

    fn with_stress(timestamp: i64) -> AppData {
        AppData {
            logs: vec![LogEntry::Stress(StressLog {
                id: "s".to_string(),
                timestamp,
                level: 2,
                notes: None,
            })],
            last_reminded: None,
        }
    }

    #[test]
    fn not_due_before_evening() {
        let check = evaluate(&AppData::default(), at(2026, 3, 1, 17));
        assert!(!check.remind);
    }

    #[test]
    fn due_in_the_evening_without_a_stress_entry() {
        let check = evaluate(&AppData::default(), at(2026, 3, 1, 18));
        assert!(check.remind);
        assert!(!check.stress_logged_today);
    }

    #[test]
    fn not_due_once_stress_is_logged() {
        let data = with_stress(at(2026, 3, 1, 9).timestamp_millis());
        let check = evaluate(&data, at(2026, 3, 1, 19));
        assert!(!check.remind);
        assert!(check.stress_logged_today);
    }

    #[test]
    fn fires_at_most_once_per_day() {
        let mut data = AppData::default();
        let now = at(2026, 3, 1, 19);

        assert!(evaluate(&data, now).remind);
        mark_sent(&mut data, now);
        assert!(!evaluate(&data, now).remind);

        // Next day the marker is stale and the reminder is due again.
        assert!(evaluate(&data, at(2026, 3, 2, 19)).remind);
    }

    #[test]
    fn yesterdays_stress_entry_does_not_count_for_today() {
        let data = with_stress(at(2026, 3, 1, 20).timestamp_millis());
        let check = evaluate(&data, at(2026, 3, 2, 19));
        assert!(check.remind);
        assert!(!check.stress_logged_today);
    }
}
