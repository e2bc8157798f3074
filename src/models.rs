use chrono::{Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

/// Severity scale shared by cramps, bloating and stress. 0 is a recorded
/// value, distinct from the field being absent.
pub const SEVERITY_MAX: u8 = 5;

/// Bristol stool scale bounds (7 ordinal categories).
pub const BRISTOL_MIN: u8 = 1;
pub const BRISTOL_MAX: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Symptom,
    Intake,
    Stress,
}

/// One journal record. The `type` field in the JSON is the discriminant;
/// every variant carries an opaque id and a millisecond timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LogEntry {
    Symptom(SymptomLog),
    Intake(IntakeLog),
    Stress(StressLog),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomLog {
    pub id: String,
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bowel_movement: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cramps_severity: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bloating_severity: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeLog {
    pub id: String,
    pub timestamp: i64,
    pub item: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressLog {
    pub id: String,
    pub timestamp: i64,
    pub level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LogEntry {
    pub fn id(&self) -> &str {
        match self {
            LogEntry::Symptom(log) => &log.id,
            LogEntry::Intake(log) => &log.id,
            LogEntry::Stress(log) => &log.id,
        }
    }

    pub fn timestamp(&self) -> i64 {
        match self {
            LogEntry::Symptom(log) => log.timestamp,
            LogEntry::Intake(log) => log.timestamp,
            LogEntry::Stress(log) => log.timestamp,
        }
    }

    pub fn kind(&self) -> LogKind {
        match self {
            LogEntry::Symptom(_) => LogKind::Symptom,
            LogEntry::Intake(_) => LogKind::Intake,
            LogEntry::Stress(_) => LogKind::Stress,
        }
    }

    /// Calendar day of the entry in the local timezone. None only for
    /// timestamps outside chrono's representable range.
    pub fn local_day(&self) -> Option<NaiveDate> {
        Local
            .timestamp_millis_opt(self.timestamp())
            .single()
            .map(|dt| dt.date_naive())
    }

}

/// Creation payload: the same tagged shape as `LogEntry` minus identity.
/// Any id or timestamp a caller sends along is ignored; the repository
/// always assigns fresh ones.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NewLogEntry {
    #[serde(rename_all = "camelCase")]
    Symptom {
        #[serde(default)]
        bowel_movement: Option<u8>,
        #[serde(default)]
        cramps_severity: Option<u8>,
        #[serde(default)]
        bloating_severity: Option<u8>,
        #[serde(default)]
        urgency: Option<bool>,
        #[serde(default)]
        notes: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Intake {
        item: String,
        #[serde(default)]
        quantity: Option<String>,
        #[serde(default)]
        notes: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Stress {
        level: u8,
        #[serde(default)]
        notes: Option<String>,
    },
}

/// Persisted snapshot: the whole journal plus the reminder dedup marker.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub logs: Vec<LogEntry>,
    /// Local date string of the last fired daily reminder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reminded: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LogsResponse {
    pub entries: Vec<LogEntry>,
}

/// One charted day. Channels are `null` when no entry that day recorded
/// the value; zero severities stay zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPoint {
    pub date: String,
    pub cramps: Option<u8>,
    pub bloating: Option<u8>,
    pub stress: Option<u8>,
}

#[derive(Debug, Serialize)]
pub struct ChartResponse {
    pub points: Vec<DailyPoint>,
}

#[derive(Debug, Serialize)]
pub struct ReminderResponse {
    pub remind: bool,
    pub stress_logged_today: bool,
}
