use crate::errors::AppError;
use crate::models::LogEntry;
use chrono::{Local, NaiveDate};

pub struct ExportDocument {
    pub filename: String,
    pub json: String,
}

pub fn export_document(logs: &[LogEntry]) -> Result<Option<ExportDocument>, AppError> {
    export_document_at(logs, Local::now().date_naive())
}

/// Pretty-printed JSON of the whole journal, oldest entry first, named
/// after the export date. An empty journal produces no document; the
/// caller surfaces the notice. Read-only.
pub fn export_document_at(
    logs: &[LogEntry],
    date: NaiveDate,
) -> Result<Option<ExportDocument>, AppError> {
    if logs.is_empty() {
        return Ok(None);
    }

    let mut ordered: Vec<&LogEntry> = logs.iter().collect();
    ordered.sort_by_key(|entry| entry.timestamp());

    let json = serde_json::to_string_pretty(&ordered).map_err(AppError::internal)?;
    let filename = format!("gut_journal_{}.json", date.format("%Y-%m-%d"));
    Ok(Some(ExportDocument { filename, json }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IntakeLog;

    fn intake(id: &str, timestamp: i64) -> LogEntry {
        LogEntry::Intake(IntakeLog {
            id: id.to_string(),
            timestamp,
            item: "water".to_string(),
            quantity: None,
            notes: None,
        })
    }

    #[test]
    fn empty_journal_produces_no_document() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert!(export_document_at(&[], date).unwrap().is_none());
    }

    #[test]
    fn entries_are_exported_oldest_first() {
        let logs = vec![intake("b", 2_000), intake("a", 1_000), intake("c", 3_000)];
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

        let doc = export_document_at(&logs, date).unwrap().unwrap();
        let exported: Vec<LogEntry> = serde_json::from_str(&doc.json).unwrap();
        let stamps: Vec<i64> = exported.iter().map(LogEntry::timestamp).collect();
        assert_eq!(stamps, vec![1_000, 2_000, 3_000]);
    }

    #[test]
    fn filename_carries_the_export_date() {
        let logs = vec![intake("a", 1_000)];
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

        let doc = export_document_at(&logs, date).unwrap().unwrap();
        assert_eq!(doc.filename, "gut_journal_2026-03-01.json");
        // Pretty printing, not a single line.
        assert!(doc.json.contains('\n'));
    }
}
