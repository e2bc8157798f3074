use crate::models::{DailyPoint, LogEntry};
use std::collections::BTreeMap;

/// Buckets entries by local calendar day and reduces them to the three
/// chart channels. Cramps and bloating take the per-day maximum of the
/// symptom severities that recorded them; a day with no contributor keeps
/// the channel null. Stress is assigned directly, last write wins when a
/// day somehow holds more than one stress entry (imports can do that).
///
/// Points come back ascending by date; zero-padded `YYYY-MM-DD` keys make
/// the BTreeMap order chronological.
pub fn build_chart(logs: &[LogEntry]) -> Vec<DailyPoint> {
    let mut ordered: Vec<&LogEntry> = logs.iter().collect();
    ordered.sort_by_key(|entry| entry.timestamp());

    let mut buckets: BTreeMap<String, DailyPoint> = BTreeMap::new();
    for entry in ordered {
        let Some(day) = entry.local_day() else {
            continue;
        };
        let key = day.format("%Y-%m-%d").to_string();
        let point = buckets.entry(key.clone()).or_insert_with(|| DailyPoint {
            date: key,
            cramps: None,
            bloating: None,
            stress: None,
        });

        match entry {
            LogEntry::Symptom(log) => {
                if let Some(value) = log.cramps_severity {
                    point.cramps = Some(point.cramps.map_or(value, |current| current.max(value)));
                }
                if let Some(value) = log.bloating_severity {
                    point.bloating =
                        Some(point.bloating.map_or(value, |current| current.max(value)));
                }
            }
            LogEntry::Stress(log) => {
                point.stress = Some(log.level);
            }
            LogEntry::Intake(_) => {}
        }
    }

    buckets.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StressLog, SymptomLog};
    use chrono::{Local, TimeZone};

    fn millis(year: i32, month: u32, day: u32, hour: u32) -> i64 {
        Local
            .with_ymd_and_hms(year, month, day, hour, 0, 0)
            .unwrap()
            .timestamp_millis()
    }

    fn symptom(id: &str, timestamp: i64, cramps: Option<u8>, bloating: Option<u8>) -> LogEntry {
        LogEntry::Symptom(SymptomLog {
            id: id.to_string(),
            timestamp,
            bowel_movement: None,
            cramps_severity: cramps,
            bloating_severity: bloating,
            urgency: None,
            notes: None,
        })
    }

    fn stress(id: &str, timestamp: i64, level: u8) -> LogEntry {
        LogEntry::Stress(StressLog {
            id: id.to_string(),
            timestamp,
            level,
            notes: None,
        })
    }

    #[test]
    fn empty_input_yields_no_points() {
        assert!(build_chart(&[]).is_empty());
    }

    #[test]
    fn takes_daily_maximum_per_channel() {
        let logs = vec![
            symptom("a", millis(2024, 1, 1, 8), Some(3), None),
            symptom("b", millis(2024, 1, 1, 18), Some(5), None),
            stress("c", millis(2024, 1, 2, 9), 2),
        ];

        let points = build_chart(&logs);
        assert_eq!(
            points,
            vec![
                DailyPoint {
                    date: "2024-01-01".to_string(),
                    cramps: Some(5),
                    bloating: None,
                    stress: None,
                },
                DailyPoint {
                    date: "2024-01-02".to_string(),
                    cramps: None,
                    bloating: None,
                    stress: Some(2),
                },
            ]
        );
    }

    #[test]
    fn zero_severity_is_a_value_not_a_gap() {
        let logs = vec![symptom("a", millis(2024, 1, 1, 8), Some(0), None)];

        let points = build_chart(&logs);
        assert_eq!(points[0].cramps, Some(0));
        assert_eq!(points[0].bloating, None);
    }

    #[test]
    fn duplicate_same_day_stress_resolves_last_write_wins() {
        let logs = vec![
            stress("late", millis(2024, 1, 1, 20), 4),
            stress("early", millis(2024, 1, 1, 7), 1),
        ];

        let points = build_chart(&logs);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].stress, Some(4));
    }

    #[test]
    fn points_come_back_in_date_order_regardless_of_input_order() {
        let logs = vec![
            stress("c", millis(2024, 3, 5, 9), 1),
            stress("a", millis(2024, 1, 20, 9), 2),
            stress("b", millis(2024, 2, 11, 9), 3),
        ];

        let dates: Vec<String> = build_chart(&logs)
            .into_iter()
            .map(|point| point.date)
            .collect();
        assert_eq!(dates, vec!["2024-01-20", "2024-02-11", "2024-03-05"]);
    }

    #[test]
    fn reaggregating_points_expressed_as_entries_is_stable() {
        let logs = vec![
            symptom("a", millis(2024, 1, 1, 8), Some(3), Some(1)),
            symptom("b", millis(2024, 1, 1, 18), Some(5), None),
            stress("c", millis(2024, 1, 1, 21), 2),
            symptom("d", millis(2024, 1, 2, 10), None, Some(4)),
        ];
        let points = build_chart(&logs);

        // Express each point back as one symptom + one stress entry and
        // aggregate again; the maxima must not drift.
        let mut round_trip = Vec::new();
        for (index, point) in points.iter().enumerate() {
            let date: Vec<u32> = point
                .date
                .split('-')
                .map(|part| part.parse().unwrap())
                .collect();
            let at = millis(date[0] as i32, date[1], date[2], 12);
            round_trip.push(symptom(
                &format!("s{index}"),
                at,
                point.cramps,
                point.bloating,
            ));
            if let Some(level) = point.stress {
                round_trip.push(stress(&format!("t{index}"), at, level));
            }
        }

        assert_eq!(build_chart(&round_trip), points);
    }
}
