//! Object-storage key naming.

use chrono::{DateTime, Datelike, Utc};

/// Build the object-storage key for a finished report artifact.
///
/// Layout: `reports/<yyyy>/<mm>/<dd>/report-<id>.pdf`. Date-partitioned so
/// listings stay sortable, collision-resistant given a unique report id.
pub fn storage_key(report_id: &str, when: DateTime<Utc>) -> String {
    format!(
        "reports/{:04}/{:02}/{:02}/report-{}.pdf",
        when.year(),
        when.month(),
        when.day(),
        report_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_storage_key_format() {
        let when = Utc.with_ymd_and_hms(2026, 3, 7, 12, 0, 0).unwrap();
        let key = storage_key("abc-123", when);
        assert_eq!(key, "reports/2026/03/07/report-abc-123.pdf");
    }

    #[test]
    fn test_storage_key_zero_pads() {
        let when = Utc.with_ymd_and_hms(2026, 11, 30, 0, 0, 0).unwrap();
        assert_eq!(
            storage_key("id", when),
            "reports/2026/11/30/report-id.pdf"
        );
    }

    #[test]
    fn test_storage_key_sortable() {
        let early = storage_key("a", Utc.with_ymd_and_hms(2025, 9, 25, 0, 0, 0).unwrap());
        let late = storage_key("a", Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap());
        assert!(early < late);
    }
}
