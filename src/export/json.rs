//! JSON Export functionality
//!
//! Writes the monthly trend series in a shape chart libraries can consume
//! directly.

use serde::Serialize;
use std::io::Write;

use super::{ExportKind, ExportOutput};
use crate::error::{FinsightError, FinsightResult};
use crate::models::Money;
use crate::reports::MonthlyBucket;

/// One point of the exported series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrendPoint {
    /// `YYYY-MM`, or `null` for the "Invalid Date" bucket
    pub month: Option<String>,
    pub label: String,
    pub income: Money,
    pub expense: Money,
    pub net: Money,
}

impl From<&MonthlyBucket> for MonthlyTrendPoint {
    fn from(bucket: &MonthlyBucket) -> Self {
        Self {
            month: bucket.month_key().map(|key| key.to_string()),
            label: bucket.label.clone(),
            income: bucket.income,
            expense: bucket.expense,
            net: bucket.net(),
        }
    }
}

/// Export monthly buckets as a JSON array
pub fn export_monthly_trends_json<W: Write>(
    buckets: &[MonthlyBucket],
    writer: &mut W,
    pretty: bool,
) -> FinsightResult<()> {
    let points: Vec<MonthlyTrendPoint> = buckets.iter().map(MonthlyTrendPoint::from).collect();

    if pretty {
        serde_json::to_writer_pretty(writer, &points)?;
    } else {
        serde_json::to_writer(writer, &points)?;
    }

    tracing::debug!(points = points.len(), "wrote monthly trends json");
    Ok(())
}

/// Render monthly buckets as a JSON document
pub fn monthly_trends_json(
    buckets: &[MonthlyBucket],
    pretty: bool,
) -> FinsightResult<ExportOutput> {
    if buckets.is_empty() {
        return Ok(ExportOutput::Empty(ExportKind::Trends));
    }

    let mut buf = Vec::new();
    export_monthly_trends_json(buckets, &mut buf, pretty)?;
    String::from_utf8(buf)
        .map(ExportOutput::Document)
        .map_err(|e| FinsightError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalendarReference, Transaction};
    use crate::reports::aggregate_by_month;

    #[test]
    fn test_export_series() {
        let txns = vec![
            Transaction::income("1", Money::from_cents(100000), "2024-01-05"),
            Transaction::expense("2", Money::from_cents(25050), "2024-01-20"),
            Transaction::expense("3", Money::from_cents(1000), "not a date"),
        ];
        let buckets = aggregate_by_month(&txns, CalendarReference::Utc);

        let mut buf = Vec::new();
        export_monthly_trends_json(&buckets, &mut buf, false).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        let points = value.as_array().unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0]["month"], "2024-01");
        assert_eq!(points[0]["label"], "Jan 2024");
        assert_eq!(points[0]["income"], 1000.0);
        assert_eq!(points[0]["expense"], 250.5);
        assert_eq!(points[0]["net"], 749.5);
        assert!(points[1]["month"].is_null());
        assert_eq!(points[1]["label"], "Invalid Date");
    }

    #[test]
    fn test_export_empty_series() {
        let mut buf = Vec::new();
        export_monthly_trends_json(&[], &mut buf, true).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[]");
    }

    #[test]
    fn test_document_for_empty_and_filled_series() {
        assert_eq!(
            monthly_trends_json(&[], false).unwrap(),
            ExportOutput::Empty(ExportKind::Trends)
        );

        let txns = vec![Transaction::income("1", Money::from_cents(500), "2024-03-01")];
        let buckets = aggregate_by_month(&txns, CalendarReference::Utc);
        let output = monthly_trends_json(&buckets, false).unwrap();
        assert!(output.document().unwrap().contains("\"label\":\"Mar 2024\""));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_json_error() {
        let txns = vec![Transaction::income("1", Money::from_cents(500), "2024-03-01")];
        let buckets = aggregate_by_month(&txns, CalendarReference::Utc);

        let err = export_monthly_trends_json(&buckets, &mut BrokenPipe, false).unwrap_err();
        assert!(matches!(err, FinsightError::Json(_)));
    }
}
