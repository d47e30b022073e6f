//! CLI commands for data export
//!
//! Formats API payloads as CSV, print-ready HTML, or chart JSON and saves
//! the result to disk.

use clap::{Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::Settings;
use crate::error::FinsightResult;
use crate::export::{self, ExportContext, ExportKind, ExportOutput};
use crate::models::{BudgetStatus, Transaction};
use crate::notifications::{ToastKind, ToastStore};
use crate::reports::aggregate_by_month;
use crate::storage::{read_records, write_document_atomic};

/// Document format for transaction and budget exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Spreadsheet-compatible CSV
    Csv,
    /// Print-ready HTML report (print to PDF from a browser)
    Html,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Html => "html",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Html => "HTML",
        }
    }
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export transactions from an API payload
    Transactions {
        /// JSON file of transactions (array or {status, data} envelope)
        file: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output path (default: transactions-YYYY-MM-DD.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export budget statuses from an API payload
    Budgets {
        /// JSON file of budget statuses (array or {status, data} envelope)
        file: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output path (default: budgets-YYYY-MM-DD.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the monthly income/expense series as JSON
    Trends {
        /// JSON file of transactions
        file: PathBuf,

        /// Output path (default: trends-YYYY-MM-DD.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// Handle export commands
pub fn handle_export_command(settings: &Settings, cmd: ExportCommands) -> FinsightResult<()> {
    let today = settings.calendar.today();
    let ctx = ExportContext::from_settings(settings, today);
    let mut toasts = ToastStore::new();
    let duration = Duration::from_millis(settings.toast_duration_ms);

    let result = match cmd {
        ExportCommands::Transactions {
            file,
            format,
            output,
        } => {
            let transactions: Vec<Transaction> = read_records(&file)?;
            let document = match format {
                ExportFormat::Csv => export::transactions_csv(&transactions, ctx.calendar)?,
                ExportFormat::Html => export::transactions_html(&transactions, &ctx),
            };
            let path = output.unwrap_or_else(|| {
                PathBuf::from(ExportKind::Transactions.file_name(today, format.extension()))
            });
            save_document(&mut toasts, duration, document, "Transactions", format.label(), &path)
        }
        ExportCommands::Budgets {
            file,
            format,
            output,
        } => {
            let budgets: Vec<BudgetStatus> = read_records(&file)?;
            let document = match format {
                ExportFormat::Csv => export::budgets_csv(&budgets)?,
                ExportFormat::Html => export::budgets_html(&budgets, &ctx),
            };
            let path = output.unwrap_or_else(|| {
                PathBuf::from(ExportKind::Budgets.file_name(today, format.extension()))
            });
            save_document(&mut toasts, duration, document, "Budgets", format.label(), &path)
        }
        ExportCommands::Trends {
            file,
            output,
            pretty,
        } => {
            let transactions: Vec<Transaction> = read_records(&file)?;
            let buckets = aggregate_by_month(&transactions, ctx.calendar);
            let document = export::monthly_trends_json(&buckets, pretty)?;

            let path = output
                .unwrap_or_else(|| PathBuf::from(ExportKind::Trends.file_name(today, "json")));
            save_document(&mut toasts, duration, document, "Monthly trends", "JSON", &path)
        }
    };

    print_toasts(&toasts);
    result
}

/// Write a finished document, recording the outcome as a toast
///
/// An empty export writes nothing and is not an error.
fn save_document(
    toasts: &mut ToastStore,
    duration: Duration,
    document: ExportOutput,
    subject: &str,
    format_label: &str,
    path: &Path,
) -> FinsightResult<()> {
    let text = match document {
        ExportOutput::Empty(kind) => {
            toasts.push(ToastKind::Info, kind.empty_message(), Some(duration));
            return Ok(());
        }
        ExportOutput::Document(text) => text,
    };

    match write_document_atomic(path, &text) {
        Ok(()) => {
            tracing::info!(path = %path.display(), format = format_label, "export written");
            toasts.push(
                ToastKind::Success,
                format!(
                    "{} exported to {} successfully: {}",
                    subject,
                    format_label,
                    path.display()
                ),
                Some(duration),
            );
            Ok(())
        }
        Err(err) => {
            toasts.push(
                ToastKind::Error,
                format!(
                    "Failed to export {} to {}",
                    subject.to_lowercase(),
                    format_label
                ),
                Some(duration),
            );
            Err(err)
        }
    }
}

fn print_toasts(toasts: &ToastStore) {
    for toast in toasts.toasts() {
        match toast.kind {
            ToastKind::Error => eprintln!("{} {}", toast.kind.icon(), toast.message),
            _ => println!("{} {}", toast.kind.icon(), toast.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TOAST_DURATION: Duration = Duration::from_millis(3000);

    #[test]
    fn test_empty_document_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        let mut toasts = ToastStore::new();

        save_document(
            &mut toasts,
            TOAST_DURATION,
            ExportOutput::Empty(ExportKind::Budgets),
            "Budgets",
            "CSV",
            &path,
        )
        .unwrap();

        assert!(!path.exists());
        assert_eq!(toasts.toasts()[0].kind, ToastKind::Info);
        assert_eq!(toasts.toasts()[0].message, "No budgets to export");
    }

    #[test]
    fn test_document_written_with_success_toast() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        let mut toasts = ToastStore::new();

        save_document(
            &mut toasts,
            TOAST_DURATION,
            ExportOutput::Document("a,b\n1,2".to_string()),
            "Transactions",
            "CSV",
            &path,
        )
        .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b\n1,2");
        let toast = &toasts.toasts()[0];
        assert_eq!(toast.kind, ToastKind::Success);
        assert!(toast
            .message
            .starts_with("Transactions exported to CSV successfully"));
    }

    #[test]
    fn test_write_failure_records_error_toast() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let mut toasts = ToastStore::new();

        let result = save_document(
            &mut toasts,
            TOAST_DURATION,
            ExportOutput::Document("x".to_string()),
            "Budgets",
            "HTML",
            &blocker.join("report.html"),
        );

        assert!(result.is_err());
        assert_eq!(toasts.toasts()[0].kind, ToastKind::Error);
        assert_eq!(toasts.toasts()[0].message, "Failed to export budgets to HTML");
    }

    #[test]
    fn test_format_extensions() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Html.extension(), "html");
    }
}
