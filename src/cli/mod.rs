//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the report and export layers.

pub mod config;
pub mod export;
pub mod report;

pub use config::{handle_config_command, ConfigCommands};
pub use export::{handle_export_command, ExportCommands, ExportFormat};
pub use report::{
    handle_breakdown_report, handle_budgets_report, handle_categories_report,
    handle_transaction_details, handle_transactions_list, handle_trends_report,
};
