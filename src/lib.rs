//! finsight - analytics and exports for a personal-finance client
//!
//! This library turns transaction and budget records from a finance REST
//! API into chart-ready series and exportable documents. The `finsight`
//! binary drives it from the command line using API payloads saved as JSON.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: API records (transactions, budget statuses, categories) and money
//! - `reports`: Monthly trends and other chart views
//! - `export`: CSV, print HTML and JSON documents
//! - `pagination`: Page windows for long lists
//! - `notifications`: Toast queue
//! - `storage`: Payload loading and document writing
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use finsight::models::CalendarReference;
//! use finsight::reports::aggregate_by_month;
//!
//! let buckets = aggregate_by_month(&transactions, CalendarReference::Utc);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod notifications;
pub mod pagination;
pub mod reports;
pub mod storage;

pub use error::{FinsightError, FinsightResult};
