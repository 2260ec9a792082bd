//! Finsight - personal finance reports and compound growth projections
//!
//! This library provides the computational core of the Finsight personal
//! finance tracker: aggregation of transactions, budget and goal progress,
//! dashboard metrics and investment/loan simulators. Engine functions are
//! pure; they take a [`Records`](storage::Records) snapshot and an explicit
//! reference date, and never fail on degenerate numbers.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money, currency, calendar and record types
//! - `reports`: Aggregation, budget progress, goal progress and dashboard
//! - `simulation`: Compound growth for investments and loans
//! - `storage`: Record store contract and JSON file storage
//! - `config`: Configuration and path management
//! - `export`: CSV, JSON and YAML exporters
//! - `display`: Terminal formatting
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use finsight::config::paths::FinsightPaths;
//! use finsight::reports::{DashboardOptions, DashboardSummary};
//! use finsight::storage::{JsonStore, RecordStore};
//!
//! let store = JsonStore::new(FinsightPaths::new()?);
//! let records = store.snapshot()?;
//! let summary = DashboardSummary::generate(&records, today, DashboardOptions::default());
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod simulation;
pub mod storage;

pub use error::{FinsightError, FinsightResult};
