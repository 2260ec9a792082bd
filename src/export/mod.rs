//! Export module for Finsight
//!
//! - CSV: transactions, monthly totals and simulation traces
//! - JSON: the dashboard report and the full record set
//! - YAML: human-readable versions of the JSON exports

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{
    export_amortization_csv, export_investment_csv, export_monthly_totals_csv,
    export_transactions_csv,
};
pub use json::{
    export_records_json, export_report_json, RecordsExport, ReportExport, EXPORT_SCHEMA_VERSION,
};
pub use yaml::{export_records_yaml, export_report_yaml, import_records_yaml};
