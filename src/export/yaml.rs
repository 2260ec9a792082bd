//! YAML Export functionality
//!
//! Human-readable versions of the report and record exports.

use std::io::Write;

use crate::error::FinsightResult;
use crate::export::json::{RecordsExport, ReportExport};
use crate::storage::Records;

/// Write the report as YAML with a short header
pub fn export_report_yaml<W: Write>(report: &ReportExport, writer: &mut W) -> FinsightResult<()> {
    writeln!(writer, "# Finsight Report")?;
    writeln!(writer, "# As of: {}", report.as_of)?;
    writeln!(writer, "# Generated: {}", report.exported_at)?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, report)?;
    Ok(())
}

/// Write every record as YAML
pub fn export_records_yaml<W: Write>(records: &Records, writer: &mut W) -> FinsightResult<()> {
    let export = RecordsExport::from_records(records);

    writeln!(writer, "# Finsight Records Export")?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    writeln!(writer, "#")?;
    writeln!(writer, "# Keep it secure - it contains all your financial data.")?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, &export)?;
    Ok(())
}

/// Read a YAML records export back into a validated snapshot
pub fn import_records_yaml(yaml: &str) -> FinsightResult<Records> {
    let export: RecordsExport = serde_yaml::from_str(yaml)?;
    export.into_records()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, AccountType, Goal, Money};
    use crate::reports::DashboardOptions;
    use chrono::NaiveDate;

    fn records() -> Records {
        Records {
            accounts: vec![Account::with_balance(
                "Savings",
                AccountType::Bank,
                Money::from_cents(123456),
            )],
            goals: vec![Goal::new("House", Money::from_cents(10000000))],
            ..Records::default()
        }
    }

    #[test]
    fn test_records_yaml_round_trip() {
        let original = records();
        let mut buffer = Vec::new();
        export_records_yaml(&original, &mut buffer).unwrap();

        let yaml = String::from_utf8(buffer).unwrap();
        assert!(yaml.starts_with("# Finsight Records Export"));
        assert!(yaml.contains("Savings"));
        assert_eq!(import_records_yaml(&yaml).unwrap(), original);
    }

    #[test]
    fn test_report_yaml_header() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let report = ReportExport::generate(&records(), today, DashboardOptions::default(), "USD");
        let mut buffer = Vec::new();
        export_report_yaml(&report, &mut buffer).unwrap();

        let yaml = String::from_utf8(buffer).unwrap();
        assert!(yaml.contains("# As of: 2025-06-30"));
        assert!(yaml.contains("total_balance: 123456"));
        assert!(yaml.contains("currency: USD"));
    }

    #[test]
    fn test_import_rejects_garbage() {
        assert!(import_records_yaml("not: [valid").is_err());
    }
}
