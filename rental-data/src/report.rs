//! CSV export of an evaluated portfolio.
//!
//! One row per apartment, in portfolio order, followed by a `TOTAL` row.
//! Columns that only make sense per unit (`id`, `operating_cost`, ...) are
//! left empty on the totals row. Amounts are written at full precision.

use std::io::Write;
use std::path::Path;

use rental_core::{DerivedApartment, PortfolioReport, PortfolioTotals};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Label written in the `name` column of the totals row.
pub const TOTAL_ROW_NAME: &str = "TOTAL";

#[derive(Debug, Error)]
pub enum ReportWriteError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("cannot write report: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    id: Option<u64>,
    name: &'a str,
    tax_base: &'a str,
    gross_annual_rent: Decimal,
    operating_cost: Option<Decimal>,
    property_tax_amount: Option<Decimal>,
    net_operating_income: Decimal,
    annual_loan: Decimal,
    before_tax_cash_flow: Decimal,
    tax_base_amount: Option<Decimal>,
    income_tax_amount: Decimal,
    cash_flow: Decimal,
    roi5: Decimal,
    roi10: Decimal,
    roi15: Decimal,
}

impl<'a> ReportRow<'a> {
    fn apartment(
        d: &'a DerivedApartment,
        tax_base: &'a str,
    ) -> Self {
        Self {
            id: Some(d.apartment.id.get()),
            name: &d.apartment.name,
            tax_base,
            gross_annual_rent: d.gross_annual_rent,
            operating_cost: Some(d.operating_cost),
            property_tax_amount: Some(d.property_tax_amount),
            net_operating_income: d.net_operating_income,
            annual_loan: d.annual_loan,
            before_tax_cash_flow: d.before_tax_cash_flow,
            tax_base_amount: Some(d.tax_base_amount),
            income_tax_amount: d.income_tax_amount,
            cash_flow: d.cash_flow,
            roi5: d.roi5,
            roi10: d.roi10,
            roi15: d.roi15,
        }
    }

    fn totals(
        t: &PortfolioTotals,
        tax_base: &'a str,
    ) -> Self {
        Self {
            id: None,
            name: TOTAL_ROW_NAME,
            tax_base,
            gross_annual_rent: t.gross_annual_rent,
            operating_cost: None,
            property_tax_amount: None,
            net_operating_income: t.net_operating_income,
            annual_loan: t.annual_loan,
            before_tax_cash_flow: t.before_tax_cash_flow,
            tax_base_amount: None,
            income_tax_amount: t.income_tax_amount,
            cash_flow: t.cash_flow,
            roi5: t.roi5,
            roi10: t.roi10,
            roi15: t.roi15,
        }
    }
}

/// Writes `report` as CSV to any writer.
pub fn write_report<W: Write>(
    writer: W,
    report: &PortfolioReport,
) -> Result<(), ReportWriteError> {
    let tax_base = report.policy.as_str();
    let mut csv_writer = csv::Writer::from_writer(writer);

    for derived in &report.apartments {
        csv_writer.serialize(ReportRow::apartment(derived, tax_base))?;
    }
    csv_writer.serialize(ReportRow::totals(&report.totals, tax_base))?;

    csv_writer.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes `report` into it.
pub fn write_report_to_file(
    path: &Path,
    report: &PortfolioReport,
) -> Result<(), ReportWriteError> {
    let file = std::fs::File::create(path)?;
    write_report(file, report)?;
    tracing::info!(path = %path.display(), rows = report.apartments.len() + 1, "report written");
    Ok(())
}
