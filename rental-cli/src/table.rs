//! Plain-text rendering of a portfolio report.

use std::fmt;

use rental_core::{DerivedApartment, PortfolioReport, PortfolioTotals};
use rust_decimal::Decimal;

use crate::format::format_eur;

const NAME_WIDTH: usize = 22;
const AMOUNT_WIDTH: usize = 14;

const HEADERS: [&str; 9] = [
    "Gross rent",
    "NOI",
    "Loan",
    "Before tax",
    "Income tax",
    "Cash flow",
    "ROI 5y",
    "ROI 10y",
    "ROI 15y",
];

fn amounts(d: &DerivedApartment) -> [Decimal; 9] {
    [
        d.gross_annual_rent,
        d.net_operating_income,
        d.annual_loan,
        d.before_tax_cash_flow,
        d.income_tax_amount,
        d.cash_flow,
        d.roi5,
        d.roi10,
        d.roi15,
    ]
}

fn total_amounts(t: &PortfolioTotals) -> [Decimal; 9] {
    [
        t.gross_annual_rent,
        t.net_operating_income,
        t.annual_loan,
        t.before_tax_cash_flow,
        t.income_tax_amount,
        t.cash_flow,
        t.roi5,
        t.roi10,
        t.roi15,
    ]
}

/// Display adapter laying a report out as a fixed-width table: one line per
/// apartment and a totals line.
pub struct ReportTable<'a>(pub &'a PortfolioReport);

impl ReportTable<'_> {
    fn write_row(
        f: &mut fmt::Formatter<'_>,
        label: &str,
        values: impl IntoIterator<Item = String>,
    ) -> fmt::Result {
        write!(f, "{:<width$}", label, width = NAME_WIDTH)?;
        for value in values {
            write!(f, " {:>width$}", value, width = AMOUNT_WIDTH)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ReportTable<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let report = self.0;
        writeln!(f, "Income tax base: {}", report.policy.label())?;
        writeln!(f)?;

        Self::write_row(f, "Apartment", HEADERS.iter().map(|h| h.to_string()))?;
        let rule = "-".repeat(NAME_WIDTH + HEADERS.len() * (AMOUNT_WIDTH + 1));
        writeln!(f, "{rule}")?;

        for derived in &report.apartments {
            Self::write_row(
                f,
                &truncate(&derived.apartment.name, NAME_WIDTH),
                amounts(derived).into_iter().map(format_eur),
            )?;
        }

        writeln!(f, "{rule}")?;
        Self::write_row(
            f,
            "Total",
            total_amounts(&report.totals).into_iter().map(format_eur),
        )
    }
}

/// Renders one line per apartment and a totals line.
pub fn render_report(report: &PortfolioReport) -> String {
    ReportTable(report).to_string()
}

fn truncate(
    name: &str,
    width: usize,
) -> String {
    if name.chars().count() <= width {
        name.to_string()
    } else {
        let mut short: String = name.chars().take(width - 1).collect();
        short.push('…');
        short
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rental_core::{Portfolio, TaxBasePolicy};

    use super::*;

    #[test]
    fn render_lists_every_apartment_and_total() {
        let report = Portfolio::with_defaults().evaluate(TaxBasePolicy::GrossAnnual);

        let text = render_report(&report);

        assert!(text.starts_with("Income tax base: gross annual rent\n"));
        assert!(text.contains("Appartement RDC"));
        assert!(text.contains("Appartement 2"));
        let total = text.lines().last().unwrap();
        assert!(total.starts_with("Total"));
        assert!(total.contains("2\u{202f}760,0\u{a0}€"));
    }

    #[test]
    fn render_empty_portfolio_has_zero_total() {
        let report = Portfolio::new().evaluate(TaxBasePolicy::PreDebtCashFlow);

        let text = render_report(&report);

        assert_eq!(text.lines().count(), 6);
        assert!(text.lines().last().unwrap().contains("0,0\u{a0}€"));
    }

    #[test]
    fn table_display_matches_render_report() {
        let report = Portfolio::with_defaults().evaluate(TaxBasePolicy::PreDebtCashFlow);

        assert_eq!(format!("{}", ReportTable(&report)), render_report(&report));
    }

    #[test]
    fn truncate_long_names() {
        assert_eq!(truncate("Studio", 10), "Studio");
        assert_eq!(truncate("Appartemen", 10), "Appartemen");
        assert_eq!(truncate("Appartement du dernier étage", 10), "Apparteme…");
    }
}
