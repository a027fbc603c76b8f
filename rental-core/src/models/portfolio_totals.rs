use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DerivedApartment, TaxBasePolicy};

/// Portfolio-wide sums of the derived figures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioTotals {
    pub gross_annual_rent: Decimal,
    pub net_operating_income: Decimal,
    pub annual_loan: Decimal,
    pub before_tax_cash_flow: Decimal,
    pub income_tax_amount: Decimal,
    pub cash_flow: Decimal,
    pub roi5: Decimal,
    pub roi10: Decimal,
    pub roi15: Decimal,
}

/// Output of one evaluation pass over a portfolio.
///
/// `apartments` is parallel to the input: same order, one entry per record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioReport {
    pub policy: TaxBasePolicy,
    pub apartments: Vec<DerivedApartment>,
    pub totals: PortfolioTotals,
}
