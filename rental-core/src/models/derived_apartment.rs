use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ApartmentRecord;

/// An apartment together with every figure of its annual waterfall.
///
/// Recomputed from scratch on each evaluation; never edited directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedApartment {
    pub apartment: ApartmentRecord,

    pub gross_annual_rent: Decimal,
    pub operating_cost: Decimal,
    pub property_tax_amount: Decimal,
    pub net_operating_income: Decimal,
    pub annual_loan: Decimal,
    pub before_tax_cash_flow: Decimal,
    /// Amount the income tax rate was applied to, before clamping.
    pub tax_base_amount: Decimal,
    pub income_tax_amount: Decimal,
    pub cash_flow: Decimal,

    // Cumulative net cash flow, undiscounted
    pub roi5: Decimal,
    pub roi10: Decimal,
    pub roi15: Decimal,
}
