//! Portfolio-wide totals.
//!
//! Each total is an independent sum of one derived field, so the result does
//! not depend on apartment order and an empty portfolio totals to zero.

use crate::{DerivedApartment, PortfolioTotals};

/// Sums the derived figures of every apartment.
pub fn aggregate(derived: &[DerivedApartment]) -> PortfolioTotals {
    derived.iter().fold(PortfolioTotals::default(), |mut totals, apt| {
        totals.add(apt);
        totals
    })
}

impl PortfolioTotals {
    /// Adds one apartment's figures to the running totals, saturating at the
    /// `Decimal` bounds.
    pub fn add(
        &mut self,
        apt: &DerivedApartment,
    ) {
        self.gross_annual_rent = self.gross_annual_rent.saturating_add(apt.gross_annual_rent);
        self.net_operating_income = self.net_operating_income.saturating_add(apt.net_operating_income);
        self.annual_loan = self.annual_loan.saturating_add(apt.annual_loan);
        self.before_tax_cash_flow = self.before_tax_cash_flow.saturating_add(apt.before_tax_cash_flow);
        self.income_tax_amount = self.income_tax_amount.saturating_add(apt.income_tax_amount);
        self.cash_flow = self.cash_flow.saturating_add(apt.cash_flow);
        self.roi5 = self.roi5.saturating_add(apt.roi5);
        self.roi10 = self.roi10.saturating_add(apt.roi10);
        self.roi15 = self.roi15.saturating_add(apt.roi15);
    }
}

impl<'a> FromIterator<&'a DerivedApartment> for PortfolioTotals {
    fn from_iter<I: IntoIterator<Item = &'a DerivedApartment>>(iter: I) -> Self {
        let mut totals = Self::default();
        for apt in iter {
            totals.add(apt);
        }
        totals
    }
}
