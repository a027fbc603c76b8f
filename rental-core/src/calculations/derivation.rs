//! Annual revenue waterfall for a single rental unit.
//!
//! Each apartment is run through a fixed sequence of steps that turn its
//! monthly rent into an annual net cash flow. Percentages are whole numbers
//! and are divided by 100 before use. No rounding happens here; amounts are
//! kept at full precision until they are displayed. Every step saturates at
//! the `Decimal` bounds, so absurdly large inputs still produce a result.
//!
//! # Waterfall
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Gross annual rent (monthly rate × 12 × occupancy) |
//! | 2    | Operating cost (step 1 × operating expenses) |
//! | 3    | Property tax (step 1 × property tax rate) |
//! | 4    | Net operating income (step 1 − step 2 − step 3) |
//! | 5    | Annual loan (monthly loan × 12) |
//! | 6    | Cash flow before income tax (step 4 − step 5) |
//! | 7    | Tax base (step 1 or step 6, depending on [`TaxBasePolicy`]) |
//! | 8    | Taxable amount (step 7, minimum 0) |
//! | 9    | Income tax (step 8 × income tax rate) |
//! | 10   | Net cash flow (step 6 − step 9) |
//! | 11   | 5, 10 and 15 year projections (step 10 × years) |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use rental_core::calculations::derive;
//! use rental_core::{ApartmentId, ApartmentRecord, NewApartment, TaxBasePolicy};
//!
//! let apartment = ApartmentRecord::from_new(
//!     ApartmentId::new(1),
//!     NewApartment::named("Appartement RDC").with_rent(dec!(850), dec!(650)),
//! );
//!
//! let derived = derive(&apartment, TaxBasePolicy::PreDebtCashFlow);
//!
//! assert_eq!(derived.before_tax_cash_flow, dec!(360));
//! assert_eq!(derived.income_tax_amount, dec!(36));
//! assert_eq!(derived.cash_flow, dec!(324));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::{non_negative, percent_of};
use crate::{ApartmentRecord, DerivedApartment, TaxBasePolicy};

const MONTHS_PER_YEAR: i64 = 12;

/// Runs the waterfall for one apartment under the given policy.
///
/// Shorthand for `RentalWaterfall::new(policy).derive(apartment)`.
pub fn derive(
    apartment: &ApartmentRecord,
    policy: TaxBasePolicy,
) -> DerivedApartment {
    RentalWaterfall::new(policy).derive(apartment)
}

/// Calculator for the per-unit waterfall.
///
/// Holds the tax base policy shared by every apartment of one evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RentalWaterfall {
    policy: TaxBasePolicy,
}

impl RentalWaterfall {
    pub fn new(policy: TaxBasePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> TaxBasePolicy {
        self.policy
    }

    /// Computes every derived figure for `apartment`.
    ///
    /// Never fails and never touches the input record; the returned value
    /// carries its own copy of the apartment.
    pub fn derive(
        &self,
        apartment: &ApartmentRecord,
    ) -> DerivedApartment {
        let gross_annual_rent =
            self.gross_annual_rent(apartment.monthly_rate, apartment.occupancy);
        let operating_cost = percent_of(gross_annual_rent, apartment.operating_expenses);
        let property_tax_amount = percent_of(gross_annual_rent, apartment.property_tax);
        let net_operating_income =
            self.net_operating_income(gross_annual_rent, operating_cost, property_tax_amount);

        let annual_loan = self.annual_loan(apartment.loan_monthly);
        let before_tax_cash_flow = net_operating_income.saturating_sub(annual_loan);

        let tax_base_amount = self.tax_base_amount(gross_annual_rent, before_tax_cash_flow);
        let income_tax_amount = self.income_tax_amount(tax_base_amount, apartment.income_tax);
        let cash_flow = before_tax_cash_flow.saturating_sub(income_tax_amount);

        DerivedApartment {
            apartment: apartment.clone(),
            gross_annual_rent,
            operating_cost,
            property_tax_amount,
            net_operating_income,
            annual_loan,
            before_tax_cash_flow,
            tax_base_amount,
            income_tax_amount,
            cash_flow,
            roi5: self.projection(cash_flow, 5),
            roi10: self.projection(cash_flow, 10),
            roi15: self.projection(cash_flow, 15),
        }
    }

    /// Step 1.
    fn gross_annual_rent(
        &self,
        monthly_rate: Decimal,
        occupancy: Decimal,
    ) -> Decimal {
        percent_of(monthly_rate.saturating_mul(Decimal::from(MONTHS_PER_YEAR)), occupancy)
    }

    /// Step 4.
    fn net_operating_income(
        &self,
        gross_annual_rent: Decimal,
        operating_cost: Decimal,
        property_tax_amount: Decimal,
    ) -> Decimal {
        gross_annual_rent
            .saturating_sub(operating_cost)
            .saturating_sub(property_tax_amount)
    }

    /// Step 5.
    fn annual_loan(
        &self,
        loan_monthly: Decimal,
    ) -> Decimal {
        loan_monthly.saturating_mul(Decimal::from(MONTHS_PER_YEAR))
    }

    /// Step 7. The only place the policy is consulted.
    fn tax_base_amount(
        &self,
        gross_annual_rent: Decimal,
        before_tax_cash_flow: Decimal,
    ) -> Decimal {
        match self.policy {
            TaxBasePolicy::GrossAnnual => gross_annual_rent,
            TaxBasePolicy::PreDebtCashFlow => before_tax_cash_flow,
        }
    }

    /// Steps 8 and 9. A negative base owes nothing; losses never become a credit.
    fn income_tax_amount(
        &self,
        tax_base_amount: Decimal,
        income_tax: Decimal,
    ) -> Decimal {
        percent_of(non_negative(tax_base_amount), income_tax)
    }

    /// Step 11: flat multiple of the yearly net cash flow.
    fn projection(
        &self,
        cash_flow: Decimal,
        years: i64,
    ) -> Decimal {
        cash_flow.saturating_mul(Decimal::from(years))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{ApartmentId, NewApartment};

    /// 850/month, fully let, 15% opex, 5% property tax, 10% income tax, 650 loan.
    fn rdc() -> ApartmentRecord {
        ApartmentRecord::from_new(
            ApartmentId::new(1),
            NewApartment::named("Appartement RDC").with_rent(dec!(850), dec!(650)),
        )
    }

    fn gross() -> RentalWaterfall {
        RentalWaterfall::new(TaxBasePolicy::GrossAnnual)
    }

    fn pre_debt() -> RentalWaterfall {
        RentalWaterfall::new(TaxBasePolicy::PreDebtCashFlow)
    }

    #[test]
    fn waterfall_keeps_its_policy() {
        assert_eq!(pre_debt().policy(), TaxBasePolicy::PreDebtCashFlow);
        assert_eq!(RentalWaterfall::default().policy(), TaxBasePolicy::GrossAnnual);
    }

    // =========================================================================
    // gross_annual_rent tests
    // =========================================================================

    #[test]
    fn gross_annual_rent_full_occupancy() {
        let result = gross().gross_annual_rent(dec!(850), dec!(100));

        assert_eq!(result, dec!(10200));
    }

    #[test]
    fn gross_annual_rent_partial_occupancy() {
        let result = gross().gross_annual_rent(dec!(1000), dec!(75));

        assert_eq!(result, dec!(9000));
    }

    #[test]
    fn gross_annual_rent_over_full_occupancy_is_honored() {
        let result = gross().gross_annual_rent(dec!(1000), dec!(110));

        assert_eq!(result, dec!(13200));
    }

    #[test]
    fn gross_annual_rent_zero_occupancy() {
        let result = gross().gross_annual_rent(dec!(1000), dec!(0));

        assert_eq!(result, dec!(0));
    }

    // =========================================================================
    // net_operating_income tests
    // =========================================================================

    #[test]
    fn net_operating_income_subtracts_costs_and_property_tax() {
        let result = gross().net_operating_income(dec!(10200), dec!(1530), dec!(510));

        assert_eq!(result, dec!(8160));
    }

    // =========================================================================
    // annual_loan tests
    // =========================================================================

    #[test]
    fn annual_loan_is_twelve_payments() {
        let result = gross().annual_loan(dec!(650));

        assert_eq!(result, dec!(7800));
    }

    // =========================================================================
    // tax_base_amount tests
    // =========================================================================

    #[test]
    fn tax_base_gross_uses_gross_rent() {
        let result = gross().tax_base_amount(dec!(10200), dec!(360));

        assert_eq!(result, dec!(10200));
    }

    #[test]
    fn tax_base_pre_debt_uses_before_tax_cash_flow() {
        let result = pre_debt().tax_base_amount(dec!(10200), dec!(360));

        assert_eq!(result, dec!(360));
    }

    #[test]
    fn tax_base_pre_debt_keeps_negative_base_unclamped() {
        let result = pre_debt().tax_base_amount(dec!(10200), dec!(-240));

        assert_eq!(result, dec!(-240));
    }

    // =========================================================================
    // income_tax_amount tests
    // =========================================================================

    #[test]
    fn income_tax_applies_rate_to_positive_base() {
        let result = gross().income_tax_amount(dec!(360), dec!(10));

        assert_eq!(result, dec!(36));
    }

    #[test]
    fn income_tax_is_zero_for_negative_base() {
        let result = gross().income_tax_amount(dec!(-200), dec!(10));

        assert_eq!(result, dec!(0));
        assert!(!result.is_sign_negative());
    }

    #[test]
    fn income_tax_is_zero_at_zero_base() {
        let result = gross().income_tax_amount(dec!(0), dec!(30));

        assert_eq!(result, dec!(0));
    }

    // =========================================================================
    // derive (integration) tests
    // =========================================================================

    #[test]
    fn derive_gross_annual_scenario() {
        let result = gross().derive(&rdc());

        assert_eq!(result.gross_annual_rent, dec!(10200));
        assert_eq!(result.operating_cost, dec!(1530));
        assert_eq!(result.property_tax_amount, dec!(510));
        assert_eq!(result.net_operating_income, dec!(8160));
        assert_eq!(result.annual_loan, dec!(7800));
        assert_eq!(result.before_tax_cash_flow, dec!(360));
        assert_eq!(result.tax_base_amount, dec!(10200));
        assert_eq!(result.income_tax_amount, dec!(1020));
        // 360 - 1020
        assert_eq!(result.cash_flow, dec!(-660));
        assert_eq!(result.roi5, dec!(-3300));
        assert_eq!(result.roi10, dec!(-6600));
        assert_eq!(result.roi15, dec!(-9900));
    }

    #[test]
    fn derive_pre_debt_scenario() {
        let result = pre_debt().derive(&rdc());

        assert_eq!(result.tax_base_amount, dec!(360));
        assert_eq!(result.income_tax_amount, dec!(36));
        assert_eq!(result.cash_flow, dec!(324));
        assert_eq!(result.roi10, dec!(3240));
    }

    #[test]
    fn derive_pre_debt_loss_owes_no_income_tax() {
        let mut apartment = rdc();
        apartment.loan_monthly = dec!(700);

        let result = pre_debt().derive(&apartment);

        // NOI 8160 - loan 8400
        assert_eq!(result.before_tax_cash_flow, dec!(-240));
        assert_eq!(result.tax_base_amount, dec!(-240));
        assert_eq!(result.income_tax_amount, dec!(0));
        assert_eq!(result.cash_flow, dec!(-240));
    }

    #[test]
    fn derive_gross_loss_still_owes_income_tax() {
        let mut apartment = rdc();
        apartment.loan_monthly = dec!(700);

        let result = gross().derive(&apartment);

        assert_eq!(result.before_tax_cash_flow, dec!(-240));
        assert_eq!(result.income_tax_amount, dec!(1020));
        assert_eq!(result.cash_flow, dec!(-1260));
    }

    #[test]
    fn derive_negative_rent_under_gross_owes_no_tax() {
        let mut apartment = rdc();
        apartment.monthly_rate = dec!(-100);
        apartment.loan_monthly = dec!(0);

        let result = gross().derive(&apartment);

        assert_eq!(result.gross_annual_rent, dec!(-1200));
        assert_eq!(result.income_tax_amount, dec!(0));
        assert_eq!(result.cash_flow, result.before_tax_cash_flow);
    }

    #[test]
    fn derive_copies_apartment_unchanged() {
        let apartment = rdc();

        let result = gross().derive(&apartment);

        assert_eq!(result.apartment, apartment);
    }

    #[test]
    fn derive_is_deterministic() {
        let apartment = rdc();
        let waterfall = pre_debt();

        let first = waterfall.derive(&apartment);
        let second = waterfall.derive(&apartment);

        assert_eq!(first, second);
        assert_eq!(first.cash_flow.serialize(), second.cash_flow.serialize());
    }

    #[test]
    fn derive_free_function_matches_waterfall() {
        let apartment = rdc();

        assert_eq!(
            derive(&apartment, TaxBasePolicy::PreDebtCashFlow),
            pre_debt().derive(&apartment)
        );
    }

    #[test]
    fn derive_huge_rent_saturates_instead_of_panicking() {
        let mut apartment = rdc();
        apartment.monthly_rate = Decimal::MAX;

        let result = gross().derive(&apartment);

        assert_eq!(result.gross_annual_rent, Decimal::MAX);
        assert_eq!(result.cash_flow, result.before_tax_cash_flow - result.income_tax_amount);
        assert_eq!(result.roi15, Decimal::MAX);
    }

    #[test]
    fn derive_projection_saturates_when_cash_flow_fits() {
        let apartment = ApartmentRecord::from_new(
            ApartmentId::new(2),
            NewApartment {
                monthly_rate: Decimal::from_i128_with_scale(10i128.pow(27), 0),
                operating_expenses: dec!(0),
                property_tax: dec!(0),
                income_tax: dec!(0),
                ..NewApartment::named("Tower")
            },
        );

        let result = gross().derive(&apartment);

        // 1e27 * 12
        assert_eq!(result.cash_flow, Decimal::from_i128_with_scale(12 * 10i128.pow(27), 0));
        assert_eq!(result.roi5, result.cash_flow * Decimal::from(5));
        assert_eq!(result.roi10, Decimal::MAX);
        assert_eq!(result.roi15, Decimal::MAX);
    }

    #[test]
    fn derive_new_apartment_defaults_is_all_zero() {
        let apartment = ApartmentRecord::from_new(ApartmentId::new(9), NewApartment::default());

        let result = gross().derive(&apartment);

        assert_eq!(result.gross_annual_rent, dec!(0));
        assert_eq!(result.income_tax_amount, dec!(0));
        assert_eq!(result.cash_flow, dec!(0));
        assert_eq!(result.roi15, dec!(0));
    }
}
