//! Command-line edits applied to a portfolio before it is evaluated.
//!
//! An edit names a unit, a field and a value: `Appartement 2.loan_monthly=200`.
//! Numeric values go through the same sanitizing as CSV cells, so a blank or
//! mistyped number becomes 0 instead of failing.

use std::str::FromStr;

use rental_core::{ApartmentPatch, Portfolio, PortfolioError};
use rental_data::input::parse_amount;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("edit '{0}' must look like <apartment>.<field>=<value>")]
    Malformed(String),

    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("no apartment named '{0}'")]
    UnknownApartment(String),

    #[error(transparent)]
    Portfolio(#[from] PortfolioError),
}

/// One `--set` edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEdit {
    pub apartment: String,
    pub patch: ApartmentPatch,
}

impl FromStr for FieldEdit {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || EditError::Malformed(s.to_string());

        let (target, value) = s.split_once('=').ok_or_else(malformed)?;
        // Apartment names may contain dots; the field never does.
        let (apartment, field) = target.rsplit_once('.').ok_or_else(malformed)?;
        let apartment = apartment.trim();
        if apartment.is_empty() {
            return Err(malformed());
        }

        let mut patch = ApartmentPatch::default();
        match field.trim() {
            "name" => patch.name = Some(value.trim().to_string()),
            "monthly_rate" => patch.monthly_rate = Some(parse_amount(value)),
            "occupancy" => patch.occupancy = Some(parse_amount(value)),
            "operating_expenses" => patch.operating_expenses = Some(parse_amount(value)),
            "property_tax" => patch.property_tax = Some(parse_amount(value)),
            "income_tax" => patch.income_tax = Some(parse_amount(value)),
            "loan_monthly" => patch.loan_monthly = Some(parse_amount(value)),
            other => return Err(EditError::UnknownField(other.to_string())),
        }

        Ok(Self {
            apartment: apartment.to_string(),
            patch,
        })
    }
}

impl FieldEdit {
    /// Applies the edit to the first apartment with the matching name.
    pub fn apply(
        self,
        portfolio: &mut Portfolio,
    ) -> Result<(), EditError> {
        let id = portfolio
            .find_by_name(&self.apartment)
            .map(|a| a.id)
            .ok_or_else(|| EditError::UnknownApartment(self.apartment.clone()))?;
        portfolio.update_apartment(id, self.patch)?;
        Ok(())
    }
}

/// Removes the first apartment with the given name.
pub fn remove_by_name(
    portfolio: &mut Portfolio,
    name: &str,
) -> Result<(), EditError> {
    let id = portfolio
        .find_by_name(name)
        .map(|a| a.id)
        .ok_or_else(|| EditError::UnknownApartment(name.to_string()))?;
    portfolio.remove_apartment(id)?;
    Ok(())
}
