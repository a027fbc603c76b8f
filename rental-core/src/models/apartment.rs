use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Name given to a unit added without one.
pub const NEW_APARTMENT_NAME: &str = "Nouvel Appartement";

/// Opaque identifier of an apartment within one portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApartmentId(u64);

impl ApartmentId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ApartmentId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One rental unit and its editable financial parameters.
///
/// Percentage fields hold whole percentages (`15` means 15%). Nothing here
/// is range-checked: an occupancy above 100 scales rent up, a negative rent
/// flows through the waterfall as a loss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApartmentRecord {
    pub id: ApartmentId,
    pub name: String,

    /// Monthly gross rent.
    pub monthly_rate: Decimal,
    /// Share of the year the unit is let, in percent.
    pub occupancy: Decimal,
    /// Operating costs, in percent of gross annual rent.
    pub operating_expenses: Decimal,
    /// Property tax, in percent of gross annual rent.
    pub property_tax: Decimal,
    /// Income tax rate applied to the tax base, in percent.
    pub income_tax: Decimal,
    /// Monthly loan repayment.
    pub loan_monthly: Decimal,
}

impl ApartmentRecord {
    pub fn from_new(
        id: ApartmentId,
        new: NewApartment,
    ) -> Self {
        Self {
            id,
            name: new.name,
            monthly_rate: new.monthly_rate,
            occupancy: new.occupancy,
            operating_expenses: new.operating_expenses,
            property_tax: new.property_tax,
            income_tax: new.income_tax,
            loan_monthly: new.loan_monthly,
        }
    }

    /// Overwrites every field present in `patch`, keeping the rest.
    pub fn apply(
        &mut self,
        patch: ApartmentPatch,
    ) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(v) = patch.monthly_rate {
            self.monthly_rate = v;
        }
        if let Some(v) = patch.occupancy {
            self.occupancy = v;
        }
        if let Some(v) = patch.operating_expenses {
            self.operating_expenses = v;
        }
        if let Some(v) = patch.property_tax {
            self.property_tax = v;
        }
        if let Some(v) = patch.income_tax {
            self.income_tax = v;
        }
        if let Some(v) = patch.loan_monthly {
            self.loan_monthly = v;
        }
    }
}

/// For creating new apartments (no id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewApartment {
    pub name: String,
    pub monthly_rate: Decimal,
    pub occupancy: Decimal,
    pub operating_expenses: Decimal,
    pub property_tax: Decimal,
    pub income_tax: Decimal,
    pub loan_monthly: Decimal,
}

impl NewApartment {
    /// A unit with the given name and the defaults used for freshly added
    /// units: no rent, fully occupied, 15% operating costs, 5% property tax,
    /// 10% income tax, no loan.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            monthly_rate: Decimal::ZERO,
            occupancy: Decimal::ONE_HUNDRED,
            operating_expenses: Decimal::from(15),
            property_tax: Decimal::from(5),
            income_tax: Decimal::TEN,
            loan_monthly: Decimal::ZERO,
        }
    }

    pub fn with_rent(
        mut self,
        monthly_rate: Decimal,
        loan_monthly: Decimal,
    ) -> Self {
        self.monthly_rate = monthly_rate;
        self.loan_monthly = loan_monthly;
        self
    }

    /// The three-unit building the planner opens with.
    pub fn default_building() -> Vec<Self> {
        vec![
            Self::named("Appartement RDC").with_rent(Decimal::from(850), Decimal::from(650)),
            Self::named("Appartement 1").with_rent(Decimal::from(1000), Decimal::from(730)),
            Self::named("Appartement 2").with_rent(Decimal::from(450), Decimal::ZERO),
        ]
    }
}

impl Default for NewApartment {
    fn default() -> Self {
        Self::named(NEW_APARTMENT_NAME)
    }
}

/// Partial update of an [`ApartmentRecord`]; `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApartmentPatch {
    pub name: Option<String>,
    pub monthly_rate: Option<Decimal>,
    pub occupancy: Option<Decimal>,
    pub operating_expenses: Option<Decimal>,
    pub property_tax: Option<Decimal>,
    pub income_tax: Option<Decimal>,
    pub loan_monthly: Option<Decimal>,
}
