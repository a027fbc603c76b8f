mod apartment;
mod derived_apartment;
mod portfolio_totals;
mod tax_base_policy;

pub use apartment::{ApartmentId, ApartmentPatch, ApartmentRecord, NEW_APARTMENT_NAME, NewApartment};
pub use derived_apartment::DerivedApartment;
pub use portfolio_totals::{PortfolioReport, PortfolioTotals};
pub use tax_base_policy::{ParseTaxBasePolicyError, TaxBasePolicy};
