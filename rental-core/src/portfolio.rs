//! In-memory list of apartments being planned.
//!
//! The portfolio owns the editable records and hands an immutable view of
//! them to the calculations on every [`Portfolio::evaluate`] call. Nothing
//! is cached between evaluations.

use thiserror::Error;
use tracing::debug;

use crate::calculations::{RentalWaterfall, aggregate};
use crate::{
    ApartmentId, ApartmentPatch, ApartmentRecord, NewApartment, PortfolioReport, TaxBasePolicy,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PortfolioError {
    #[error("no apartment with id {0}")]
    UnknownApartment(ApartmentId),
}

/// Ordered collection of apartments with add, update and remove by id.
///
/// Order is display order only; it has no effect on the totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Portfolio {
    apartments: Vec<ApartmentRecord>,
    next_id: u64,
}

impl Portfolio {
    /// An empty portfolio.
    pub fn new() -> Self {
        Self::default()
    }

    /// The three-unit building the planner starts with.
    pub fn with_defaults() -> Self {
        Self::from_new(NewApartment::default_building())
    }

    pub fn from_new(apartments: impl IntoIterator<Item = NewApartment>) -> Self {
        let mut portfolio = Self::new();
        for apt in apartments {
            portfolio.insert(apt);
        }
        portfolio
    }

    /// Wraps records coming from elsewhere. Ids are reassigned so they are
    /// unique within this portfolio.
    pub fn from_records(records: impl IntoIterator<Item = ApartmentRecord>) -> Self {
        let mut portfolio = Self::new();
        for record in records {
            let id = portfolio.allocate_id();
            portfolio.apartments.push(ApartmentRecord { id, ..record });
        }
        portfolio
    }

    pub fn apartments(&self) -> &[ApartmentRecord] {
        &self.apartments
    }

    pub fn len(&self) -> usize {
        self.apartments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apartments.is_empty()
    }

    pub fn get(
        &self,
        id: ApartmentId,
    ) -> Option<&ApartmentRecord> {
        self.apartments.iter().find(|a| a.id == id)
    }

    /// First apartment whose name matches exactly.
    pub fn find_by_name(
        &self,
        name: &str,
    ) -> Option<&ApartmentRecord> {
        self.apartments.iter().find(|a| a.name == name)
    }

    /// Appends a unit with the default parameters and returns its id.
    pub fn add_apartment(&mut self) -> ApartmentId {
        self.insert(NewApartment::default())
    }

    /// Appends a fully specified unit and returns its id.
    pub fn insert(
        &mut self,
        new: NewApartment,
    ) -> ApartmentId {
        let id = self.allocate_id();
        debug!(%id, name = %new.name, "adding apartment");
        self.apartments.push(ApartmentRecord::from_new(id, new));
        id
    }

    /// Merges `patch` into the apartment with the given id.
    ///
    /// # Errors
    ///
    /// [`PortfolioError::UnknownApartment`] if no apartment has that id.
    pub fn update_apartment(
        &mut self,
        id: ApartmentId,
        patch: ApartmentPatch,
    ) -> Result<(), PortfolioError> {
        let apt = self
            .apartments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(PortfolioError::UnknownApartment(id))?;

        debug!(%id, ?patch, "updating apartment");
        apt.apply(patch);
        Ok(())
    }

    /// Removes the apartment with the given id and returns it.
    ///
    /// # Errors
    ///
    /// [`PortfolioError::UnknownApartment`] if no apartment has that id.
    pub fn remove_apartment(
        &mut self,
        id: ApartmentId,
    ) -> Result<ApartmentRecord, PortfolioError> {
        let index = self
            .apartments
            .iter()
            .position(|a| a.id == id)
            .ok_or(PortfolioError::UnknownApartment(id))?;

        let removed = self.apartments.remove(index);
        debug!(%id, name = %removed.name, "removed apartment");
        Ok(removed)
    }

    /// Derives every apartment under `policy` and sums the results.
    pub fn evaluate(
        &self,
        policy: TaxBasePolicy,
    ) -> PortfolioReport {
        let waterfall = RentalWaterfall::new(policy);
        let apartments: Vec<_> = self.apartments.iter().map(|a| waterfall.derive(a)).collect();
        let totals = aggregate(&apartments);

        debug!(
            policy = %waterfall.policy(),
            apartments = apartments.len(),
            cash_flow = %totals.cash_flow,
            "evaluated portfolio"
        );

        PortfolioReport {
            policy,
            apartments,
            totals,
        }
    }

    fn allocate_id(&mut self) -> ApartmentId {
        let id = ApartmentId::new(self.next_id);
        self.next_id += 1;
        id
    }
}
