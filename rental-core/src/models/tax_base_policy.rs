use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which amount the income tax percentage is levied on.
///
/// Applies to every apartment in one evaluation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxBasePolicy {
    /// Tax on gross annual rent, whatever the rest of the waterfall does.
    #[default]
    GrossAnnual,
    /// Tax on the cash flow left after debt service; losses owe nothing.
    PreDebtCashFlow,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tax base '{0}' (expected 'gross' or 'pre-debt')")]
pub struct ParseTaxBasePolicyError(pub String);

impl TaxBasePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GrossAnnual => "gross",
            Self::PreDebtCashFlow => "pre-debt",
        }
    }

    /// Human readable label used in report headers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::GrossAnnual => "gross annual rent",
            Self::PreDebtCashFlow => "cash flow before income tax",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gross" | "gross-annual" | "brut" => Some(Self::GrossAnnual),
            "pre-debt" | "pre-debt-cash-flow" | "predebtcf" => Some(Self::PreDebtCashFlow),
            _ => None,
        }
    }
}

impl FromStr for TaxBasePolicy {
    type Err = ParseTaxBasePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseTaxBasePolicyError(s.to_string()))
    }
}

impl fmt::Display for TaxBasePolicy {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
