pub mod calculations;
pub mod models;
pub mod portfolio;

pub use calculations::{aggregate, derive};
pub use models::*;
pub use portfolio::{Portfolio, PortfolioError};
