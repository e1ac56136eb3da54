pub mod analytics;
pub mod dividend;
pub mod holding;
pub mod performance;
pub mod portfolio;
pub mod transaction;
