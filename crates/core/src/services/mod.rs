pub mod analytics_service;
pub mod holdings_service;
pub mod performance_service;
pub mod transaction_service;
