pub mod address;
pub mod address_status;
pub mod dashboard_stats;

pub use address::{is_valid_solana_address, Address, AddressError};
pub use address_status::{AddressStatus, ReportRequest, ReportResult, RiskLevel};
pub use dashboard_stats::{ActivityPoint, DashboardStats, NamedValue};
