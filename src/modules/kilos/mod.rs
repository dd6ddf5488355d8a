pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{BranchRef, MonthlyKilos, OrderKilos, PosOrder};
pub use services::{aggregate_kilos, normalize_branch, OdooClient, OdooSession};
