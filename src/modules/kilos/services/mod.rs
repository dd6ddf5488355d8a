pub mod aggregator;
pub mod odoo;

pub use aggregator::{aggregate_kilos, normalize_branch};
pub use odoo::{OdooClient, OdooSession};
