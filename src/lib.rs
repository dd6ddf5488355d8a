//! Kiloreport
//!
//! A small reporting API over an Odoo instance: kilos sold per point-of-sale
//! branch, per day or per month, sourced from `pos.order` records.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::kilos;
