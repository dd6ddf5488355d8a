use crate::core::Result;

pub mod odoo;
pub mod server;

pub use odoo::OdooConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    /// `None` when any of the `ODOO_*` variables is missing; the endpoints
    /// then answer 500 until the credentials are provided.
    pub odoo: Option<OdooConfig>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Ok(Config {
            server: ServerConfig::from_env()?,
            odoo: OdooConfig::from_env(),
        })
    }
}
