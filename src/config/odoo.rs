use std::env;

/// Connection credentials for the upstream Odoo instance.
#[derive(Debug, Clone)]
pub struct OdooConfig {
    pub url: String,
    pub db: String,
    pub username: String,
    pub password: String,
}

impl OdooConfig {
    /// Read the four `ODOO_*` variables. Returns `None` if any is absent so
    /// the service can still start and report the gap per request.
    pub fn from_env() -> Option<Self> {
        let url = env::var("ODOO_URL").ok()?;
        let db = env::var("ODOO_DB").ok()?;
        let username = env::var("ODOO_USERNAME").ok()?;
        let password = env::var("ODOO_PASSWORD").ok()?;

        Some(Self {
            url,
            db,
            username,
            password,
        })
    }
}
