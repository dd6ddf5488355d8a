pub mod dates;
pub mod error;

pub use error::{AppError, Result};
