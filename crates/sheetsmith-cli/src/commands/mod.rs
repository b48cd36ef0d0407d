//! Command implementations.

pub mod convert;
pub mod schema;

pub use self::convert::{execute_convert, run_conversion};
pub use self::schema::execute_schema;
