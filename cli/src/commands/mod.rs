//! Command implementations

pub mod check;
pub mod get;
pub mod schema;
pub mod validate;
pub mod version;
