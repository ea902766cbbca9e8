pub mod config;
pub mod conflict;
pub mod error;
pub mod fetch;
pub mod installer;
pub mod lister;
pub mod registry;

pub use error::{Error, Result};
