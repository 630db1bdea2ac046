pub mod batch;
pub mod captioner;
pub mod config;
pub mod error;
pub mod locator;
pub mod server;

pub use error::{Error, Result};
