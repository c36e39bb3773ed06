pub mod config;
pub mod error;
pub mod logging;

pub mod classify;
pub mod dedup;
pub mod format;
pub mod pipeline;
pub mod probe;
pub mod url_model;

pub use error::{Result, SiftError};
