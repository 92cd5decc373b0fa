pub mod catalog;
pub mod config;
mod csv_file;
pub mod daily_log;
pub mod error;
pub mod goals;
pub mod models;
pub mod nutrition;
pub mod seed;
pub mod service;
pub mod validate;

pub use error::{Error, Result};
