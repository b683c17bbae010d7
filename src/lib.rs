pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::http::ReqwestTransport;
pub use crate::config::DemoConfig;
pub use crate::core::demo::DemoEngine;
pub use crate::utils::error::{DemoError, Result};
