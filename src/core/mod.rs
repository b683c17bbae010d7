pub mod demo;
pub mod gate;
pub mod health;
pub mod runner;
pub mod scenes;
pub mod summary;

pub use crate::domain::model::{CallResult, DemoScene, HttpCall, ServiceSpec};
pub use crate::domain::ports::Transport;
pub use crate::utils::error::Result;
