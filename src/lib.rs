pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{CliConfig, EmbeddedSource, FileSource};
pub use crate::core::engine::RecoveryEngine;
pub use crate::core::pipeline::RecoveryPipeline;
pub use crate::utils::error::{RecoverError, Result};
