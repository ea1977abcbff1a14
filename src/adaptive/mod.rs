#![allow(dead_code)]

pub mod adapt;
pub mod config;
pub mod difficulty;
pub mod engine;
pub mod path;
pub mod performance;
pub mod quiz;
pub mod scorer;
pub mod types;

pub use config::AdaptiveConfig;
pub use engine::AdaptiveEngine;
#[allow(unused_imports)]
pub use types::*;
