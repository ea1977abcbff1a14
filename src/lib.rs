#![allow(dead_code)]

pub mod adaptive;
pub mod logging;
pub mod services;
pub mod store;

pub use adaptive::config::AdaptiveConfig;
pub use adaptive::engine::{AdaptiveEngine, EngineError};
pub use store::{DocumentStore, MemoryStore, StoreError};
