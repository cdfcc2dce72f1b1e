pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod lookup;
pub mod server;
pub mod store;
pub mod tracing;
pub mod types;

pub use config::{LookupConfig, StrategyWeights};
pub use error::{LookupError, StoreError};
pub use lookup::LookupEngine;
pub use server::LookupServer;
pub use store::{LocationStore, MemoryStore, PrefixField, SortOrder};
pub use types::{Location, LocationType, LookupHit};
