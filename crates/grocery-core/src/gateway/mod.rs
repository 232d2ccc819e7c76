//! Gateway Layer
//!
//! Remote row-store abstraction and its implementations.

mod config;
mod memory;
mod postgrest;
mod traits;

pub use config::{GatewayConfig, DEFAULT_TABLE};
pub use memory::{GatewayCall, MemoryGateway};
pub use postgrest::PostgrestGateway;
pub use traits::Gateway;
