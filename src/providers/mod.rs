//! Data providers for fetching slot information

pub mod rpc_provider;

// Re-export for convenience
pub use rpc_provider::RpcSlotProvider;
