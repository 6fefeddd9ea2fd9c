//! Service implementations
//!
//! Real implementations of all service traits for production use

pub mod memory_store;

// Re-export service implementations
pub use memory_store::MemoryStore;

#[cfg(test)]
mod tests;
