//! Storage backends for the cart slot.
//!
//! # Backends
//!
//! - [`MemoryStorage`] - In-process slot map, used by tests and short-lived pages
//! - [`FileStorage`] - JSON file on disk, survives between CLI invocations the
//!   way `localStorage` survives page reloads

mod file;
mod memory;

pub use file::{FileStorage, StorageError};
pub use memory::MemoryStorage;
