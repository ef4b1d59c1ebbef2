//! Settings storage infrastructure module

mod file;
mod memory;

pub use file::FileSettingsStore;
pub use memory::InMemorySettingsStore;
