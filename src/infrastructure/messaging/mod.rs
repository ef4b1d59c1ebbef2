//! Device messaging infrastructure module

mod stdout;

pub use stdout::StdoutMessenger;
