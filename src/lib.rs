//! RetroClock companion - configuration bridge for the RetroClock watchface
//!
//! This crate opens the watchface's web configuration page pre-filled with
//! the stored settings, applies the page's response, persists it and relays
//! it to the watch.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Settings value objects, closure sentinels, session state machine, errors
//! - **Application**: The configuration bridge use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (file store, browser, stdout messenger, config)
//! - **CLI**: Host runtime binding, argument parsing and logging

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
