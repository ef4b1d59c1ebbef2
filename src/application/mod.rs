//! Application layer - Use cases and port interfaces
//!
//! Contains the configuration round trip and the trait definitions
//! for external system interactions.

pub mod bridge;
pub mod ports;

// Re-export use cases
pub use bridge::{
    configuration_url, plan_closure, plan_configuration_request, BridgeAction, ClosureOutcome,
    ClosurePlan, ConfigurationBridge, IgnoreReason,
};
