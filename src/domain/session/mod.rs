//! Configuration session domain module

mod config_session;

pub use config_session::{ConfigSession, InvalidStateTransition, SessionState};
