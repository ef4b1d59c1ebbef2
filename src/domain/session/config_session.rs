//! Configuration session state machine

use std::fmt;
use thiserror::Error;

/// Configuration session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    #[default]
    Idle,
    AwaitingClosure,
    Persisting,
    Forwarding,
}

impl SessionState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AwaitingClosure => "awaiting-closure",
            Self::Persisting => "persisting",
            Self::Forwarding => "forwarding",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while in {current_state} state")]
pub struct InvalidStateTransition {
    pub current_state: SessionState,
    pub action: String,
}

/// One configuration round trip.
///
/// State machine:
///   IDLE -> AWAITING_CLOSURE (open)
///   AWAITING_CLOSURE -> AWAITING_CLOSURE (open, page reopened)
///   AWAITING_CLOSURE -> IDLE (ignore: empty, cancelled, unchanged, malformed)
///   AWAITING_CLOSURE -> PERSISTING (begin_persisting)
///   PERSISTING -> FORWARDING (begin_forwarding)
///   FORWARDING -> IDLE (complete)
///
/// Nothing is carried from one session to the next.
#[derive(Debug, Default)]
pub struct ConfigSession {
    state: SessionState,
}

impl ConfigSession {
    /// Create a new session in idle state
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    /// Get the current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == SessionState::Idle
    }

    pub fn is_awaiting_closure(&self) -> bool {
        self.state == SessionState::AwaitingClosure
    }

    /// The configuration page was opened
    pub fn open(&mut self) -> Result<(), InvalidStateTransition> {
        match self.state {
            SessionState::Idle | SessionState::AwaitingClosure => {
                self.state = SessionState::AwaitingClosure;
                Ok(())
            }
            _ => Err(self.invalid("open configuration")),
        }
    }

    /// The page closed with nothing to apply
    pub fn ignore(&mut self) -> Result<(), InvalidStateTransition> {
        self.expect(SessionState::AwaitingClosure, "ignore closure")?;
        self.state = SessionState::Idle;
        Ok(())
    }

    /// A valid payload arrived and is about to be stored
    pub fn begin_persisting(&mut self) -> Result<(), InvalidStateTransition> {
        self.expect(SessionState::AwaitingClosure, "persist settings")?;
        self.state = SessionState::Persisting;
        Ok(())
    }

    /// Settings are stored and about to be sent to the device
    pub fn begin_forwarding(&mut self) -> Result<(), InvalidStateTransition> {
        self.expect(SessionState::Persisting, "forward settings")?;
        self.state = SessionState::Forwarding;
        Ok(())
    }

    /// The device message was handed off
    pub fn complete(&mut self) -> Result<(), InvalidStateTransition> {
        self.expect(SessionState::Forwarding, "complete session")?;
        self.state = SessionState::Idle;
        Ok(())
    }

    /// Drop back to idle regardless of the current state
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
    }

    fn expect(&self, state: SessionState, action: &str) -> Result<(), InvalidStateTransition> {
        if self.state != state {
            return Err(self.invalid(action));
        }
        Ok(())
    }

    fn invalid(&self, action: &str) -> InvalidStateTransition {
        InvalidStateTransition {
            current_state: self.state,
            action: action.to_string(),
        }
    }
}
