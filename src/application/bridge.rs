//! Configuration round-trip use case
//!
//! Binds the three lifecycle events the host delivers (ready,
//! configuration requested, configuration closed) to the settings store, the
//! external surface and the device messenger. Each handler's decision is
//! also exposed as a pure planning function so hosts and tests can inspect
//! what would happen without touching any port.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use tracing::{debug, info, warn};
use url::Url;

use crate::domain::error::PayloadError;
use crate::domain::session::{ConfigSession, InvalidStateTransition, SessionState};
use crate::domain::settings::{ClosureResponse, ConfigurationPayload, DateFormat, SettingsRecord};

use super::ports::{AppMessenger, ExternalSurface, SettingsStore};

/// Query parameter carrying the current date format to the configuration page
pub const DATEFORMAT_PARAM: &str = "dateformat";

/// Side effect the bridge performs against a port
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeAction {
    /// Overwrite the stored settings record
    Persist(SettingsRecord),
    /// Deliver settings to the watchface
    SendMessage(ConfigurationPayload),
}

/// Why a closure produced no side effects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    Empty,
    Cancelled,
    Unchanged,
    Malformed(PayloadError),
}

impl IgnoreReason {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Cancelled => "cancelled",
            Self::Unchanged => "unchanged",
            Self::Malformed(_) => "malformed",
        }
    }
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(e) => write!(f, "malformed ({})", e),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

/// What a closure response calls for
#[derive(Debug, Clone, PartialEq)]
pub enum ClosurePlan {
    Ignore(IgnoreReason),
    Apply {
        record: SettingsRecord,
        message: ConfigurationPayload,
    },
}

impl ClosurePlan {
    /// Side effects in execution order: persist first, then forward
    pub fn actions(&self) -> Vec<BridgeAction> {
        match self {
            Self::Ignore(_) => Vec::new(),
            Self::Apply { record, message } => vec![
                BridgeAction::Persist(record.clone()),
                BridgeAction::SendMessage(message.clone()),
            ],
        }
    }
}

/// Result of handling a closure.
///
/// Never an error: persistence and delivery failures are reported here and
/// otherwise swallowed.
#[derive(Debug, Clone, PartialEq)]
pub enum ClosureOutcome {
    Ignored(IgnoreReason),
    Applied {
        dateformat: Option<DateFormat>,
        persisted: bool,
        forwarded: bool,
    },
}

impl ClosureOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Build the configuration page URL for a date format.
///
/// Any query already on the base URL is replaced; `dateformat` is the only
/// parameter.
pub fn configuration_url(base: &Url, dateformat: DateFormat) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    url.query_pairs_mut()
        .append_pair(DATEFORMAT_PARAM, &dateformat.to_string());
    url
}

/// Decide which URL a configuration request opens, given the stored record
pub fn plan_configuration_request(base: &Url, stored: Option<&SettingsRecord>) -> Url {
    let dateformat = stored
        .map(SettingsRecord::dateformat_or_default)
        .unwrap_or_default();
    configuration_url(base, dateformat)
}

/// Decide what a closure response calls for
pub fn plan_closure(response: Option<&str>) -> ClosurePlan {
    match ClosureResponse::classify(response) {
        ClosureResponse::Empty => ClosurePlan::Ignore(IgnoreReason::Empty),
        ClosureResponse::Cancelled => ClosurePlan::Ignore(IgnoreReason::Cancelled),
        ClosureResponse::Unchanged => ClosurePlan::Ignore(IgnoreReason::Unchanged),
        ClosureResponse::Submitted(text) => match ConfigurationPayload::parse(text) {
            Ok(message) => ClosurePlan::Apply {
                record: SettingsRecord::from_raw(text),
                message,
            },
            Err(e) => ClosurePlan::Ignore(IgnoreReason::Malformed(e)),
        },
    }
}

/// Configuration bridge between the host, the settings store, the
/// configuration page and the watchface
pub struct ConfigurationBridge<S, O, M>
where
    S: SettingsStore,
    O: ExternalSurface,
    M: AppMessenger,
{
    store: S,
    surface: O,
    messenger: M,
    base_url: Url,
    session: Mutex<ConfigSession>,
}

impl<S, O, M> ConfigurationBridge<S, O, M>
where
    S: SettingsStore,
    O: ExternalSurface,
    M: AppMessenger,
{
    /// Create a new bridge
    pub fn new(store: S, surface: O, messenger: M, base_url: Url) -> Self {
        Self {
            store,
            surface,
            messenger,
            base_url,
            session: Mutex::new(ConfigSession::new()),
        }
    }

    /// Settings store backing this bridge
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Device messenger backing this bridge
    pub fn messenger(&self) -> &M {
        &self.messenger
    }

    /// Configuration page base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Current session state
    pub fn session_state(&self) -> SessionState {
        self.with_session(|s| s.state())
    }

    /// Host reports the companion is ready. Nothing to initialise yet.
    pub fn on_ready(&self) {
        debug!("companion ready");
    }

    /// Host asks for the configuration page.
    ///
    /// Always yields a URL; opening it is best-effort.
    pub async fn on_configuration_requested(&self) -> Url {
        debug!("configuration requested");

        let stored = self.store.load().await;
        if let Some(ref record) = stored {
            debug!(settings = record.as_str(), "loaded stored settings");
        }

        let url = plan_configuration_request(&self.base_url, stored.as_ref());
        self.transition(ConfigSession::open);

        if let Err(e) = self.surface.open_url(&url).await {
            warn!(error = %e, "could not open configuration page");
        }

        url
    }

    /// Host reports the configuration page closed with `response`
    pub async fn on_configuration_closed(&self, response: Option<&str>) -> ClosureOutcome {
        debug!(response = response.unwrap_or_default(), "configuration closed");

        // A closure may arrive in a fresh process, with no open seen here
        self.transition(|s| {
            if !s.is_awaiting_closure() {
                s.reset();
            }
            s.open()
        });

        let plan = plan_closure(response);
        let dateformat = match &plan {
            ClosurePlan::Ignore(reason) => {
                debug!(%reason, "closure ignored");
                self.transition(ConfigSession::ignore);
                return ClosureOutcome::Ignored(reason.clone());
            }
            ClosurePlan::Apply { record, message } => {
                info!(settings = record.as_str(), "settings changed");
                message.dateformat()
            }
        };

        let mut persisted = false;
        let mut forwarded = false;
        for action in plan.actions() {
            match action {
                BridgeAction::Persist(record) => {
                    self.transition(ConfigSession::begin_persisting);
                    persisted = self.persist(&record).await;
                }
                BridgeAction::SendMessage(message) => {
                    self.transition(ConfigSession::begin_forwarding);
                    forwarded = self.forward(&message).await;
                }
            }
        }

        self.transition(ConfigSession::complete);
        ClosureOutcome::Applied {
            dateformat,
            persisted,
            forwarded,
        }
    }

    async fn persist(&self, record: &SettingsRecord) -> bool {
        match self.store.save(record).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "settings not persisted");
                false
            }
        }
    }

    async fn forward(&self, message: &ConfigurationPayload) -> bool {
        match self.messenger.send_app_message(message).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "settings not forwarded to device");
                false
            }
        }
    }

    fn with_session<T>(&self, f: impl FnOnce(&mut ConfigSession) -> T) -> T {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }

    fn transition(
        &self,
        f: impl FnOnce(&mut ConfigSession) -> Result<(), InvalidStateTransition>,
    ) {
        self.with_session(|session| {
            if let Err(e) = f(session) {
                warn!(error = %e, "resetting configuration session");
                session.reset();
            }
        });
    }
}
