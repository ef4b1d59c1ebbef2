//! Settings domain module

mod date_format;
mod payload;
mod record;

pub use date_format::DateFormat;
pub use payload::{
    ClosureResponse, ConfigurationPayload, CANCELLED_SENTINEL, DATEFORMAT_KEY,
    UNCHANGED_SENTINEL,
};
pub use record::SettingsRecord;
