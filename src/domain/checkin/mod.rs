//! Check-in domain: append-only progress journal entries.

mod errors;
mod record;

pub use errors::CheckinError;
pub use record::{Checkin, NewCheckin};
