//! CreateCheckinHandler - Command handler for recording a check-in.

use std::sync::Arc;

use crate::domain::checkin::{Checkin, CheckinError, NewCheckin};
use crate::domain::foundation::{CheckinId, UserId};
use crate::ports::CheckinRepository;

/// Command to record a progress check-in.
#[derive(Debug, Clone)]
pub struct CreateCheckinCommand {
    pub user_id: UserId,
    pub checkin: NewCheckin,
}

/// Handler for recording check-ins.
///
/// The referenced goal is deliberately not checked for existence or
/// ownership; a check-in is a journal entry and stands on its own.
pub struct CreateCheckinHandler {
    checkins: Arc<dyn CheckinRepository>,
}

impl CreateCheckinHandler {
    pub fn new(checkins: Arc<dyn CheckinRepository>) -> Self {
        Self { checkins }
    }

    pub async fn handle(&self, cmd: CreateCheckinCommand) -> Result<Checkin, CheckinError> {
        let checkin = Checkin::record(CheckinId::generate(), cmd.user_id, cmd.checkin);
        self.checkins.insert(&checkin).await?;
        Ok(checkin)
    }
}
