use super::sign::Presence;
use chrono::{DateTime, Duration, Local};

/// Per-member attendance state for the running session.
///
/// `times` keeps the raw history of sign events in order; `presence` is the
/// explicit state used for control flow. The two always agree: an odd number
/// of timestamps means [`Presence::SignedIn`].
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub member_id: i64,
    pub times: Vec<DateTime<Local>>,
    pub presence: Presence,
    pub total: Duration,
    pub credit: bool,
}

impl SessionRecord {
    pub fn new(member_id: i64) -> Self {
        Self {
            member_id,
            times: Vec::new(),
            presence: Presence::SignedOut,
            total: Duration::zero(),
            credit: false,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.presence == Presence::SignedIn
    }

    /// Total time as fractional hours.
    pub fn hours_spent(&self) -> f64 {
        self.total.num_milliseconds() as f64 / 3_600_000.0
    }
}
