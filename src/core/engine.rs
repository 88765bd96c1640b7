//! Sign-in/out state transition and credit calculation.

use crate::core::session::{MemberKey, SessionTable};
use crate::models::sign::SignDirection;
use chrono::{DateTime, Duration, Local};

/// Record a sign event for `key` at the current time.
pub fn sign(key: MemberKey, table: &mut SessionTable, required: Duration) -> SignDirection {
    sign_at(key, table, required, Local::now())
}

/// Record a sign event for `key` at `now`.
///
/// Appends `now` to the member's history and toggles their presence. When
/// the event closes a visit, the visit length is added to the running total
/// and credit is recomputed as `total >= required`. Opening a visit leaves
/// total and credit untouched.
pub fn sign_at(
    key: MemberKey,
    table: &mut SessionTable,
    required: Duration,
    now: DateTime<Local>,
) -> SignDirection {
    let record = table.record_mut(key);

    let opened_at = record.times.last().copied();
    record.times.push(now);

    let (presence, direction) = record.presence.toggle();
    record.presence = presence;

    if direction.is_out()
        && let Some(start) = opened_at
    {
        // clock adjustments can make the visit negative; count those as zero
        let visit = (now - start).max(Duration::zero());
        record.total += visit;
        record.credit = record.total >= required;
    }

    direction
}
