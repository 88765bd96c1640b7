//! In-memory attendance state for one session.

use crate::errors::{AppError, AppResult};
use crate::models::member::Member;
use crate::models::record::SessionRecord;
use std::collections::HashMap;

/// Proof that an identifier was validated against a [`SessionTable`].
///
/// Only the table hands these out, so holding one means the member exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberKey(usize);

/// One record per roster member, in roster order.
#[derive(Debug, Clone)]
pub struct SessionTable {
    members: Vec<Member>,
    records: Vec<SessionRecord>,
    index: HashMap<i64, usize>,
}

impl SessionTable {
    pub fn new(members: &[Member]) -> Self {
        let index = members
            .iter()
            .enumerate()
            .map(|(i, m)| (m.id, i))
            .collect();

        Self {
            members: members.to_vec(),
            records: members.iter().map(|m| SessionRecord::new(m.id)).collect(),
            index,
        }
    }

    /// Interpret free text as a member identifier.
    pub fn validate(&self, raw: &str) -> AppResult<MemberKey> {
        let trimmed = raw.trim();
        let id: i64 = trimmed
            .parse()
            .map_err(|_| AppError::InvalidId(trimmed.to_string()))?;
        self.key_for(id).ok_or(AppError::UnknownMember(id))
    }

    pub fn key_for(&self, id: i64) -> Option<MemberKey> {
        self.index.get(&id).copied().map(MemberKey)
    }

    pub fn member(&self, key: MemberKey) -> &Member {
        &self.members[key.0]
    }

    pub fn record(&self, key: MemberKey) -> &SessionRecord {
        &self.records[key.0]
    }

    pub(crate) fn record_mut(&mut self, key: MemberKey) -> &mut SessionRecord {
        &mut self.records[key.0]
    }

    /// Record by raw identifier, for callers that did not go through [`validate`](Self::validate).
    pub fn record_by_id(&self, id: i64) -> Option<&SessionRecord> {
        self.key_for(id).map(|k| self.record(k))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Member, &SessionRecord)> {
        self.members.iter().zip(self.records.iter())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Members still signed in.
    pub fn signed_in(&self) -> impl Iterator<Item = &Member> {
        self.iter()
            .filter(|(_, r)| r.is_signed_in())
            .map(|(m, _)| m)
    }
}
