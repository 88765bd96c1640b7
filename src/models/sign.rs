use serde::Serialize;

/// Outcome of a single sign event.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum SignDirection {
    In,
    Out,
}

impl SignDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignDirection::In => "in",
            SignDirection::Out => "out",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, SignDirection::In)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, SignDirection::Out)
    }
}

/// Whether a member is currently inside the meeting.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub enum Presence {
    SignedIn,
    #[default]
    SignedOut,
}

impl Presence {
    /// State after one more sign event, plus the direction of that event.
    pub fn toggle(self) -> (Presence, SignDirection) {
        match self {
            Presence::SignedOut => (Presence::SignedIn, SignDirection::In),
            Presence::SignedIn => (Presence::SignedOut, SignDirection::Out),
        }
    }
}
