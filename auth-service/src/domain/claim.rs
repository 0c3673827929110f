use chrono::{DateTime, Utc};

/// Identity plus validity window carried by a token.
///
/// Only the issuer and the verifier build these, so `not_before <= expires_at`
/// always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    subject: String,
    not_before: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl Claim {
    pub(crate) fn new(
        subject: String,
        not_before: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Option<Self> {
        (not_before <= expires_at).then_some(Self {
            subject,
            not_before,
            expires_at,
        })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn not_before(&self) -> DateTime<Utc> {
        self.not_before
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}
