//! Open Finance consent model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A consent granted by the user for an Open Finance item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consent {
    /// Primary identifier
    pub id: String,
    /// Item the consent was granted for
    pub item_id: String,
    /// Products included
    pub products: Option<Vec<String>>,
    /// Open Finance permissions included
    pub open_finance_permissions_granted: Option<Vec<String>>,
    /// When the consent was created
    pub created_at: Option<DateTime<Utc>>,
    /// When the consent expires
    pub expires_at: Option<DateTime<Utc>>,
    /// When the consent was revoked
    pub revoked_at: Option<DateTime<Utc>>,
}

impl Consent {
    /// Returns `true` if the consent has been revoked.
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    /// Returns `true` if the consent is neither revoked nor expired at `now`.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        !self.is_revoked() && self.expires_at.map_or(true, |expires| expires > now)
    }
}
