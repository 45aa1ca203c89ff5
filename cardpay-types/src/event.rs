//! Account lifecycle event envelope shared by both services.
//!
//! The JSON shape on the wire is:
//!
//! ```json
//! { "type": "account.created", "account_id": "<uuid>", "status": "ACTIVE" }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, AccountStatus};

/// Kind discriminator of an account event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountEventKind {
    #[serde(rename = "account.created")]
    Created,
    #[serde(rename = "account.status_changed")]
    StatusChanged,
}

impl std::fmt::Display for AccountEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AccountEventKind::Created => "account.created",
            AccountEventKind::StatusChanged => "account.status_changed",
        };
        f.write_str(s)
    }
}

/// The stateless envelope the account service produces and the card
/// service consumes. Consumers must tolerate duplicates and reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountEvent {
    #[serde(rename = "type")]
    pub kind: AccountEventKind,
    pub account_id: AccountId,
    pub status: AccountStatus,
}

impl AccountEvent {
    pub fn created(account_id: AccountId, status: AccountStatus) -> Self {
        Self {
            kind: AccountEventKind::Created,
            account_id,
            status,
        }
    }

    pub fn status_changed(account_id: AccountId, status: AccountStatus) -> Self {
        Self {
            kind: AccountEventKind::StatusChanged,
            account_id,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let id = AccountId::new();
        let event = AccountEvent::created(id, AccountStatus::Active);
        let json: serde_json::Value = serde_json::to_value(event).unwrap();

        assert_eq!(json["type"], "account.created");
        assert_eq!(json["account_id"], id.to_string());
        assert_eq!(json["status"], "ACTIVE");
    }

    #[test]
    fn test_status_changed_roundtrip() {
        let event = AccountEvent::status_changed(AccountId::new(), AccountStatus::Deleted);
        let bytes = serde_json::to_vec(&event).unwrap();
        let back: AccountEvent = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let raw = r#"{"type":"account.exploded","account_id":"1f0a2e9e-0000-0000-0000-000000000000","status":"ACTIVE"}"#;
        assert!(serde_json::from_str::<AccountEvent>(raw).is_err());
    }
}
