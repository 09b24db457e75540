//! User roles recognized by the ShopGate platform.

use serde::{Deserialize, Serialize};

/// Role carried inside a token and consumed by the authorization layer.
///
/// The session service never interprets the role; it only transports it
/// from issuance to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A shopper with a regular storefront account
    Client,
    /// A back-office administrator
    Admin,
}

impl Role {
    /// String form used in token claims and database columns
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Client).unwrap(), "\"client\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }

    #[test]
    fn test_role_rejects_unknown_values() {
        let parsed: Result<Role, _> = serde_json::from_str("\"superuser\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Client.to_string(), "client");
        assert_eq!(Role::Admin.to_string(), "admin");
    }
}
