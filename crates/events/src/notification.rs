//! Notification messages handed to delivery sinks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockwatch_core::{DomainError, DomainResult, SubscriberId};

/// Where a subscriber wants to be reached.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "channel", content = "address", rename_all = "snake_case")]
pub enum Contact {
    Email(String),
    Mobile(String),
}

impl Contact {
    /// Email contact. The address only needs to look like `local@domain`.
    pub fn email(address: impl Into<String>) -> DomainResult<Self> {
        let address = address.into();
        let trimmed = address.trim();
        match trimmed.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self::Email(trimmed.to_string()))
            }
            _ => Err(DomainError::validation(format!(
                "invalid email address: {address:?}"
            ))),
        }
    }

    /// Mobile contact (phone number or messaging handle).
    pub fn mobile(handle: impl Into<String>) -> DomainResult<Self> {
        let handle = handle.into();
        if handle.trim().is_empty() {
            return Err(DomainError::validation("mobile handle cannot be empty"));
        }
        Ok(Self::Mobile(handle.trim().to_string()))
    }

    pub fn address(&self) -> &str {
        match self {
            Contact::Email(a) | Contact::Mobile(a) => a,
        }
    }

    pub fn channel(&self) -> &'static str {
        match self {
            Contact::Email(_) => "email",
            Contact::Mobile(_) => "mobile",
        }
    }
}

impl core::fmt::Display for Contact {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.address())
    }
}

/// Availability of an item at the moment a notification was rendered.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    BackInStock,
    OutOfStock,
}

/// A rendered, human-readable notification for one subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub subscriber: SubscriberId,
    pub recipient: Contact,
    pub item: String,
    pub availability: Availability,
    pub message: String,
    pub occurred_at: DateTime<Utc>,
}

impl Notification {
    /// Stable type identifier, used as a log field.
    pub fn event_type(&self) -> &'static str {
        match self.availability {
            Availability::BackInStock => "stock.item.back_in_stock",
            Availability::OutOfStock => "stock.item.out_of_stock",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_requires_local_and_domain_parts() {
        assert!(Contact::email("jane@example.com").is_ok());
        assert!(matches!(
            Contact::email("jane.example.com"),
            Err(DomainError::Validation(_))
        ));
        assert!(Contact::email("@example.com").is_err());
        assert!(Contact::email("jane@").is_err());
    }

    #[test]
    fn mobile_rejects_blank_handle() {
        assert!(matches!(Contact::mobile("  "), Err(DomainError::Validation(_))));
        assert_eq!(Contact::mobile(" Keshav ").unwrap().address(), "Keshav");
    }

    #[test]
    fn contact_serializes_with_channel_tag() {
        let json = serde_json::to_value(Contact::email("a@b.io").unwrap()).unwrap();
        assert_eq!(json["channel"], "email");
        assert_eq!(json["address"], "a@b.io");
    }

    #[test]
    fn event_type_follows_availability() {
        let n = Notification {
            subscriber: SubscriberId::new(),
            recipient: Contact::mobile("Keshav").unwrap(),
            item: "iphone".to_string(),
            availability: Availability::OutOfStock,
            message: String::new(),
            occurred_at: Utc::now(),
        };
        assert_eq!(n.event_type(), "stock.item.out_of_stock");
    }
}
