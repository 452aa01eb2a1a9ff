use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Width the numeric part of a ticket label is padded to by default.
pub const DEFAULT_LABEL_WIDTH: usize = 3;

/// Service category a customer picks when requesting a ticket.
///
/// The set of recognized categories is closed. Anything else is still
/// accepted and kept verbatim in [`ServiceCategory::Other`], so the display
/// can show what was requested, but it always maps to the fallback prefix `X`.
///
/// # Examples
///
/// ```no_run
/// use server::model::ServiceCategory;
///
/// let general: ServiceCategory = "GENERAL".parse().unwrap();
/// assert_eq!(general.prefix(), 'G');
///
/// let vip: ServiceCategory = "VIP".parse().unwrap();
/// assert_eq!(vip.prefix(), 'X');
/// assert_eq!(vip.to_string(), "VIP");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ServiceCategory {
    General,
    Payments,
    Consultation,
    /// Unrecognized category, stored exactly as requested
    Other(String),
}

impl ServiceCategory {
    /// Single-letter prefix used when deriving a ticket label.
    pub fn prefix(&self) -> char {
        match self {
            ServiceCategory::General => 'G',
            ServiceCategory::Payments => 'P',
            ServiceCategory::Consultation => 'C',
            ServiceCategory::Other(_) => 'X',
        }
    }

    /// Category name as shown to customers and operators.
    pub fn as_str(&self) -> &str {
        match self {
            ServiceCategory::General => "GENERAL",
            ServiceCategory::Payments => "PAYMENTS",
            ServiceCategory::Consultation => "CONSULTATION",
            ServiceCategory::Other(name) => name,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ServiceCategory::Other(_))
    }
}

impl FromStr for ServiceCategory {
    type Err = Infallible;

    // Matching is exact; "general" is not GENERAL.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "GENERAL" => ServiceCategory::General,
            "PAYMENTS" => ServiceCategory::Payments,
            "CONSULTATION" => ServiceCategory::Consultation,
            other => ServiceCategory::Other(other.to_string()),
        })
    }
}

impl From<&str> for ServiceCategory {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(category) => category,
            Err(never) => match never {},
        }
    }
}

impl From<String> for ServiceCategory {
    fn from(value: String) -> Self {
        ServiceCategory::from(value.as_str())
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ServiceCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// A customer's place in line.
///
/// Tickets are created only by the queue manager. Callers always receive
/// clones, so nothing they do to a returned ticket reaches the queue.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct Ticket {
    /// Issuance number, starting at 1 and never reused
    pub id: u64,
    /// Display label such as `G001`
    pub label: String,
    /// Category the ticket was requested for
    pub service: ServiceCategory,
}

impl Ticket {
    pub(crate) fn new(id: u64, service: ServiceCategory, label_width: usize) -> Self {
        Self {
            id,
            label: derive_label(&service, id, label_width),
            service,
        }
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Snapshot of a single call event for the recent-calls board.
///
/// Records are detached from the ticket they describe and survive
/// the ticket being finished.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct CallRecord {
    pub label: String,
    pub service: ServiceCategory,
    /// When the ticket was called
    pub called_at: DateTime<Utc>,
}

impl CallRecord {
    pub(crate) fn for_ticket(ticket: &Ticket, called_at: DateTime<Utc>) -> Self {
        Self {
            label: ticket.label.clone(),
            service: ticket.service.clone(),
            called_at,
        }
    }
}

impl fmt::Display for CallRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} – {}", self.label, self.service)
    }
}

/// Builds a ticket label from the service prefix and the zero-padded id.
///
/// Ids wider than `width` are never truncated; the label simply grows.
pub fn derive_label(service: &ServiceCategory, id: u64, width: usize) -> String {
    format!("{}{:0width$}", service.prefix(), id, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_service_prefixes() {
        assert_eq!(ServiceCategory::General.prefix(), 'G');
        assert_eq!(ServiceCategory::Payments.prefix(), 'P');
        assert_eq!(ServiceCategory::Consultation.prefix(), 'C');
        assert_eq!(ServiceCategory::Other("VIP".to_string()).prefix(), 'X');
    }

    #[test]
    fn test_parse_is_exact_match() {
        assert_eq!(ServiceCategory::from("PAYMENTS"), ServiceCategory::Payments);
        assert_eq!(
            ServiceCategory::from("payments"),
            ServiceCategory::Other("payments".to_string())
        );
        assert_eq!(ServiceCategory::from(""), ServiceCategory::Other(String::new()));
    }

    #[test]
    fn test_unrecognized_category_keeps_its_name() {
        let vip = ServiceCategory::from("VIP".to_string());
        assert!(!vip.is_recognized());
        assert_eq!(vip.to_string(), "VIP");
    }

    #[test]
    fn test_derive_label_pads_and_widens() {
        assert_eq!(derive_label(&ServiceCategory::General, 1, 3), "G001");
        assert_eq!(derive_label(&ServiceCategory::Consultation, 42, 3), "C042");
        assert_eq!(derive_label(&ServiceCategory::Payments, 999, 3), "P999");
        assert_eq!(derive_label(&ServiceCategory::Payments, 1000, 3), "P1000");
        assert_eq!(derive_label(&ServiceCategory::from("VIP"), 7, 3), "X007");
    }

    #[test]
    fn test_display_formats() {
        let ticket = Ticket::new(3, ServiceCategory::General, DEFAULT_LABEL_WIDTH);
        assert_eq!(ticket.to_string(), "G003");

        let called_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let record = CallRecord::for_ticket(&ticket, called_at);
        assert_eq!(record.to_string(), "G003 – GENERAL");
    }

    #[test]
    fn test_service_serializes_as_name() {
        let json = serde_json::to_string(&ServiceCategory::from("VIP")).unwrap();
        assert_eq!(json, "\"VIP\"");

        let parsed: ServiceCategory = serde_json::from_str("\"CONSULTATION\"").unwrap();
        assert_eq!(parsed, ServiceCategory::Consultation);
    }
}
