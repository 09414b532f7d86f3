use serde::{Deserialize, Serialize};

/// Sentinel shown for any WHOIS field the registry did not return.
///
/// Display code never branches on absence; normalization guarantees
/// every field holds either a value or this sentinel.
pub const NOT_AVAILABLE: &str = "N/A";

/// Normalized WHOIS registration record for a domain.
///
/// Built from the loosely structured registry response: scalars are
/// kept, ordered sequences collapse to their first element, and missing
/// values become [`NOT_AVAILABLE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoisResult {
    /// Registered domain name
    pub domain_name: String,
    /// Sponsoring registrar
    pub registrar: String,
    /// Registration date, as reported
    pub created_date: String,
    /// Expiry date, as reported
    pub expiry_date: String,
    /// Registrant organization
    pub organization: String,
    /// Name servers, comma-joined
    pub name_servers: String,
}

impl WhoisResult {
    /// Normalize an optional scalar field.
    #[must_use]
    pub fn normalize_field(value: Option<String>) -> String {
        match value {
            Some(v) if !v.trim().is_empty() => v,
            _ => NOT_AVAILABLE.to_string(),
        }
    }

    /// Normalize a date that may arrive as an ordered sequence.
    ///
    /// Some registries return multiple creation/expiry timestamps; the
    /// first entry wins. An absent or empty sequence becomes
    /// [`NOT_AVAILABLE`].
    #[must_use]
    pub fn normalize_date(values: &[String]) -> String {
        values
            .first()
            .map_or_else(|| NOT_AVAILABLE.to_string(), Clone::clone)
    }

    /// Join name servers into one comma-and-space-separated string.
    #[must_use]
    pub fn normalize_servers(servers: &[String]) -> String {
        if servers.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            servers.join(", ")
        }
    }
}
