use serde::{Deserialize, Serialize};

/// Classification of a raw user-submitted query string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Nothing (or only whitespace) was entered
    Empty,
    /// Looks like a literal IP address; used as-is
    IpLiteral,
    /// Anything else; needs forward DNS resolution first
    Domain,
}

/// Classify a raw query string as an IP literal or a domain name.
///
/// The rule is deliberately a heuristic: strip every `.` and treat the
/// input as an IP literal when only ASCII digits remain. Out-of-range
/// values such as `999.999.999.999` therefore classify as IP literals
/// and are passed through to the geolocation API, which rejects them
/// itself. Octet validation here would change user-visible behavior.
#[must_use]
pub fn classify(raw: &str) -> InputKind {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return InputKind::Empty;
    }

    let digits: String = trimmed.chars().filter(|c| *c != '.').collect();
    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        InputKind::IpLiteral
    } else {
        InputKind::Domain
    }
}
