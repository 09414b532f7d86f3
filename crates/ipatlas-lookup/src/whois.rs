//! WHOIS lookup integration using whois-rs.

use ipatlas_core::{AtlasError, Result, WhoisResult};
use tracing::debug;

/// WHOIS client over the registry TCP protocol
pub struct WhoisClient {
    whois: whois_rs::WhoIs,
}

impl WhoisClient {
    /// Create a new WHOIS client from the embedded TLD server list
    pub fn new() -> Result<Self> {
        let whois = whois_rs::WhoIs::from_string(include_str!("whois_servers.json"))
            .map_err(|e| AtlasError::WhoisLookupFailed(e.to_string()))?;
        Ok(Self { whois })
    }

    /// Look up registration metadata for a domain.
    ///
    /// Never called for IP-literal input. Every failure mode
    /// (unsupported TLD, registry timeout, malformed response) maps to
    /// [`AtlasError::WhoisLookupFailed`]; the caller stores it as data
    /// so a WHOIS failure cannot block an already-obtained geolocation
    /// result.
    pub async fn lookup(&self, domain: &str) -> Result<WhoisResult> {
        let options = whois_rs::WhoIsLookupOptions::from_string(domain)
            .map_err(|e| AtlasError::WhoisLookupFailed(e.to_string()))?;
        let raw = self
            .whois
            .lookup(options)
            .map_err(|e| AtlasError::WhoisLookupFailed(e.to_string()))?;

        debug!(domain = %domain, bytes = raw.len(), "WHOIS response received");
        Ok(parse_whois_response(&raw))
    }
}

/// Fields extracted from a raw registry response before normalization.
///
/// Dates are kept as sequences because several registries repeat the
/// creation/expiry timestamps in alternate formats.
#[derive(Debug, Default)]
struct RawFields {
    domain_name: Option<String>,
    registrar: Option<String>,
    creation_dates: Vec<String>,
    expiry_dates: Vec<String>,
    organization: Option<String>,
    name_servers: Vec<String>,
}

/// Parse a raw WHOIS response into a normalized [`WhoisResult`]
fn parse_whois_response(raw: &str) -> WhoisResult {
    let mut fields = RawFields::default();

    // Simple line-based parsing; registry responses are "Key: value".
    for line in raw.lines() {
        let line = line.trim();
        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim().to_lowercase();
            let value = value.trim().to_string();
            if value.is_empty() {
                continue;
            }

            match key.as_str() {
                "domain name" | "domain" => {
                    if fields.domain_name.is_none() {
                        fields.domain_name = Some(value);
                    }
                }
                "registrar" => {
                    if fields.registrar.is_none() {
                        fields.registrar = Some(value);
                    }
                }
                "creation date" | "created" | "created on" | "registered on" => {
                    fields.creation_dates.push(value);
                }
                "expiration date" | "registry expiry date" | "expiry date" | "expires" => {
                    fields.expiry_dates.push(value);
                }
                "org" | "organization" | "registrant organization" => {
                    if fields.organization.is_none() {
                        fields.organization = Some(value);
                    }
                }
                "name server" | "nserver" => {
                    let lowered = value.to_lowercase();
                    if !fields
                        .name_servers
                        .iter()
                        .any(|s| s.eq_ignore_ascii_case(&lowered))
                    {
                        fields.name_servers.push(lowered);
                    }
                }
                _ => {}
            }
        }
    }

    WhoisResult {
        domain_name: WhoisResult::normalize_field(fields.domain_name),
        registrar: WhoisResult::normalize_field(fields.registrar),
        created_date: WhoisResult::normalize_date(&fields.creation_dates),
        expiry_date: WhoisResult::normalize_date(&fields.expiry_dates),
        organization: WhoisResult::normalize_field(fields.organization),
        name_servers: WhoisResult::normalize_servers(&fields.name_servers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Domain Name: EXAMPLE.COM
Registrar: RESERVED-Internet Assigned Numbers Authority
Creation Date: 1995-08-14T04:00:00Z
Creation Date: 1995-08-14T00:00:00-04:00
Registry Expiry Date: 2026-08-13T04:00:00Z
Registrant Organization: Internet Assigned Numbers Authority
Name Server: A.IANA-SERVERS.NET
Name Server: B.IANA-SERVERS.NET
Name Server: a.iana-servers.net
DNSSEC: signedDelegation
";

    #[test]
    fn test_parse_extracts_and_normalizes_fields() {
        let result = parse_whois_response(SAMPLE);

        assert_eq!(result.domain_name, "EXAMPLE.COM");
        assert_eq!(
            result.registrar,
            "RESERVED-Internet Assigned Numbers Authority"
        );
        assert_eq!(
            result.organization,
            "Internet Assigned Numbers Authority"
        );
        assert_eq!(result.expiry_date, "2026-08-13T04:00:00Z");
    }

    #[test]
    fn test_repeated_creation_dates_take_the_first() {
        let result = parse_whois_response(SAMPLE);
        assert_eq!(result.created_date, "1995-08-14T04:00:00Z");
    }

    #[test]
    fn test_name_servers_deduped_and_joined() {
        let result = parse_whois_response(SAMPLE);
        assert_eq!(
            result.name_servers,
            "a.iana-servers.net, b.iana-servers.net"
        );
    }

    #[test]
    fn test_missing_fields_become_sentinels() {
        let result = parse_whois_response("No match for domain \"EXAMPLE.INVALID\".\n");

        assert_eq!(result.domain_name, "N/A");
        assert_eq!(result.registrar, "N/A");
        assert_eq!(result.created_date, "N/A");
        assert_eq!(result.expiry_date, "N/A");
        assert_eq!(result.organization, "N/A");
        assert_eq!(result.name_servers, "N/A");
    }

    #[test]
    fn test_timestamps_with_colons_keep_their_value() {
        let raw = "created: 2010-01-02 15:04:05\n";
        let result = parse_whois_response(raw);
        assert_eq!(result.created_date, "2010-01-02 15:04:05");
    }
}
