use thiserror::Error;

/// Result type alias for lookup operations
pub type Result<T> = std::result::Result<T, AtlasError>;

/// Errors that can occur while running a lookup
#[derive(Error, Debug)]
pub enum AtlasError {
    /// The user submitted an empty query; no network calls are made
    #[error("no IP address or domain name given")]
    EmptyInput,

    /// A domain name could not be resolved to an IPv4 address.
    ///
    /// Terminal for the current query: neither geolocation nor WHOIS
    /// runs once resolution has failed.
    #[error("could not resolve {domain}: {reason}")]
    ResolutionFailed {
        /// Domain that failed to resolve
        domain: String,
        /// Resolver-provided failure text
        reason: String,
    },

    /// The geolocation API could not be reached, or reported a
    /// non-success status for the queried IP
    #[error("geolocation lookup failed: {0}")]
    GeoLookupFailed(String),

    /// WHOIS query or response parsing failed.
    ///
    /// Always converted to data by the caller; it never aborts a query.
    #[error("WHOIS lookup failed: {0}")]
    WhoisLookupFailed(String),

    /// Configuration error (bad endpoint override, unreadable config file)
    #[error("configuration error: {0}")]
    Config(String),
}

impl AtlasError {
    /// Returns true if the error halts the remaining stages of a query.
    ///
    /// Only resolution failure is a hard stop; geolocation and WHOIS
    /// failures are reported independently.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::ResolutionFailed { .. })
    }

    /// Short name of the stage that produced this error
    #[must_use]
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::EmptyInput => "input",
            Self::ResolutionFailed { .. } => "dns",
            Self::GeoLookupFailed(_) => "geolocation",
            Self::WhoisLookupFailed(_) => "whois",
            Self::Config(_) => "config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_resolution_failure_is_terminal() {
        let resolution = AtlasError::ResolutionFailed {
            domain: "example.invalid".to_string(),
            reason: "NXDOMAIN".to_string(),
        };
        assert!(resolution.is_terminal());
        assert!(!AtlasError::GeoLookupFailed("timeout".to_string()).is_terminal());
        assert!(!AtlasError::WhoisLookupFailed("bad TLD".to_string()).is_terminal());
        assert!(!AtlasError::EmptyInput.is_terminal());
    }

    #[test]
    fn test_error_display_carries_context() {
        let err = AtlasError::ResolutionFailed {
            domain: "example.invalid".to_string(),
            reason: "no A record".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "could not resolve example.invalid: no A record"
        );
    }
}
