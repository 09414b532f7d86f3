//! The per-query lookup pipeline.
//!
//! One submission runs classify → resolve (domains) → geolocate →
//! WHOIS (domains) to completion, sequentially. The stage clients sit
//! behind small traits so the flow can be exercised with fakes.

use async_trait::async_trait;
use ipatlas_client::GeoClient;
use ipatlas_core::{classify, AtlasError, GeoResult, InputKind, Result, WhoisResult};
use serde::Serialize;
use std::net::Ipv4Addr;
use tracing::debug;

use crate::dns::DnsResolver;
use crate::whois::WhoisClient;

/// Geolocation stage seam
#[async_trait]
pub trait GeoLookup: Send + Sync {
    /// Look up geolocation details for an IP address string
    async fn geolocate(&self, ip: &str) -> Result<GeoResult>;
}

/// DNS resolution stage seam
#[async_trait]
pub trait ResolveHost: Send + Sync {
    /// Resolve a domain name to an IPv4 address
    async fn resolve(&self, domain: &str) -> Result<Ipv4Addr>;
}

/// WHOIS stage seam
#[async_trait]
pub trait WhoisLookup: Send + Sync {
    /// Query registration metadata for a domain
    async fn whois(&self, domain: &str) -> Result<WhoisResult>;
}

#[async_trait]
impl GeoLookup for GeoClient {
    async fn geolocate(&self, ip: &str) -> Result<GeoResult> {
        self.lookup(ip).await
    }
}

#[async_trait]
impl ResolveHost for DnsResolver {
    async fn resolve(&self, domain: &str) -> Result<Ipv4Addr> {
        self.resolve_ipv4(domain).await
    }
}

#[async_trait]
impl WhoisLookup for WhoisClient {
    async fn whois(&self, domain: &str) -> Result<WhoisResult> {
        self.lookup(domain).await
    }
}

/// What the classifier and resolver made of the submitted query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Target {
    /// Input was taken as a literal IP and used unchanged
    IpLiteral {
        /// The submitted IP string
        ip: String,
    },
    /// Input was a domain, resolved before geolocation
    Domain {
        /// The submitted domain name
        name: String,
        /// The resolved IPv4 address
        ip: String,
    },
}

impl Target {
    /// The IP the geolocation lookup ran against
    #[must_use]
    pub fn ip(&self) -> &str {
        match self {
            Self::IpLiteral { ip } | Self::Domain { ip, .. } => ip,
        }
    }

    /// The domain name, when the input was one
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        match self {
            Self::IpLiteral { .. } => None,
            Self::Domain { name, .. } => Some(name),
        }
    }
}

/// Results of one completed query.
///
/// Stage failures are data here: a failed geolocation does not erase a
/// WHOIS answer and vice versa.
#[derive(Debug)]
pub struct LookupReport {
    /// What was looked up
    pub target: Target,
    /// Geolocation outcome
    pub geo: Result<GeoResult>,
    /// WHOIS outcome; `None` for IP-literal input
    pub whois: Option<Result<WhoisResult>>,
}

/// Outcome of submitting one raw query string
#[derive(Debug)]
pub enum LookupOutcome {
    /// Nothing was entered; no network calls were made
    EmptyInput,
    /// The domain did not resolve; geolocation and WHOIS were skipped
    ResolutionFailed {
        /// The domain that failed
        domain: String,
        /// Resolver failure text
        reason: String,
    },
    /// The query ran to completion (individual stages may still have failed)
    Report(LookupReport),
}

/// Drives the classify → resolve → geolocate → WHOIS sequence
pub struct LookupRunner<G, R, W> {
    geo: G,
    resolver: R,
    whois: W,
}

impl LookupRunner<GeoClient, DnsResolver, WhoisClient> {
    /// Build a runner with the production stage clients
    pub fn with_defaults(geo: GeoClient) -> Result<Self> {
        Ok(Self {
            geo,
            resolver: DnsResolver::new(),
            whois: WhoisClient::new()?,
        })
    }
}

impl<G, R, W> LookupRunner<G, R, W>
where
    G: GeoLookup,
    R: ResolveHost,
    W: WhoisLookup,
{
    /// Build a runner from explicit stage implementations
    pub const fn new(geo: G, resolver: R, whois: W) -> Self {
        Self {
            geo,
            resolver,
            whois,
        }
    }

    /// Run the full pipeline for one raw query string.
    ///
    /// The stages run strictly in sequence; nothing is retried, cached,
    /// or shared with the next submission.
    pub async fn run(&self, raw: &str) -> LookupOutcome {
        let trimmed = raw.trim();

        match classify(trimmed) {
            InputKind::Empty => LookupOutcome::EmptyInput,
            InputKind::IpLiteral => {
                debug!(ip = %trimmed, "classified as IP literal");
                let geo = self.geo.geolocate(trimmed).await;
                LookupOutcome::Report(LookupReport {
                    target: Target::IpLiteral {
                        ip: trimmed.to_string(),
                    },
                    geo,
                    whois: None,
                })
            }
            InputKind::Domain => {
                debug!(domain = %trimmed, "classified as domain");
                let ip = match self.resolver.resolve(trimmed).await {
                    Ok(ip) => ip,
                    Err(AtlasError::ResolutionFailed { domain, reason }) => {
                        return LookupOutcome::ResolutionFailed { domain, reason };
                    }
                    Err(other) => {
                        return LookupOutcome::ResolutionFailed {
                            domain: trimmed.to_string(),
                            reason: other.to_string(),
                        };
                    }
                };

                // Geolocation and WHOIS are independent: a failure in
                // one is reported without suppressing the other.
                let geo = self.geo.geolocate(&ip.to_string()).await;
                let whois = Some(self.whois.whois(trimmed).await);

                LookupOutcome::Report(LookupReport {
                    target: Target::Domain {
                        name: trimmed.to_string(),
                        ip: ip.to_string(),
                    },
                    geo,
                    whois,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn geo_result(ip: &str) -> GeoResult {
        GeoResult {
            ip: ip.to_string(),
            country: "United States".to_string(),
            region: "Virginia".to_string(),
            city: "Ashburn".to_string(),
            zip_code: "20149".to_string(),
            isp: "Google LLC".to_string(),
            latitude: 39.03,
            longitude: -77.5,
            timezone: "America/New_York".to_string(),
        }
    }

    fn whois_result(domain: &str) -> WhoisResult {
        WhoisResult {
            domain_name: domain.to_uppercase(),
            registrar: "Example Registrar".to_string(),
            created_date: "1995-08-14T04:00:00Z".to_string(),
            expiry_date: "2026-08-13T04:00:00Z".to_string(),
            organization: "N/A".to_string(),
            name_servers: "a.iana-servers.net, b.iana-servers.net".to_string(),
        }
    }

    #[derive(Default)]
    struct FakeGeo {
        calls: AtomicUsize,
        asked: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl GeoLookup for FakeGeo {
        async fn geolocate(&self, ip: &str) -> Result<GeoResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.asked.lock().unwrap().push(ip.to_string());
            if self.fail {
                Err(AtlasError::GeoLookupFailed(
                    "could not fetch details".to_string(),
                ))
            } else {
                Ok(geo_result(ip))
            }
        }
    }

    #[derive(Default)]
    struct FakeDns {
        calls: AtomicUsize,
        answer: Option<Ipv4Addr>,
    }

    #[async_trait]
    impl ResolveHost for FakeDns {
        async fn resolve(&self, domain: &str) -> Result<Ipv4Addr> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer
                .ok_or_else(|| AtlasError::ResolutionFailed {
                    domain: domain.to_string(),
                    reason: "NXDOMAIN".to_string(),
                })
        }
    }

    #[derive(Default)]
    struct FakeWhois {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl WhoisLookup for FakeWhois {
        async fn whois(&self, domain: &str) -> Result<WhoisResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(AtlasError::WhoisLookupFailed(
                    "registry timeout".to_string(),
                ))
            } else {
                Ok(whois_result(domain))
            }
        }
    }

    #[tokio::test]
    async fn ip_literal_skips_dns_and_whois() {
        let runner = LookupRunner::new(FakeGeo::default(), FakeDns::default(), FakeWhois::default());

        let outcome = runner.run("8.8.8.8").await;

        let LookupOutcome::Report(report) = outcome else {
            panic!("expected a report");
        };
        assert_eq!(report.target, Target::IpLiteral { ip: "8.8.8.8".to_string() });
        assert!(report.geo.is_ok());
        assert!(report.whois.is_none());
        assert_eq!(runner.resolver.calls.load(Ordering::SeqCst), 0);
        assert_eq!(runner.whois.calls.load(Ordering::SeqCst), 0);
        assert_eq!(runner.geo.asked.lock().unwrap().as_slice(), ["8.8.8.8"]);
    }

    #[tokio::test]
    async fn domain_resolves_then_geolocates_and_queries_whois() {
        let dns = FakeDns {
            answer: Some(Ipv4Addr::new(93, 184, 216, 34)),
            ..FakeDns::default()
        };
        let runner = LookupRunner::new(FakeGeo::default(), dns, FakeWhois::default());

        let outcome = runner.run("example.com").await;

        let LookupOutcome::Report(report) = outcome else {
            panic!("expected a report");
        };
        assert_eq!(
            report.target,
            Target::Domain {
                name: "example.com".to_string(),
                ip: "93.184.216.34".to_string(),
            }
        );
        // Geolocation ran against the resolved IP, not the domain.
        assert_eq!(
            runner.geo.asked.lock().unwrap().as_slice(),
            ["93.184.216.34"]
        );
        let whois = report.whois.expect("domain input gets a WHOIS outcome");
        assert_eq!(whois.unwrap().domain_name, "EXAMPLE.COM");
    }

    #[tokio::test]
    async fn resolution_failure_halts_the_query() {
        let runner = LookupRunner::new(FakeGeo::default(), FakeDns::default(), FakeWhois::default());

        let outcome = runner.run("not-a-real-domain-xyz123.invalid").await;

        let LookupOutcome::ResolutionFailed { domain, reason } = outcome else {
            panic!("expected resolution failure");
        };
        assert_eq!(domain, "not-a-real-domain-xyz123.invalid");
        assert_eq!(reason, "NXDOMAIN");
        assert_eq!(runner.geo.calls.load(Ordering::SeqCst), 0);
        assert_eq!(runner.whois.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn empty_input_makes_no_calls() {
        let runner = LookupRunner::new(FakeGeo::default(), FakeDns::default(), FakeWhois::default());

        assert!(matches!(runner.run("").await, LookupOutcome::EmptyInput));
        assert!(matches!(runner.run("   ").await, LookupOutcome::EmptyInput));
        assert_eq!(runner.geo.calls.load(Ordering::SeqCst), 0);
        assert_eq!(runner.resolver.calls.load(Ordering::SeqCst), 0);
        assert_eq!(runner.whois.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn geo_failure_does_not_suppress_whois() {
        let geo = FakeGeo {
            fail: true,
            ..FakeGeo::default()
        };
        let dns = FakeDns {
            answer: Some(Ipv4Addr::new(93, 184, 216, 34)),
            ..FakeDns::default()
        };
        let runner = LookupRunner::new(geo, dns, FakeWhois::default());

        let outcome = runner.run("example.com").await;

        let LookupOutcome::Report(report) = outcome else {
            panic!("expected a report");
        };
        assert!(report.geo.is_err());
        assert!(matches!(report.whois, Some(Ok(_))));
    }

    #[tokio::test]
    async fn whois_failure_is_data_not_a_propagated_error() {
        let dns = FakeDns {
            answer: Some(Ipv4Addr::new(93, 184, 216, 34)),
            ..FakeDns::default()
        };
        let whois = FakeWhois {
            fail: true,
            ..FakeWhois::default()
        };
        let runner = LookupRunner::new(FakeGeo::default(), dns, whois);

        let outcome = runner.run("example.com").await;

        let LookupOutcome::Report(report) = outcome else {
            panic!("expected a report");
        };
        // Geolocation survives a WHOIS failure.
        assert!(report.geo.is_ok());
        assert!(matches!(
            report.whois,
            Some(Err(AtlasError::WhoisLookupFailed(_)))
        ));
    }
}
