use serde::{Deserialize, Serialize};

use crate::error::{AtlasError, Result};

/// Fixed message for an upstream non-success status (invalid or
/// private IPs rejected by the geolocation API)
const FETCH_FAILED: &str = "could not fetch details";

/// Raw shape of the geolocation API's JSON response.
///
/// Field names follow the upstream API exactly; every field is optional
/// on the wire because failure responses carry only `status` and
/// `message`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeoIpResponse {
    /// "success" or "fail"
    #[serde(default)]
    pub status: String,

    /// Failure reason supplied by the API (logged, not shown verbatim)
    #[serde(default)]
    pub message: Option<String>,

    /// The IP the API answered for
    #[serde(default)]
    pub query: Option<String>,

    #[serde(default)]
    pub country: Option<String>,

    #[serde(default, rename = "regionName")]
    pub region_name: Option<String>,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub zip: Option<String>,

    #[serde(default)]
    pub isp: Option<String>,

    #[serde(default)]
    pub lat: Option<f64>,

    #[serde(default)]
    pub lon: Option<f64>,

    #[serde(default)]
    pub timezone: Option<String>,
}

impl GeoIpResponse {
    /// Convert the wire response into a normalized [`GeoResult`].
    ///
    /// Succeeds only when the upstream status is `"success"` and every
    /// consumed field is present; there is no partial-success record.
    pub fn into_result(self) -> Result<GeoResult> {
        if self.status != "success" {
            return Err(AtlasError::GeoLookupFailed(FETCH_FAILED.to_string()));
        }

        match (
            self.query,
            self.country,
            self.region_name,
            self.city,
            self.zip,
            self.isp,
            self.lat,
            self.lon,
            self.timezone,
        ) {
            (
                Some(ip),
                Some(country),
                Some(region),
                Some(city),
                Some(zip_code),
                Some(isp),
                Some(latitude),
                Some(longitude),
                Some(timezone),
            ) => Ok(GeoResult {
                ip,
                country,
                region,
                city,
                zip_code,
                isp,
                latitude,
                longitude,
                timezone,
            }),
            _ => Err(AtlasError::GeoLookupFailed(FETCH_FAILED.to_string())),
        }
    }
}

/// Normalized geolocation record for a single IP.
///
/// Either every field is populated from a successful lookup, or no
/// record exists at all and the caller holds an
/// [`AtlasError::GeoLookupFailed`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoResult {
    /// The IP the lookup was answered for
    pub ip: String,
    /// Full country name
    pub country: String,
    /// Region or state name
    pub region: String,
    /// City name
    pub city: String,
    /// Postal/ZIP code
    pub zip_code: String,
    /// Internet service provider
    pub isp: String,
    /// Latitude coordinate
    pub latitude: f64,
    /// Longitude coordinate
    pub longitude: f64,
    /// IANA timezone name
    pub timezone: String,
}

impl GeoResult {
    /// Coordinates as a `(latitude, longitude)` pair
    #[must_use]
    pub const fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}
