//! Integration tests for the geolocation client against a mock API.

use ipatlas_client::{AtlasError, GeoClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GeoClient {
    GeoClient::builder()
        .base_url(server.uri())
        .build()
        .expect("mock server URI is valid")
}

#[tokio::test]
async fn success_response_maps_to_geo_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json/8.8.8.8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "query": "8.8.8.8",
            "country": "United States",
            "regionName": "Virginia",
            "city": "Ashburn",
            "zip": "20149",
            "isp": "Google LLC",
            "lat": 39.03,
            "lon": -77.5,
            "timezone": "America/New_York"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server).lookup("8.8.8.8").await.unwrap();

    assert_eq!(result.ip, "8.8.8.8");
    assert_eq!(result.country, "United States");
    assert_eq!(result.region, "Virginia");
    assert_eq!(result.city, "Ashburn");
    assert_eq!(result.zip_code, "20149");
    assert_eq!(result.isp, "Google LLC");
    assert_eq!(result.coordinates(), (39.03, -77.5));
    assert_eq!(result.timezone, "America/New_York");
}

#[tokio::test]
async fn upstream_fail_status_yields_fixed_message() {
    let server = MockServer::start().await;

    // ip-api.com answers 200 with status "fail" for private/invalid IPs.
    Mock::given(method("GET"))
        .and(path("/json/192.168.0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "fail",
            "message": "private range",
            "query": "192.168.0.1"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).lookup("192.168.0.1").await.unwrap_err();

    match err {
        AtlasError::GeoLookupFailed(msg) => assert_eq!(msg, "could not fetch details"),
        other => panic!("expected GeoLookupFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn http_error_status_carries_the_status_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json/8.8.8.8"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).lookup("8.8.8.8").await.unwrap_err();

    match err {
        AtlasError::GeoLookupFailed(msg) => assert!(msg.contains("503"), "got: {msg}"),
        other => panic!("expected GeoLookupFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_lookup_failure_not_a_panic() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json/8.8.8.8"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).lookup("8.8.8.8").await.unwrap_err();
    assert!(matches!(err, AtlasError::GeoLookupFailed(_)));
}

#[tokio::test]
async fn connection_refused_maps_to_geo_lookup_failed() {
    // Reserve a port and close it again so nothing is listening.
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = GeoClient::builder().base_url(uri).build().unwrap();
    let err = client.lookup("8.8.8.8").await.unwrap_err();

    assert!(matches!(err, AtlasError::GeoLookupFailed(_)));
}
