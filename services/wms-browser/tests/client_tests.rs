//! WmsClient against a mock WMS endpoint.

use httpmock::prelude::*;
use test_utils::{capabilities, service_config};
use wms_browser::WmsClient;
use wms_common::{ServiceConfig, WmsError};
use wms_protocol::LayerScope;

fn client_for(server: &MockServer) -> WmsClient {
    let config = ServiceConfig {
        base_url: server.url("/wms"),
        ..service_config()
    };
    WmsClient::new(config).unwrap()
}

// ============================================================================
// Capabilities fetch
// ============================================================================

#[tokio::test]
async fn test_fetch_layers() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/wms")
                .query_param("request", "GetCapabilities")
                .query_param("Service", "WMS");
            then.status(200)
                .header("content-type", "text/xml")
                .body(capabilities::WMS_111_SIBLINGS);
        })
        .await;

    let client = client_for(&server);
    let layers = client.fetch_layers(LayerScope::Flat).await.unwrap();

    mock.assert_async().await;
    assert_eq!(layers.names(), vec!["population", "elevation", "population"]);
}

#[tokio::test]
async fn test_fetch_layers_nested_scope() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/wms");
            then.status(200).body(capabilities::WMS_130_NESTED);
        })
        .await;

    let client = client_for(&server);
    let layers = client.fetch_layers(LayerScope::Nested).await.unwrap();

    assert_eq!(layers.names(), vec!["kartdata", "roads", "water", "buildings"]);
}

#[tokio::test]
async fn test_empty_capabilities() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/wms");
            then.status(200).body(capabilities::NO_LAYERS);
        })
        .await;

    let layers = client_for(&server)
        .fetch_layers(LayerScope::Flat)
        .await
        .unwrap();
    assert!(layers.is_empty());
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_http_error_is_fetch_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/wms");
            then.status(503).body("maintenance");
        })
        .await;

    let err = client_for(&server)
        .fetch_layers(LayerScope::Flat)
        .await
        .unwrap_err();
    assert!(err.is_fetch_error(), "unexpected error: {:?}", err);
}

#[tokio::test]
async fn test_malformed_capabilities_is_parse_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/wms");
            then.status(200).body(capabilities::TRUNCATED);
        })
        .await;

    let err = client_for(&server)
        .fetch_layers(LayerScope::Flat)
        .await
        .unwrap_err();
    assert!(matches!(err, WmsError::CapabilitiesParse(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint() {
    let config = ServiceConfig {
        base_url: "http://127.0.0.1:1/wms".to_string(),
        ..service_config()
    };
    let err = WmsClient::new(config)
        .unwrap()
        .fetch_capabilities()
        .await
        .unwrap_err();
    assert!(err.is_fetch_error());
}

// ============================================================================
// Layer verification
// ============================================================================

#[tokio::test]
async fn test_verify_layers_all_present() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/wms");
            then.status(200).body(capabilities::WMS_111_SIBLINGS);
        })
        .await;

    let layers = client_for(&server)
        .verify_layers(&["elevation", "population"])
        .await
        .unwrap();
    assert_eq!(layers.len(), 3);
}

#[tokio::test]
async fn test_verify_layers_reports_missing_layer() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/wms");
            then.status(200).body(capabilities::WMS_111_SIBLINGS);
        })
        .await;

    let wanted = vec!["population".to_string(), "rail".to_string()];
    let err = client_for(&server).verify_layers(&wanted).await.unwrap_err();
    assert!(matches!(err, WmsError::LayerNotFound(ref name) if name == "rail"));
}

#[tokio::test]
async fn test_verify_layers_on_error_page() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/wms");
            then.status(200).body(capabilities::PLAIN_TEXT);
        })
        .await;

    let err = client_for(&server)
        .verify_layers(&["population"])
        .await
        .unwrap_err();
    assert!(matches!(err, WmsError::CapabilitiesParse(_)));
}

// ============================================================================
// Tile requests
// ============================================================================

#[test]
fn test_tile_request_uses_client_config() {
    let client = WmsClient::new(service_config()).unwrap();
    let request = client.tile_request("population");

    assert_eq!(
        request.url,
        "https://x/wms?styles=&service=WMS&request=GetMap&layers=population&version=1.3.0&CRS=EPSG:4326&width=256&height=256&format=image/png&transparent=true&"
    );
    assert_eq!(
        client.capabilities_url(),
        "https://x/wms?request=GetCapabilities&Service=WMS"
    );
}
