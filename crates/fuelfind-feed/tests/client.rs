//! Integration tests for `FeedClient` using wiremock HTTP mocks.

use std::time::Duration;

use fuelfind_core::{search, ErrorKind, SearchMode, SearchRequest, SearchResult};
use fuelfind_feed::{FeedClient, FeedError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMEOUT: Duration = Duration::from_secs(5);

fn test_client(server: &MockServer) -> FeedClient {
    FeedClient::with_endpoint(&format!("{}/stations", server.uri()), "fuelfind-test/0.1")
        .expect("client construction should not fail")
}

fn sample_feed() -> serde_json::Value {
    serde_json::json!([
        {
            "CodEs": "10001",
            "Compania": "Copec",
            "Direccion": "Av. Apoquindo 5000",
            "Comuna": "Las Condes",
            "Region": "Metropolitana",
            "Latitud": "-33,4150",
            "Longitud": "-70,5830",
            "Prices": [
                { "Producto": "Gasolina 93", "Precio": "1290" },
                { "Producto": "Diesel", "Precio": "1010" }
            ],
            "Tienda": { "CodigoTienda": "", "NombreTienda": "", "Tipo": "" }
        },
        {
            "CodEs": "10002",
            "Compania": "Copec",
            "Direccion": "Av. Providencia 2100",
            "Comuna": "Providencia",
            "Region": "Metropolitana",
            "latitud": -33.4210,
            "longitud": -70.6080,
            "Prices": [{ "Producto": "Gasolina 93", "Precio": " 1270 " }],
            "Tienda": { "CodigoTienda": "P12", "NombreTienda": "Pronto", "Tipo": "Pronto" }
        },
        "garbage entry",
        { "CodEs": "10003", "Prices": null }
    ])
}

async fn mount_feed(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/stations"))
        .and(query_param("codEs", "-1"))
        .and(query_param("company", "-1"))
        .and(query_param("region", "-1"))
        .and(query_param("comuna", "-1"))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn get_stations_returns_raw_records() {
    let server = MockServer::start().await;
    mount_feed(&server, ResponseTemplate::new(200).set_body_json(sample_feed())).await;

    let stations = test_client(&server)
        .get_stations(TIMEOUT)
        .await
        .expect("should fetch stations");

    assert_eq!(stations.len(), 4);
    assert_eq!(stations[0]["CodEs"], "10001");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    mount_feed(&server, ResponseTemplate::new(503)).await;

    let err = test_client(&server).get_stations(TIMEOUT).await.unwrap_err();
    assert!(
        matches!(err, FeedError::UnexpectedStatus { status: 503, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn non_json_body_is_an_error() {
    let server = MockServer::start().await;
    mount_feed(
        &server,
        ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
    )
    .await;

    let err = test_client(&server).get_stations(TIMEOUT).await.unwrap_err();
    assert!(matches!(err, FeedError::Deserialize { .. }), "got {err:?}");
}

#[tokio::test]
async fn non_array_body_is_an_error_not_an_empty_feed() {
    let server = MockServer::start().await;
    mount_feed(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "stations": [] })),
    )
    .await;

    let err = test_client(&server).get_stations(TIMEOUT).await.unwrap_err();
    assert!(
        matches!(err, FeedError::UnexpectedShape { found: "object", .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn slow_feed_times_out() {
    let server = MockServer::start().await;
    mount_feed(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(sample_feed())
            .set_delay(Duration::from_secs(2)),
    )
    .await;

    let err = test_client(&server)
        .get_stations(Duration::from_millis(200))
        .await
        .unwrap_err();
    assert!(matches!(err, FeedError::Http(_)), "got {err:?}");
}

#[tokio::test]
async fn search_over_http_feed_picks_cheapest_then_nearest() {
    let server = MockServer::start().await;
    mount_feed(&server, ResponseTemplate::new(200).set_body_json(sample_feed())).await;

    let client = test_client(&server);
    let request = SearchRequest {
        lat: -33.4489,
        lng: -70.6693,
        product: "93".to_string(),
        mode: SearchMode::NearestCheapest,
    };

    let SearchResult::Found(station) = search(&client, &request, TIMEOUT).await else {
        panic!("expected a station");
    };
    assert_eq!(station.id, "10002");
    assert_eq!(station.price, Some(1270));
    assert_eq!(station.comuna, "Providencia");
    assert!(station.has_store);
}

#[tokio::test]
async fn search_maps_server_error_to_api_error() {
    let server = MockServer::start().await;
    mount_feed(&server, ResponseTemplate::new(500)).await;

    let request = SearchRequest {
        lat: -33.4489,
        lng: -70.6693,
        product: "diesel".to_string(),
        mode: SearchMode::Nearest,
    };
    let result = search(&test_client(&server), &request, TIMEOUT).await;

    let SearchResult::Failed(failure) = result else {
        panic!("expected failure");
    };
    assert_eq!(failure.error, ErrorKind::ApiError);
}
