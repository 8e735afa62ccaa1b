//! Calls against a mock Reacto endpoint: request shape, decoding, and
//! failure capture.

mod common;

use common::{closed_address, start_upstream, start_upstream_with_delay};
use reacto_gateway::args::Payload;
use reacto_gateway::client::ClientTimeouts;
use reacto_gateway::errors::{ErrorReporter, ErrorStore, MemoryErrorStore};
use reacto_gateway::{Catalog, Decoded, ReactoApiService, ReactoClient, ServiceError};
use serde_json::{json, Value};
use std::time::Duration;

const ONE_ROW: &str = "{\"TableData\":\r\n{\"Row\":{\"ID\":\"7\",\"Descrizione\":\"Maglia\"}}}";
const TWO_ROWS: &str = r#"{"TableData":{"Row":[{"ID":"7"},{"ID":"8"}]}}"#;

fn service_for(url: &str) -> ReactoApiService {
    let client = ReactoClient::with_timeouts(
        url,
        ClientTimeouts {
            connect: Duration::from_secs(1),
            request: Duration::from_secs(2),
        },
    )
    .unwrap();
    ReactoApiService::new(client, ErrorReporter::default())
}

#[tokio::test]
async fn test_request_headers_and_named_body() {
    let upstream = start_upstream(|_| (200, ONE_ROW.to_string())).await;
    let service = service_for(&upstream.url);
    let store = MemoryErrorStore::default();

    let decoded = service
        .call(&store, "GetProdotti", &[json!("3"), json!("it")])
        .await
        .unwrap();

    let request = upstream.last();
    assert_eq!(request.method, "POST");
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.header("accept"), Some("application/json"));
    assert_eq!(request.header("x-http-method-override"), Some("GetProdotti"));
    assert_eq!(
        request.body_text(),
        r#"{"idStore":3,"lingua":"it","idUtente":"~~NULL~~","idSoggetto":"~~NULL~~"}"#
    );

    let rows = decoded.rows().expect("one row");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows.first().unwrap().get_str("Descrizione"), Some("Maglia"));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_call_name_uses_catalog_spelling() {
    let upstream = start_upstream(|_| (200, TWO_ROWS.to_string())).await;
    let service = service_for(&upstream.url);
    let store = MemoryErrorStore::default();

    let decoded = service.call(&store, "getprodotti", &[json!(1)]).await.unwrap();

    assert_eq!(upstream.last().header("x-http-method-override"), Some("GetProdotti"));
    assert_eq!(decoded.rows().unwrap().field(1, "ID"), Some(&json!("8")));
}

#[tokio::test]
async fn test_extra_arguments_are_dropped() {
    let upstream = start_upstream(|_| (200, "1".to_string())).await;
    let service = service_for(&upstream.url);
    let store = MemoryErrorStore::default();

    let decoded = service
        .call(&store, "TryLoginGuest", &[json!("a@b.it"), json!(2), json!("extra")])
        .await
        .unwrap();

    assert_eq!(decoded, Decoded::True);
    let body: Value = serde_json::from_slice(&upstream.last().body).unwrap();
    assert_eq!(body, json!({"email": "a@b.it", "IdStore": 2}));
}

#[tokio::test]
async fn test_positional_call_without_arguments_sends_no_body() {
    let upstream = start_upstream(|_| (200, "true".to_string())).await;
    let service = service_for(&upstream.url);
    let store = MemoryErrorStore::default();

    let decoded = service.call(&store, "init", &[]).await.unwrap();

    assert_eq!(decoded, Decoded::True);
    let request = upstream.last();
    assert_eq!(request.header("x-http-method-override"), Some("init"));
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn test_positional_call_keeps_single_slot() {
    let upstream = start_upstream(|_| (200, "0".to_string())).await;
    let service = service_for(&upstream.url);
    let store = MemoryErrorStore::default();

    let decoded = service
        .call(&store, "dammidata", &[json!("2024-01-01"), json!(5)])
        .await
        .unwrap();

    assert_eq!(decoded, Decoded::NoData);
    let body: Value = serde_json::from_slice(&upstream.last().body).unwrap();
    assert_eq!(body, json!(["2024-01-01"]));
}

#[tokio::test]
async fn test_setter_and_empty_table_results() {
    for raw in ["0", "false", r#"{"TableData":{}}"#, r#"{"TableData":{"Row":[]}}"#] {
        let body = raw.to_string();
        let upstream = start_upstream(move |_| (200, body.clone())).await;
        let service = service_for(&upstream.url);
        let store = MemoryErrorStore::default();

        let decoded = service.call(&store, "GetAgente", &[json!(1), json!(1)]).await.unwrap();
        assert_eq!(decoded, Decoded::NoData, "{raw}");
    }
}

#[tokio::test]
async fn test_http_error_status_is_captured() {
    let upstream = start_upstream(|_| (500, "boom".to_string())).await;
    let service = service_for(&upstream.url);
    let store = MemoryErrorStore::default();

    let err = service
        .call(&store, "TryLogin", &[json!("a@b.it"), json!("segreta"), json!(1)])
        .await
        .unwrap_err();

    let ServiceError::Failed(failure) = err else {
        panic!("expected a captured failure");
    };
    assert!(failure.page.contains(failure.error_id.as_str()));

    let record = store.find(&failure.error_id).expect("record saved");
    assert_eq!(record.function_name, "TryLogin");
    assert_eq!(record.client_url, upstream.url);
    assert!(record.message.contains("500"));
    assert_eq!(record.arguments["email"], "a@b.it");
    assert_eq!(record.arguments["password"], "***");
    assert_eq!(record.arguments["idStore"], 1);
}

#[tokio::test]
async fn test_connection_refused_is_captured() {
    let addr = closed_address().await;
    let service = service_for(&format!("http://{addr}/reacto"));
    let store = MemoryErrorStore::default();

    let err = service.call(&store, "GetAgente", &[json!(4)]).await.unwrap_err();

    assert!(matches!(err, ServiceError::Failed(_)));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let upstream = start_upstream_with_delay(Duration::from_secs(3), |_| (200, "1".to_string())).await;
    let client = ReactoClient::with_timeouts(
        upstream.url.as_str(),
        ClientTimeouts {
            connect: Duration::from_secs(1),
            request: Duration::from_secs(1),
        },
    )
    .unwrap();
    let spec = Catalog::builtin().lookup("init").unwrap();

    let err = client.dispatch(spec.name, &Payload::for_call(spec, &[])).await.unwrap_err();

    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_strict_decoding_reports_unreadable_bodies() {
    let upstream = start_upstream(|_| (200, "<html>maintenance</html>".to_string())).await;
    let store = MemoryErrorStore::default();

    let lenient = service_for(&upstream.url);
    let decoded = lenient.call(&store, "GetAgente", &[json!(1)]).await.unwrap();
    assert_eq!(decoded, Decoded::NoData);

    let strict = service_for(&upstream.url).with_strict_decode(true);
    let err = strict.call(&store, "GetAgente", &[json!(1)]).await.unwrap_err();
    assert!(matches!(err, ServiceError::Decode { ref call, .. } if call == "GetAgente"));
    assert!(store.is_empty());
}
