//! End-to-end tests through the HTTP gateway.

mod common;

use common::{closed_address, session_cookie, start_gateway, start_upstream};
use reqwest::header::{CONTENT_TYPE, COOKIE};
use serde_json::{json, Value};

#[tokio::test]
async fn test_call_returns_decoded_rows() {
    let upstream =
        start_upstream(|_| (200, r#"{"TableData":{"Row":{"ID":"1","Nome":"Negozio"}}}"#.to_string())).await;
    let gateway = start_gateway(&upstream.url).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/GetStore", gateway.base))
        .json(&json!([1]))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert!(session_cookie(&response).is_some());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!([{"ID": "1", "Nome": "Negozio"}]));
    assert_eq!(upstream.last().header("x-http-method-override"), Some("GetStore"));
}

#[tokio::test]
async fn test_setter_and_check_results() {
    let upstream = start_upstream(|request| {
        let answer = if request.header("x-http-method-override") == Some("TryLoginGuest") {
            "1"
        } else {
            "0"
        };
        (200, answer.to_string())
    })
    .await;
    let gateway = start_gateway(&upstream.url).await;
    let client = reqwest::Client::new();

    let checked: Value = client
        .post(format!("{}/api/TryLoginGuest", gateway.base))
        .json(&json!(["a@b.it", 1]))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(checked, json!(true));

    let set: Value = client
        .post(format!("{}/api/SetWishlist", gateway.base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(set, Value::Null);
}

#[tokio::test]
async fn test_unknown_call_and_bad_arguments() {
    let upstream = start_upstream(|_| (200, "1".to_string())).await;
    let gateway = start_gateway(&upstream.url).await;
    let client = reqwest::Client::new();

    let unknown = client
        .post(format!("{}/api/NoSuchCall", gateway.base))
        .send()
        .await
        .unwrap();
    assert_eq!(unknown.status(), 404);

    let malformed = client
        .post(format!("{}/api/GetStore", gateway.base))
        .header(CONTENT_TYPE, "application/json")
        .body("[1,")
        .send()
        .await
        .unwrap();
    assert_eq!(malformed.status(), 400);

    assert!(upstream.requests().is_empty());
}

#[tokio::test]
async fn test_view_error_rejects_bad_ids() {
    let upstream = start_upstream(|_| (200, "1".to_string())).await;
    let gateway = start_gateway(&upstream.url).await;
    let client = reqwest::Client::new();

    let cases = [
        ("/?view_error=zz", 400, "ID errore non valido"),
        ("/anything?view_error=", 400, "ID errore non fornito"),
        ("/?view_error=0", 400, "ID errore non fornito"),
        ("/?view_error=0123456789abcdef0123456789abcdef", 404, "Errore non trovato"),
    ];
    for (path, status, message) in cases {
        let response = client.get(format!("{}{path}", gateway.base)).send().await.unwrap();
        assert_eq!(response.status(), status, "{path}");
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "error": message }), "{path}");
    }
}

#[tokio::test]
async fn test_failure_is_captured_and_viewable_in_session() {
    let addr = closed_address().await;
    let gateway = start_gateway(&format!("http://{addr}/reacto")).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/GetProdotti", gateway.base))
        .json(&json!([5, "it"]))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let cookie = session_cookie(&response).expect("session issued");
    let error_id = response
        .headers()
        .get("x-reacto-error-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("error id header");
    assert!(response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("text/html")));
    let page = response.text().await.unwrap();
    assert!(page.contains(&error_id));

    let viewed = client
        .get(format!("{}/some/page?view_error={error_id}", gateway.base))
        .header(COOKIE, cookie.as_str())
        .send()
        .await
        .unwrap();
    assert_eq!(viewed.status(), 200);
    let record: Value = viewed.json().await.unwrap();
    assert_eq!(record["id"], error_id.as_str());
    assert_eq!(record["function_name"], "GetProdotti");
    assert_eq!(record["arguments"]["idStore"], 5);
    assert_eq!(record["arguments"]["idUtente"], "~~NULL~~");

    let direct = client
        .get(format!("{}/errors/{error_id}", gateway.base))
        .header(COOKIE, cookie.as_str())
        .send()
        .await
        .unwrap();
    assert_eq!(direct.status(), 200);

    let uppercased = client
        .get(format!("{}/errors/{}", gateway.base, error_id.to_uppercase()))
        .header(COOKIE, cookie.as_str())
        .send()
        .await
        .unwrap();
    assert_eq!(uppercased.status(), 404);

    let other_session = client
        .get(format!("{}/?view_error={error_id}", gateway.base))
        .send()
        .await
        .unwrap();
    assert_eq!(other_session.status(), 404);
}

#[tokio::test]
async fn test_catalog_and_health() {
    let upstream = start_upstream(|_| (200, "1".to_string())).await;
    let gateway = start_gateway(&upstream.url).await;
    let client = reqwest::Client::new();

    let calls: Vec<Value> = client
        .get(format!("{}/api/calls", gateway.base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(calls.len(), 273);
    let login = calls.iter().find(|c| c["name"] == "TryLogin").unwrap();
    assert_eq!(login["positional"], false);
    assert_eq!(login["params"][1], json!({"name": "password", "kind": "string"}));

    let health: Value = client
        .get(format!("{}/health", gateway.base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "ok");
}
