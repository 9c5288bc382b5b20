//! End-to-end tests for the cookie routes.

use axum::http::StatusCode;
use serde_json::Value;

mod common;

#[tokio::test]
async fn test_set_cookie_bakes_cookie_with_max_age() {
    let (addr, _shutdown) = common::spawn_server().await;

    let res = common::client()
        .get(format!("http://{}/set-cookie?name=foo&value=bar", addr))
        .send()
        .await
        .expect("Server unreachable");

    assert_eq!(res.status(), StatusCode::OK);
    let set_cookie = res
        .headers()
        .get("set-cookie")
        .expect("Set-Cookie header missing")
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(set_cookie, "foo=bar; Max-Age=1000");
    assert_eq!(res.text().await.unwrap(), "cookie created");
}

#[tokio::test]
async fn test_set_cookie_requires_both_params() {
    let (addr, _shutdown) = common::spawn_server().await;
    let client = common::client();

    for query in ["", "?name=foo", "?value=bar"] {
        let res = client
            .get(format!("http://{}/set-cookie{}", addr, query))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "query `{}`", query);
    }
}

#[tokio::test]
async fn test_cookie_route_reads_name_cookie() {
    let (addr, _shutdown) = common::spawn_server().await;

    let res = common::client()
        .get(format!("http://{}/cookie", addr))
        .header("cookie", "name=petya; session=abc")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["view"], "cookie");
    assert_eq!(body["model"]["name"], "petya");
}

#[tokio::test]
async fn test_cookie_route_without_cookie_is_client_error() {
    let (addr, _shutdown) = common::spawn_server().await;

    let res = common::client()
        .get(format!("http://{}/cookie", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(res.text().await.unwrap().contains("cookie"));
}
