use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use dll_jsonld::{build_router, AppState, MemoryCatalog};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

const SAMPLE_CATALOG: &str = include_str!("../data/sample-catalog.json");

fn app() -> axum::Router {
    let catalog = MemoryCatalog::from_json(SAMPLE_CATALOG, "sample-catalog.json")
        .expect("sample catalog parses");
    build_router(Arc::new(AppState::new(catalog)))
}

async fn get(uri: &str) -> axum::http::Response<Body> {
    app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn json_body(resp: axum::http::Response<Body>) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    let json: Value = serde_json::from_slice(&bytes).expect("valid JSON response");
    (status, json)
}

#[tokio::test]
async fn health_check_ok() {
    let resp = get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn author_document_with_cache_headers() {
    let resp = get("/dll-author/A0959?format=json-ld").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let headers = resp.headers();
    assert_eq!(headers["content-type"], "application/json");
    assert_eq!(headers["x-drupal-cache-tags"], "node:1");
    assert_eq!(headers["x-drupal-cache-contexts"], "url.query_args:format");
    assert_eq!(headers["x-drupal-cache-max-age"], "0");

    let (_, doc) = json_body(resp).await;
    assert_eq!(doc["@type"], "Author Authority");
    assert_eq!(doc["@id"], "https://catalog.digitallatin.org/authors/ovid");
    assert_eq!(doc["Name"]["AuthorizedName"], "Ovidius");
    assert_eq!(doc["Name"]["Variant"]["FrenchName"], "Ovide");
    assert_eq!(doc["Date"]["TimePeriod"], "Augustan");
    assert_eq!(doc["ExactExternalAuthority"]["VIAF"], "https://viaf.org/viaf/100227522");
    assert_eq!(doc["identifier"]["DLLid"], Value::Null);
}

#[tokio::test]
async fn work_author_is_scalar_url() {
    let (status, doc) = json_body(get("/dll-work/W0959-001?format=json-ld").await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["Author"], "https://catalog.digitallatin.org/authors/ovid");
    assert_eq!(doc["WorkAuthority"], "DLL Catalog");
}

#[tokio::test]
async fn item_record_and_web_page() {
    let (status, doc) = json_body(get("/dll-item-record/R0001?format=json-ld").await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["@type"], "Item Record");
    assert_eq!(
        doc["References"],
        json!({
            "DLL Author": "https://catalog.digitallatin.org/authors/ovid",
            "DLL Work": "https://catalog.digitallatin.org/works/metamorphoses"
        })
    );

    let (status, doc) = json_body(get("/dll-web-page/P0001?format=json-ld").await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["@type"], "Web Page");
    assert_eq!(doc["Title"], "P. OVIDI NASONIS OPERA");
}

#[tokio::test]
async fn missing_format_is_bad_request() {
    let (status, body) = json_body(get("/dll-author/A0959").await).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid format"}));

    let (status, body) = json_body(get("/dll-author/A0959?format=json").await).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid format"}));
}

#[tokio::test]
async fn repeated_format_key_uses_last_value() {
    let (status, doc) =
        json_body(get("/dll-author/A0959?format=html&format=json-ld").await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["@id"], "https://catalog.digitallatin.org/authors/ovid");

    let (status, body) =
        json_body(get("/dll-author/A0959?format=json-ld&format=html").await).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid format"}));
}

#[tokio::test]
async fn malformed_query_is_json_bad_request() {
    for uri in [
        "/dll-author/A0959?format=%zz",
        "/works/metamorphoses?format=%zz&format",
    ] {
        let (status, body) = json_body(get(uri).await).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body, json!({"error": "Invalid format"}));
    }
}

#[tokio::test]
async fn unknown_identifier_is_not_found() {
    let (status, body) = json_body(get("/dll-work/W9999?format=json-ld").await).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Node not found"}));

    // Identifier exists, but for a different content type
    let (status, _) = json_body(get("/dll-work/A0959?format=json-ld").await).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn alias_path_resolves_to_document() {
    let (status, doc) = json_body(get("/works/metamorphoses?format=json-ld").await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["@type"], "DLL Work");
    assert_eq!(doc["@id"], "https://catalog.digitallatin.org/works/metamorphoses");

    // Internal paths work without an alias
    let (status, doc) = json_body(get("/node/4?format=json-ld").await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["@type"], "Web Page");
}

#[tokio::test]
async fn alias_lookup_errors() {
    let (status, body) = json_body(get("/no/such/page?format=json-ld").await).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Node not found"}));

    let (status, _) = json_body(get("/authors/ovid").await).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_bundle_renders_empty_document() {
    let (status, doc) = json_body(get("/node/5?format=json-ld").await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc, json!({}));
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let first = get("/dll-item-record/R0001?format=json-ld")
        .await
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes();
    let second = get("/dll-item-record/R0001?format=json-ld")
        .await
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes();
    assert_eq!(first, second);
}
