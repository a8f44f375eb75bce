//! End-to-end tests for the products resource against a mock store.
//!
//! These verify the effective wire surface: paths below the API root, query
//! strings, JSON bodies, authentication and error mapping.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use woocommerce_api::rest::{ProductQuery, ProductRef, ProductStatus};
use woocommerce_api::{
    ApiVersion, ConsumerKey, ConsumerSecret, HttpError, InvalidResponseBodyError, RestError,
    StoreUrl, WooCommerceClient, WooCommerceConfig,
};

/// `base64("ck_test:cs_test")`
const BASIC_AUTH: &str = "Basic Y2tfdGVzdDpjc190ZXN0";

fn create_config(server: &MockServer) -> WooCommerceConfig {
    WooCommerceConfig::builder()
        .store_url(StoreUrl::new(server.uri()).unwrap())
        .consumer_key(ConsumerKey::new("ck_test").unwrap())
        .consumer_secret(ConsumerSecret::new("cs_test").unwrap())
        .build()
        .unwrap()
}

fn create_client(server: &MockServer) -> WooCommerceClient {
    WooCommerceClient::new(&create_config(server)).unwrap()
}

#[tokio::test]
async fn test_list_products_with_status_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/products"))
        .and(query_param("status", "publish"))
        .and(header("authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 794, "name": "Premium Quality"},
            {"id": 795, "name": "Ship Your Idea"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let args = ProductQuery {
        status: Some(ProductStatus::Publish),
        ..Default::default()
    };
    let response = client.products().get(None, Some(args)).await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.body[1]["id"], 795);
}

#[tokio::test]
async fn test_get_product_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/products/794"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 794, "sku": "TS-01"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let response = client
        .products()
        .get(Some(ProductRef::Id(794)), None)
        .await
        .unwrap();

    assert_eq!(response.body["sku"], "TS-01");
}

#[tokio::test]
async fn test_get_product_by_sku() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/products/sku/TS-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 794})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let response = client
        .products()
        .get(Some(ProductRef::sku("TS-01")), None)
        .await
        .unwrap();

    assert_eq!(response.body["id"], 794);
}

#[tokio::test]
async fn test_create_product_posts_json_body() {
    let server = MockServer::start().await;
    let data = json!({"name": "Premium Quality", "type": "simple", "regular_price": "21.99"});
    Mock::given(method("POST"))
        .and(path("/wp-json/wc/v3/products"))
        .and(header("content-type", "application/json"))
        .and(body_json(data.clone()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 800})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let response = client.products().create(data).await.unwrap();

    assert_eq!(response.code, 201);
    assert_eq!(response.body["id"], 800);
}

#[tokio::test]
async fn test_update_product_puts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/wp-json/wc/v3/products/794"))
        .and(body_json(json!({"regular_price": "24.54"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 794, "regular_price": "24.54"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let response = client
        .products()
        .update(794, json!({"regular_price": "24.54"}))
        .await
        .unwrap();

    assert_eq!(response.body["regular_price"], "24.54");
}

#[tokio::test]
async fn test_delete_product_sends_force_flag() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/wp-json/wc/v3/products/794"))
        .and(query_param("force", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 794})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/wp-json/wc/v3/products/795"))
        .and(query_param("force", "false"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 795, "status": "trash"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let products = client.products();

    products.delete(794, true).await.unwrap();
    let trashed = products.trash(795).await.unwrap();

    assert_eq!(trashed.body["status"], "trash");
}

#[tokio::test]
async fn test_count_and_categories_paths() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/products/count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 12})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/products/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 9}])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/products/categories/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 9})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let products = client.products();

    assert_eq!(products.get_count(None).await.unwrap().body["count"], 12);
    assert_eq!(products.get_category(None).await.unwrap().body[0]["id"], 9);
    assert_eq!(products.get_category(Some(9)).await.unwrap().body["id"], 9);
}

#[tokio::test]
async fn test_legacy_api_version_base_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wc-api/v2/products/count"))
        .and(query_param("status", "draft"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 3})))
        .expect(1)
        .mount(&server)
        .await;

    let client = WooCommerceClient::with_version(&create_config(&server), ApiVersion::LegacyV2)
        .unwrap();
    let args = ProductQuery {
        status: Some(ProductStatus::Draft),
        ..Default::default()
    };
    let response = client.products().get_count(Some(args)).await.unwrap();

    assert_eq!(response.body["count"], 3);
}

#[tokio::test]
async fn test_query_string_auth_sends_credentials_as_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/products"))
        .and(query_param("consumer_key", "ck_test"))
        .and(query_param("consumer_secret", "cs_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = WooCommerceConfig::builder()
        .store_url(StoreUrl::new(server.uri()).unwrap())
        .consumer_key(ConsumerKey::new("ck_test").unwrap())
        .consumer_secret(ConsumerSecret::new("cs_test").unwrap())
        .query_string_auth(true)
        .build()
        .unwrap();
    let client = WooCommerceClient::new(&config).unwrap();

    client.products().get(None, None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0]
        .headers
        .keys()
        .any(|name| name.as_str().eq_ignore_ascii_case("authorization")));
}

#[tokio::test]
async fn test_wp_rest_error_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/products/1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "woocommerce_rest_product_invalid_id",
            "message": "Invalid ID.",
            "data": {"status": 404}
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = client.products().get(Some(ProductRef::Id(1)), None).await;

    match result {
        Err(RestError::Http(HttpError::Response(e))) => {
            assert_eq!(e.code, 404);
            assert_eq!(
                e.error_code.as_deref(),
                Some("woocommerce_rest_product_invalid_id")
            );
            assert_eq!(e.message, "Invalid ID.");
        }
        other => panic!("expected a response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_legacy_error_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/wc-api/v3/products"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": [{
                "code": "woocommerce_api_authentication_error",
                "message": "Consumer Key is invalid"
            }]
        })))
        .mount(&server)
        .await;

    let client = WooCommerceClient::with_version(&create_config(&server), ApiVersion::LegacyV3)
        .unwrap();
    let result = client.products().create(json!({"product": {"title": "X"}})).await;

    match result {
        Err(RestError::Http(HttpError::Response(e))) => {
            assert_eq!(e.code, 401);
            assert_eq!(e.message, "Consumer Key is invalid");
        }
        other => panic!("expected a response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_keeps_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/products/count"))
        .respond_with(ResponseTemplate::new(500).set_body_string("PHP Fatal error"))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = client.products().get_count(None).await;

    match result {
        Err(RestError::Http(HttpError::Response(e))) => {
            assert_eq!(e.code, 500);
            assert!(e.error_code.is_none());
            assert!(e.message.contains("PHP Fatal error"));
        }
        other => panic!("expected a response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_html_success_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/products/count"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>Site moved</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = client.products().get_count(None).await;

    match result {
        Err(RestError::Http(HttpError::InvalidBody(InvalidResponseBodyError { code, body }))) => {
            assert_eq!(code, 200);
            assert_eq!(body, "<html>Site moved</html>");
        }
        other => panic!("expected an invalid body error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_html_error_body_becomes_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/products/9"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<html>Not Found</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = client.products().get(Some(ProductRef::Id(9)), None).await;

    match result {
        Err(RestError::Http(HttpError::Response(e))) => {
            assert_eq!(e.code, 404);
            assert!(e.error_code.is_none());
            assert_eq!(e.message, "<html>Not Found</html>");
        }
        other => panic!("expected a response error, got {other:?}"),
    }
}
