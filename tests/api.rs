mod common;

use common::{api, items_page, profile, USER_ID};
use serde_json::json;
use skin_storefront::request::{BindSteam, CreateInvoice, GetItemsOptions};
use skin_storefront::{Error, StorefrontAPI, NGROK_SKIP_BROWSER_WARNING};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn gets_profile_for_user() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/api/profile/{USER_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile(Some(common::TRADE_LINK))))
        .expect(1)
        .mount(&server)
        .await;

    let profile = api(&server).get_profile(USER_ID).await.unwrap();

    assert_eq!(profile.user_id, USER_ID);
    assert_eq!(profile.referrals, 2);
    assert!(profile.has_trade_link());
}

#[tokio::test]
async fn unknown_profile_is_not_activated() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/api/profile/{USER_ID}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "User not found" })))
        .mount(&server)
        .await;

    let error = api(&server).get_profile(USER_ID).await.unwrap_err();

    assert!(matches!(error, Error::NotActivated));
}

#[tokio::test]
async fn gets_items_with_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "20"))
        .and(query_param("search", "redline"))
        .respond_with(ResponseTemplate::new(200).set_body_json(items_page(21, 20, 2, 3)))
        .expect(1)
        .mount(&server)
        .await;

    let page = api(&server)
        .get_items(&GetItemsOptions::new(2, 20, "redline"))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 20);
    assert_eq!(page.items[0].id, 21);
    assert_eq!(page.pages, 3);
}

#[tokio::test]
async fn http_errors_carry_server_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/api/claim_gift/{USER_ID}")))
        .respond_with(ResponseTemplate::new(400).set_body_string("Gift unavailable"))
        .mount(&server)
        .await;

    let error = api(&server).claim_gift(USER_ID).await.unwrap_err();

    assert!(error.is_status(reqwest::StatusCode::BAD_REQUEST));
    assert_eq!(error.user_message(), "Gift unavailable");
}

#[tokio::test]
async fn posts_bind_and_invoice_bodies() {
    let server = MockServer::start().await;
    let bind = BindSteam::new("https://steamcommunity.com/id/someone", common::TRADE_LINK).unwrap();

    Mock::given(method("POST"))
        .and(path(format!("/api/bind/{USER_ID}")))
        .and(body_json(json!({
            "profile": "https://steamcommunity.com/id/someone",
            "trade_link": common::TRADE_LINK,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/create_invoice"))
        .and(body_json(json!({
            "item_id": 7,
            "product_id": "Product 7",
            "user_id": USER_ID,
            "price_stars": 45,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "invoice_link": "https://t.me/$abc" })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api(&server);

    api.bind_steam(USER_ID, &bind).await.unwrap();

    let invoice = api.create_invoice(&CreateInvoice {
        item_id: 7,
        product_id: String::from("Product 7"),
        user_id: USER_ID,
        price_stars: 45,
    }).await.unwrap();

    assert_eq!(invoice.invoice_link, "https://t.me/$abc");
}

#[tokio::test]
async fn gets_balance_and_item_price() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "available": 1520.5 })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/item_price"))
        .and(query_param("product_id", "AK-47 | Redline (Field-Tested)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "price_stars": 540,
            "price_rub": 12000.0,
            "quantity": 2,
        })))
        .mount(&server)
        .await;

    let api = api(&server);
    let balance = api.get_balance().await.unwrap();
    let price = api.get_item_price("AK-47 | Redline (Field-Tested)").await.unwrap();

    assert_eq!(balance.available, 1520.5);
    assert_eq!(price.price_stars, 540);
    assert!(price.is_in_stock());
}

#[tokio::test]
async fn sends_default_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/balance"))
        .and(header(NGROK_SKIP_BROWSER_WARNING, "69420"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "available": 0.0 })))
        .expect(1)
        .mount(&server)
        .await;

    let api = StorefrontAPI::builder(format!("{}/", server.uri()))
        .header(NGROK_SKIP_BROWSER_WARNING, "69420")
        .build()
        .unwrap();

    api.get_balance().await.unwrap();
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>tunnel offline</html>"))
        .mount(&server)
        .await;

    let error = api(&server).get_balance().await.unwrap_err();

    assert!(matches!(error, Error::Parse(_)));
}
