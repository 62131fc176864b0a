//! Shared fixtures for integration tests: a recording host and canned backend responses.

#![allow(dead_code)]

use skin_storefront::{async_trait, Host, InvoiceStatus, Storefront, StorefrontAPI};
use serde_json::{json, Value};
use std::sync::Mutex;
use wiremock::MockServer;

pub const USER_ID: i64 = 123456789;
pub const TRADE_LINK: &str = "https://steamcommunity.com/tradeoffer/new/?partner=59566827&token=CBl2pinD";

/// A host that records what the storefront asked of it.
#[derive(Debug)]
pub struct FakeHost {
    pub user_id: Option<i64>,
    pub invoice_status: InvoiceStatus,
    pub alerts: Mutex<Vec<String>>,
    pub invoices: Mutex<Vec<String>>,
    pub inline_queries: Mutex<Vec<String>>,
    pub ready_calls: Mutex<u32>,
    pub main_button_hidden: Mutex<bool>,
}

impl FakeHost {
    pub fn new(invoice_status: InvoiceStatus) -> Self {
        Self {
            user_id: Some(USER_ID),
            invoice_status,
            alerts: Mutex::new(Vec::new()),
            invoices: Mutex::new(Vec::new()),
            inline_queries: Mutex::new(Vec::new()),
            ready_calls: Mutex::new(0),
            main_button_hidden: Mutex::new(false),
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn invoices(&self) -> Vec<String> {
        self.invoices.lock().unwrap().clone()
    }
}

#[async_trait]
impl Host for FakeHost {
    fn user_id(&self) -> Option<i64> {
        self.user_id
    }

    fn ready(&self) {
        *self.ready_calls.lock().unwrap() += 1;
    }

    fn hide_main_button(&self) {
        *self.main_button_hidden.lock().unwrap() = true;
    }

    async fn open_invoice(&self, invoice_link: &str) -> InvoiceStatus {
        self.invoices.lock().unwrap().push(invoice_link.to_string());
        self.invoice_status
    }

    fn switch_inline_query(&self, query: &str) {
        self.inline_queries.lock().unwrap().push(query.to_string());
    }

    async fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

pub fn api(server: &MockServer) -> StorefrontAPI {
    StorefrontAPI::builder(server.uri())
        .build()
        .unwrap()
}

pub fn storefront(server: &MockServer, host: FakeHost) -> Storefront<FakeHost> {
    Storefront::builder(api(server), host)
        .bot_username("skinshop_bot")
        .page_size(20)
        .build()
}

pub fn item(id: u64, price_stars: u32) -> Value {
    json!({
        "id": id,
        "product_id": format!("Product {id}"),
        "name": format!("Item {id}"),
        "price_stars": price_stars,
        "price_usd": 1.5,
        "image": "https://example.com/item.png",
        "quantity": 3
    })
}

/// A page with `count` items numbered from `first_id`.
pub fn items_page(first_id: u64, count: u64, page: u32, pages: u32) -> Value {
    let items: Vec<Value> = (first_id..first_id + count)
        .map(|id| item(id, 45))
        .collect();

    json!({
        "items": items,
        "total": count,
        "page": page,
        "pages": pages
    })
}

pub fn profile(trade_link: Option<&str>) -> Value {
    json!({
        "referrals": 2,
        "items": [],
        "steam_profile": trade_link.map(|_| "https://steamcommunity.com/id/someone"),
        "trade_link": trade_link,
        "has_gift": false
    })
}
