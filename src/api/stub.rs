//! In-process ProductSource double for handler and router tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::{AppError, Result};
use crate::shopify::{ProductNode, ProductSource};

pub(crate) struct StubSource {
    nodes: Vec<ProductNode>,
    detail: Option<Value>,
    fail: bool,
    pub list_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
    pub last_id: Mutex<Option<String>>,
}

impl StubSource {
    /// Product `i` gets inventory `10 * (i + 1)` and price `5 + 10 * i`.
    pub fn with_titles(titles: &[&str]) -> Self {
        let nodes = titles
            .iter()
            .enumerate()
            .map(|(i, title)| {
                serde_json::from_value(json!({
                    "id": format!("gid://shopify/Product/{}", i + 1),
                    "title": title,
                    "createdAt": "2024-01-01T00:00:00Z",
                    "totalInventory": 10 * (i + 1),
                    "priceRangeV2": { "minVariantPrice": { "amount": format!("{}", 5 + 10 * i) } }
                }))
                .expect("valid product node")
            })
            .collect();

        Self {
            nodes,
            detail: None,
            fail: false,
            list_calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
            last_id: Mutex::new(None),
        }
    }

    pub fn with_detail(mut self, detail: Value) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn failing() -> Self {
        let mut stub = Self::with_titles(&[]);
        stub.fail = true;
        stub
    }
}

#[async_trait]
impl ProductSource for StubSource {
    async fn fetch_all_products(&self) -> Result<Vec<ProductNode>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::UpstreamQuery(json!([{ "message": "boom" }])));
        }
        Ok(self.nodes.clone())
    }

    async fn fetch_product_by_id(&self, id: &str) -> Result<Option<Value>> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_id.lock().unwrap() = Some(id.to_string());
        if self.fail {
            return Err(AppError::UpstreamQuery(json!([{ "message": "boom" }])));
        }
        Ok(self.detail.clone())
    }
}
