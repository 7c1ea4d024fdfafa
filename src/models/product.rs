//! Public product representation and the aggregate statistics built from it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shopify::ProductNode;

/// A catalog product as exposed by `GET /products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Shopify GID, e.g. `gid://shopify/Product/123`
    pub id: String,
    pub title: String,
    /// Minimum variant price
    pub price: f64,
    /// Total inventory across variants
    pub inventory: i64,
    pub created_at: String,
}

/// Summary returned by `GET /stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductStats {
    pub total_products: usize,
    pub total_inventory: i64,
    /// Mean price rounded to two decimals, `0` for an empty catalog
    pub average_price: f64,
}

// == Mapping ==
/// Converts an upstream list node into the public [`Product`] shape.
///
/// Never fails: a missing or malformed price or inventory becomes `0`.
pub fn map_node(node: &ProductNode) -> Product {
    let amount = node
        .price_range_v2
        .as_ref()
        .and_then(|range| range.min_variant_price.as_ref())
        .and_then(|money| money.amount.as_ref());

    Product {
        id: node.id.clone(),
        title: node.title.clone(),
        price: lenient_price(amount),
        inventory: lenient_inventory(node.total_inventory.as_ref()),
        created_at: node.created_at.clone(),
    }
}

pub fn map_nodes(nodes: &[ProductNode]) -> Vec<Product> {
    nodes.iter().map(map_node).collect()
}

/// Shopify sends money amounts as decimal strings. Absent reads as `"0"`.
fn lenient_price(amount: Option<&Value>) -> f64 {
    let parsed = match amount {
        None | Some(Value::Null) => Some(0.0),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                Some(0.0)
            } else {
                s.parse::<f64>().ok()
            }
        }
        Some(Value::Number(n)) => n.as_f64(),
        Some(_) => None,
    };
    parsed.filter(|p| p.is_finite()).unwrap_or(0.0)
}

fn lenient_inventory(total: Option<&Value>) -> i64 {
    match total {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .unwrap_or(0),
        _ => 0,
    }
}

// == Aggregation ==
/// Computes count, inventory sum and mean price over the whole catalog.
pub fn compute_stats(products: &[Product]) -> ProductStats {
    let total_products = products.len();
    let total_inventory = products.iter().map(|p| p.inventory).sum();
    let average_price = if total_products == 0 {
        0.0
    } else {
        let sum: f64 = products.iter().map(|p| p.price).sum();
        round_cents(sum / total_products as f64)
    };

    ProductStats {
        total_products,
        total_inventory,
        average_price,
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
