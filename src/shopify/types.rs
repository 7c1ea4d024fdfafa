//! Typed shapes of the Shopify GraphQL responses.

use serde::Deserialize;
use serde_json::Value;

/// `{ data, errors? }` envelope, kept loose until `errors` has been checked.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlEnvelope {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Value>,
}

impl GraphQlEnvelope {
    /// Returns the errors payload when present. An empty array still counts.
    pub fn take_errors(&mut self) -> Option<Value> {
        self.errors.take().filter(|errors| !errors.is_null())
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductsData {
    pub products: ProductConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductConnection {
    pub edges: Vec<ProductEdge>,
    pub page_info: PageInfo,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductEdge {
    pub node: ProductNode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageInfo {
    pub has_next_page: bool,
    #[serde(default)]
    pub end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductData {
    #[serde(default)]
    pub product: Option<Value>,
}

/// One product as returned by the paginated list query.
///
/// Numeric fields stay as raw JSON so that malformed values can degrade
/// to zero during mapping instead of failing the whole page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductNode {
    pub id: String,
    pub title: String,
    pub created_at: String,
    #[serde(default)]
    pub total_inventory: Option<Value>,
    #[serde(default, rename = "priceRangeV2")]
    pub price_range_v2: Option<PriceRange>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    #[serde(default)]
    pub min_variant_price: Option<Money>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    #[serde(default)]
    pub amount: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_errors_detection() {
        let mut envelope: GraphQlEnvelope =
            serde_json::from_value(json!({ "data": null, "errors": [{ "message": "Throttled" }] }))
                .unwrap();
        assert!(envelope.take_errors().is_some());

        let mut envelope: GraphQlEnvelope =
            serde_json::from_value(json!({ "data": {}, "errors": [] })).unwrap();
        assert_eq!(envelope.take_errors(), Some(json!([])));

        let mut envelope: GraphQlEnvelope =
            serde_json::from_value(json!({ "data": {}, "errors": null })).unwrap();
        assert!(envelope.take_errors().is_none());

        let mut envelope: GraphQlEnvelope = serde_json::from_value(json!({ "data": {} })).unwrap();
        assert!(envelope.take_errors().is_none());
    }

    #[test]
    fn test_products_page_deserialize() {
        let data: ProductsData = serde_json::from_value(json!({
            "products": {
                "edges": [{
                    "cursor": "c1",
                    "node": {
                        "id": "gid://shopify/Product/1",
                        "title": "Hat",
                        "createdAt": "2024-01-01T00:00:00Z",
                        "totalInventory": 4,
                        "priceRangeV2": { "minVariantPrice": { "amount": "9.50", "currencyCode": "EUR" } }
                    }
                }],
                "pageInfo": { "hasNextPage": false, "endCursor": "c1" }
            }
        }))
        .unwrap();

        let connection = data.products;
        assert!(!connection.page_info.has_next_page);
        assert_eq!(connection.edges.len(), 1);

        let money = connection.edges[0]
            .node
            .price_range_v2
            .as_ref()
            .and_then(|r| r.min_variant_price.as_ref())
            .unwrap();
        assert_eq!(money.amount, Some(json!("9.50")));
    }
}
