//! GraphQL documents sent to the Shopify Admin API.

/// Products requested per page of the list query.
pub const PAGE_SIZE: u32 = 100;

pub const PRODUCTS_QUERY: &str = r#"
  query Products($first: Int!, $after: String) {
    products(first: $first, after: $after, sortKey: TITLE) {
      edges {
        cursor
        node {
          id
          title
          createdAt
          totalInventory
          priceRangeV2 { minVariantPrice { amount currencyCode } }
        }
      }
      pageInfo { hasNextPage endCursor }
    }
  }
"#;

pub const PRODUCT_BY_ID_QUERY: &str = r#"
  query Product($id: ID!) {
    product(id: $id) {
      id
      title
      createdAt
      totalInventory
      description
      status
      vendor
      productType
      tags
      priceRangeV2 {
        minVariantPrice { amount currencyCode }
        maxVariantPrice { amount currencyCode }
      }
      variants(first: 50) {
        edges {
          node {
            id
            title
            sku
            price
            inventoryQuantity
            createdAt
          }
        }
      }
      images(first: 10) {
        edges { node { id altText originalSrc: url } }
      }
    }
  }
"#;
