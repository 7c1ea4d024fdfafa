//! Walks the three catalog endpoints of a running server with the SDK.
//!
//! ```sh
//! cargo run --example sdk_tour -- http://localhost:3000
//! ```

use catalog_summary::sdk::SummaryClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:3000".to_string());
    let sdk = SummaryClient::new(base_url)?;

    let products = sdk.get_products().await?;
    println!("Total products: {}", products.len());

    if let Some(first) = products.first() {
        println!("First product title: {}", first.title);
        let details = sdk.get_product_by_id(&first.id).await?;
        println!(
            "Vendor: {}",
            details["vendor"].as_str().unwrap_or("<unknown>")
        );
    }

    let stats = sdk.get_stats().await?;
    println!("Stats: {:?}", stats);
    Ok(())
}
